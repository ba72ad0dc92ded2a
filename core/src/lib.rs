use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use explosion::*;
pub use game::*;
pub use generator::*;
pub use reveal::{chord_reveal, is_chordable, reveal};
pub use scheduler::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod explosion;
mod game;
mod generator;
mod reveal;
mod scheduler;
mod types;

pub const DEFAULT_SIZE: Coord = 10;
pub const DEFAULT_MINES: CellCount = 15;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board.
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Checked constructor, see [`GameConfig::validate`].
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Largest safe zone a first click can carve out of this board.
    pub fn max_exclusion_zone(&self) -> CellCount {
        let side = self.size.min(3);
        mult(side, side)
    }

    /// Rejects boards where some first click would leave no room for the mines.
    pub fn validate(&self) -> Result<()> {
        check_playable(*self, self.max_exclusion_zone())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE, DEFAULT_MINES)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine(Coord2),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine(_) => true,
        }
    }
}

/// Merges outcomes of a multi-cell reveal; the first mine hit wins.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine(at), _) => HitMine(at),
            (_, HitMine(at)) => HitMine(at),
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}
