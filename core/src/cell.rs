use serde::{Deserialize, Serialize};

/// One grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) revealed: bool,
    pub(crate) adjacent_mines: u8,
    pub(crate) flagged: bool,
    pub(crate) exploding: bool,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Mines in the Moore neighbourhood, only meaningful for non-mine cells.
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn is_exploding(&self) -> bool {
        self.exploding
    }

    pub const fn is_hidden(&self) -> bool {
        !self.revealed
    }

    pub const fn view(&self) -> CellView {
        if self.flagged {
            CellView::Flagged
        } else if self.revealed && self.is_mine {
            CellView::Detonated
        } else if self.revealed {
            CellView::Revealed(self.adjacent_mines)
        } else {
            CellView::Hidden
        }
    }
}

/// What the player is allowed to see of a cell. `Revealed(0)` renders blank.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Detonated,
    Revealed(u8),
}
