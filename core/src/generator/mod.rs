use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}

/// Number of in-bounds cells within distance 1 of `exclude`, the cell itself included.
pub fn exclusion_zone_size(size: Coord, exclude: Option<Coord2>) -> CellCount {
    match exclude {
        Some(center) => SquareIter::area(center, size, 1).count() as CellCount,
        None => 0,
    }
}

/// Fails with `InvalidConfiguration` unless at least one non-mine cell remains outside the zone.
pub fn check_playable(config: GameConfig, zone: CellCount) -> Result<()> {
    let playable = config.total_cells().saturating_sub(zone);
    if config.size == 0 || config.mines >= playable {
        log::warn!(
            "Rejected configuration: {} mines on a {}x{} board with {} playable cells",
            config.mines,
            config.size,
            config.size,
            playable
        );
        return Err(GameError::InvalidConfiguration {
            mines: config.mines,
            playable,
        });
    }
    Ok(())
}
