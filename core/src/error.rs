use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid configuration: {mines} mines do not fit in {playable} playable cells")]
    InvalidConfiguration { mines: CellCount, playable: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
