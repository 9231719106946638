use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board dimensions out of range")]
    InvalidDimensions,
    #[error("Too many mines")]
    TooManyMines,
    #[error("At least one mine is required")]
    NoMines,
}

pub type Result<T> = core::result::Result<T, GameError>;
