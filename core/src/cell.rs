use serde::{Deserialize, Serialize};

use crate::*;

/// One grid position together with its hidden contents and visible state.
///
/// `neighbor_mines` is only meaningful when `is_mine` is false.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: Coord,
    pub col: Coord,
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub neighbor_mines: u8,
}

impl Cell {
    pub const fn new((row, col): Coord2) -> Self {
        Self {
            row,
            col,
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            neighbor_mines: 0,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    /// Neither revealed nor flagged.
    pub const fn is_hidden(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    pub const fn is_wrong_flag(&self) -> bool {
        self.is_flagged && !self.is_mine
    }
}
