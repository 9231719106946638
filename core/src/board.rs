use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular row-major grid of [`Cell`]s.
///
/// Every operation in this crate mutates a board in place through `&mut Board`;
/// callers that want copy-on-write semantics clone before acting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Mine-free, fully hidden board.
    pub fn new(rows: Coord, cols: Coord) -> Self {
        let cells = Array2::from_shape_fn((usize::from(rows), usize::from(cols)), |(row, col)| {
            Cell::new((row as Coord, col as Coord))
        });
        Self { cells }
    }

    /// Builds a board with mines at exactly `mine_coords` and neighbor counts
    /// already annotated.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size.0, size.1);

        for &coords in mine_coords {
            if !board.contains(coords) {
                return Err(GameError::InvalidCoords);
            }
            board[coords].is_mine = true;
        }

        calculate_numbers(&mut board);
        Ok(board)
    }

    pub fn rows(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn cols(&self) -> Coord {
        self.cells.ncols() as Coord
    }

    pub fn size(&self) -> Coord2 {
        (self.rows(), self.cols())
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.rows(), self.cols())
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        row < self.rows() && col < self.cols()
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.contains(coords).then(|| &self.cells[coords.to_nd_index()])
    }

    pub(crate) fn get_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        if self.contains(coords) {
            Some(&mut self.cells[coords.to_nd_index()])
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_mine)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_revealed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_flagged)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    fn count_where(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells.iter().filter(|cell| predicate(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty_and_addressed() {
        let board = Board::new(4, 7);

        assert_eq!(board.size(), (4, 7));
        assert_eq!(board.total_cells(), 28);
        assert_eq!(board.mine_count(), 0);
        assert!(board.cells().all(Cell::is_hidden));
        assert_eq!(board[(3, 6)].coords(), (3, 6));
    }

    #[test]
    fn get_rejects_out_of_bounds() {
        let board = Board::new(5, 5);

        assert!(board.get((4, 4)).is_some());
        assert!(board.get((5, 0)).is_none());
        assert!(board.get((0, 5)).is_none());
    }

    #[test]
    fn from_mine_coords_annotates_counts() {
        let board = Board::from_mine_coords((3, 3), &[(0, 0)]).unwrap();

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board[(1, 1)].neighbor_mines, 1);
        assert_eq!(board[(2, 2)].neighbor_mines, 0);
    }

    #[test]
    fn from_mine_coords_rejects_outside_mines() {
        let result = Board::from_mine_coords((3, 3), &[(3, 0)]);

        assert_eq!(result, Err(GameError::InvalidCoords));
    }
}
