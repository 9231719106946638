use alloc::collections::VecDeque;
use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::*;

/// Up to eight in-bounds neighbors of `coords`, in row-major order.
///
/// Empty when `coords` is outside the board.
pub fn get_neighbors(board: &Board, coords: Coord2) -> SmallVec<[Cell; 8]> {
    if !board.contains(coords) {
        return SmallVec::new();
    }
    board.iter_neighbors(coords).map(|pos| board[pos]).collect()
}

/// Reveals the cell at `coords`, flood-filling through connected zero cells,
/// and returns every coordinate it revealed in reveal order.
///
/// Out-of-bounds, flagged, and already revealed targets are left alone and
/// yield an empty list. Revealing a mine reveals only that cell; detecting
/// the loss is up to the caller.
pub fn reveal_cell(board: &mut Board, coords: Coord2) -> Vec<Coord2> {
    let mut revealed = Vec::new();

    match board.get(coords) {
        Some(cell) if cell.is_hidden() => {}
        _ => return revealed,
    }

    board[coords].is_revealed = true;
    let mut to_visit = VecDeque::from([coords]);

    while let Some(visit_coords) = to_visit.pop_front() {
        revealed.push(visit_coords);

        let cell = board[visit_coords];
        if cell.is_mine || cell.neighbor_mines > 0 {
            continue;
        }

        for pos in board.iter_neighbors(visit_coords) {
            let neighbor = &mut board[pos];
            if neighbor.is_hidden() {
                neighbor.is_revealed = true;
                to_visit.push_back(pos);
            }
        }
    }

    if revealed.len() > 1 {
        log::trace!("Flood from {:?} revealed {} cells", coords, revealed.len());
    }
    revealed
}

/// Hidden and flagged toggle into each other; revealed cells cannot be flagged.
///
/// Returns whether the cell changed.
pub fn toggle_flag(board: &mut Board, coords: Coord2) -> bool {
    match board.get_mut(coords) {
        Some(cell) if !cell.is_revealed => {
            cell.is_flagged = !cell.is_flagged;
            true
        }
        _ => false,
    }
}

/// Every non-mine cell has been revealed. Flags are not considered.
///
/// Always false when `total_mines` exceeds the board.
pub fn check_win(board: &Board, total_mines: CellCount) -> bool {
    board
        .total_cells()
        .checked_sub(total_mines)
        .is_some_and(|safe_cells| board.revealed_count() == safe_cells)
}

/// Some mine has been revealed.
pub fn check_loss(board: &Board) -> bool {
    board.cells().any(|cell| cell.is_mine && cell.is_revealed)
}

/// Flagged cells that hold no mine.
pub fn get_wrong_flags(board: &Board) -> Vec<Coord2> {
    board
        .cells()
        .filter(|cell| cell.is_wrong_flag())
        .map(Cell::coords)
        .collect()
}

/// Reveals every mine, returning the ones that were still hidden or flagged.
pub fn reveal_all_mines(board: &mut Board) -> Vec<Coord2> {
    board
        .cells_mut()
        .filter(|cell| cell.is_mine && !cell.is_revealed)
        .map(|cell| {
            cell.is_revealed = true;
            cell.coords()
        })
        .collect()
}
