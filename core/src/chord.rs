use smallvec::SmallVec;

use crate::*;

fn count_flagged_neighbors(board: &Board, coords: Coord2) -> u8 {
    board
        .iter_neighbors(coords)
        .filter(|&pos| board[pos].is_flagged)
        .count() as u8
}

fn count_unrevealed_neighbors(board: &Board, coords: Coord2) -> u8 {
    board
        .iter_neighbors(coords)
        .filter(|&pos| !board[pos].is_revealed)
        .count() as u8
}

/// A revealed numbered cell whose flagged neighbors match its count exactly.
pub fn can_chord(board: &Board, coords: Coord2) -> bool {
    match board.get(coords) {
        Some(cell) if cell.is_revealed && !cell.is_mine && cell.neighbor_mines > 0 => {
            count_flagged_neighbors(board, coords) == cell.neighbor_mines
        }
        _ => false,
    }
}

/// Cells a chord at `coords` would reveal: the neighbors that are neither
/// flagged nor revealed. Empty when [`can_chord`] is false.
///
/// Nothing is mutated; pass each candidate through [`reveal_cell`] and check
/// for a win or loss after each one.
pub fn chord(board: &Board, coords: Coord2) -> SmallVec<[Cell; 8]> {
    if !can_chord(board, coords) {
        return SmallVec::new();
    }

    board
        .iter_neighbors(coords)
        .map(|pos| board[pos])
        .filter(Cell::is_hidden)
        .collect()
}

/// Hidden neighbors that must all be mines: a revealed numbered cell whose
/// count equals its number of unrevealed neighbors. Empty otherwise.
pub fn chord_flag_candidates(board: &Board, coords: Coord2) -> SmallVec<[Coord2; 8]> {
    match board.get(coords) {
        Some(cell)
            if cell.is_revealed
                && !cell.is_mine
                && cell.neighbor_mines > 0
                && count_unrevealed_neighbors(board, coords) == cell.neighbor_mines =>
        {
            board
                .iter_neighbors(coords)
                .filter(|&pos| board[pos].is_hidden())
                .collect()
        }
        _ => SmallVec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_mine_coords(size, mines).unwrap()
    }

    #[test]
    fn interior_chord_with_exact_flags() {
        let mut board = layout((5, 5), &[(1, 1), (3, 3)]);
        reveal_cell(&mut board, (2, 2));
        assert_eq!(board[(2, 2)].neighbor_mines, 2);
        toggle_flag(&mut board, (1, 1));
        toggle_flag(&mut board, (3, 3));

        assert!(can_chord(&board, (2, 2)));

        let candidates = chord(&board, (2, 2));
        assert_eq!(candidates.len(), 6);
        assert!(candidates.iter().all(Cell::is_hidden));
        assert!(candidates.iter().all(|cell| !cell.is_mine));
    }

    #[test]
    fn chord_skips_revealed_neighbors() {
        let mut board = layout((3, 3), &[(0, 1), (2, 1)]);
        reveal_cell(&mut board, (1, 1));
        reveal_cell(&mut board, (1, 0));
        toggle_flag(&mut board, (0, 1));
        toggle_flag(&mut board, (2, 1));

        let coords: SmallVec<[Coord2; 8]> =
            chord(&board, (1, 1)).iter().map(Cell::coords).collect();

        assert_eq!(coords.as_slice(), [(0, 0), (0, 2), (1, 2), (2, 0), (2, 2)]);
    }

    #[test]
    fn under_and_over_flagging_disqualify() {
        let mut board = layout((5, 5), &[(1, 1), (3, 3)]);
        reveal_cell(&mut board, (2, 2));

        toggle_flag(&mut board, (1, 1));
        assert!(!can_chord(&board, (2, 2)));
        assert!(chord(&board, (2, 2)).is_empty());

        toggle_flag(&mut board, (3, 3));
        toggle_flag(&mut board, (2, 3));
        assert!(!can_chord(&board, (2, 2)));
        assert!(chord(&board, (2, 2)).is_empty());
    }

    #[test]
    fn wrong_flags_still_chord() {
        let mut board = layout((3, 3), &[(0, 0)]);
        reveal_cell(&mut board, (1, 1));
        toggle_flag(&mut board, (2, 2));

        assert!(can_chord(&board, (1, 1)));
        assert!(chord(&board, (1, 1)).iter().any(|cell| cell.is_mine));
    }

    #[test]
    fn hidden_zero_and_outside_cells_do_not_chord() {
        let mut board = layout((4, 4), &[(0, 0)]);

        assert!(!can_chord(&board, (1, 1)));
        assert!(!can_chord(&board, (4, 4)));

        reveal_cell(&mut board, (3, 3));
        assert_eq!(board[(3, 3)].neighbor_mines, 0);
        assert!(!can_chord(&board, (3, 3)));
    }

    #[test]
    fn flag_candidates_when_count_is_forced() {
        let mut board = layout((4, 1), &[(0, 0), (2, 0)]);
        reveal_cell(&mut board, (1, 0));

        assert_eq!(chord_flag_candidates(&board, (1, 0)).as_slice(), [(0, 0), (2, 0)]);

        toggle_flag(&mut board, (0, 0));
        assert_eq!(chord_flag_candidates(&board, (1, 0)).as_slice(), [(2, 0)]);
    }

    #[test]
    fn no_flag_candidates_when_ambiguous() {
        let mut board = layout((3, 3), &[(0, 0)]);
        reveal_cell(&mut board, (1, 1));

        assert!(chord_flag_candidates(&board, (1, 1)).is_empty());
    }
}
