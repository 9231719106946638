use alloc::vec::Vec;

use crate::*;
pub use mulberry::*;

mod mulberry;

/// Strategy for laying out mines for a difficulty.
pub trait BoardGenerator {
    fn generate(self, difficulty: &Difficulty) -> Result<Board>;
}

/// Seeded generation with the first clicked cell and its neighbors kept clear.
#[derive(Clone, Debug, PartialEq)]
pub struct SeededBoardGenerator<'a> {
    seed: &'a str,
    start: Coord2,
}

impl<'a> SeededBoardGenerator<'a> {
    pub fn new(seed: &'a str, start: Coord2) -> Self {
        Self { seed, start }
    }
}

impl BoardGenerator for SeededBoardGenerator<'_> {
    fn generate(self, difficulty: &Difficulty) -> Result<Board> {
        let mut board = try_generate_board(
            difficulty.rows,
            difficulty.cols,
            difficulty.mines,
            self.seed,
        )?;
        ensure_first_click_safety(&mut board, self.start);
        Ok(board)
    }
}

/// Places `mine_count` mines on a fresh `rows` x `cols` board, driven by a
/// [`Mulberry32`] stream seeded from `seed`, and annotates neighbor counts.
///
/// The same arguments always produce the same layout.
///
/// `mine_count` must be smaller than `rows * cols`: placement draws random
/// cells until enough distinct ones hold a mine, so an impossible count never
/// terminates. Validate with [`validate_custom_difficulty`] first, or use
/// [`try_generate_board`].
pub fn generate_board(rows: Coord, cols: Coord, mine_count: CellCount, seed: &str) -> Board {
    debug_assert!(
        mine_count < mult(rows, cols),
        "cannot place {mine_count} mines on a {rows}x{cols} board"
    );

    let mut rng = Mulberry32::from_seed_str(seed);
    log::debug!(
        "Generating {}x{} board with {} mines, seed state {}",
        rows,
        cols,
        mine_count,
        rng.state()
    );

    let mut board = Board::new(rows, cols);
    let mut mines_placed = 0;
    while mines_placed < mine_count {
        let row = rng.next_index(rows);
        let col = rng.next_index(cols);
        let cell = &mut board[(row, col)];
        if !cell.is_mine {
            cell.is_mine = true;
            mines_placed += 1;
        }
    }

    calculate_numbers(&mut board);
    board
}

/// Like [`generate_board`], but rejects mine counts that leave no safe cell.
pub fn try_generate_board(
    rows: Coord,
    cols: Coord,
    mine_count: CellCount,
    seed: &str,
) -> Result<Board> {
    if rows == 0 || cols == 0 {
        return Err(GameError::InvalidDimensions);
    }
    if mine_count >= mult(rows, cols) {
        return Err(GameError::TooManyMines);
    }
    Ok(generate_board(rows, cols, mine_count, seed))
}

/// Stores, for every non-mine cell, how many of its neighbors are mines.
///
/// Mine cells keep whatever count they had.
pub fn calculate_numbers(board: &mut Board) {
    let (rows, cols) = board.size();
    for row in 0..rows {
        for col in 0..cols {
            let coords = (row, col);
            if board[coords].is_mine {
                continue;
            }
            let count = board
                .iter_neighbors(coords)
                .filter(|&pos| board[pos].is_mine)
                .count();
            board[coords].neighbor_mines = count as u8;
        }
    }
}

/// Moves mines out of the clipped 3x3 block around `start` so the first click
/// opens a zero cell, returning how many mines were relocated.
///
/// Mines inside the block are paired in row-major order with safe cells
/// outside it, so the total mine count never changes. When the board is too
/// dense to take them all, the leftover mines stay where they are.
pub fn ensure_first_click_safety(board: &mut Board, start: Coord2) -> CellCount {
    if !board.contains(start) {
        return 0;
    }

    let block_has_mine = board[start].is_mine
        || board.iter_neighbors(start).any(|pos| board[pos].is_mine);
    if !block_has_mine {
        return 0;
    }

    let (unsafe_mines, safe_cells): (Vec<_>, Vec<_>) = board
        .cells()
        .filter(|cell| cell.is_mine == is_adjacent_or_same(start, cell.coords()))
        .map(Cell::coords)
        .partition(|&coords| is_adjacent_or_same(start, coords));

    let mut moved = 0;
    for (&from, &to) in unsafe_mines.iter().zip(&safe_cells) {
        board[from].is_mine = false;
        board[to].is_mine = true;
        moved += 1;
    }

    if unsafe_mines.len() > safe_cells.len() {
        log::warn!(
            "Only {} of {} mines could be moved away from first click at {:?}",
            moved,
            unsafe_mines.len(),
            start
        );
    } else {
        log::debug!("Moved {} mines away from first click at {:?}", moved, start);
    }

    calculate_numbers(board);
    moved
}
