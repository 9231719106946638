use alloc::string::String;
use alloc::vec::Vec;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Initial -> Playing
/// - Initial -> Won / Lost
/// - Playing -> Won / Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Initial,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::Initial)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Won,
    Lost,
}

/// One game from the first click to a win or loss.
///
/// The board stays mine-free until the first accepted reveal, which generates
/// the layout from the caller's seed with that cell kept clear.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    difficulty: Difficulty,
    board: Board,
    status: GameStatus,
    timer: Saturating<u32>,
    flags: CellCount,
    first_click: bool,
    seed: Option<String>,
    triggered_mine: Option<Coord2>,
}

impl GameSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            board: Board::new(difficulty.rows, difficulty.cols),
            status: GameStatus::Initial,
            timer: Saturating(0),
            flags: 0,
            first_click: true,
            seed: None,
            triggered_mine: None,
        }
    }

    /// Discards the current game and starts over with an empty board.
    pub fn new_game(&mut self, difficulty: Difficulty) {
        log::debug!(
            "New {} game, {}x{} with {} mines",
            difficulty.name(),
            difficulty.rows,
            difficulty.cols,
            difficulty.mines
        );
        *self = Self::new(difficulty);
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Seconds elapsed, as advanced by [`GameSession::tick`].
    pub fn timer(&self) -> u32 {
        self.timer.0
    }

    pub fn flags(&self) -> CellCount {
        self.flags
    }

    pub fn is_first_click(&self) -> bool {
        self.first_click
    }

    /// Seed the board was generated from, once it has been.
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn mines_left(&self) -> isize {
        (self.difficulty.mines as isize) - (self.flags as isize)
    }

    pub fn wrong_flags(&self) -> Vec<Coord2> {
        get_wrong_flags(&self.board)
    }

    /// `Initial -> Playing`; does nothing in any other state.
    pub fn start_game(&mut self) {
        if self.status.is_initial() {
            self.status = GameStatus::Playing;
        }
    }

    /// Ends the game; the first result recorded sticks until [`GameSession::new_game`].
    pub fn end_game(&mut self, result: GameResult) {
        if self.status.is_finished() {
            return;
        }

        self.status = match result {
            GameResult::Won => GameStatus::Won,
            GameResult::Lost => GameStatus::Lost,
        };
        log::debug!("Game ended: {:?} after {}s", self.status, self.timer.0);
    }

    /// Advances the timer by one second while the game is being played.
    pub fn tick(&mut self) {
        if matches!(self.status, GameStatus::Playing) {
            self.timer += 1;
        }
    }

    /// Reveals a cell, generating the board from `seed` on the first reveal.
    ///
    /// `seed` is ignored once the board exists.
    pub fn reveal(&mut self, coords: Coord2, seed: &str) -> RevealOutcome {
        if self.status.is_finished() {
            return RevealOutcome::NoChange;
        }
        match self.board.get(coords) {
            Some(cell) if cell.is_hidden() => {}
            _ => return RevealOutcome::NoChange,
        }

        if self.first_click {
            let generated = SeededBoardGenerator::new(seed, coords).generate(&self.difficulty);
            self.board = match generated {
                Ok(board) => board,
                Err(err) => {
                    log::warn!("Cannot generate board for {:?}: {}", self.difficulty, err);
                    return RevealOutcome::NoChange;
                }
            };
            self.seed = Some(seed.into());
            self.first_click = false;
            self.start_game();
        }

        let outcome = self.reveal_single_cell(coords);
        if outcome.has_update() {
            log::trace!("Reveal at {:?}: {:?}", coords, outcome);
        }
        outcome
    }

    /// Reveals every chord candidate around `coords` one at a time, stopping
    /// as soon as the game ends.
    pub fn chord_reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if !matches!(self.status, GameStatus::Playing) {
            return RevealOutcome::NoChange;
        }

        let mut outcome = RevealOutcome::NoChange;
        for cell in chord(&self.board, coords) {
            outcome = outcome | self.reveal_single_cell(cell.coords());
            if self.status.is_finished() {
                break;
            }
        }
        outcome
    }

    /// Accepted only while playing on a generated board.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if !matches!(self.status, GameStatus::Playing) || self.first_click {
            return MarkOutcome::NoChange;
        }
        if !toggle_flag(&mut self.board, coords) {
            return MarkOutcome::NoChange;
        }

        if self.board[coords].is_flagged {
            self.flags += 1;
        } else {
            self.flags -= 1;
        }
        MarkOutcome::Changed
    }

    /// Flags all hidden neighbors of a revealed number whose unrevealed
    /// neighbors must all be mines.
    pub fn chord_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if !matches!(self.status, GameStatus::Playing) {
            return MarkOutcome::NoChange;
        }

        let mut outcome = MarkOutcome::NoChange;
        for pos in chord_flag_candidates(&self.board, coords) {
            outcome = outcome | self.toggle_flag(pos);
        }
        outcome
    }

    fn reveal_single_cell(&mut self, coords: Coord2) -> RevealOutcome {
        if reveal_cell(&mut self.board, coords).is_empty() {
            return RevealOutcome::NoChange;
        }

        if check_loss(&self.board) {
            self.triggered_mine = Some(coords);
            reveal_all_mines(&mut self.board);
            self.end_game(GameResult::Lost);
            RevealOutcome::HitMine
        } else if check_win(&self.board, self.difficulty.mines) {
            self.end_game(GameResult::Won);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
