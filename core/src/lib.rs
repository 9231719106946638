//! Minesweeper rules engine.
//!
//! Boards are generated from a seed string with the first clicked cell kept
//! clear, revealed with a flood fill through zero cells, and chorded around
//! satisfied numbers. [`GameSession`] ties these together for one game; the
//! free functions can also be driven directly against a [`Board`].

#![no_std]

extern crate alloc;

use core::ops::BitOr;

pub use board::*;
pub use cell::*;
pub use chord::*;
pub use difficulty::*;
pub use error::*;
pub use generator::*;
pub use reveal::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod chord;
mod difficulty;
mod error;
mod generator;
mod reveal;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

impl BitOr for MarkOutcome {
    type Output = MarkOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        if self.has_update() || rhs.has_update() {
            Self::Changed
        } else {
            Self::NoChange
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Merges outcomes of several reveals; a hit mine dominates, then a win.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}
