use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyKind {
    Beginner,
    Intermediate,
    Expert,
    Custom,
}

impl DifficultyKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
            Self::Custom => "custom",
        }
    }
}

/// Board dimensions and mine count for one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    pub kind: DifficultyKind,
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl Difficulty {
    pub const fn beginner() -> Self {
        Self::preset(DifficultyKind::Beginner, 9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::preset(DifficultyKind::Intermediate, 16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::preset(DifficultyKind::Expert, 16, 30, 99)
    }

    /// Custom difficulty checked against [`DifficultyLimits::default`].
    pub fn custom(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        Self::custom_with_limits(rows, cols, mines, &DifficultyLimits::default())
    }

    pub fn custom_with_limits(
        rows: Coord,
        cols: Coord,
        mines: CellCount,
        limits: &DifficultyLimits,
    ) -> Result<Self> {
        limits.check(rows, cols, mines)?;
        Ok(Self::preset(DifficultyKind::Custom, rows, cols, mines))
    }

    const fn preset(kind: DifficultyKind, rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self {
            kind,
            rows,
            cols,
            mines,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::beginner()
    }
}

/// Bounds accepted for custom difficulties.
///
/// The default is the only policy this crate applies; frontends wanting a
/// tighter range pass their own limits instead of validating separately.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyLimits {
    pub min_dimension: Coord,
    pub max_dimension: Coord,
    /// Largest share of the board, in percent, that may hold mines.
    pub max_mine_percent: u8,
}

impl Default for DifficultyLimits {
    fn default() -> Self {
        Self {
            min_dimension: 5,
            max_dimension: 50,
            max_mine_percent: 99,
        }
    }
}

impl DifficultyLimits {
    /// `floor(rows * cols * max_mine_percent / 100)`, capped so at least one
    /// cell stays safe.
    pub fn max_mines(&self, rows: Coord, cols: Coord) -> CellCount {
        let cells = u32::from(mult(rows, cols));
        let cap = cells * u32::from(self.max_mine_percent) / 100;
        let cap = cap.min(cells.saturating_sub(1));
        CellCount::try_from(cap).unwrap_or(CellCount::MAX)
    }

    pub fn check(&self, rows: Coord, cols: Coord, mines: CellCount) -> Result<()> {
        let dimensions = self.min_dimension..=self.max_dimension;
        if !dimensions.contains(&rows) || !dimensions.contains(&cols) {
            return Err(GameError::InvalidDimensions);
        }
        if mines < 1 {
            return Err(GameError::NoMines);
        }
        if mines > self.max_mines(rows, cols) {
            return Err(GameError::TooManyMines);
        }
        Ok(())
    }

    pub fn validate(&self, rows: Coord, cols: Coord, mines: CellCount) -> bool {
        self.check(rows, cols, mines).is_ok()
    }
}

/// True iff rows and cols are within `[5, 50]` and
/// `1 <= mines <= floor(rows * cols * 0.99)`.
pub fn validate_custom_difficulty(rows: Coord, cols: Coord, mines: CellCount) -> bool {
    DifficultyLimits::default().validate(rows, cols, mines)
}
