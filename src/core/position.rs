//! Board coordinates.
//!
//! `Position` is signed so that requests coming from a UI layer (which may
//! compute neighbours like `row - 1`) stay representable. Whether a position
//! is on the board is decided against a board size with [`Position::in_bounds`].

use serde::{Deserialize, Serialize};

/// A zero-based `(row, col)` coordinate.
///
/// Used purely as a request/response value; the engine never stores
/// references to caller positions.
///
/// ```
/// use queens_engine::core::Position;
///
/// let p = Position::new(2, 5);
/// assert!(p.in_bounds(8));
/// assert_eq!(p.index(8), Some(21));
/// assert!(!Position::new(-1, 0).in_bounds(8));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Build a position from unsigned grid indices.
    ///
    /// Board sizes are capped well below `i32::MAX`, so the conversion is lossless
    /// for every index the engine produces.
    #[must_use]
    pub const fn from_indices(row: usize, col: usize) -> Self {
        Self {
            row: row as i32,
            col: col as i32,
        }
    }

    /// Check whether this position lies on a `size × size` board.
    #[must_use]
    pub fn in_bounds(self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.row as i64)) && (0..size).contains(&(self.col as i64))
    }

    /// Row-major index into a flat `size × size` grid, or `None` if off the board.
    #[must_use]
    pub fn index(self, size: usize) -> Option<usize> {
        if self.in_bounds(size) {
            Some(self.row as usize * size + self.col as usize)
        } else {
            None
        }
    }

    /// Principal diagonal key (top-left to bottom-right). Equal for cells on the same diagonal.
    ///
    /// Widened to `i64` so any pair of `i32` coordinates fits.
    #[must_use]
    pub const fn diagonal(self) -> i64 {
        self.row as i64 - self.col as i64
    }

    /// Anti-diagonal key (top-right to bottom-left). Equal for cells on the same anti-diagonal.
    #[must_use]
    pub const fn anti_diagonal(self) -> i64 {
        self.row as i64 + self.col as i64
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
