//! Per-cell state.

use serde::{Deserialize, Serialize};

/// State of a single board cell.
///
/// Exactly one state holds per cell at any time:
/// - `Empty`: no queen, not attacked
/// - `Queen`: occupied
/// - `Invalid`: no queen, but attacked by at least one queen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Queen,
    Invalid,
}

impl Cell {
    /// Check if this cell holds a queen.
    #[must_use]
    pub const fn is_queen(self) -> bool {
        matches!(self, Cell::Queen)
    }

    /// Compact numeric code used by array exports (0 empty, 1 queen, 2 invalid).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Queen => 1,
            Cell::Invalid => 2,
        }
    }

    /// Single-character glyph used when rendering a board as text.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Queen => 'Q',
            Cell::Invalid => 'x',
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Cell::Empty => "Empty",
            Cell::Queen => "Queen",
            Cell::Invalid => "Invalid",
        };
        f.write_str(name)
    }
}
