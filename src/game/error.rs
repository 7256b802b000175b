//! Placement rejection reasons.

use crate::core::Position;

/// Why a queen cannot be placed at a position.
///
/// The boolean engine API (`place_queen`, `is_valid_queen_position`) folds all
/// of these into `false`; `check_placement` and `try_place_queen` keep them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The position is not on the board.
    OutOfBounds { position: Position, size: usize },
    /// A queen already stands on the position.
    Occupied { position: Position },
    /// An existing queen shares a row, column or diagonal with the position.
    Attacked { position: Position, by: Position },
}

impl PlacementError {
    /// The rejected position.
    #[must_use]
    pub fn position(&self) -> Position {
        match *self {
            PlacementError::OutOfBounds { position, .. }
            | PlacementError::Occupied { position }
            | PlacementError::Attacked { position, .. } => position,
        }
    }
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::OutOfBounds { position, size } => {
                write!(f, "position {} is off the {}x{} board", position, size, size)
            }
            PlacementError::Occupied { position } => {
                write!(f, "position {} already holds a queen", position)
            }
            PlacementError::Attacked { position, by } => {
                write!(f, "position {} is attacked by the queen at {}", position, by)
            }
        }
    }
}

impl std::error::Error for PlacementError {}
