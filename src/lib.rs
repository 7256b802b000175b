//! # queens-engine
//!
//! Board-state engine for the N-Queens placement puzzle.
//!
//! ## Design Principles
//!
//! 1. **Caller-Driven**: The engine is a pure state machine. A UI layer places
//!    and removes queens; the engine never calls out.
//!
//! 2. **Derived Feedback**: Attacked cells are marked `Invalid` and re-derived
//!    from the full set of queens after every mutation.
//!
//! 3. **Value Snapshots**: `QueensGame::board()` hands out an independent copy.
//!    Nothing outside the engine can alias its grid.
//!
//! ## Modules
//!
//! - `core`: Positions, cell states, board configuration, RNG
//! - `board`: Grid storage and queen attack geometry
//! - `game`: The `QueensGame` engine and placement errors
//! - `playout`: Seeded random placement sequences
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod board;
pub mod game;
pub mod playout;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, Cell, GameRng, InvalidBoardSize, Position,
    DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE,
};

pub use crate::board::{attack_lines, attacks, Board, BoardShapeError};

pub use crate::game::{PlacementError, QueensGame};

pub use crate::playout::{random_playout, PlayoutResult};
