//! Core value types: positions, cell states, configuration, RNG.
//!
//! Everything here is plain data with value semantics. The engine in
//! [`crate::game`] is built on top of these types.

pub mod position;
pub mod cell;
pub mod config;
pub mod rng;

pub use position::Position;
pub use cell::Cell;
pub use config::{BoardConfig, InvalidBoardSize, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use rng::GameRng;
