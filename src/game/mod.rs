//! The board engine: placement, removal and validity rules.
//!
//! `QueensGame` is a pure state machine driven entirely by its caller. It
//! never calls out, never blocks, and signals refused moves through its
//! return values rather than panics.

pub mod engine;
pub mod error;

pub use engine::QueensGame;
pub use error::PlacementError;
