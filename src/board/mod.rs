//! Board storage and attack geometry.

pub mod grid;
pub mod lines;

pub use grid::{Board, BoardShapeError};
pub use lines::{attack_lines, attacks};
