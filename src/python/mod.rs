//! Python bindings for the queens engine.
//!
//! Lets a Python UI layer drive the board engine directly.
//!
//! # Quick Start
//!
//! ```python
//! import queens_engine as qe
//!
//! game = qe.QueensGame(size=8)
//! game.place_queen(qe.Position(0, 0))
//!
//! assert game.get_cell_state(qe.Position(7, 7)) == qe.Cell.Invalid
//! board = game.board_array()   # numpy uint8, shape (8, 8)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// queens_engine: board-state engine for the N-Queens puzzle.
#[pymodule]
fn queens_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPosition>()?;
    m.add_class::<PyCell>()?;
    m.add_class::<PyQueensGame>()?;

    Ok(())
}
