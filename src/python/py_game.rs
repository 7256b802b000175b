//! Engine bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{BoardConfig, GameRng, DEFAULT_BOARD_SIZE};
use crate::game::QueensGame;
use crate::playout::random_playout;

use super::py_core::{PyCell, PyPosition};

/// Python wrapper for QueensGame.
///
/// Method names follow the UI contract: `get_board`, `place_queen`,
/// `remove_queen`, `is_game_complete`, `reset_board` and so on.
#[pyclass(name = "QueensGame")]
pub struct PyQueensGame {
    game: QueensGame,
}

#[pymethods]
impl PyQueensGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - size: Board edge length (1-255, default 8)
    #[new]
    #[pyo3(signature = (size = DEFAULT_BOARD_SIZE))]
    fn new(size: usize) -> PyResult<Self> {
        BoardConfig::check_size(size).map_err(|err| PyValueError::new_err(err.to_string()))?;
        Ok(Self {
            game: QueensGame::new(size),
        })
    }

    #[getter]
    fn size(&self) -> usize {
        self.game.size()
    }

    /// Snapshot of the grid as nested lists of Cell.
    fn get_board(&self) -> Vec<Vec<PyCell>> {
        self.game
            .board()
            .rows()
            .map(|row| row.iter().map(|&c| PyCell::from(c)).collect())
            .collect()
    }

    /// Snapshot of the grid as a 2D uint8 array (0 empty, 1 queen, 2 invalid).
    fn board_array<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let board = self.game.board();
        let codes: Vec<u8> = board.cells().map(|(_, cell)| cell.code()).collect();
        let size = board.size();
        PyArray1::from_vec_bound(py, codes).reshape([size, size])
    }

    fn get_queens_count(&self) -> usize {
        self.game.queens_count()
    }

    /// Cell state; off-board positions report Cell.Invalid.
    fn get_cell_state(&self, position: &PyPosition) -> PyCell {
        self.game.cell_state(position.0).into()
    }

    /// Cell state, or None if off the board.
    fn get_cell(&self, position: &PyPosition) -> Option<PyCell> {
        self.game.cell(position.0).map(PyCell::from)
    }

    fn is_valid_queen_position(&self, position: &PyPosition) -> bool {
        self.game.is_valid_queen_position(position.0)
    }

    /// Reason a placement would be refused, or None if it is allowed.
    fn placement_error(&self, position: &PyPosition) -> Option<String> {
        self.game.check_placement(position.0).err().map(|e| e.to_string())
    }

    fn place_queen(&mut self, position: &PyPosition) -> bool {
        self.game.place_queen(position.0)
    }

    fn remove_queen(&mut self, position: &PyPosition) -> bool {
        self.game.remove_queen(position.0)
    }

    /// Remove the queen at position if present, otherwise try to place one.
    fn toggle(&mut self, position: &PyPosition) -> bool {
        self.game.toggle(position.0)
    }

    fn legal_positions(&self) -> Vec<PyPosition> {
        self.game.legal_positions().into_iter().map(PyPosition).collect()
    }

    fn queen_positions(&self) -> Vec<PyPosition> {
        self.game.queen_positions().into_iter().map(PyPosition).collect()
    }

    fn is_game_complete(&self) -> bool {
        self.game.is_game_complete()
    }

    fn reset_board(&mut self) {
        self.game.reset_board();
    }

    /// Fill the board with random legal queens. Returns the number placed.
    #[pyo3(signature = (seed = 42))]
    fn random_fill(&mut self, seed: u64) -> usize {
        random_playout(&mut self.game, &mut GameRng::new(seed)).placed
    }

    fn __repr__(&self) -> String {
        format!(
            "QueensGame(size={}, queens={}, complete={})",
            self.game.size(),
            self.game.queens_count(),
            self.game.is_game_complete()
        )
    }

    fn __str__(&self) -> String {
        self.game.to_string()
    }
}
