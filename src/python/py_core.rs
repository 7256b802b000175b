//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Cell, Position};

/// Python wrapper for Position.
#[pyclass(name = "Position")]
#[derive(Clone, Copy, Debug)]
pub struct PyPosition(pub Position);

#[pymethods]
impl PyPosition {
    #[new]
    fn new(row: i32, col: i32) -> Self {
        Self(Position::new(row, col))
    }

    #[getter]
    fn row(&self) -> i32 {
        self.0.row
    }

    #[getter]
    fn col(&self) -> i32 {
        self.0.col
    }

    fn __repr__(&self) -> String {
        format!("Position(row={}, col={})", self.0.row, self.0.col)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        ((self.0.row as u32 as u64) << 32) | self.0.col as u32 as u64
    }
}

/// Python mirror of Cell.
#[pyclass(name = "Cell", eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PyCell {
    Empty,
    Queen,
    Invalid,
}

impl From<Cell> for PyCell {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => PyCell::Empty,
            Cell::Queen => PyCell::Queen,
            Cell::Invalid => PyCell::Invalid,
        }
    }
}
