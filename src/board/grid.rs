//! Square grid of cell states.
//!
//! `Board` is a plain value: cloning it yields an independent snapshot, which
//! is exactly what the engine hands out to callers.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::core::{BoardConfig, Cell, InvalidBoardSize, Position};

/// A `size × size` grid of [`Cell`]s stored row-major.
///
/// ## Example
///
/// ```
/// use queens_engine::board::Board;
/// use queens_engine::core::{Cell, Position};
///
/// let mut board = Board::new(4);
/// board.set(Position::new(1, 2), Cell::Queen);
///
/// assert_eq!(board[Position::new(1, 2)], Cell::Queen);
/// assert_eq!(board.get(Position::new(9, 9)), None);
/// assert_eq!(board.count(Cell::Queen), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

/// Why a deserialized board was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardShapeError {
    /// Size outside `1..=MAX_BOARD_SIZE`.
    Size(InvalidBoardSize),
    /// Cell count does not equal `size * size`.
    CellCount { size: usize, cells: usize },
}

impl std::fmt::Display for BoardShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardShapeError::Size(err) => std::fmt::Display::fmt(err, f),
            BoardShapeError::CellCount { size, cells } => write!(
                f,
                "a {}x{} board needs {} cells, got {}",
                size,
                size,
                size * size,
                cells
            ),
        }
    }
}

impl std::error::Error for BoardShapeError {}

impl TryFrom<RawBoard> for Board {
    type Error = BoardShapeError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        BoardConfig::check_size(raw.size).map_err(BoardShapeError::Size)?;
        if raw.cells.len() != raw.size * raw.size {
            return Err(BoardShapeError::CellCount {
                size: raw.size,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Create an all-`Empty` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0 or larger than [`crate::core::MAX_BOARD_SIZE`].
    #[must_use]
    pub fn new(size: usize) -> Self {
        BoardConfig::assert_size(size);
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get a cell, or `None` if the position is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        pos.index(self.size).map(|i| self.cells[i])
    }

    /// Set a cell. Returns `false` (and does nothing) if the position is off the board.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match pos.index(self.size) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Overwrite every cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Iterate rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.size)
    }

    /// Copy the grid out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Iterate `(position, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Position::from_indices(i / size, i % size), cell))
    }

    /// Positions holding the given state, row-major.
    pub fn positions(&self, state: Cell) -> impl Iterator<Item = Position> + '_ {
        self.cells()
            .filter(move |&(_, cell)| cell == state)
            .map(|(pos, _)| pos)
    }

    /// Number of cells in the given state.
    #[must_use]
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Mutable access to the raw cells for whole-board passes.
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        let i = pos
            .index(self.size)
            .unwrap_or_else(|| panic!("Position {} is off a {}x{} board", pos, self.size, self.size));
        &self.cells[i]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
