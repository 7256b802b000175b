//! The queen placement engine.
//!
//! `QueensGame` owns the board and is the only thing allowed to mutate it.
//! Callers (typically a UI layer reacting to taps) drive it with
//! [`QueensGame::place_queen`] / [`QueensGame::remove_queen`] and read it back
//! with [`QueensGame::board`] and [`QueensGame::is_game_complete`].
//!
//! ## Invariants
//!
//! - A cell is `Queen` iff a queen was placed there and not since removed.
//! - A cell is `Invalid` iff it holds no queen and shares a row, column or
//!   diagonal with at least one queen. Otherwise it is `Empty`.
//! - `queens_count()` equals the number of `Queen` cells.
//!
//! `Invalid` marks are re-derived from scratch after every successful
//! placement or removal, so no stale mark can survive a mutation.

use log::{debug, trace};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::error::PlacementError;
use crate::board::{attack_lines, attacks, Board};
use crate::core::{BoardConfig, Cell, Position};

/// Board-state engine for the N-Queens puzzle.
///
/// ## Example
///
/// ```
/// use queens_engine::core::{Cell, Position};
/// use queens_engine::game::QueensGame;
///
/// let mut game = QueensGame::new(8);
/// assert!(game.place_queen(Position::new(0, 0)));
///
/// assert_eq!(game.cell_state(Position::new(0, 0)), Cell::Queen);
/// assert_eq!(game.cell_state(Position::new(7, 7)), Cell::Invalid);
/// assert!(!game.place_queen(Position::new(0, 1)));
/// assert_eq!(game.queens_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueensGame {
    config: BoardConfig,
    board: Board,
    queens_count: usize,
}

impl QueensGame {
    /// Create an engine with an empty `size × size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0 or larger than [`crate::core::MAX_BOARD_SIZE`].
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_config(BoardConfig::new(size))
    }

    /// Create an engine from a configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.size` is 0 or larger than [`crate::core::MAX_BOARD_SIZE`],
    /// which can only happen for a config built field by field.
    #[must_use]
    pub fn with_config(config: BoardConfig) -> Self {
        BoardConfig::assert_size(config.size);
        Self {
            config,
            board: Board::new(config.size),
            queens_count: 0,
        }
    }

    /// Create an engine with queens already placed at `queens`.
    ///
    /// Queens are placed in the given order with the normal placement rule.
    /// Repeated positions are ignored. The first position that cannot be
    /// placed aborts construction with its reason.
    pub fn with_queens(size: usize, queens: &[Position]) -> Result<Self, PlacementError> {
        let mut game = Self::new(size);
        let mut seen = FxHashSet::default();

        for &pos in queens {
            if seen.insert(pos) {
                game.try_place_queen(pos)?;
            }
        }

        Ok(game)
    }

    // === Queries ===

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.config.size
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Snapshot of the grid.
    ///
    /// The returned board is an independent copy; changing it has no effect
    /// on the engine.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board.clone()
    }

    /// Number of queens currently on the board.
    #[must_use]
    pub fn queens_count(&self) -> usize {
        self.queens_count
    }

    /// State of a cell.
    ///
    /// Off-board positions report `Cell::Invalid`. Use [`QueensGame::cell`]
    /// to tell "off the board" apart from "attacked".
    #[must_use]
    pub fn cell_state(&self, pos: Position) -> Cell {
        self.cell(pos).unwrap_or(Cell::Invalid)
    }

    /// State of a cell, or `None` if the position is off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.board.get(pos)
    }

    /// Queen positions in row-major order.
    #[must_use]
    pub fn queen_positions(&self) -> SmallVec<[Position; 8]> {
        self.board.positions(Cell::Queen).collect()
    }

    /// Every position where a queen could be placed right now.
    #[must_use]
    pub fn legal_positions(&self) -> Vec<Position> {
        self.board
            .cells()
            .map(|(pos, _)| pos)
            .filter(|&pos| self.is_valid_queen_position(pos))
            .collect()
    }

    /// True once the board holds `size` queens.
    ///
    /// The placement rule never admits two queens on one row, so a full count
    /// is always a complete solution.
    #[must_use]
    pub fn is_game_complete(&self) -> bool {
        self.queens_count == self.config.size
    }

    // === Placement rule ===

    /// Check whether a queen may be placed at `pos`.
    ///
    /// False when `pos` is off the board, already holds a queen, or shares a
    /// row, column or diagonal with any queen. Never mutates.
    #[must_use]
    pub fn is_valid_queen_position(&self, pos: Position) -> bool {
        self.check_placement(pos).is_ok()
    }

    /// Explain why a queen may not be placed at `pos`.
    ///
    /// For `Attacked`, `by` is the first attacking queen in row-major order.
    pub fn check_placement(&self, pos: Position) -> Result<(), PlacementError> {
        let size = self.config.size;

        match self.board.get(pos) {
            None => Err(PlacementError::OutOfBounds { position: pos, size }),
            Some(Cell::Queen) => Err(PlacementError::Occupied { position: pos }),
            Some(_) => match self.board.positions(Cell::Queen).find(|&q| attacks(q, pos)) {
                Some(by) => Err(PlacementError::Attacked { position: pos, by }),
                None => Ok(()),
            },
        }
    }

    // === Mutation ===

    /// Place a queen at `pos` if the placement rule allows it.
    ///
    /// Returns `true` if the queen was placed. On `false` nothing changed.
    pub fn place_queen(&mut self, pos: Position) -> bool {
        self.try_place_queen(pos).is_ok()
    }

    /// Place a queen at `pos`, reporting why it was refused.
    pub fn try_place_queen(&mut self, pos: Position) -> Result<(), PlacementError> {
        if let Err(err) = self.check_placement(pos) {
            trace!("rejected queen at {}: {}", pos, err);
            return Err(err);
        }

        self.board.set(pos, Cell::Queen);
        self.queens_count += 1;
        self.update_invalid_positions();

        debug!(
            "placed queen at {} ({}/{})",
            pos, self.queens_count, self.config.size
        );
        Ok(())
    }

    /// Remove the queen at `pos`.
    ///
    /// Returns `true` if a queen was removed. Off-board positions and cells
    /// without a queen are left alone and return `false`.
    pub fn remove_queen(&mut self, pos: Position) -> bool {
        if self.board.get(pos) != Some(Cell::Queen) {
            trace!("no queen to remove at {}", pos);
            return false;
        }

        self.board.set(pos, Cell::Empty);
        self.queens_count -= 1;
        self.update_invalid_positions();

        debug!(
            "removed queen at {} ({}/{})",
            pos, self.queens_count, self.config.size
        );
        true
    }

    /// Tap handler: remove the queen at `pos` if there is one, otherwise try to place one.
    ///
    /// Returns `true` if the board changed.
    pub fn toggle(&mut self, pos: Position) -> bool {
        if self.board.get(pos) == Some(Cell::Queen) {
            self.remove_queen(pos)
        } else {
            self.place_queen(pos)
        }
    }

    /// Clear the board back to its freshly constructed state.
    pub fn reset_board(&mut self) {
        self.board = Board::new(self.config.size);
        self.queens_count = 0;
        debug!("board reset ({}x{})", self.config.size, self.config.size);
    }

    /// Re-derive every `Invalid` mark from the current queens.
    ///
    /// 1. Every non-queen cell becomes `Empty`.
    /// 2. Every non-queen cell on a queen's row, column or diagonals becomes `Invalid`.
    fn update_invalid_positions(&mut self) {
        for cell in self.board.cells_mut() {
            if !cell.is_queen() {
                *cell = Cell::Empty;
            }
        }

        let size = self.config.size;
        let queens = self.queen_positions();
        for queen in queens {
            for pos in attack_lines(size, queen) {
                if self.board.get(pos) != Some(Cell::Queen) {
                    self.board.set(pos, Cell::Invalid);
                }
            }
        }
    }
}

impl Default for QueensGame {
    fn default() -> Self {
        Self::with_config(BoardConfig::default())
    }
}

impl std::fmt::Display for QueensGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.board, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_new_game_is_empty() {
        let game = QueensGame::new(8);
        assert_eq!(game.size(), 8);
        assert_eq!(game.queens_count(), 0);
        assert_eq!(game.board(), Board::new(8));
        assert!(!game.is_game_complete());
    }

    #[test]
    fn test_default_size_is_eight() {
        assert_eq!(QueensGame::default().size(), 8);
    }

    #[test]
    #[should_panic(expected = "Board size must be at least 1")]
    fn test_zero_size_panics() {
        let _ = QueensGame::new(0);
    }

    #[test]
    #[should_panic(expected = "Board size must be at least 1")]
    fn test_zero_size_config_literal_panics() {
        let _ = QueensGame::with_config(BoardConfig { size: 0 });
    }

    #[test]
    fn test_deserialized_config_builds_checked_engine() {
        let config: BoardConfig = serde_json::from_str(r#"{"size":4}"#).unwrap();
        let game = QueensGame::with_config(config);
        assert_eq!(game.size(), 4);
        assert!(!game.is_game_complete());

        assert!(serde_json::from_str::<BoardConfig>(r#"{"size":0}"#).is_err());
    }

    #[test]
    fn test_place_marks_lines_invalid() {
        let mut game = QueensGame::new(4);
        assert!(game.place_queen(p(1, 1)));

        // Row, column, both diagonals
        for pos in [p(1, 0), p(1, 3), p(0, 1), p(3, 1), p(0, 0), p(3, 3), p(0, 2), p(2, 0)] {
            assert_eq!(game.cell_state(pos), Cell::Invalid, "{} should be attacked", pos);
        }
        // Knight-move cells stay empty
        for pos in [p(0, 3), p(2, 3), p(3, 0), p(3, 2)] {
            assert_eq!(game.cell_state(pos), Cell::Empty, "{} should be free", pos);
        }
    }

    #[test]
    fn test_check_placement_reasons() {
        let mut game = QueensGame::new(8);
        game.place_queen(p(0, 0));

        assert_eq!(
            game.check_placement(p(8, 0)),
            Err(PlacementError::OutOfBounds { position: p(8, 0), size: 8 })
        );
        assert_eq!(
            game.check_placement(p(0, 0)),
            Err(PlacementError::Occupied { position: p(0, 0) })
        );
        assert_eq!(
            game.check_placement(p(5, 5)),
            Err(PlacementError::Attacked { position: p(5, 5), by: p(0, 0) })
        );
        assert_eq!(game.check_placement(p(1, 2)), Ok(()));
    }

    #[test]
    fn test_attacker_is_first_in_row_major_order() {
        let mut game = QueensGame::new(8);
        game.place_queen(p(0, 3));
        game.place_queen(p(1, 0));

        // (4,3) shares a column with (0,3) and a diagonal with (1,0)
        assert_eq!(
            game.check_placement(p(4, 3)),
            Err(PlacementError::Attacked { position: p(4, 3), by: p(0, 3) })
        );
    }

    #[test]
    fn test_rejected_placement_does_not_mutate() {
        let mut game = QueensGame::new(8);
        game.place_queen(p(2, 2));
        let before = game.clone();

        assert!(!game.place_queen(p(2, 6)));
        assert!(!game.place_queen(p(2, 2)));
        assert!(!game.place_queen(p(-1, 3)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_remove_requires_queen() {
        let mut game = QueensGame::new(8);
        game.place_queen(p(0, 0));

        assert!(!game.remove_queen(p(0, 1)));
        assert!(!game.remove_queen(p(3, 5)));
        assert!(!game.remove_queen(p(9, 9)));
        assert_eq!(game.queens_count(), 1);

        assert!(game.remove_queen(p(0, 0)));
        assert_eq!(game.queens_count(), 0);
        assert!(!game.remove_queen(p(0, 0)));
    }

    #[test]
    fn test_remove_keeps_other_queens_attacks() {
        let mut game = QueensGame::new(8);
        game.place_queen(p(0, 0));
        game.place_queen(p(1, 2));

        assert!(game.remove_queen(p(0, 0)));

        // Still attacked by (1,2)
        assert_eq!(game.cell_state(p(1, 7)), Cell::Invalid);
        assert_eq!(game.cell_state(p(0, 1)), Cell::Invalid);
        // Only (0,0) attacked these
        assert_eq!(game.cell_state(p(7, 7)), Cell::Empty);
        assert_eq!(game.cell_state(p(7, 0)), Cell::Empty);
    }

    #[test]
    fn test_cell_vs_cell_state_off_board() {
        let game = QueensGame::new(4);
        assert_eq!(game.cell(p(4, 0)), None);
        assert_eq!(game.cell_state(p(4, 0)), Cell::Invalid);
        assert_eq!(game.cell(p(0, 0)), Some(Cell::Empty));
    }

    #[test]
    fn test_board_snapshot_is_independent() {
        let mut game = QueensGame::new(8);
        game.place_queen(p(3, 3));

        let mut snapshot = game.board();
        snapshot.fill(Cell::Empty);

        assert_eq!(game.cell_state(p(3, 3)), Cell::Queen);
        assert_eq!(game.cell_state(p(3, 0)), Cell::Invalid);
    }

    #[test]
    fn test_toggle() {
        let mut game = QueensGame::new(8);

        assert!(game.toggle(p(4, 4)));
        assert_eq!(game.cell_state(p(4, 4)), Cell::Queen);

        // Attacked cell: no change
        assert!(!game.toggle(p(4, 0)));
        assert_eq!(game.queens_count(), 1);

        assert!(game.toggle(p(4, 4)));
        assert_eq!(game.queens_count(), 0);
        assert_eq!(game.board(), Board::new(8));
    }

    #[test]
    fn test_legal_positions_are_empty_cells() {
        let mut game = QueensGame::new(6);
        game.place_queen(p(0, 1));
        game.place_queen(p(1, 3));

        let legal = game.legal_positions();
        let empty: Vec<_> = game.board().positions(Cell::Empty).collect();
        assert_eq!(legal, empty);
        assert!(!legal.is_empty());
    }

    #[test]
    fn test_queen_positions() {
        let mut game = QueensGame::new(8);
        game.place_queen(p(5, 1));
        game.place_queen(p(0, 4));

        assert_eq!(game.queen_positions().as_slice(), &[p(0, 4), p(5, 1)]);
    }

    #[test]
    fn test_with_queens() {
        let game = QueensGame::with_queens(4, &[p(0, 1), p(1, 3), p(0, 1)]).unwrap();
        assert_eq!(game.queens_count(), 2);

        let err = QueensGame::with_queens(4, &[p(0, 1), p(1, 1)]).unwrap_err();
        assert_eq!(err, PlacementError::Attacked { position: p(1, 1), by: p(0, 1) });
    }

    #[test]
    fn test_single_cell_board() {
        let mut game = QueensGame::new(1);
        assert!(game.is_valid_queen_position(p(0, 0)));
        assert!(game.place_queen(p(0, 0)));
        assert!(game.is_game_complete());
        assert!(game.legal_positions().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut game = QueensGame::new(5);
        game.place_queen(p(0, 0));
        game.place_queen(p(1, 2));

        game.reset_board();
        assert_eq!(game, QueensGame::new(5));
    }

    #[test]
    fn test_display() {
        let mut game = QueensGame::new(3);
        game.place_queen(p(0, 0));
        assert_eq!(game.to_string(), "Qxx\nxx.\nx.x\n");
    }
}
