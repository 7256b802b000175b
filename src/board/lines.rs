//! Queen attack geometry.
//!
//! A queen attacks every cell that shares its row, its column, its principal
//! diagonal (top-left to bottom-right) or its anti-diagonal (top-right to
//! bottom-left), over the full extent of the board.

use crate::core::Position;

/// Step directions of the eight queen rays: row, column, principal diagonal, anti-diagonal.
const DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

/// Iterate every on-board position attacked by a queen standing at `from`.
///
/// `from` itself is not yielded. Yields nothing when `from` is off the board.
///
/// ```
/// use queens_engine::board::attack_lines;
/// use queens_engine::core::Position;
///
/// // A corner queen on 4x4 sees 3 row + 3 column + 3 diagonal cells.
/// assert_eq!(attack_lines(4, Position::new(0, 0)).count(), 9);
/// ```
pub fn attack_lines(size: usize, from: Position) -> impl Iterator<Item = Position> {
    let rays: &'static [(i32, i32)] = if from.in_bounds(size) { &DIRECTIONS } else { &[] };

    rays.iter().flat_map(move |&(dr, dc)| {
        std::iter::successors(Some(from), move |p| Some(Position::new(p.row + dr, p.col + dc)))
            .skip(1)
            .take_while(move |p| p.in_bounds(size))
    })
}

/// Check whether queens at `a` and `b` attack each other.
///
/// A position does not attack itself.
#[must_use]
pub fn attacks(a: Position, b: Position) -> bool {
    a != b
        && (a.row == b.row
            || a.col == b.col
            || a.diagonal() == b.diagonal()
            || a.anti_diagonal() == b.anti_diagonal())
}
