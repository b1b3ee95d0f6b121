//! Cell values and their reserved meanings.
//!
//! A board cell is a signed integer. Four values are reserved; every value at or above
//! [`FIRST_PIECE`] names an ordinary piece, and all cells sharing a value move together.
//!
//! | value | meaning |
//! |---|---|
//! | [`GOAL`] (`-1`) | empty cell the master piece must cover |
//! | [`CLEAR`] (`0`) | empty, traversable cell |
//! | [`WALL`] (`1`) | permanently blocked cell |
//! | [`MASTER`] (`2`) | a cell of the master piece |
//! | `>= 3` | a cell of an ordinary piece |

/// The value stored in one board cell.
pub type Cell = i64;

/// An empty cell the master piece must cover.
pub const GOAL: Cell = -1;

/// An empty, traversable cell.
pub const CLEAR: Cell = 0;

/// A permanently blocked cell.
pub const WALL: Cell = 1;

/// A cell of the master piece.
pub const MASTER: Cell = 2;

/// The smallest id of an ordinary piece, and the first id handed out by normalization.
pub const FIRST_PIECE: Cell = 3;

/// Returns `true` if `value` belongs to a movable piece (the master or an ordinary piece).
///
/// # Examples
///
/// ```
/// use slidebox_core::cell;
///
/// assert!(cell::is_piece(cell::MASTER));
/// assert!(cell::is_piece(7));
/// assert!(!cell::is_piece(cell::WALL));
/// assert!(!cell::is_piece(cell::GOAL));
/// ```
#[must_use]
pub const fn is_piece(value: Cell) -> bool {
    value >= MASTER
}

/// Returns `true` if `value` belongs to an ordinary (non-master) piece.
#[must_use]
pub const fn is_ordinary_piece(value: Cell) -> bool {
    value >= FIRST_PIECE
}
