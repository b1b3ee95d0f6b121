//! Board position (x, y) coordinate type.

use std::fmt::{self, Display};

/// A cell position on a board.
///
/// `x` is the column (0 = leftmost) and `y` is the row (0 = topmost). Row-major
/// order, used throughout the crate for scans, sorts by `y` first.
///
/// # Examples
///
/// ```
/// use slidebox_core::Position;
///
/// let pos = Position::new(2, 1);
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.y(), 1);
/// assert!(Position::new(0, 1) > Position::new(5, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Creates a position from a column and a row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the row.
    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
