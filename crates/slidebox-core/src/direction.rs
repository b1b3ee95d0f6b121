//! Move directions and moves.

use crate::Cell;

/// One of the four directions a piece can be translated in.
///
/// The declaration order (`Up`, `Down`, `Left`, `Right`) is the order in which moves
/// are enumerated for each piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Direction {
    /// Towards row 0.
    #[display("up")]
    Up,
    /// Away from row 0.
    #[display("down")]
    Down,
    /// Towards column 0.
    #[display("left")]
    Left,
    /// Away from column 0.
    #[display("right")]
    Right,
}

impl Direction {
    /// All directions in enumeration order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(dx, dy)` step of a one-cell translation.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidebox_core::Direction;
    ///
    /// assert_eq!(Direction::Up.offset(), (0, -1));
    /// assert_eq!(Direction::Right.offset(), (1, 0));
    /// ```
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the direction that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

bitflags::bitflags! {
    /// A set of [`Direction`]s, used for the legal directions of one piece.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidebox_core::{Direction, DirectionSet};
    ///
    /// let set = DirectionSet::UP | DirectionSet::RIGHT;
    /// assert!(set.contains(Direction::Up.into()));
    /// assert_eq!(
    ///     set.directions().collect::<Vec<_>>(),
    ///     [Direction::Up, Direction::Right]
    /// );
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DirectionSet: u8 {
        /// [`Direction::Up`].
        const UP = 1 << 0;
        /// [`Direction::Down`].
        const DOWN = 1 << 1;
        /// [`Direction::Left`].
        const LEFT = 1 << 2;
        /// [`Direction::Right`].
        const RIGHT = 1 << 3;
    }
}

impl DirectionSet {
    /// Iterates over the contained directions in enumeration order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.contains(direction.into()))
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::UP,
            Direction::Down => Self::DOWN,
            Direction::Left => Self::LEFT,
            Direction::Right => Self::RIGHT,
        }
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, direction| set | direction.into())
    }
}

/// Translation of every cell of one piece by one step.
///
/// Displays as `(piece, direction)`, e.g. `(2, right)`.
///
/// # Examples
///
/// ```
/// use slidebox_core::{Direction, Move};
///
/// let mv = Move::new(2, Direction::Right);
/// assert_eq!(mv.to_string(), "(2, right)");
/// assert_eq!(mv.inverse(), Move::new(2, Direction::Left));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({piece}, {direction})")]
pub struct Move {
    /// Id of the piece being moved.
    pub piece: Cell,
    /// Direction of the translation.
    pub direction: Direction,
}

impl Move {
    /// Creates a move.
    #[must_use]
    pub const fn new(piece: Cell, direction: Direction) -> Self {
        Self { piece, direction }
    }

    /// Returns the move that translates the same piece back.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            piece: self.piece,
            direction: self.direction.opposite(),
        }
    }
}
