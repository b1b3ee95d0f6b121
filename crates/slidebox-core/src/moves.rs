//! Move legality and application.
//!
//! A piece may be translated by one cell in a direction when, for every cell it
//! occupies, the neighbouring cell in that direction is
//!
//! - on the board,
//! - and either [`CLEAR`], part of the same piece, or a [`GOAL`] being entered by the
//!   [`MASTER`].
//!
//! A single offending cell vetoes the direction for the whole piece.

use std::collections::BTreeMap;

use crate::{
    Board, BoardError, Direction, DirectionSet, Move, Position,
    cell::{self, CLEAR, Cell, GOAL, MASTER},
};

impl Board {
    /// Returns the neighbour of `pos` in `direction`, or `None` if it lies off the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidebox_core::{Board, Direction, Position};
    ///
    /// let board: Board = "2,2,\n0,0,\n0,2,\n".parse()?;
    /// assert_eq!(
    ///     board.neighbor(Position::new(0, 0), Direction::Right),
    ///     Some(Position::new(1, 0))
    /// );
    /// assert_eq!(board.neighbor(Position::new(0, 0), Direction::Up), None);
    /// # Ok::<(), slidebox_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.offset();
        let next = Position::new(
            pos.x().checked_add_signed(dx)?,
            pos.y().checked_add_signed(dy)?,
        );
        self.contains(next).then_some(next)
    }

    /// Returns `true` if a cell of `piece` may step onto `target`.
    fn accepts(&self, piece: Cell, target: Option<Position>) -> bool {
        let Some(target) = target else {
            return false;
        };
        match self[target] {
            CLEAR => true,
            GOAL => piece == MASTER,
            value => value == piece,
        }
    }

    /// Returns the directions `piece` can legally be translated in.
    ///
    /// A piece that does not appear on the board has no legal directions.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidebox_core::{Board, DirectionSet};
    ///
    /// let board: Board = "3,1,\n2,0,-1,\n".parse()?;
    /// assert_eq!(board.moves_for_piece(2), DirectionSet::RIGHT);
    /// # Ok::<(), slidebox_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn moves_for_piece(&self, piece: Cell) -> DirectionSet {
        if !cell::is_piece(piece) {
            return DirectionSet::empty();
        }
        let mut legal = DirectionSet::empty();
        let mut found = false;
        for pos in self.cells_of(piece) {
            if !found {
                legal = DirectionSet::all();
                found = true;
            }
            for direction in legal.directions() {
                if !self.accepts(piece, self.neighbor(pos, direction)) {
                    legal.remove(direction.into());
                }
            }
            if legal.is_empty() {
                break;
            }
        }
        legal
    }

    /// Returns every legal move on the board.
    ///
    /// Moves are ordered by ascending piece id (the master first), then by direction in
    /// [`Direction::ALL`] order.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidebox_core::{Board, Direction, Move};
    ///
    /// let board: Board = "3,1,\n3,0,2,\n".parse()?;
    /// assert_eq!(
    ///     board.all_moves(),
    ///     [Move::new(2, Direction::Left), Move::new(3, Direction::Right)]
    /// );
    /// # Ok::<(), slidebox_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn all_moves(&self) -> Vec<Move> {
        let mut legal = BTreeMap::<Cell, DirectionSet>::new();
        for pos in self.positions() {
            let piece = self[pos];
            if !cell::is_piece(piece) {
                continue;
            }
            let directions = legal.entry(piece).or_insert(DirectionSet::all());
            for direction in directions.directions() {
                if !self.accepts(piece, self.neighbor(pos, direction)) {
                    directions.remove(direction.into());
                }
            }
        }
        legal
            .into_iter()
            .flat_map(|(piece, directions)| {
                directions
                    .directions()
                    .map(move |direction| Move::new(piece, direction))
            })
            .collect()
    }

    /// Returns `true` if `mv` can be applied to this board.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.moves_for_piece(mv.piece).contains(mv.direction.into())
    }

    /// Translates a piece by one cell in place.
    ///
    /// Cells are visited leading edge first (bottom rows first for [`Direction::Down`],
    /// rightmost columns first for [`Direction::Right`], and so on), so every
    /// destination cell has already been vacated or is outside the piece when it is
    /// written. When the master enters a goal cell the goal is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IllegalMove`] if the move is not legal; the board is left
    /// untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidebox_core::{Board, Direction, Move};
    ///
    /// let mut board: Board = "2,1,\n2,-1,\n".parse()?;
    /// board.apply_move(Move::new(2, Direction::Right))?;
    /// assert_eq!(board.to_string(), "2,1,\n0,2,\n");
    /// assert!(board.is_solved());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.is_legal(mv) {
            return Err(BoardError::IllegalMove { mv });
        }
        for pos in self.sweep(mv.direction) {
            if self[pos] != mv.piece {
                continue;
            }
            // legality guarantees an in-bounds destination
            let Some(dest) = self.neighbor(pos, mv.direction) else {
                continue;
            };
            let (src, dest) = (self.index_of(pos), self.index_of(dest));
            let cells = self.cells_mut();
            cells[dest] = mv.piece;
            cells[src] = CLEAR;
        }
        Ok(())
    }

    /// Returns a copy of the board with `mv` applied, leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IllegalMove`] if the move is not legal.
    pub fn with_move(&self, mv: Move) -> Result<Self, BoardError> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }

    /// Every position of the board, leading edge of `direction` first.
    fn sweep(&self, direction: Direction) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width(), self.height());
        (0..width * height).map(move |i| match direction {
            Direction::Up => Position::new(i % width, i / width),
            Direction::Down => Position::new(i % width, height - 1 - i / width),
            Direction::Left => Position::new(i / height, i % height),
            Direction::Right => Position::new(width - 1 - i / height, i % height),
        })
    }
}
