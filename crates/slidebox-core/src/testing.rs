//! Test utilities for move legality and application.
//!
//! This module provides [`BoardTester`], a fluent harness that tracks the initial and
//! current board while moves are applied, so tests read as a sequence of moves and
//! expectations.

use crate::{Board, Cell, Direction, DirectionSet, Move};

/// A test harness for move generation and application.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct BoardTester {
    initial: Board,
    current: Board,
}

impl BoardTester {
    /// Creates a new tester from a board in text form.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a board.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let initial = s.parse::<Board>().unwrap();
        let current = initial.clone();
        Self { initial, current }
    }

    /// Applies a move, which must be legal.
    #[track_caller]
    pub fn apply(mut self, piece: Cell, direction: Direction) -> Self {
        let mv = Move::new(piece, direction);
        if let Err(err) = self.current.apply_move(mv) {
            panic!("failed to apply {mv}: {err}\nboard:\n{}", self.current);
        }
        self
    }

    /// Asserts that a move is rejected and leaves the board unchanged.
    #[track_caller]
    pub fn assert_rejected(self, piece: Cell, direction: Direction) -> Self {
        let mv = Move::new(piece, direction);
        let mut board = self.current.clone();
        let result = board.apply_move(mv);
        assert!(
            result.is_err_and(|err| err.is_illegal_move()),
            "expected {mv} to be rejected\nboard:\n{}",
            self.current
        );
        assert_eq!(board, self.current, "rejected move {mv} modified the board");
        self
    }

    /// Asserts the legal directions of one piece.
    #[track_caller]
    pub fn assert_moves(self, piece: Cell, expected: DirectionSet) -> Self {
        let actual = self.current.moves_for_piece(piece);
        assert_eq!(
            actual, expected,
            "legal directions of piece {piece}\nboard:\n{}",
            self.current
        );
        self
    }

    /// Asserts the full ordered move list.
    #[track_caller]
    pub fn assert_all_moves(self, expected: &[Move]) -> Self {
        let actual = self.current.all_moves();
        assert_eq!(actual, expected, "all moves\nboard:\n{}", self.current);
        self
    }

    /// Asserts the current board against its text form.
    #[track_caller]
    pub fn assert_board(self, expected: &str) -> Self {
        assert_eq!(self.current.to_string(), expected);
        self
    }

    /// Asserts that the current board has no goal cell left.
    #[track_caller]
    pub fn assert_solved(self) -> Self {
        assert!(self.current.is_solved(), "board is not solved:\n{}", self.current);
        self
    }

    /// Asserts that the current board equals the initial board.
    #[track_caller]
    pub fn assert_restored(self) -> Self {
        assert_eq!(
            self.current, self.initial,
            "board was not restored:\n{}",
            self.current
        );
        self
    }
}
