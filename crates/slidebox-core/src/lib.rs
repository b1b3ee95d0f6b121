//! Core data structures for sliding block puzzles.
//!
//! This crate provides the board representation, move legality and application, and
//! the canonicalization routine that search drivers use to recognise repeated states.
//!
//! # Overview
//!
//! - [`cell`]: the reserved cell values ([`GOAL`](cell::GOAL), [`CLEAR`](cell::CLEAR),
//!   [`WALL`](cell::WALL), [`MASTER`](cell::MASTER)) and piece ids
//! - [`Board`]: the fixed-size grid, its text format and comparisons
//! - [`Direction`], [`DirectionSet`] and [`Move`]: one-cell translations of a piece
//! - [`Board::moves_for_piece`], [`Board::all_moves`], [`Board::apply_move`] and
//!   [`Board::with_move`]: move legality and application
//! - [`Board::normalize`]: canonical piece numbering
//!
//! # Examples
//!
//! ```
//! use slidebox_core::{Board, Direction, Move};
//!
//! let board = Board::load("3,1,\n2,0,-1,\n")?;
//! let moves = board.all_moves();
//! assert_eq!(moves, [Move::new(2, Direction::Right)]);
//!
//! let next = board.with_move(moves[0])?.with_move(moves[0])?;
//! assert!(next.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    board::{Board, Dimensions},
    cell::Cell,
    direction::{Direction, DirectionSet, Move},
    error::*,
    position::Position,
};

mod board;
pub mod cell;
mod direction;
mod error;
mod moves;
mod normalize;
mod position;

#[cfg(test)]
mod testing;
