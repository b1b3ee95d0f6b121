use std::fmt::Debug;

use slidebox_core::{Board, Move};

use crate::{SearchContext, SolverError};

/// The result of a search run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SearchOutcome {
    /// The moves that take the root board to a solved board.
    ///
    /// Piece ids refer to the numbering of the root board passed to the search.
    Solved(Vec<Move>),
    /// Every reachable board was explored without finding a solved one.
    NoSolution,
}

impl SearchOutcome {
    /// Returns the solution moves, if any.
    #[must_use]
    pub fn moves(&self) -> Option<&[Move]> {
        match self {
            Self::Solved(moves) => Some(moves),
            Self::NoSolution => None,
        }
    }
}

/// A strategy for exploring the state space of a puzzle.
///
/// Implementations expand boards with [`Board::all_moves`] and [`Board::with_move`],
/// and prune boards whose canonical form is already in the context's closed set.
pub trait Search: Debug + Send + Sync {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedSearch;

    /// Searches for a move sequence that solves `root`.
    ///
    /// A `root` that is already solved yields an empty solution without visiting any
    /// node.
    ///
    /// # Errors
    ///
    /// Returns an error if the node limit is exceeded or a dead end is reached under
    /// the abort policy.
    fn search(&self, root: &Board, ctx: &mut SearchContext) -> Result<SearchOutcome, SolverError>;
}

/// A boxed search strategy.
pub type BoxedSearch = Box<dyn Search>;

impl Clone for BoxedSearch {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
