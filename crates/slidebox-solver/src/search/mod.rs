//! Search strategies over the puzzle state graph.
//!
//! Both strategies share one shape: expand a board with [`Board::all_moves`], apply
//! each move to a clone, canonicalize the clone, and skip it if the canonical form is
//! already in the [`SearchContext`]'s closed set.
//!
//! - [`BreadthFirst`] finds a solution with the fewest moves.
//! - [`DepthFirst`] finds the first solution along its exploration order.
//!
//! [`Board::all_moves`]: slidebox_core::Board::all_moves
//! [`SearchContext`]: crate::SearchContext

pub use self::{breadth_first::*, depth_first::*, traits::*};

mod breadth_first;
mod depth_first;
mod traits;

/// Returns every available strategy.
#[must_use]
pub fn all_strategies() -> Vec<BoxedSearch> {
    vec![Box::new(BreadthFirst), Box::new(DepthFirst::new())]
}
