//! State-space search for sliding block puzzles.
//!
//! This crate explores the graph of boards reachable from a starting [`Board`] by
//! legal moves, pruning repeated states through their canonical form.
//!
//! # Overview
//!
//! - [`Solver`]: runs one [`Search`] strategy with a [`SearchConfig`] and reports the
//!   outcome together with [`SearchStats`]
//! - [`search`]: the [`Search`] trait with [`BreadthFirst`] and [`DepthFirst`]
//! - [`SearchContext`]: closed set, statistics and configuration of one run
//! - [`RandomWalk`]: plays random legal moves, for demonstrations and smoke tests
//! - [`replay`]: applies a solution to its root board
//!
//! # Examples
//!
//! ```
//! use slidebox_core::Board;
//! use slidebox_solver::{SearchOutcome, Solver};
//!
//! let board = Board::load("3,1,\n2,0,-1,\n")?;
//! let (outcome, stats) = Solver::breadth_first().solve(&board)?;
//! match outcome {
//!     SearchOutcome::Solved(moves) => println!("solved in {} moves", moves.len()),
//!     SearchOutcome::NoSolution => println!("no solution"),
//! }
//! println!("visited {} nodes", stats.nodes_visited());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use slidebox_core::Board;

pub use self::{
    context::*,
    error::*,
    replay::replay,
    search::{BoxedSearch, BreadthFirst, DepthFirst, Search, SearchOutcome},
    walk::{RandomWalk, WalkStep},
};

mod context;
mod error;
mod replay;
pub mod search;
pub mod walk;

/// Runs a search strategy on a board.
///
/// # Examples
///
/// ```
/// use slidebox_core::Board;
/// use slidebox_solver::{DepthFirst, SearchConfig, Solver};
///
/// let solver = Solver::new(Box::new(DepthFirst::new())).with_config(SearchConfig {
///     node_limit: Some(10_000),
///     ..SearchConfig::default()
/// });
/// let (outcome, _stats) = solver.solve(&Board::load("2,1,\n2,-1,\n")?)?;
/// assert!(outcome.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    search: BoxedSearch,
    config: SearchConfig,
}

impl Solver {
    /// Creates a solver with the default configuration.
    #[must_use]
    pub fn new(search: BoxedSearch) -> Self {
        Self {
            search,
            config: SearchConfig::default(),
        }
    }

    /// Creates a breadth-first solver.
    #[must_use]
    pub fn breadth_first() -> Self {
        Self::new(Box::new(BreadthFirst))
    }

    /// Creates a depth-first solver.
    #[must_use]
    pub fn depth_first() -> Self {
        Self::new(Box::new(DepthFirst::new()))
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the strategy.
    #[must_use]
    pub fn search(&self) -> &dyn Search {
        self.search.as_ref()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches for a solution of `root` in a fresh [`SearchContext`].
    ///
    /// `root` is expected in canonical form, as produced by [`Board::load`]. Piece ids
    /// in the returned moves refer to `root`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError`] if the strategy fails; see [`Search::search`].
    pub fn solve(&self, root: &Board) -> Result<(SearchOutcome, SearchStats), SolverError> {
        log::debug!(
            "starting {} search on a {} board, config={:?}",
            self.search.name(),
            root.dimensions(),
            self.config
        );
        let mut ctx = SearchContext::new(self.config.clone());
        let outcome = self.search.search(root, &mut ctx);
        let stats = ctx.stats();
        match &outcome {
            Ok(SearchOutcome::Solved(moves)) => log::debug!(
                "{} search solved in {} moves: {:?}",
                self.search.name(),
                moves.len(),
                stats
            ),
            Ok(SearchOutcome::NoSolution) => {
                log::debug!("{} search exhausted: {:?}", self.search.name(), stats);
            }
            Err(err) => log::debug!("{} search failed: {err}", self.search.name()),
        }
        Ok((outcome?, stats))
    }
}
