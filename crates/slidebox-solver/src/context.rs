//! Per-run search state.

use std::{collections::HashSet, time::Duration, time::Instant};

use slidebox_core::Board;

use crate::SolverError;

/// What a search does when it reaches a board without legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display, derive_more::IsVariant)]
pub enum DeadEndPolicy {
    /// Treat the board as an exhausted branch and keep searching.
    #[default]
    #[display("skip")]
    Skip,
    /// Fail the whole run with [`SolverError::NoLegalMoves`].
    #[display("abort")]
    Abort,
}

/// Settings for one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Handling of boards without legal moves.
    pub dead_end: DeadEndPolicy,
    /// Fail with [`SolverError::NodeLimitExceeded`] once more nodes than this are visited.
    pub node_limit: Option<usize>,
}

/// Statistics collected during a search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    nodes_visited: usize,
    elapsed: Duration,
    peak_frontier: usize,
    max_depth: usize,
}

impl SearchStats {
    /// Returns the number of distinct boards the search accepted for expansion.
    #[must_use]
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Returns the wall-clock time between creating the context and collecting the stats.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the largest frontier size seen (breadth-first search only).
    #[must_use]
    pub fn peak_frontier(&self) -> usize {
        self.peak_frontier
    }

    /// Returns the largest number of moves between the root and any expanded board.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// State owned by one search run: configuration, statistics and the closed set.
///
/// The closed set holds canonical boards (see [`Board::normalize`]) already reached,
/// keyed on their full grid content.
///
/// # Examples
///
/// ```
/// use slidebox_core::Board;
/// use slidebox_solver::{BreadthFirst, Search as _, SearchConfig, SearchContext};
///
/// let board = Board::load("3,1,\n2,0,-1,\n")?;
/// let mut ctx = SearchContext::new(SearchConfig::default());
/// let outcome = BreadthFirst.search(&board, &mut ctx)?;
/// assert!(outcome.is_solved());
/// assert_eq!(ctx.stats().nodes_visited(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
    closed: HashSet<Board>,
    started: Instant,
}

impl SearchContext {
    /// Creates an empty context and starts its clock.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
            closed: HashSet::new(),
            started: Instant::now(),
        }
    }

    /// Returns the run configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the statistics collected so far, with the elapsed time brought up to date.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            elapsed: self.started.elapsed(),
            ..self.stats
        }
    }

    /// Returns the number of boards in the closed set.
    #[must_use]
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Returns `true` if `canonical` is already in the closed set.
    #[must_use]
    pub fn is_closed(&self, canonical: &Board) -> bool {
        self.closed.contains(canonical)
    }

    /// Adds a canonical board to the closed set; returns `false` if it was already there.
    pub fn close(&mut self, canonical: Board) -> bool {
        self.closed.insert(canonical)
    }

    /// Removes a canonical board from the closed set.
    pub fn reopen(&mut self, canonical: &Board) {
        self.closed.remove(canonical);
    }

    /// Counts one visited node.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NodeLimitExceeded`] when the count passes the configured limit.
    pub fn record_visit(&mut self) -> Result<(), SolverError> {
        self.stats.nodes_visited += 1;
        match self.config.node_limit {
            Some(limit) if self.stats.nodes_visited > limit => {
                Err(SolverError::NodeLimitExceeded { limit })
            }
            _ => Ok(()),
        }
    }

    /// Applies the dead-end policy to a board `depth` moves from the root.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoLegalMoves`] under [`DeadEndPolicy::Abort`].
    pub fn dead_end(&mut self, depth: usize) -> Result<(), SolverError> {
        match self.config.dead_end {
            DeadEndPolicy::Skip => {
                log::debug!("skipping board without legal moves at depth {depth}");
                Ok(())
            }
            DeadEndPolicy::Abort => Err(SolverError::NoLegalMoves { depth }),
        }
    }

    pub(crate) fn observe_depth(&mut self, depth: usize) {
        self.stats.max_depth = self.stats.max_depth.max(depth);
    }

    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.stats.peak_frontier = self.stats.peak_frontier.max(len);
    }
}
