use slidebox_core::BoardError;

/// Errors that abort a search run.
///
/// Running out of states is not an error; it is reported as
/// [`SearchOutcome::NoSolution`](crate::SearchOutcome::NoSolution).
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum SolverError {
    /// A board without legal moves was reached under [`DeadEndPolicy::Abort`].
    ///
    /// [`DeadEndPolicy::Abort`]: crate::DeadEndPolicy::Abort
    #[display("no legal moves from a board {depth} moves from the start")]
    #[from(ignore)]
    NoLegalMoves {
        /// Number of moves between the root and the stuck board.
        depth: usize,
    },
    /// The node-visited counter went past [`SearchConfig::node_limit`].
    ///
    /// [`SearchConfig::node_limit`]: crate::SearchConfig::node_limit
    #[display("search visited more than {limit} nodes")]
    #[from(ignore)]
    NodeLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
    /// A board operation failed.
    #[display("board error: {_0}")]
    Board(#[from] BoardError),
}
