use std::{io, path::PathBuf};

use slidebox_core::{BoardError, ParseBoardError};
use slidebox_solver::SolverError;

#[derive(
    Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant,
)]
pub(crate) enum CliError {
    #[display("failed to resolve input file path {}: {source}", path.display())]
    #[from(ignore)]
    Resolve { path: PathBuf, source: io::Error },
    #[display("failed to read {}: {source}", path.display())]
    #[from(ignore)]
    Read { path: PathBuf, source: io::Error },
    #[display("malformed puzzle: {_0}")]
    Parse(ParseBoardError),
    #[display("{_0}")]
    Board(BoardError),
    #[display("{_0}")]
    Solver(SolverError),
}
