use crate::{Cell, Dimensions, Move};

/// Errors produced while reading a board from its text form.
///
/// This is the "malformed input" failure: no board is produced when parsing fails.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum ParseBoardError {
    /// The input contained no `width,height,` header line.
    #[display("missing `width,height,` header")]
    MissingHeader,
    /// The header line could not be read as two dimensions.
    #[display("line {line}: invalid board header `{text}`")]
    InvalidHeader {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },
    /// One of the dimensions was zero.
    #[display("board dimensions must be non-zero, got {dimensions}")]
    ZeroDimension {
        /// The dimensions given by the header.
        dimensions: Dimensions,
    },
    /// The board has more cells than can be indexed and renumbered.
    #[display("board dimensions {dimensions} are too large")]
    TooLarge {
        /// The requested dimensions.
        dimensions: Dimensions,
    },
    /// A cell token was not a signed integer.
    #[display("line {line}: invalid cell value `{token}`")]
    InvalidCell {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A cell value lies below the goal marker, or is a piece id too large to renumber.
    #[display("line {line}: cell value {value} is not a valid cell")]
    CellOutOfRange {
        /// 1-based line number, or `0` when the board was not read from text.
        line: usize,
        /// The offending value.
        value: Cell,
    },
    /// A row did not contain exactly `width` cells.
    #[display("line {line}: expected {expected} cells, found {found}")]
    RowLength {
        /// 1-based line number.
        line: usize,
        /// The board width.
        expected: usize,
        /// Number of cells on the line.
        found: usize,
    },
    /// The number of rows did not match the header height.
    #[display("expected {expected} rows, found {found}")]
    RowCount {
        /// The board height.
        expected: usize,
        /// Number of non-blank rows after the header.
        found: usize,
    },
    /// A flat cell buffer did not hold `width * height` cells.
    #[display("expected {expected} cells, found {found}")]
    CellCount {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },
}

/// Errors produced by board operations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum BoardError {
    /// Two boards of different shape were compared or copied.
    #[display("board dimensions differ: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimensions of the receiving board.
        expected: Dimensions,
        /// Dimensions of the other board.
        found: Dimensions,
    },
    /// The move cannot be applied to the board.
    #[display("illegal move {mv}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
    },
}
