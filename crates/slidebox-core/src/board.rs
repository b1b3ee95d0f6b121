//! The puzzle grid.

use std::{
    collections::BTreeSet,
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{
    BoardError, ParseBoardError, Position,
    cell::{self, Cell, GOAL},
    normalize,
};

/// Width and height of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{width}x{height}")]
pub struct Dimensions {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

/// A sliding block puzzle board.
///
/// A fixed `width` x `height` grid of [`Cell`] values stored in row-major order. The
/// shape never changes after construction; cells change only through
/// [`apply_move`](Self::apply_move), [`normalize`](Self::normalize),
/// [`tile_swap`](Self::tile_swap) and [`copy_from`](Self::copy_from).
///
/// Equality and hashing compare the shape and every cell, so two boards are equal
/// exactly when [`state_eq`](Self::state_eq) would report `Ok(true)`.
///
/// # Text format
///
/// The first line holds `width,height,`; each of the next `height` lines holds `width`
/// comma-separated cell values. Trailing commas, surrounding whitespace and blank
/// lines are tolerated. [`Display`] emits the same format, so parsing the output of
/// `to_string` reproduces an equal board.
///
/// # Examples
///
/// ```
/// use slidebox_core::Board;
///
/// let board: Board = "3,1,\n2,0,-1,\n".parse()?;
/// assert_eq!(board.width(), 3);
/// assert_eq!(board.height(), 1);
/// assert!(!board.is_solved());
/// assert_eq!(board.to_string(), "3,1,\n2,0,-1,\n");
/// # Ok::<(), slidebox_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board from a row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError::ZeroDimension`] if either dimension is zero,
    /// [`ParseBoardError::TooLarge`] if the board cannot be indexed,
    /// [`ParseBoardError::CellCount`] if `cells` does not hold `width * height` values,
    /// and [`ParseBoardError::CellOutOfRange`] if a value is not a valid cell.
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<Cell>,
    ) -> Result<Self, ParseBoardError> {
        let (len, max_piece) = checked_shape(width, height)?;
        if cells.len() != len {
            return Err(ParseBoardError::CellCount {
                expected: len,
                found: cells.len(),
            });
        }
        if let Some(&value) = cells
            .iter()
            .find(|&&value| !(GOAL..=max_piece).contains(&value))
        {
            return Err(ParseBoardError::CellOutOfRange { line: 0, value });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parses a board and brings it into canonical form.
    ///
    /// This is how puzzles enter a search: a freshly loaded board is normalized once.
    /// Use [`str::parse`] instead to keep the piece ids exactly as written.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseBoardError`] if `text` is not a well-formed board.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidebox_core::Board;
    ///
    /// let board = Board::load("2,2,\n9,9,\n2,7,\n")?;
    /// assert_eq!(board.to_string(), "2,2,\n3,3,\n2,4,\n");
    /// # Ok::<(), slidebox_core::ParseBoardError>(())
    /// ```
    pub fn load(text: &str) -> Result<Self, ParseBoardError> {
        let mut board = text.parse::<Self>()?;
        board.normalize();
        Ok(board)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the board shape.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the cell at `pos`, or `None` if it lies outside the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos).then(|| self.cells[self.index_of(pos)])
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    /// Returns the cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Iterates over the positions occupied by `piece`, in row-major order.
    pub fn cells_of(&self, piece: Cell) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&pos| self[pos] == piece)
    }

    /// Returns the ids of every piece on the board, master included, in ascending order.
    #[must_use]
    pub fn pieces(&self) -> BTreeSet<Cell> {
        self.cells
            .iter()
            .copied()
            .filter(|&value| cell::is_piece(value))
            .collect()
    }

    /// Returns the number of uncovered goal cells.
    #[must_use]
    pub fn goal_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value == GOAL).count()
    }

    /// Returns `true` if no goal cell remains uncovered.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidebox_core::Board;
    ///
    /// let board: Board = "1,1,\n2,\n".parse()?;
    /// assert!(board.is_solved());
    /// # Ok::<(), slidebox_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.cells.contains(&GOAL)
    }

    /// Compares two boards cell by cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DimensionMismatch`] if the boards differ in shape.
    pub fn state_eq(&self, other: &Self) -> Result<bool, BoardError> {
        self.check_same_shape(other)?;
        Ok(self.cells == other.cells)
    }

    /// Overwrites every cell of this board with the cells of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DimensionMismatch`] if the boards differ in shape; the
    /// board is left untouched in that case.
    pub fn copy_from(&mut self, source: &Self) -> Result<(), BoardError> {
        self.check_same_shape(source)?;
        self.cells.copy_from_slice(&source.cells);
        Ok(())
    }

    fn check_same_shape(&self, other: &Self) -> Result<(), BoardError> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        } else {
            Err(BoardError::DimensionMismatch {
                expected: self.dimensions(),
                found: other.dimensions(),
            })
        }
    }

    pub(crate) fn index_of(&self, pos: Position) -> usize {
        pos.y() * self.width + pos.x()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "position {pos} is outside the board");
        &self.cells[self.index_of(pos)]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{},{},", self.width, self.height)?;
        for row in self.rows() {
            for value in row {
                write!(f, "{value},")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Validates a board shape, returning its cell count and the largest allowed piece id.
fn checked_shape(width: usize, height: usize) -> Result<(usize, Cell), ParseBoardError> {
    let dimensions = Dimensions { width, height };
    if width == 0 || height == 0 {
        return Err(ParseBoardError::ZeroDimension { dimensions });
    }
    let len = width
        .checked_mul(height)
        .ok_or(ParseBoardError::TooLarge { dimensions })?;
    let max_piece =
        normalize::max_piece_id(len).ok_or(ParseBoardError::TooLarge { dimensions })?;
    Ok((len, max_piece))
}

/// Splits a comma-delimited line into trimmed tokens, tolerating one trailing comma.
fn tokens(line: &str) -> Vec<&str> {
    let mut tokens = line.split(',').map(str::trim).collect::<Vec<_>>();
    if tokens.len() > 1 && tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    tokens
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (header_line, header) = lines.next().ok_or(ParseBoardError::MissingHeader)?;
        let invalid_header = || ParseBoardError::InvalidHeader {
            line: header_line,
            text: header.to_owned(),
        };
        let [width, height] = tokens(header)[..] else {
            return Err(invalid_header());
        };
        let width = width.parse::<usize>().map_err(|_| invalid_header())?;
        let height = height.parse::<usize>().map_err(|_| invalid_header())?;
        let (_, max_piece) = checked_shape(width, height)?;

        // grown row by row; the header alone is not trusted for an allocation
        let mut cells = Vec::new();
        let mut rows = 0;
        for (line, text) in lines {
            rows += 1;
            if rows > height {
                continue;
            }
            let row = tokens(text);
            if row.len() != width {
                return Err(ParseBoardError::RowLength {
                    line,
                    expected: width,
                    found: row.len(),
                });
            }
            for token in row {
                let value = token
                    .parse::<Cell>()
                    .map_err(|_| ParseBoardError::InvalidCell {
                        line,
                        token: token.to_owned(),
                    })?;
                if !(GOAL..=max_piece).contains(&value) {
                    return Err(ParseBoardError::CellOutOfRange { line, value });
                }
                cells.push(value);
            }
        }
        if rows != height {
            return Err(ParseBoardError::RowCount {
                expected: height,
                found: rows,
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CLEAR, MASTER, WALL};

    #[test]
    fn test_parse_simple_board() {
        let board: Board = "3,1,\n2,0,-1,\n".parse().unwrap();
        assert_eq!(board.dimensions(), Dimensions { width: 3, height: 1 });
        assert_eq!(board.cells(), &[MASTER, CLEAR, GOAL]);
        assert_eq!(board.goal_count(), 1);
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_missing_trailing_commas() {
        let board: Board = "
            2, 2
            1, 2,
            0,-1

        "
        .parse()
        .unwrap();
        assert_eq!(board.cells(), &[WALL, MASTER, CLEAR, GOAL]);
    }

    #[test]
    fn test_display_round_trip() {
        let text = "4,2,\n1,2,2,1,\n-1,0,5,5,\n";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_string(), text);
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Board>(), Err(ParseBoardError::MissingHeader));
        assert!("3,\n0,0,0,\n".parse::<Board>().unwrap_err().is_invalid_header());
        assert!("a,1,\n0,\n".parse::<Board>().unwrap_err().is_invalid_header());
        assert!("0,1,\n".parse::<Board>().unwrap_err().is_zero_dimension());
        assert_eq!(
            "2,1,\n0,x,\n".parse::<Board>(),
            Err(ParseBoardError::InvalidCell {
                line: 2,
                token: "x".to_owned()
            })
        );
        assert_eq!(
            "2,1,\n0,-2,\n".parse::<Board>(),
            Err(ParseBoardError::CellOutOfRange { line: 2, value: -2 })
        );
        assert_eq!(
            "2,1,\n0,0,0,\n".parse::<Board>(),
            Err(ParseBoardError::RowLength {
                line: 2,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            "2,2,\n0,0,\n".parse::<Board>(),
            Err(ParseBoardError::RowCount {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            "1,1,\n0,\n0,\n".parse::<Board>(),
            Err(ParseBoardError::RowCount {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_parse_rejects_oversized_headers() {
        assert_eq!(
            "100000000000,100000000000,\n0,\n".parse::<Board>(),
            Err(ParseBoardError::TooLarge {
                dimensions: Dimensions {
                    width: 100_000_000_000,
                    height: 100_000_000_000
                }
            })
        );
        assert_eq!(
            "1000000,1000000,\n0,\n".parse::<Board>(),
            Err(ParseBoardError::RowLength {
                line: 2,
                expected: 1_000_000,
                found: 1
            })
        );
        assert!(
            Board::from_cells(usize::MAX, 2, vec![])
                .unwrap_err()
                .is_too_large()
        );
    }

    #[test]
    fn test_piece_ids_must_be_renumberable() {
        let max = Cell::MAX - 4;
        let board: Board = format!("1,1,\n{max},\n").parse().unwrap();
        assert_eq!(board.cells(), &[max]);
        assert_eq!(
            "1,1,\n9223372036854775807,\n".parse::<Board>(),
            Err(ParseBoardError::CellOutOfRange {
                line: 2,
                value: Cell::MAX
            })
        );
        assert!(Board::load("1,1,\n9223372036854775807,\n").is_err());
        assert!(
            Board::from_cells(2, 1, vec![0, Cell::MAX - 4])
                .unwrap_err()
                .is_cell_out_of_range()
        );
    }

    #[test]
    fn test_from_cells_validates() {
        assert!(Board::from_cells(2, 1, vec![0, 2]).is_ok());
        assert!(Board::from_cells(0, 1, vec![]).unwrap_err().is_zero_dimension());
        assert!(Board::from_cells(2, 2, vec![0, 2]).unwrap_err().is_cell_count());
        assert!(Board::from_cells(1, 1, vec![-5]).unwrap_err().is_cell_out_of_range());
    }

    #[test]
    fn test_state_eq_and_copy_from_reject_other_shapes() {
        let wide: Board = "2,1,\n2,0,\n".parse().unwrap();
        let tall: Board = "1,2,\n2,\n0,\n".parse().unwrap();
        assert!(wide.state_eq(&wide.clone()).unwrap());
        assert!(wide.state_eq(&tall).unwrap_err().is_dimension_mismatch());

        let mut target = wide.clone();
        assert!(target.copy_from(&tall).is_err());
        assert_eq!(target, wide);

        let other: Board = "2,1,\n0,2,\n".parse().unwrap();
        target.copy_from(&other).unwrap();
        assert_eq!(target, other);
        assert!(!wide.state_eq(&other).unwrap());
    }

    #[test]
    fn test_pieces_and_cells_of() {
        let board: Board = "3,2,\n5,5,2,\n-1,1,4,\n".parse().unwrap();
        assert_eq!(board.pieces().into_iter().collect::<Vec<_>>(), [2, 4, 5]);
        assert_eq!(
            board.cells_of(5).collect::<Vec<_>>(),
            [Position::new(0, 0), Position::new(1, 0)]
        );
        assert_eq!(board.get(Position::new(2, 1)), Some(4));
        assert_eq!(board.get(Position::new(3, 0)), None);
    }

    #[test]
    fn test_solved_iff_no_goal() {
        let board: Board = "2,1,\n2,-1,\n".parse().unwrap();
        assert!(!board.is_solved());
        let board: Board = "2,1,\n0,2,\n".parse().unwrap();
        assert!(board.is_solved());
    }
}
