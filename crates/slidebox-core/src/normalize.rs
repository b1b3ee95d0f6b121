//! Canonical piece numbering.
//!
//! Piece ids carry no meaning beyond grouping cells, so two boards that differ only
//! in how their ordinary pieces are numbered describe the same puzzle state.
//! [`Board::normalize`] renumbers ordinary pieces so that ids are handed out from
//! [`FIRST_PIECE`] upwards, in order of each piece's row-major-first cell. After
//! normalization such boards compare equal.
//!
//! The renumbering runs in three row-major passes:
//!
//! 1. every ordinary id is displaced above the largest anchor `index + FIRST_PIECE`,
//! 2. each piece is renamed to the anchor of its first cell,
//! 3. anchors are compacted to consecutive ids starting at [`FIRST_PIECE`].
//!
//! Anchors grow with the scan and compacted ids never exceed the anchor they replace,
//! so no pass ever merges two pieces.

use crate::{
    Board,
    cell::{self, Cell, FIRST_PIECE},
};

/// The id a piece receives in pass 2 when its first cell sits at row-major `index`.
#[expect(clippy::cast_possible_wrap)]
fn anchor(index: usize) -> Cell {
    index as Cell + FIRST_PIECE
}

/// The largest piece id pass 1 can displace on a board of `len` cells without
/// overflowing, or `None` if no board of that size can be renumbered.
pub(crate) fn max_piece_id(len: usize) -> Option<Cell> {
    let displacement = Cell::try_from(len).ok()?.checked_add(FIRST_PIECE)?;
    Some(Cell::MAX - displacement)
}

impl Board {
    /// Renumbers ordinary pieces into canonical form in place.
    ///
    /// Goal, clear, wall and master cells are never touched. Normalizing twice is the
    /// same as normalizing once.
    ///
    /// Boards built by parsing or [`Board::from_cells`] only hold ids that can be
    /// renumbered; ids introduced through [`tile_swap`](Self::tile_swap) must stay within
    /// the same bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidebox_core::Board;
    ///
    /// let mut a: Board = "3,2,\n8,2,0,\n5,5,8,\n".parse()?;
    /// let mut b: Board = "3,2,\n4,2,0,\n9,9,4,\n".parse()?;
    /// a.normalize();
    /// b.normalize();
    /// assert_eq!(a, b);
    /// assert_eq!(a.to_string(), "3,2,\n3,2,0,\n4,4,3,\n");
    /// # Ok::<(), slidebox_core::ParseBoardError>(())
    /// ```
    pub fn normalize(&mut self) {
        let len = self.cells().len();
        let displacement = anchor(len);

        for value in self.cells_mut() {
            if cell::is_ordinary_piece(*value) {
                *value += displacement;
            }
        }

        for index in 0..len {
            let value = self.cells()[index];
            let target = anchor(index);
            if cell::is_ordinary_piece(value) && value > target {
                self.tile_swap(value, target);
            }
        }

        let mut next = FIRST_PIECE;
        for index in 0..len {
            let target = anchor(index);
            if self.cells()[index] == target {
                self.tile_swap(target, next);
                next += 1;
            }
        }
    }

    /// Returns a normalized copy of the board.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut board = self.clone();
        board.normalize();
        board
    }

    /// Rewrites every cell holding `old` to hold `new`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidebox_core::Board;
    ///
    /// let mut board: Board = "3,1,\n7,0,7,\n".parse()?;
    /// board.tile_swap(7, 4);
    /// assert_eq!(board.to_string(), "3,1,\n4,0,4,\n");
    /// # Ok::<(), slidebox_core::ParseBoardError>(())
    /// ```
    pub fn tile_swap(&mut self, old: Cell, new: Cell) {
        for value in self.cells_mut() {
            if *value == old {
                *value = new;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        Board, Direction, Move,
        cell::{CLEAR, GOAL, MASTER, WALL},
    };

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_special_cells_untouched() {
        let text = "4,1,\n-1,0,1,2,\n";
        assert_eq!(board(text).normalized().to_string(), text);
    }

    #[test]
    fn test_ids_follow_first_cell_order() {
        let normalized = board("3,3,\n0,9,9,\n12,2,9,\n12,4,4,\n").normalized();
        assert_eq!(normalized.to_string(), "3,3,\n0,3,3,\n4,2,3,\n4,5,5,\n");
    }

    #[test]
    fn test_ids_near_displacement_boundary() {
        // ids equal to and just above width*height + 3
        let normalized = board("2,2,\n8,7,\n7,6,\n").normalized();
        assert_eq!(normalized.to_string(), "2,2,\n3,4,\n4,5,\n");
        let normalized = board("2,2,\n3,4,\n5,6,\n").normalized();
        assert_eq!(normalized.to_string(), "2,2,\n3,4,\n5,6,\n");
        let normalized = board("2,2,\n6,5,\n4,3,\n").normalized();
        assert_eq!(normalized.to_string(), "2,2,\n3,4,\n5,6,\n");
    }

    #[test]
    fn test_largest_accepted_ids_renumber() {
        let max = i64::MAX - 9;
        let text = format!("3,2,\n{max},0,2,\n{max},7,-1,\n");
        let board = Board::load(&text).unwrap();
        assert_eq!(board.to_string(), "3,2,\n3,0,2,\n3,4,-1,\n");
    }

    #[test]
    fn test_non_contiguous_piece_keeps_one_id() {
        let normalized = board("3,1,\n5,3,5,\n").normalized();
        assert_eq!(normalized.to_string(), "3,1,\n3,4,3,\n");
    }

    #[test]
    fn test_moved_pieces_renumber() {
        let moved = board("3,1,\n4,0,3,\n")
            .with_move(Move::new(3, Direction::Left))
            .unwrap();
        assert_eq!(moved.normalized().to_string(), "3,1,\n3,4,0,\n");
    }

    fn cell_strategy() -> impl Strategy<Value = i64> {
        prop_oneof![
            4 => Just(CLEAR),
            2 => Just(WALL),
            1 => Just(GOAL),
            1 => Just(MASTER),
            4 => 3..9_i64,
        ]
    }

    fn board_strategy() -> impl Strategy<Value = Board> {
        (1..=5_usize, 1..=5_usize).prop_flat_map(|(width, height)| {
            prop::collection::vec(cell_strategy(), width * height)
                .prop_map(move |cells| Board::from_cells(width, height, cells).unwrap())
        })
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(board in board_strategy()) {
            let once = board.normalized();
            prop_assert_eq!(once.normalized(), once);
        }

        #[test]
        fn prop_normalize_ignores_relabeling(
            board in board_strategy(),
            ids in prop::collection::hash_set(3..1000_i64, 6),
        ) {
            let ids = ids.into_iter().collect::<Vec<_>>();
            let relabeled = board
                .cells()
                .iter()
                .map(|&value| {
                    if value >= 3 {
                        ids[usize::try_from(value - 3).unwrap()]
                    } else {
                        value
                    }
                })
                .collect();
            let relabeled = Board::from_cells(board.width(), board.height(), relabeled).unwrap();
            prop_assert_eq!(relabeled.normalized(), board.normalized());
        }

        #[test]
        fn prop_normalize_preserves_grouping(board in board_strategy()) {
            let normalized = board.normalized();
            prop_assert_eq!(normalized.dimensions(), board.dimensions());
            let pairs = board.cells().iter().zip(normalized.cells());
            for (&before, &after) in pairs.clone() {
                prop_assert_eq!(before >= 3, after >= 3);
                if before < 3 {
                    prop_assert_eq!(before, after);
                }
            }
            for (i, (&a_before, &a_after)) in pairs.clone().enumerate() {
                for (&b_before, &b_after) in pairs.clone().skip(i + 1) {
                    prop_assert_eq!(a_before == b_before, a_after == b_after);
                }
            }
        }

        #[test]
        fn prop_normalized_ids_are_dense(board in board_strategy()) {
            let normalized = board.normalized();
            let ordinary = normalized
                .pieces()
                .into_iter()
                .filter(|&piece| piece >= 3)
                .collect::<Vec<_>>();
            let expected = (3..).take(ordinary.len()).collect::<Vec<_>>();
            prop_assert_eq!(ordinary, expected);
        }
    }
}
