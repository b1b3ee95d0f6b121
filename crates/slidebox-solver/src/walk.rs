//! Random walks over legal moves.

use rand::{Rng, seq::IndexedRandom as _};
use slidebox_core::{Board, Move};

/// One board visited by a [`RandomWalk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkStep {
    /// The board, in canonical form after the first step.
    pub board: Board,
    /// The move that produced `board` from the previous step's board.
    ///
    /// `None` for the starting board.
    pub applied: Option<Move>,
}

/// An iterator that plays uniformly random legal moves.
///
/// The first item is the starting board. Each following item applies one random legal
/// move to the previous board and normalizes the result. The walk ends after `steps`
/// moves, or after yielding a solved board or a board without legal moves.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use slidebox_core::Board;
/// use slidebox_solver::RandomWalk;
///
/// let board = Board::load("3,1,\n2,0,-1,\n")?;
/// let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(7);
/// let steps = RandomWalk::new(board, 5, &mut rng).collect::<Vec<_>>();
/// assert!(steps.len() >= 2);
/// assert!(steps[0].applied.is_none());
/// # Ok::<(), slidebox_core::ParseBoardError>(())
/// ```
#[derive(Debug)]
pub struct RandomWalk<'a, R: ?Sized> {
    next: Option<WalkStep>,
    remaining: usize,
    rng: &'a mut R,
}

impl<'a, R> RandomWalk<'a, R>
where
    R: Rng + ?Sized,
{
    /// Creates a walk of at most `steps` moves starting from `board`.
    pub fn new(board: Board, steps: usize, rng: &'a mut R) -> Self {
        Self {
            next: Some(WalkStep {
                board,
                applied: None,
            }),
            remaining: steps,
            rng,
        }
    }

    fn advance(&mut self, board: &Board) -> Option<WalkStep> {
        if self.remaining == 0 || board.is_solved() {
            return None;
        }
        let moves = board.all_moves();
        let &mv = moves.choose(&mut *self.rng)?;
        let mut next = board.with_move(mv).ok()?;
        next.normalize();
        self.remaining -= 1;
        log::trace!("random walk applied {mv}, {} steps left", self.remaining);
        Some(WalkStep {
            board: next,
            applied: Some(mv),
        })
    }
}

impl<R> Iterator for RandomWalk<'_, R>
where
    R: Rng + ?Sized,
{
    type Item = WalkStep;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.advance(&current.board);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;
    use slidebox_core::Direction;

    use super::*;

    #[test]
    fn test_walk_respects_budget() {
        let board = Board::load("4,4,\n2,0,0,0,\n0,3,0,0,\n0,0,0,0,\n0,0,0,-1,\n").unwrap();
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        let steps = RandomWalk::new(board.clone(), 3, &mut rng).collect::<Vec<_>>();
        assert!(steps.len() <= 4);
        assert_eq!(steps[0].board, board);
        for pair in steps.windows(2) {
            let mv = pair[1].applied.unwrap();
            let mut expected = pair[0].board.with_move(mv).unwrap();
            expected.normalize();
            assert_eq!(pair[1].board, expected);
        }
    }

    #[test]
    fn test_walk_stops_when_solved() {
        let board = Board::load("2,1,\n2,-1,\n").unwrap();
        let mut rng = Pcg64Mcg::seed_from_u64(2);
        let steps = RandomWalk::new(board, 10, &mut rng).collect::<Vec<_>>();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].applied, Some(Move::new(2, Direction::Right)));
        assert!(steps[1].board.is_solved());
    }

    #[test]
    fn test_walk_of_stuck_board_yields_start_only() {
        let board = Board::load("2,2,\n2,1,\n1,-1,\n").unwrap();
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        assert_eq!(RandomWalk::new(board, 10, &mut rng).count(), 1);
    }

    #[test]
    fn test_zero_steps() {
        let board = Board::load("3,1,\n2,0,-1,\n").unwrap();
        let mut rng = Pcg64Mcg::seed_from_u64(4);
        assert_eq!(RandomWalk::new(board, 0, &mut rng).count(), 1);
    }

    #[test]
    fn test_same_seed_same_walk() {
        let board = Board::load("3,3,\n2,0,0,\n0,3,0,\n0,0,-1,\n").unwrap();
        let walk = |seed| {
            let mut rng = Pcg64Mcg::seed_from_u64(seed);
            RandomWalk::new(board.clone(), 20, &mut rng)
                .map(|step| step.applied)
                .collect::<Vec<_>>()
        };
        assert_eq!(walk(42), walk(42));
    }
}
