use std::collections::VecDeque;

use slidebox_core::{Board, Move};

use super::{BoxedSearch, Search, SearchOutcome};
use crate::{SearchContext, SolverError};

/// Breadth-first search over an explicit FIFO frontier.
///
/// The root counts as the first visited node. Each child is checked for a solution
/// as soon as it is generated, so the first solution found has the fewest moves.
///
/// # Examples
///
/// ```
/// use slidebox_core::{Board, Direction, Move};
/// use slidebox_solver::{BreadthFirst, Search as _, SearchConfig, SearchContext, SearchOutcome};
///
/// let board = Board::load("2,1,\n2,-1,\n")?;
/// let mut ctx = SearchContext::new(SearchConfig::default());
/// assert_eq!(
///     BreadthFirst.search(&board, &mut ctx)?,
///     SearchOutcome::Solved(vec![Move::new(2, Direction::Right)])
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

/// A frontier entry. Each node owns its board and its path.
#[derive(Debug)]
struct Node {
    board: Board,
    path: Vec<Move>,
}

fn extended(path: &[Move], mv: Move) -> Vec<Move> {
    let mut path = path.to_vec();
    path.push(mv);
    path
}

impl Search for BreadthFirst {
    fn name(&self) -> &'static str {
        "breadth-first"
    }

    fn clone_box(&self) -> BoxedSearch {
        Box::new(*self)
    }

    fn search(&self, root: &Board, ctx: &mut SearchContext) -> Result<SearchOutcome, SolverError> {
        if root.is_solved() {
            return Ok(SearchOutcome::Solved(vec![]));
        }

        ctx.close(root.normalized());
        ctx.record_visit()?;
        let mut frontier = VecDeque::from([Node {
            board: root.clone(),
            path: vec![],
        }]);
        ctx.observe_frontier(frontier.len());

        while let Some(Node { board, path }) = frontier.pop_front() {
            ctx.observe_depth(path.len());
            let moves = board.all_moves();
            log::trace!(
                "expanding depth {} with {} moves, {} queued",
                path.len(),
                moves.len(),
                frontier.len()
            );
            if moves.is_empty() {
                ctx.dead_end(path.len())?;
                continue;
            }

            for mv in moves {
                let child = board.with_move(mv)?;
                if child.is_solved() {
                    return Ok(SearchOutcome::Solved(extended(&path, mv)));
                }
                if !ctx.close(child.normalized()) {
                    continue;
                }
                ctx.record_visit()?;
                frontier.push_back(Node {
                    board: child,
                    path: extended(&path, mv),
                });
            }
            ctx.observe_frontier(frontier.len());
        }

        Ok(SearchOutcome::NoSolution)
    }
}
