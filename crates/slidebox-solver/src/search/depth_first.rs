use std::vec;

use slidebox_core::{Board, Move};

use super::{BoxedSearch, Search, SearchOutcome};
use crate::{SearchContext, SolverError};

/// Depth-first search with backtracking over an explicit stack of levels.
///
/// Moves are tried in [`Board::all_moves`] order and the first solution reached is
/// returned, so it need not be the shortest. Boards whose canonical form is already
/// closed are pruned.
///
/// With [`forget_on_backtrack`](Self::forget_on_backtrack) enabled (the default), a
/// level that fails removes the boards it closed before backtracking, so they may be
/// reached again along another path. Disabling it keeps every board closed for
/// the whole run.
///
/// # Examples
///
/// ```
/// use slidebox_core::{Board, Direction, Move};
/// use slidebox_solver::{DepthFirst, Search as _, SearchConfig, SearchContext, SearchOutcome};
///
/// let board = Board::load("3,1,\n2,0,-1,\n")?;
/// let mut ctx = SearchContext::new(SearchConfig::default());
/// let right = Move::new(2, Direction::Right);
/// assert_eq!(
///     DepthFirst::new().search(&board, &mut ctx)?,
///     SearchOutcome::Solved(vec![right, right])
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DepthFirst {
    forget_on_backtrack: bool,
}

impl Default for DepthFirst {
    fn default() -> Self {
        Self::new()
    }
}

impl DepthFirst {
    /// Creates a depth-first search that forgets failed levels' boards on backtrack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            forget_on_backtrack: true,
        }
    }

    /// Sets whether a failed level removes the boards it closed.
    #[must_use]
    pub fn with_forget_on_backtrack(mut self, forget: bool) -> Self {
        self.forget_on_backtrack = forget;
        self
    }

    /// Returns whether a failed level removes the boards it closed.
    #[must_use]
    pub fn forget_on_backtrack(&self) -> bool {
        self.forget_on_backtrack
    }

    /// Opens a board `depth` moves from the root.
    fn enter(board: Board, ctx: &mut SearchContext, depth: usize) -> Result<Entry, SolverError> {
        ctx.observe_depth(depth);
        if board.is_solved() {
            return Ok(Entry::Solved);
        }

        let moves = board.all_moves();
        log::trace!("descending at depth {depth} with {} moves", moves.len());
        if moves.is_empty() {
            ctx.dead_end(depth)?;
            return Ok(Entry::Exhausted);
        }
        Ok(Entry::Expand(Frame {
            board,
            moves: moves.into_iter(),
            closed_here: Vec::new(),
        }))
    }
}

/// One level of the descent: a board and the moves not yet tried from it.
#[derive(Debug)]
struct Frame {
    board: Board,
    moves: vec::IntoIter<Move>,
    /// Canonical boards closed by this level, reopened if the level fails.
    closed_here: Vec<Board>,
}

#[derive(Debug)]
enum Entry {
    Solved,
    Exhausted,
    Expand(Frame),
}

impl Search for DepthFirst {
    fn name(&self) -> &'static str {
        "depth-first"
    }

    fn clone_box(&self) -> BoxedSearch {
        Box::new(*self)
    }

    fn search(&self, root: &Board, ctx: &mut SearchContext) -> Result<SearchOutcome, SolverError> {
        ctx.close(root.normalized());
        // `path[i]` leads from `stack[i]` to the next level
        let mut path = Vec::new();
        let mut stack = match Self::enter(root.clone(), ctx, 0)? {
            Entry::Solved => return Ok(SearchOutcome::Solved(path)),
            Entry::Exhausted => return Ok(SearchOutcome::NoSolution),
            Entry::Expand(frame) => vec![frame],
        };

        while let Some(frame) = stack.last_mut() {
            let Some(mv) = frame.moves.next() else {
                if let Some(frame) = stack.pop() {
                    for canonical in &frame.closed_here {
                        ctx.reopen(canonical);
                    }
                }
                path.pop();
                continue;
            };

            let child = frame.board.with_move(mv)?;
            let canonical = child.normalized();
            if ctx.is_closed(&canonical) {
                continue;
            }
            if self.forget_on_backtrack {
                frame.closed_here.push(canonical.clone());
            }
            ctx.close(canonical);
            ctx.record_visit()?;

            path.push(mv);
            match Self::enter(child, ctx, path.len())? {
                Entry::Solved => return Ok(SearchOutcome::Solved(path)),
                Entry::Exhausted => {
                    path.pop();
                }
                Entry::Expand(frame) => stack.push(frame),
            }
        }

        Ok(SearchOutcome::NoSolution)
    }
}
