use slidebox_core::{Board, BoardError, Move};

/// Applies `moves` to `root` in order, returning the board after each move.
///
/// The returned vector has one board per move; it is empty when `moves` is.
///
/// # Errors
///
/// Returns [`BoardError::IllegalMove`] for the first move that cannot be applied.
///
/// # Examples
///
/// ```
/// use slidebox_core::{Board, Direction, Move};
/// use slidebox_solver::replay;
///
/// let board: Board = "3,1,\n2,0,-1,\n".parse()?;
/// let right = Move::new(2, Direction::Right);
/// let boards = replay(&board, &[right, right])?;
/// assert_eq!(boards.len(), 2);
/// assert!(boards[1].is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn replay(root: &Board, moves: &[Move]) -> Result<Vec<Board>, BoardError> {
    let mut boards = Vec::with_capacity(moves.len());
    let mut current = root.clone();
    for &mv in moves {
        current.apply_move(mv)?;
        boards.push(current.clone());
    }
    Ok(boards)
}

#[cfg(test)]
mod tests {
    use slidebox_core::Direction;

    use super::*;

    #[test]
    fn test_replay_stops_at_illegal_move() {
        let board: Board = "2,1,\n2,0,\n".parse().unwrap();
        let right = Move::new(2, Direction::Right);
        assert_eq!(
            replay(&board, &[right, right]),
            Err(BoardError::IllegalMove { mv: right })
        );
        assert_eq!(replay(&board, &[]), Ok(vec![]));
    }
}
