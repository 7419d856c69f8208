use log::debug;
use rand::Rng;

use crate::error::PuzzleError;
use crate::puzzle::Board;

/// Scramble the goal board by `steps` uniformly random legal moves.
///
/// Moves may undo the previous one. The result is always solvable.
pub fn random_walk<R: Rng + ?Sized>(
    size: usize,
    steps: usize,
    rng: &mut R,
) -> Result<Board, PuzzleError> {
    let mut board = Board::goal(size)?;
    for _ in 0..steps {
        let mut successors = board.successors();
        if successors.is_empty() {
            break;
        }
        let pick = rng.gen_range(0..successors.len());
        board = successors.swap_remove(pick).1;
    }
    debug!("random walk of {} steps on a {}x{} board", steps, size, size);
    Ok(board)
}
