//! Timing and reporting around solve calls. Kept outside the search core.

use std::fmt;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::error::PuzzleError;
use crate::puzzle::{Board, Move};
use crate::search::Strategy;

/// Run `f` and measure its wall-clock time.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Outcome of one solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub strategy: Strategy,
    pub moves: usize,
    pub elapsed: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: found a solution costing {} steps in {:.4} seconds",
            self.strategy,
            self.moves,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Solve with `strategy`, logging and timing the call.
pub fn run(
    strategy: Strategy,
    initial: &Board,
    goal: &Board,
) -> Result<(Vec<Move>, Report), PuzzleError> {
    info!("Running {} algorithm...", strategy);
    let (result, elapsed) = timed(|| strategy.solve(initial, goal));
    let moves = result?;

    if moves.is_empty() && initial != goal {
        warn!("{} exhausted its frontier without reaching the goal", strategy);
    }

    let report = Report {
        strategy,
        moves: moves.len(),
        elapsed,
    };
    info!("{}", report);
    Ok((moves, report))
}
