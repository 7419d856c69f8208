//! Distance estimates from a board to the goal.

use crate::puzzle::Board;

/// Estimate of the number of moves left to reach a fixed goal.
///
/// Implementations used by A* must never overestimate (admissible).
pub trait Heuristic {
    fn estimate(&self, board: &Board) -> u32;
}

/// Sum of Manhattan distances between each tile and its goal cell.
///
/// [`Manhattan::new`] skips the blank, which keeps the estimate admissible and
/// consistent. [`Manhattan::with_blank`] counts the blank like any other tile;
/// that variant can overestimate, so A* loses its optimality guarantee
/// with it.
pub struct Manhattan {
    size: usize,
    count_blank: bool,
    /// Goal (row, col) indexed by cell value.
    goal_pos: Vec<(usize, usize)>,
}

impl Manhattan {
    pub fn new(goal: &Board) -> Self {
        Self::build(goal, false)
    }

    pub fn with_blank(goal: &Board) -> Self {
        Self::build(goal, true)
    }

    fn build(goal: &Board, count_blank: bool) -> Self {
        let size = goal.size();
        let mut goal_pos = vec![(0, 0); size * size];
        for (j, &v) in goal.cells().iter().enumerate() {
            goal_pos[v as usize] = (j / size, j % size);
        }
        Self {
            size,
            count_blank,
            goal_pos,
        }
    }
}

impl Heuristic for Manhattan {
    fn estimate(&self, board: &Board) -> u32 {
        board
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0 || self.count_blank)
            .map(|(i, &v)| {
                let (gr, gc) = self.goal_pos[v as usize];
                ((i / self.size).abs_diff(gr) + (i % self.size).abs_diff(gc)) as u32
            })
            .sum()
    }
}

/// Manhattan distance of `board` from `goal`.
pub fn manhattan(board: &Board, goal: &Board) -> u32 {
    Manhattan::new(goal).estimate(board)
}
