use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;

/// Direction the blank cell moves in a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Fixed enumeration order used by successor generation.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// (row, col) offset applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Move::Up => '^',
            Move::Down => 'v',
            Move::Left => '<',
            Move::Right => '>',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// One tile configuration on a `size` x `size` grid, stored row-major.
///
/// Value `0` is the blank. A `Board` is always a permutation of
/// `0..size*size`: the constructor rejects anything else and moves only swap
/// the blank with a neighbour.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    pub fn new(size: usize, cells: Vec<u32>) -> Result<Self, PuzzleError> {
        if size == 0 {
            return Err(PuzzleError::InvalidSize(size));
        }
        let expected = size * size;
        if cells.len() != expected {
            return Err(PuzzleError::WrongLength {
                expected,
                actual: cells.len(),
            });
        }

        let mut seen = vec![false; expected];
        for &value in &cells {
            let idx = value as usize;
            if idx >= expected {
                return Err(PuzzleError::ValueOutOfRange {
                    value,
                    max: (expected - 1) as u32,
                });
            }
            if seen[idx] {
                return Err(PuzzleError::DuplicateValue(value));
            }
            seen[idx] = true;
        }

        Ok(Self { size, cells })
    }

    /// The solved board: `1..size*size` in row-major order, blank last.
    pub fn goal(size: usize) -> Result<Self, PuzzleError> {
        if size == 0 {
            return Err(PuzzleError::InvalidSize(size));
        }
        let last = (size * size) as u32;
        let mut cells: Vec<u32> = (1..last).collect();
        cells.push(0);
        Ok(Self { size, cells })
    }

    /// Parse cells separated by commas and/or whitespace.
    pub fn parse(size: usize, text: &str) -> Result<Self, PuzzleError> {
        let cells = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<u32>()
                    .map_err(|_| PuzzleError::ParseCell(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(size, cells)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Row-major index of the blank.
    pub fn blank(&self) -> usize {
        // Every valid board holds exactly one zero.
        self.cells.iter().position(|&v| v == 0).unwrap_or(0)
    }

    /// Board reached by moving the blank in `movement`, or `None` when that
    /// would leave the grid.
    pub fn apply(&self, movement: Move) -> Option<Board> {
        let blank = self.blank();
        let (row, col) = (blank / self.size, blank % self.size);
        let (dr, dc) = movement.as_offset();

        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        let n = self.size as isize;
        if new_row < 0 || new_row >= n || new_col < 0 || new_col >= n {
            return None;
        }

        let target = new_row as usize * self.size + new_col as usize;
        let mut cells = self.cells.clone();
        cells.swap(blank, target);
        Some(Board {
            size: self.size,
            cells,
        })
    }

    /// All legal one-move neighbours, in [`Move::ALL`] order.
    pub fn successors(&self) -> Vec<(Move, Board)> {
        Move::ALL
            .iter()
            .filter_map(|&m| self.apply(m).map(|b| (m, b)))
            .collect()
    }

    /// Apply `moves` in order. `None` if any move is illegal.
    pub fn replay(&self, moves: &[Move]) -> Option<Board> {
        moves
            .iter()
            .try_fold(self.clone(), |board, &m| board.apply(m))
    }

    /// Whether `goal` can be reached from `self` by legal moves.
    ///
    /// Each move is one transposition and shifts the blank by one cell, so
    /// the permutation parity must match the parity of the blank's
    /// displacement.
    pub fn is_solvable_towards(&self, goal: &Board) -> bool {
        if self.size != goal.size {
            return false;
        }
        let len = self.cells.len();
        let mut goal_pos = vec![0usize; len];
        for (i, &v) in goal.cells.iter().enumerate() {
            goal_pos[v as usize] = i;
        }

        let mut visited = vec![false; len];
        let mut cycles = 0;
        for start in 0..len {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = goal_pos[self.cells[i] as usize];
            }
        }
        let permutation_parity = (len - cycles) % 2;

        let (a, b) = (self.blank(), goal.blank());
        let blank_distance =
            (a / self.size).abs_diff(b / self.size) + (a % self.size).abs_diff(b % self.size);

        permutation_parity == blank_distance % 2
    }
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Infer the size from the number of cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .count();
        let size = (1..=count).find(|n| n * n >= count).unwrap_or(0);
        Self::parse(size, s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for row in self.cells.chunks(self.size) {
            for (i, &val) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                if val == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{:>width$}", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
