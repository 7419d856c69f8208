//! Sliding-tile (N-puzzle) solver.
//!
//! A [`Board`] is scrambled away from [`Board::goal`] and a [`Strategy`]
//! searches back for a sequence of blank [`Move`]s:
//!
//! ```
//! use npuzzle::{Board, Move, Strategy};
//!
//! let goal = Board::goal(3).unwrap();
//! let start = Board::new(3, vec![1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
//! let moves = Strategy::AStar.solve(&start, &goal).unwrap();
//! assert_eq!(moves, vec![Move::Right]);
//! ```

pub mod error;
pub mod generate;
pub mod heuristic;
pub mod puzzle;
pub mod report;
pub mod search;

pub use error::PuzzleError;
pub use puzzle::{Board, Move};
pub use search::{solve, Strategy};
