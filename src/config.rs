use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use npuzzle::generate::random_walk;
use npuzzle::{Board, PuzzleError, Strategy};

/// The hardest 8-puzzle instance; its shortest solution is 31 moves.
pub const HARDEST_EIGHT_PUZZLE: [u32; 9] = [8, 6, 7, 2, 5, 4, 3, 0, 1];

/// Grid dimension used for random walks when `--size` is not given.
const DEFAULT_SIZE: usize = 3;

/// Strategies run when none is given, fastest first.
const DEFAULT_STRATEGIES: [Strategy; 5] = [
    Strategy::Greedy,
    Strategy::AStar,
    Strategy::Bfs,
    Strategy::Ucs,
    Strategy::Ids,
];

#[derive(Debug, Parser)]
#[command(
    name = "npuzzle",
    version,
    about = "Solve sliding-tile puzzles with classic search strategies"
)]
pub struct Config {
    /// Grid dimension N (an N x N board). Defaults to 3, or to the size
    /// implied by `--board`.
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Random moves applied to the goal to build the start board.
    #[arg(long, default_value_t = 100)]
    pub steps: usize,

    /// Seed for the random walk.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Explicit start board, e.g. "8,6,7,2,5,4,3,0,1".
    #[arg(long, conflicts_with = "hardest")]
    pub board: Option<String>,

    /// Start from the hardest 8-puzzle instance.
    #[arg(long)]
    pub hardest: bool,

    /// Strategy to run; repeat for several. Defaults to all of them.
    #[arg(short, long = "strategy", value_enum)]
    pub strategies: Vec<Strategy>,

    /// Print every intermediate board of each solution.
    #[arg(long)]
    pub show_path: bool,
}

impl Config {
    pub fn strategies(&self) -> Vec<Strategy> {
        if self.strategies.is_empty() {
            DEFAULT_STRATEGIES.to_vec()
        } else {
            self.strategies.clone()
        }
    }

    /// Build the start board from `--hardest`, `--board` or a random walk.
    pub fn initial_board(&self) -> Result<Board, PuzzleError> {
        if self.hardest {
            return Board::new(3, HARDEST_EIGHT_PUZZLE.to_vec());
        }
        if let Some(text) = &self.board {
            return match self.size {
                Some(size) => Board::parse(size, text),
                None => text.parse(),
            };
        }
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        random_walk(self.size.unwrap_or(DEFAULT_SIZE), self.steps, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_run_every_strategy() {
        let config = Config::try_parse_from(["npuzzle"]).unwrap();
        assert_eq!(config.size, None);
        assert_eq!(config.steps, 100);
        assert_eq!(config.strategies(), DEFAULT_STRATEGIES.to_vec());
    }

    #[test]
    fn repeated_strategy_flags() {
        let config =
            Config::try_parse_from(["npuzzle", "-s", "astar", "--strategy", "bfs"]).unwrap();
        assert_eq!(config.strategies(), vec![Strategy::AStar, Strategy::Bfs]);
    }

    #[test]
    fn explicit_board_and_hardest_conflict() {
        assert!(
            Config::try_parse_from(["npuzzle", "--hardest", "--board", "1,2,3,0"]).is_err()
        );
    }

    #[test]
    fn initial_board_sources() {
        let hardest = Config::try_parse_from(["npuzzle", "--hardest"]).unwrap();
        assert_eq!(
            hardest.initial_board().unwrap().cells(),
            &HARDEST_EIGHT_PUZZLE
        );

        let explicit = Config::try_parse_from(["npuzzle", "-n", "2", "--board", "1 2 0 3"]).unwrap();
        assert_eq!(explicit.initial_board().unwrap().cells(), &[1, 2, 0, 3]);

        let inferred = Config::try_parse_from([
            "npuzzle",
            "--board",
            "1,2,3,4,5,6,7,8,9,10,11,12,13,14,0,15",
        ])
        .unwrap();
        assert_eq!(inferred.initial_board().unwrap().size(), 4);

        let mismatched =
            Config::try_parse_from(["npuzzle", "-n", "3", "--board", "1 2 0 3"]).unwrap();
        assert!(matches!(
            mismatched.initial_board(),
            Err(PuzzleError::WrongLength { expected: 9, actual: 4 })
        ));

        let walked = Config::try_parse_from(["npuzzle", "--seed", "1", "--steps", "5"]).unwrap();
        assert_eq!(walked.initial_board().unwrap().size(), DEFAULT_SIZE);

        let seeded = ["npuzzle", "-n", "4", "--seed", "9", "--steps", "30"];
        let a = Config::try_parse_from(seeded).unwrap().initial_board().unwrap();
        let b = Config::try_parse_from(seeded).unwrap().initial_board().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.size(), 4);
    }
}
