//! State-space search over boards.
//!
//! Every strategy grows an append-only tree of [`SearchNode`]s stored in a
//! [`NodeArena`]; a node refers to its parent by index, so the path to any
//! node is recovered by walking parents back to the root.
//!
//! | Strategy | Frontier | Ordered by |
//! |---|---|---|
//! | [`Strategy::Bfs`] | FIFO | insertion |
//! | [`Strategy::Ids`] | depth-bounded LIFO | insertion |
//! | [`Strategy::Ucs`] | binary heap | `g` |
//! | [`Strategy::Greedy`] | binary heap | `h` |
//! | [`Strategy::AStar`] | binary heap | `g + h` |

mod best_first;
mod frontier;
mod ids;

use std::fmt;

use crate::error::PuzzleError;
use crate::puzzle::{Board, Move};

pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier, PriorityKey};

/// Index of a node inside a [`NodeArena`].
pub type NodeId = usize;

/// One node of the search tree. Never mutated after it is pushed.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub board: Board,
    /// Moves from the root.
    pub g: u32,
    /// Heuristic estimate, `0` for uninformed strategies.
    pub h: u32,
    pub parent: Option<NodeId>,
    /// Move that produced this node from its parent; `None` for the root.
    pub action: Option<Move>,
}

/// Append-only storage for the search tree.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&mut self, board: Board, h: u32) -> NodeId {
        self.push(SearchNode {
            board,
            g: 0,
            h,
            parent: None,
            action: None,
        })
    }

    /// Add a child of `parent` reached by `action`.
    pub fn child(&mut self, parent: NodeId, action: Move, board: Board, h: u32) -> NodeId {
        let g = self.nodes[parent].g + 1;
        self.push(SearchNode {
            board,
            g,
            h,
            parent: Some(parent),
            action: Some(action),
        })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Moves from the root to `id`, in playing order.
    pub fn build_solution(&self, id: NodeId) -> Vec<Move> {
        let mut solution = Vec::with_capacity(self.nodes[id].g as usize);
        let mut current = Some(id);
        while let Some(ci) = current {
            let node = &self.nodes[ci];
            if let Some(action) = node.action {
                solution.push(action);
            }
            current = node.parent;
        }
        solution.reverse();
        solution
    }
}

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    Bfs,
    Ids,
    Ucs,
    Greedy,
    #[value(name = "astar")]
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Bfs,
        Strategy::Ids,
        Strategy::Ucs,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Bfs => "breadth-first",
            Strategy::Ids => "iterative deepening",
            Strategy::Ucs => "uniform cost",
            Strategy::Greedy => "greedy best-first",
            Strategy::AStar => "A*",
        }
    }

    /// Whether the returned solution is guaranteed to be shortest.
    pub fn is_optimal(&self) -> bool {
        !matches!(self, Strategy::Greedy)
    }

    /// Find a move sequence taking `initial` to `goal`.
    ///
    /// Returns an empty sequence when `initial == goal`, or when the frontier
    /// runs dry (which cannot happen for boards that pass the solvability
    /// check).
    pub fn solve(&self, initial: &Board, goal: &Board) -> Result<Vec<Move>, PuzzleError> {
        if initial.size() != goal.size() {
            return Err(PuzzleError::DimensionMismatch {
                initial: initial.size(),
                goal: goal.size(),
            });
        }
        if !initial.is_solvable_towards(goal) {
            return Err(PuzzleError::Unsolvable);
        }

        let moves = match self {
            Strategy::Bfs => best_first::bfs(initial, goal),
            Strategy::Ids => ids::ids(initial, goal),
            Strategy::Ucs => best_first::ucs(initial, goal),
            Strategy::Greedy => best_first::greedy(initial, goal),
            Strategy::AStar => best_first::astar(initial, goal),
        };
        Ok(moves)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shorthand for [`Strategy::solve`].
pub fn solve(strategy: Strategy, initial: &Board, goal: &Board) -> Result<Vec<Move>, PuzzleError> {
    strategy.solve(initial, goal)
}
