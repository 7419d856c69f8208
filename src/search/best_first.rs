use std::collections::HashSet;

use crate::heuristic::{Heuristic, Manhattan};
use crate::puzzle::{Board, Move};

use super::frontier::{FifoFrontier, Frontier, PriorityFrontier, PriorityKey};
use super::NodeArena;

pub(crate) fn bfs(initial: &Board, goal: &Board) -> Vec<Move> {
    graph_search(initial, goal, FifoFrontier::default(), |_| 0)
}

pub(crate) fn ucs(initial: &Board, goal: &Board) -> Vec<Move> {
    graph_search(initial, goal, PriorityFrontier::new(PriorityKey::Cost), |_| 0)
}

pub(crate) fn greedy(initial: &Board, goal: &Board) -> Vec<Move> {
    let h = Manhattan::new(goal);
    graph_search(
        initial,
        goal,
        PriorityFrontier::new(PriorityKey::Estimate),
        |b| h.estimate(b),
    )
}

pub(crate) fn astar(initial: &Board, goal: &Board) -> Vec<Move> {
    let h = Manhattan::new(goal);
    graph_search(
        initial,
        goal,
        PriorityFrontier::new(PriorityKey::Total),
        |b| h.estimate(b),
    )
}

/// Graph search with a closed set, shared by every strategy except IDS.
///
/// A popped node whose board is already explored is stale (a cheaper copy
/// was expanded first) and is dropped. The goal test runs after that check
/// and before the board is marked, so the goal is never expanded.
fn graph_search<F, E>(initial: &Board, goal: &Board, mut frontier: F, estimate: E) -> Vec<Move>
where
    F: Frontier,
    E: Fn(&Board) -> u32,
{
    let mut arena = NodeArena::new();
    let mut explored: HashSet<Board> = HashSet::new();

    let root = arena.root(initial.clone(), estimate(initial));
    frontier.push(root, arena.get(root));

    while let Some(id) = frontier.pop() {
        let node = arena.get(id);
        if explored.contains(&node.board) {
            continue;
        }
        if node.board == *goal {
            return arena.build_solution(id);
        }
        explored.insert(node.board.clone());

        for (action, board) in node.board.successors() {
            if explored.contains(&board) {
                continue;
            }
            let h = estimate(&board);
            let child = arena.child(id, action, board, h);
            frontier.push(child, arena.get(child));
        }
    }

    Vec::new()
}
