use std::collections::HashMap;

use crate::puzzle::{Board, Move};

use super::frontier::{Frontier, LifoFrontier};
use super::NodeArena;

enum Outcome {
    Found(Vec<Move>),
    /// Some node was pruned by the bound; a deeper bound may succeed.
    Cutoff,
    /// Every reachable board was expanded without meeting the goal.
    Exhausted,
}

/// Iterative deepening: depth-limited DFS with bounds 1, 2, 3, ...
///
/// The first bound that finds the goal equals the shortest solution length,
/// so the result is optimal.
pub(crate) fn ids(initial: &Board, goal: &Board) -> Vec<Move> {
    let mut bound = 0;
    loop {
        bound += 1;
        match depth_limited(initial, goal, bound) {
            Outcome::Found(moves) => return moves,
            Outcome::Cutoff => {}
            Outcome::Exhausted => return Vec::new(),
        }
    }
}

fn depth_limited(initial: &Board, goal: &Board, bound: u32) -> Outcome {
    let mut arena = NodeArena::new();
    let mut frontier = LifoFrontier::default();
    // Shallowest depth each board was expanded at during this bound.
    let mut explored: HashMap<Board, u32> = HashMap::new();
    let mut pruned = false;

    let root = arena.root(initial.clone(), 0);
    frontier.push(root, arena.get(root));

    while let Some(id) = frontier.pop() {
        let node = arena.get(id);
        // Stack depths never decrease towards the top, so a board is never
        // popped after being expanded at the same or a smaller depth.
        debug_assert!(
            !explored.get(&node.board).is_some_and(|&depth| depth <= node.g),
            "popped a board already expanded at depth <= {}",
            node.g
        );
        if node.board == *goal {
            return Outcome::Found(arena.build_solution(id));
        }
        if node.g + 1 > bound {
            pruned = true;
            continue;
        }

        let depth = node.g + 1;
        explored.insert(node.board.clone(), node.g);

        for (action, board) in node.board.successors() {
            match explored.get(&board).copied() {
                Some(seen) if seen <= depth => continue,
                // Reached at a shallower depth: reopen it.
                Some(_) => {
                    explored.remove(&board);
                }
                None => {}
            }
            let child = arena.child(id, action, board, 0);
            frontier.push(child, arena.get(child));
        }
    }

    if pruned {
        Outcome::Cutoff
    } else {
        Outcome::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::best_first::bfs;

    #[test]
    fn goal_start_needs_no_moves() {
        let goal = Board::goal(3).unwrap();
        assert!(ids(&goal, &goal).is_empty());
    }

    #[test]
    fn finds_shortest_path_on_short_walk() {
        let goal = Board::goal(3).unwrap();
        let start = goal
            .replay(&[Move::Up, Move::Left, Move::Down, Move::Left, Move::Up, Move::Up])
            .unwrap();
        let moves = ids(&start, &goal);
        assert_eq!(moves.len(), 6);
        assert_eq!(start.replay(&moves), Some(goal));
    }

    #[test]
    fn reopens_boards_reached_at_a_shallower_depth() {
        // Both are first met along a long branch; without reopening the
        // shorter route is cut off and the answer is two moves too long.
        let goal = Board::goal(3).unwrap();
        for (cells, shortest) in [
            (vec![6, 4, 2, 1, 0, 3, 7, 5, 8], 10),
            (vec![0, 2, 3, 5, 4, 6, 1, 7, 8], 12),
        ] {
            let start = Board::new(3, cells).unwrap();
            assert_eq!(bfs(&start, &goal).len(), shortest);

            let moves = ids(&start, &goal);
            assert_eq!(moves.len(), shortest);
            assert_eq!(start.replay(&moves).as_ref(), Some(&goal));

            assert!(matches!(
                depth_limited(&start, &goal, shortest as u32 - 1),
                Outcome::Cutoff
            ));
            match depth_limited(&start, &goal, shortest as u32) {
                Outcome::Found(moves) => assert_eq!(moves.len(), shortest),
                _ => panic!("no solution within bound {}", shortest),
            }
        }
    }

    #[test]
    fn bound_cuts_off_or_exhausts() {
        let goal = Board::goal(2).unwrap();
        let start = goal.replay(&[Move::Up, Move::Left]).unwrap();
        assert!(matches!(depth_limited(&start, &goal, 1), Outcome::Cutoff));
        assert!(matches!(depth_limited(&start, &goal, 2), Outcome::Found(_)));

        // Unreachable goal on a 2x2 grid: the whole space fits under a
        // generous bound.
        let swapped = Board::new(2, vec![2, 1, 3, 0]).unwrap();
        assert!(matches!(
            depth_limited(&swapped, &goal, 20),
            Outcome::Exhausted
        ));
        assert!(ids(&swapped, &goal).is_empty());
    }
}
