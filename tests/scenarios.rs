use rand::rngs::StdRng;
use rand::SeedableRng;

use npuzzle::generate::random_walk;
use npuzzle::heuristic::{manhattan, Heuristic, Manhattan};
use npuzzle::{solve, Board, Move, Strategy};

fn eight(cells: [u32; 9]) -> Board {
    Board::new(3, cells.to_vec()).unwrap()
}

#[test_log::test]
fn hardest_eight_puzzle_needs_31_moves() {
    let goal = Board::goal(3).unwrap();
    let start = eight([8, 6, 7, 2, 5, 4, 3, 0, 1]);

    for strategy in [Strategy::Bfs, Strategy::Ucs, Strategy::AStar] {
        let moves = solve(strategy, &start, &goal).unwrap();
        assert_eq!(moves.len(), 31, "{} is not optimal", strategy);
        assert_eq!(start.replay(&moves).as_ref(), Some(&goal));
    }

    let greedy = solve(Strategy::Greedy, &start, &goal).unwrap();
    assert!(greedy.len() >= 31);
    assert_eq!(start.replay(&greedy), Some(goal));
}

#[test_log::test]
fn one_swap_from_goal() {
    let goal = Board::goal(3).unwrap();
    let start = eight([1, 2, 3, 4, 5, 6, 7, 0, 8]);
    for strategy in Strategy::ALL {
        assert_eq!(
            solve(strategy, &start, &goal).unwrap(),
            vec![Move::Right],
            "{}",
            strategy
        );
    }
}

#[test_log::test]
fn already_solved() {
    let goal = Board::goal(3).unwrap();
    for strategy in Strategy::ALL {
        assert!(strategy.solve(&goal, &goal).unwrap().is_empty());
    }
}

#[test_log::test]
fn random_walks_solve_optimally_and_replay() {
    let mut rng = StdRng::seed_from_u64(2024);
    for steps in [3, 6, 9, 12] {
        let goal = Board::goal(3).unwrap();
        let start = random_walk(3, steps, &mut rng).unwrap();

        let shortest = solve(Strategy::Bfs, &start, &goal).unwrap().len();
        assert!(shortest <= steps);

        for strategy in Strategy::ALL {
            let moves = solve(strategy, &start, &goal).unwrap();
            assert_eq!(start.replay(&moves).as_ref(), Some(&goal), "{}", strategy);
            if strategy.is_optimal() {
                assert_eq!(moves.len(), shortest, "{}", strategy);
            } else {
                assert!(moves.len() >= shortest);
            }
        }
    }
}

#[test_log::test]
fn fifteen_puzzle_astar() {
    let mut rng = StdRng::seed_from_u64(15);
    let goal = Board::goal(4).unwrap();
    let start = random_walk(4, 30, &mut rng).unwrap();

    let moves = Strategy::AStar.solve(&start, &goal).unwrap();
    assert!(moves.len() <= 30);
    assert!(moves.len() as u32 >= manhattan(&start, &goal));
    assert_eq!(start.replay(&moves), Some(goal));
}

#[test]
fn manhattan_bounds_along_a_walk() {
    let goal = Board::goal(3).unwrap();
    let h = Manhattan::new(&goal);
    let mut rng = StdRng::seed_from_u64(5);
    let start = random_walk(3, 40, &mut rng).unwrap();

    let moves = Strategy::AStar.solve(&start, &goal).unwrap();
    let mut board = start;
    let mut remaining = moves.len() as u32;
    for movement in moves {
        assert!(h.estimate(&board) <= remaining);
        let next = board.apply(movement).unwrap();
        assert!(h.estimate(&board).abs_diff(h.estimate(&next)) <= 2);
        board = next;
        remaining -= 1;
    }
    assert_eq!(h.estimate(&board), 0);
}
