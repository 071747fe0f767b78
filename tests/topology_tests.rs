//! Path topology integration tests.

use proptest::prelude::*;
use tab_engine::core::{Board, BoardConfig, ROWS};
use tab_engine::rules::PathTopology;

fn sorted(cells: &[usize]) -> Vec<usize> {
    let mut v = cells.to_vec();
    v.sort_unstable();
    v
}

// =============================================================================
// Worked Board (4 x 3)
// =============================================================================

#[test]
fn test_worked_board_successors() {
    let topology = PathTopology::new(4, 3);
    assert_eq!(sorted(&topology.next_positions(6)), vec![3, 9]);
    assert_eq!(sorted(&topology.reachable_after_steps(6, 2)), vec![4, 10]);
}

#[test]
fn test_worked_board_reach_through_fork() {
    let topology = PathTopology::new(4, 3);
    // Three steps from 6: via 9 -> 10 -> 11, via 3 -> 4 -> 5.
    assert_eq!(sorted(&topology.reachable_after_steps(6, 3)), vec![5, 11]);
    // Past the end of the path there is nothing.
    assert!(topology.reachable_after_steps(10, 2).is_empty());
}

#[test]
fn test_fork_branches() {
    let topology = PathTopology::new(4, 3);
    assert_eq!(sorted(&topology.reachable_after_steps(7, 2)), vec![3, 9]);

    // The row-1 branch runs back through row 2 to the fork itself.
    assert_eq!(topology.reachable_after_steps(6, 6).as_slice(), &[6]);
}

#[test]
fn test_default_board_fork() {
    let board = Board::standard(BoardConfig::default());
    let topology = PathTopology::for_board(&board);
    assert_eq!(sorted(&topology.next_positions(18)), vec![9, 27]);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_path_is_bijection(cols in 1usize..16) {
        let topology = PathTopology::new(ROWS, cols);
        let path = topology.path();
        prop_assert_eq!(path.len(), ROWS * cols);
        prop_assert_eq!(sorted(&path), (0..ROWS * cols).collect::<Vec<_>>());
    }

    #[test]
    fn prop_zero_steps_is_identity(cols in 1usize..16, idx in 0usize..64) {
        let topology = PathTopology::new(ROWS, cols);
        let idx = idx % (ROWS * cols);
        let reachable = topology.reachable_after_steps(idx, 0);
        prop_assert_eq!(reachable.as_slice(), &[idx]);
    }

    #[test]
    fn prop_mirror_is_involution(cols in 1usize..16, idx in 0usize..64) {
        let board = Board::empty(BoardConfig::with_cols(cols));
        let idx = idx % board.cell_count();
        prop_assert_eq!(board.mirror(idx).and_then(|m| board.mirror(m)), Some(idx));
    }

    #[test]
    fn prop_out_degree_at_most_two(cols in 1usize..16) {
        let topology = PathTopology::new(ROWS, cols);
        let mut forks = 0;
        for idx in 0..ROWS * cols {
            let next = topology.next_positions(idx);
            prop_assert!(next.len() <= 2);
            prop_assert!(next.iter().all(|&n| n < ROWS * cols));
            if next.len() == 2 {
                forks += 1;
            }
        }
        prop_assert_eq!(forks, 1);
    }

    #[test]
    fn prop_reach_stays_on_board(cols in 1usize..12, idx in 0usize..48, steps in 0usize..8) {
        let topology = PathTopology::new(ROWS, cols);
        let idx = idx % (ROWS * cols);
        for cell in topology.reachable_after_steps(idx, steps) {
            prop_assert!(cell < ROWS * cols);
        }
    }
}
