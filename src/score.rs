use std::collections::VecDeque;

use crate::board::{Board, Owner};
use crate::types::Score;

/// The six axial hex neighbors. Identical for every cell: the grid uses
/// one consistent offset convention, with no row-parity variation.
const DIRECTIONS: [(i32, i32); 6] = [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, 1), (1, -1)];

/// Partitions each player's stones into maximal connected groups and
/// returns the group sizes, largest group first.
///
/// Recomputed from scratch on every call: the sketcher allows arbitrary
/// out-of-order repaints that merge or split groups, and the board is
/// small enough that a full scan is cheaper than maintaining anything
/// incrementally.
pub fn compute_score(board: &Board) -> Score {
    let shape = board.shape();
    let side = shape.side();
    let mut visited = vec![false; side * side];
    let mut black = Vec::new();
    let mut white = Vec::new();

    for (row, col) in shape.cells() {
        if visited[row as usize * side + col as usize] {
            continue;
        }
        let Ok(owner) = board.owner(row, col) else {
            continue;
        };
        if owner == Owner::Empty {
            continue;
        }

        let size = flood_fill(board, &mut visited, row, col, owner);
        match owner {
            Owner::Black => black.push(size),
            Owner::White => white.push(size),
            Owner::Empty => {}
        }
    }

    black.sort_unstable_by(|a, b| b.cmp(a));
    white.sort_unstable_by(|a, b| b.cmp(a));

    Score { black, white }
}

/// Breadth-first traversal of one same-owner group, seeded at
/// `(row, col)`. Cells are marked visited when enqueued, so each cell is
/// enqueued at most once. Returns the group size.
fn flood_fill(board: &Board, visited: &mut [bool], row: i32, col: i32, owner: Owner) -> u32 {
    let shape = board.shape();
    let side = shape.side();

    let mut queue = VecDeque::new();
    visited[row as usize * side + col as usize] = true;
    queue.push_back((row, col));

    let mut size = 0;
    while let Some((row, col)) = queue.pop_front() {
        size += 1;
        for (dr, dc) in DIRECTIONS {
            let (next_row, next_col) = (row + dr, col + dc);
            if !shape.is_valid_cell(next_row, next_col) {
                continue;
            }
            let index = next_row as usize * side + next_col as usize;
            if visited[index] || board.owner(next_row, next_col) != Ok(owner) {
                continue;
            }
            visited[index] = true;
            queue.push_back((next_row, next_col));
        }
    }

    size
}
