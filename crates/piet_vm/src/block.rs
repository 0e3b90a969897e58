//! The block explorer: flood-fills the connected region of same-coloured
//! codels an entry point belongs to, and picks the exit codel the
//! current DP/CC pair selects (spec §4.4).
//!
//! The fill is iterative (an explicit work queue), never recursive —
//! spec's design notes call out recursion on the source's flood fill as a
//! stack-hungry risk on large monochrome regions.

use crate::direction::{CodelChooser, Direction, Position};
use crate::grid::Grid;

/// Result of exploring the block `entry` belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockInfo {
    pub size: usize,
    pub exit: Position,
}

/// Explores the block at `entry` under the current DP/CC, leaving every
/// fill-scratch bit cleared on return (spec's flood-fill invariant).
///
/// `entry` must be a chromatic (non-special, non-invalid) cell; callers
/// are responsible for routing white/black codels elsewhere.
pub fn explore(grid: &mut Grid, entry: Position, dp: Direction, cc: CodelChooser) -> BlockInfo {
    let color = grid.at(entry);
    debug_assert!(color.is_chromatic());

    let mut queue = vec![entry];
    let mut size = 0;
    let mut exit = entry;

    while let Some(pos) = queue.pop() {
        if grid.filled(pos) || grid.at(pos) != color {
            continue;
        }
        grid.set_fill(pos);
        size += 1;
        if is_better_exit(pos, exit, dp, cc) {
            exit = pos;
        }

        for dir in [Direction::Right, Direction::Down, Direction::Left, Direction::Up] {
            if let Some(next) = pos.step(dir, grid.width(), grid.height()) {
                if !grid.filled(next) {
                    queue.push(next);
                }
            }
        }
    }

    grid.clear_all_fill();
    BlockInfo { size, exit }
}

/// True if `candidate` should replace `current` as the block's exit
/// codel, per the DP/CC table in spec §4.4.
fn is_better_exit(candidate: Position, current: Position, dp: Direction, cc: CodelChooser) -> bool {
    use CodelChooser::{Left, Right};
    use Direction::{Down, Left as DLeft, Right as DRight, Up};

    match dp {
        DRight => match candidate.x.cmp(&current.x) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Equal => match cc {
                Left => candidate.y < current.y,
                Right => candidate.y > current.y,
            },
            std::cmp::Ordering::Less => false,
        },
        Down => match candidate.y.cmp(&current.y) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Equal => match cc {
                Left => candidate.x > current.x,
                Right => candidate.x < current.x,
            },
            std::cmp::Ordering::Less => false,
        },
        DLeft => match candidate.x.cmp(&current.x) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Equal => match cc {
                Left => candidate.y > current.y,
                Right => candidate.y < current.y,
            },
            std::cmp::Ordering::Greater => false,
        },
        Up => match candidate.y.cmp(&current.y) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Equal => match cc {
                Left => candidate.x < current.x,
                Right => candidate.x > current.x,
            },
            std::cmp::Ordering::Greater => false,
        },
    }
}
