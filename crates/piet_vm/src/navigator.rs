//! Moves the instruction pointer from one chromatic block to the next,
//! implementing the block-step dance and the white-codel sliding rule
//! (spec §4.5).
//!
//! Neither routine caches anything across calls: `block_step` re-explores
//! its block from scratch every time (see [`crate::block`]), and
//! `white_slide` walks the grid one codel at a time. White-region loop
//! detection beyond the 8-attempt bound is out of scope.

use crate::block;
use crate::direction::{CodelChooser, Direction, Position};
use crate::grid::Grid;

/// Where a block-step landed, the DP/CC it now holds, and the size of
/// the block the pointer just left (the operand `push` needs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStep {
    pub position: Position,
    pub dp: Direction,
    pub cc: CodelChooser,
    pub block_size: usize,
}

/// Attempts to leave the block at `pos` in direction `dp`/`cc`, retrying
/// up to 8 times by alternating a CC toggle and a DP rotation when the
/// far side is blocked by black or the grid edge.
///
/// Returns the landing position and the DP/CC the pointer now holds, or
/// `None` if all 8 attempts failed (the program halts).
pub fn block_step(grid: &mut Grid, pos: Position, mut dp: Direction, mut cc: CodelChooser) -> Option<BlockStep> {
    for attempt in 0..8 {
        let info = block::explore(grid, pos, dp, cc);
        if let Some(next) = info.exit.step(dp, grid.width(), grid.height()) {
            if !grid.at(next).is_black() {
                return Some(BlockStep {
                    position: next,
                    dp,
                    cc,
                    block_size: info.size,
                });
            }
        }
        if attempt % 2 == 0 {
            cc = cc.toggle();
        } else {
            dp = dp.rotate_clockwise(1);
        }
    }
    None
}

/// Slides through a run of white codels one step at a time. On hitting
/// black or the grid edge, DP rotates clockwise and CC toggles together,
/// up to 8 attempts, matching the reference implementation's handling of
/// white regions (spec's white-slide rule; loop detection inside large
/// enclosed white regions beyond this bound is explicitly not attempted).
pub fn white_slide(
    grid: &Grid,
    mut pos: Position,
    mut dp: Direction,
    mut cc: CodelChooser,
) -> Option<(Position, Direction, CodelChooser)> {
    let mut attempts = 0;
    while grid.at(pos).is_white() {
        match pos.step(dp, grid.width(), grid.height()) {
            Some(next) if !grid.at(next).is_black() => pos = next,
            _ => {
                attempts += 1;
                if attempts >= 8 {
                    return None;
                }
                dp = dp.rotate_clockwise(1);
                cc = cc.toggle();
            }
        }
    }
    Some((pos, dp, cc))
}
