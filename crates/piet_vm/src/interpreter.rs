//! The executor: drives the grid, stack, navigator, operation dispatch
//! and I/O collaborator through a program run to completion (spec §4.7).

use log::{debug, trace};

use crate::direction::{CodelChooser, Direction, Position};
use crate::grid::Grid;
use crate::io::Io;
use crate::navigator::{block_step, white_slide};
use crate::ops::{operation_for, Operation};
use crate::stack::Stack;

/// Why a run stopped. `Halted` is the only outcome a well-formed Piet
/// program produces on its own; there is no error outcome because a
/// running program never fails (spec §7 reserves errors for load time).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The pointer exhausted the 8-attempt dance (block-step or
    /// white-slide) and the program terminated.
    Halted,
}

/// Owns the mutable state of one program run: the grid, the stack, and
/// the pointer (position, DP, CC).
pub struct Interpreter<'a> {
    grid: Grid,
    stack: Stack,
    pos: Position,
    dp: Direction,
    cc: CodelChooser,
    io: &'a mut dyn Io,
}

impl<'a> Interpreter<'a> {
    /// Starts a run at the top-left codel, DP right, CC left — the
    /// canonical Piet entry state (spec §3).
    pub fn new(grid: Grid, io: &'a mut dyn Io) -> Self {
        Self {
            grid,
            stack: Stack::new(),
            pos: Position::new(0, 0),
            dp: Direction::Right,
            cc: CodelChooser::Left,
            io,
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Runs the program to completion. Piet has no notion of a bound on
    /// step count; an infinite program runs forever, matching the
    /// reference implementation.
    pub fn run(mut self) -> Outcome {
        loop {
            let current = self.grid.at(self.pos);

            if current.is_black() {
                // Starting or landing on black never happens via a normal
                // block-step (which already filters black landings), but a
                // program whose very first codel is black must still halt
                // without advancing.
                return Outcome::Halted;
            }

            if current.is_white() {
                match white_slide(&self.grid, self.pos, self.dp, self.cc) {
                    Some((pos, dp, cc)) => {
                        self.pos = pos;
                        self.dp = dp;
                        self.cc = cc;
                        continue;
                    }
                    None => return Outcome::Halted,
                }
            }

            let step = match block_step(&mut self.grid, self.pos, self.dp, self.cc) {
                Some(step) => step,
                None => return Outcome::Halted,
            };

            let landing = self.grid.at(step.position);
            if landing.is_chromatic() {
                if let Some(op) = delta_operation(current, landing) {
                    trace!("{:?} at {:?} -> {:?}", op, self.pos, step.position);
                    self.apply(op, step.block_size);
                }
            }

            self.pos = step.position;
            self.dp = step.dp;
            self.cc = step.cc;
        }
    }

    fn apply(&mut self, op: Operation, block_size: usize) {
        match op {
            Operation::Push => self.stack.push(block_size as i32),
            Operation::Pop => self.stack.pop_discard(),
            Operation::Add => self.stack.add(),
            Operation::Subtract => self.stack.sub(),
            Operation::Multiply => self.stack.mul(),
            Operation::Divide => self.stack.div(),
            Operation::Mod => self.stack.modulo(),
            Operation::Not => self.stack.not(),
            Operation::Greater => self.stack.greater(),
            Operation::Pointer => {
                if let Some(n) = self.stack.pop() {
                    self.dp = self.dp.rotate_clockwise(n);
                }
            }
            Operation::Switch => {
                if let Some(n) = self.stack.pop() {
                    if n.rem_euclid(2) == 1 {
                        self.cc = self.cc.toggle();
                    }
                }
            }
            Operation::Duplicate => self.stack.duplicate(),
            Operation::Roll => {
                if self.stack.depth() >= 2 {
                    let rolls = self.stack.pop().unwrap();
                    let depth = self.stack.pop().unwrap();
                    self.stack.roll(depth, rolls);
                }
            }
            Operation::InNumber => {
                if let Some(v) = self.io.read_number() {
                    self.stack.push(v);
                }
            }
            Operation::InChar => {
                if let Some(v) = self.io.read_char() {
                    self.stack.push(v);
                }
            }
            Operation::OutNumber => {
                if let Some(v) = self.stack.pop() {
                    self.io.write_number(v);
                }
            }
            Operation::OutChar => {
                if let Some(v) = self.stack.pop() {
                    self.io.write_char(v);
                }
            }
        }
        debug!("stack depth now {}", self.stack.depth());
    }
}

/// The operation for the transition between two chromatic cells, or
/// `None` if they're the same colour (not a real block-step at all, but
/// defensive: `block_step` never returns a same-colour landing).
fn delta_operation(from: crate::cell::Cell, to: crate::cell::Cell) -> Option<Operation> {
    let (h0, l0) = (from.hue()?, from.lightness()?);
    let (h1, l1) = (to.hue()?, to.lightness()?);
    operation_for(h1 as i32 - h0 as i32, l1 as i32 - l0 as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, Hue, Lightness};
    use crate::io::BufferIo;

    fn grid_of(width: usize, height: usize, cells: Vec<Cell>) -> Grid {
        Grid::new(width, height, cells).unwrap()
    }

    #[test]
    fn single_codel_program_halts_immediately() {
        let grid = grid_of(1, 1, vec![Cell::chromatic(Hue::Red, Lightness::Normal)]);
        let mut io = BufferIo::new();
        let outcome = Interpreter::new(grid, &mut io).run();
        assert_eq!(outcome, Outcome::Halted);
    }

    #[test]
    fn starting_on_black_halts_without_advancing() {
        let grid = grid_of(1, 1, vec![Cell::black()]);
        let mut io = BufferIo::new();
        let outcome = Interpreter::new(grid, &mut io).run();
        assert_eq!(outcome, Outcome::Halted);
        assert!(io.writes.is_empty());
    }

    // A bare 1×N strip with no black walls never halts: the last codel's
    // forward exit is blocked, but the block-step dance's rotation always
    // finds "backward" open (straight into the block it just left), so
    // the pointer bounces there and back forever. Every test below instead
    // ends its program in a 3-wide dead-end block: the predecessor sits
    // under the *middle* codel of the row, which the DP/CC extremum rule
    // never selects as an exit candidate (it only ever picks the row's two
    // ends), so all 4 directions × 2 codel choosers genuinely fail and the
    // program halts for real.

    #[test]
    fn push_then_output_number() {
        // Row 0: a red block of size 3 (push operand) into a red-dark
        // codel. Row 1: a blue-dark codel, reached by rotating DP
        // downward once red-dark's forward exit hits black. Row 2: a
        // 3-wide cyan-light dead end, entered under its middle codel.
        let red = Cell::chromatic(Hue::Red, Lightness::Normal);
        let red_dark = Cell::chromatic(Hue::Red, Lightness::Dark);
        let blue_dark = Cell::chromatic(Hue::Blue, Lightness::Dark);
        let cyan_light = Cell::chromatic(Hue::Cyan, Lightness::Light);
        let black = Cell::black();
        let cells = vec![
            red, red, red, red_dark, black, //
            black, black, black, blue_dark, black, //
            black, black, cyan_light, cyan_light, cyan_light, //
        ];
        let grid = grid_of(5, 3, cells);
        let mut io = BufferIo::new();
        let outcome = Interpreter::new(grid, &mut io).run();
        assert_eq!(outcome, Outcome::Halted);
        assert_eq!(io.writes, vec![3]);
    }

    #[test]
    fn add_sums_two_pushed_block_sizes() {
        // Row 0: red-light (push 2), red-normal (push 1), red-dark
        // (add, leaving 3), yellow-dark, red-light (out number, writes
        // 3). Rows 1–2 route the pointer down into a 3-wide dead end.
        let light = Cell::chromatic(Hue::Red, Lightness::Light);
        let normal = Cell::chromatic(Hue::Red, Lightness::Normal);
        let dark = Cell::chromatic(Hue::Red, Lightness::Dark);
        let yellow_dark = Cell::chromatic(Hue::Yellow, Lightness::Dark);
        let blue_light = Cell::chromatic(Hue::Blue, Lightness::Light);
        let cyan_light = Cell::chromatic(Hue::Cyan, Lightness::Light);
        let black = Cell::black();
        let cells = vec![
            light, light, normal, dark, yellow_dark, light, black, //
            black, black, black, black, black, blue_light, black, //
            black, black, black, black, cyan_light, cyan_light, cyan_light, //
        ];
        let grid = grid_of(7, 3, cells);
        let mut io = BufferIo::new();
        let outcome = Interpreter::new(grid, &mut io).run();
        assert_eq!(outcome, Outcome::Halted);
        assert_eq!(io.writes, vec![3]);
    }

    #[test]
    fn white_region_is_transparent_to_operations() {
        // Red into a 2-codel white run into blue: no operation fires for
        // crossing the white region itself. Rows 1–2 route the pointer
        // down into a dead end so the run actually terminates.
        let red = Cell::chromatic(Hue::Red, Lightness::Normal);
        let white = Cell::white();
        let blue = Cell::chromatic(Hue::Blue, Lightness::Normal);
        let yellow = Cell::chromatic(Hue::Yellow, Lightness::Normal);
        let cyan_light = Cell::chromatic(Hue::Cyan, Lightness::Light);
        let black = Cell::black();
        let cells = vec![
            red, white, white, blue, black, //
            black, black, black, yellow, black, //
            black, black, cyan_light, cyan_light, cyan_light, //
        ];
        let grid = grid_of(5, 3, cells);
        let mut io = BufferIo::new();
        let outcome = Interpreter::new(grid, &mut io).run();
        assert_eq!(outcome, Outcome::Halted);
        assert!(io.writes.is_empty());
    }

    #[test]
    fn pointer_rotates_dp_by_popped_amount() {
        // red normal -> cyan dark is (+3, +1) = Pointer. The stack is
        // empty so the pop is a no-op and DP is unaffected, but the
        // dispatch itself must not panic. Row 2 is the dead end.
        let red = Cell::chromatic(Hue::Red, Lightness::Normal);
        let cyan_dark = Cell::chromatic(Hue::Cyan, Lightness::Dark);
        let cyan_normal = Cell::chromatic(Hue::Cyan, Lightness::Normal);
        let cyan_light = Cell::chromatic(Hue::Cyan, Lightness::Light);
        let black = Cell::black();
        let cells = vec![
            red, cyan_dark, black, //
            black, cyan_normal, black, //
            cyan_light, cyan_light, cyan_light, //
        ];
        let grid = grid_of(3, 3, cells);
        let mut io = BufferIo::new();
        let outcome = Interpreter::new(grid, &mut io).run();
        assert_eq!(outcome, Outcome::Halted);
    }
}
