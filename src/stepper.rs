//! One instruction cycle, and the loop that repeats it until `;`.

use std::io::Write;

use tracing::{info, trace};

use crate::error::Result;
use crate::input::Input;
use crate::state::Fish;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Running,
    Halted,
}

impl Fish {
    /// Reads the cell under the fish, executes it, then swims one cell on.
    /// Faults are returned untouched; the fish stays on the faulting cell.
    pub fn step<I: Input, W: Write>(&mut self, input: &mut I, out: &mut W) -> Result<Step> {
        if self.halted {
            return Ok(Step::Halted);
        }

        let op = self.grid.get(self.x, self.y);
        trace!(x = self.x, y = self.y, op = %char::from(op), "step");
        match self.string_delimiter {
            Some(delimiter) if delimiter != op => self.push(op as f64),
            _ => self.execute(op, input, out)?,
        }

        if self.halted {
            info!(x = self.x, y = self.y, "fish halted");
            return Ok(Step::Halted);
        }
        self.move_pointer();
        Ok(Step::Running)
    }

    fn move_pointer(&mut self) {
        if self.jumped {
            self.jumped = false;
            self.skip_next = false;
            return;
        }
        (self.x, self.y) = self.grid.advance(self.x, self.y, self.direction);
        if self.skip_next {
            self.skip_next = false;
            (self.x, self.y) = self.grid.advance(self.x, self.y, self.direction);
        }
    }

    /// Steps until the program halts or faults, returning the number of
    /// cycles executed.
    pub fn run<I: Input, W: Write>(&mut self, input: &mut I, out: &mut W) -> Result<u64> {
        let mut cycles = 0;
        loop {
            cycles += 1;
            if self.step(input, out)? == Step::Halted {
                return Ok(cycles);
            }
        }
    }

    /// Like [`Fish::run`], but gives up after `limit` cycles. Returns the
    /// cycle count and whether the program halted on its own.
    pub fn run_bounded<I: Input, W: Write>(&mut self, input: &mut I, out: &mut W, limit: u64) -> Result<(u64, bool)> {
        for cycle in 1..=limit {
            if self.step(input, out)? == Step::Halted {
                return Ok((cycle, true));
            }
        }
        Ok((limit, false))
    }
}
