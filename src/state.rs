//! Execution state: the fish's position and heading, string mode, and the
//! stack of stacks it operates on.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::stack::Stack;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Reverse the moved elements when opening and closing stacks, matching
    /// the fishlanguage.com interpreter.
    pub compatibility: bool,
    /// Seed for `x`. Entropy is used when absent.
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub struct Fish {
    pub(crate) grid: Grid,
    pub(crate) x: usize,
    pub(crate) y: usize,
    pub(crate) direction: Direction,
    pub(crate) string_delimiter: Option<u8>,
    stacks: Vec<Stack>,
    active: usize,
    compatibility: bool,
    pub(crate) rng: StdRng,
    pub(crate) halted: bool,
    pub(crate) skip_next: bool,
    pub(crate) jumped: bool,
}

impl Fish {
    pub fn new(grid: Grid, initial: Vec<f64>, options: Options) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Fish {
            grid,
            x: 0,
            y: 0,
            direction: Direction::Right,
            string_delimiter: None,
            stacks: vec![Stack::from_values(initial)],
            active: 0,
            compatibility: options.compatibility,
            rng,
            halted: false,
            skip_next: false,
            jumped: false,
        }
    }

    /// Parses `src` and places the fish at the top-left corner facing right.
    pub fn load(src: &str, initial: Vec<f64>, options: Options) -> Result<Self> {
        Ok(Self::new(Grid::parse(src)?, initial, options))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn string_delimiter(&self) -> Option<u8> {
        self.string_delimiter
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Number of stacks currently open, the bottom one included.
    pub fn depth(&self) -> usize {
        self.active + 1
    }

    pub fn stack(&self) -> &Stack {
        &self.stacks[self.active]
    }

    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stacks[self.active]
    }

    pub fn push(&mut self, value: f64) {
        self.stack_mut().push(value);
    }

    pub fn pop(&mut self) -> Result<f64> {
        self.stack_mut().pop()
    }

    pub fn stack_length(&self) -> f64 {
        self.stack().len() as f64
    }

    /// `[`: moves the top `n` elements of the active stack onto a new stack,
    /// which becomes active. A slot left behind by an earlier `]` is reused.
    pub fn new_stack(&mut self, n: usize) -> Result<()> {
        let moved = self.stacks[self.active].split_off_top(n)?;
        self.active += 1;
        if self.active == self.stacks.len() {
            self.stacks.push(Stack::from_values(moved));
        } else {
            self.stacks[self.active].refill(moved);
        }
        if self.compatibility {
            self.stacks[self.active].reverse();
        }
        debug!(depth = self.depth(), moved = n, "opened stack");
        Ok(())
    }

    /// `]`: appends the active stack onto its parent and makes the parent active.
    pub fn close_stack(&mut self) -> Result<()> {
        if self.active == 0 {
            return Err(Error::NoParentStack);
        }
        let mut closed = self.stacks[self.active].take_cells();
        if self.compatibility {
            closed.reverse();
        }
        let moved = closed.len();
        self.active -= 1;
        self.stacks[self.active].extend(closed);
        debug!(depth = self.depth(), moved, "closed stack");
        Ok(())
    }
}
