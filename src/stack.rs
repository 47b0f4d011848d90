//! A single ><> stack: a run of numeric cells plus one register slot.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    cells: Vec<f64>,
    register: Option<f64>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(cells: Vec<f64>) -> Self {
        Stack { cells, register: None }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells from bottom to top.
    pub fn values(&self) -> &[f64] {
        &self.cells
    }

    pub fn register(&self) -> Option<f64> {
        self.register
    }

    pub fn push(&mut self, value: f64) {
        self.cells.push(value);
    }

    pub fn pop(&mut self) -> Result<f64> {
        self.cells.pop().ok_or(Error::EmptyStack { needed: 1, available: 0 })
    }

    fn require(&self, needed: usize) -> Result<()> {
        if self.cells.len() < needed {
            return Err(Error::EmptyStack { needed, available: self.cells.len() });
        }
        Ok(())
    }

    /// `&`: move the top into an empty register, or the register back onto the top.
    pub fn register_toggle(&mut self) -> Result<()> {
        match self.register.take() {
            Some(value) => self.push(value),
            None => self.register = Some(self.pop()?),
        }
        Ok(())
    }

    /// `:`
    pub fn duplicate_top(&mut self) -> Result<()> {
        let top = *self.cells.last().ok_or(Error::EmptyStack { needed: 1, available: 0 })?;
        self.push(top);
        Ok(())
    }

    /// `r`
    pub fn reverse(&mut self) {
        self.cells.reverse();
    }

    /// `$`
    pub fn swap_top_two(&mut self) -> Result<()> {
        self.require(2)?;
        let n = self.cells.len();
        self.cells.swap(n - 1, n - 2);
        Ok(())
    }

    /// `@`: `[.., a, b, c]` becomes `[.., b, c, a]`.
    pub fn rotate_top_three(&mut self) -> Result<()> {
        self.require(3)?;
        let n = self.cells.len();
        self.cells[n - 3..].rotate_left(1);
        Ok(())
    }

    /// `}`: the top moves to the bottom.
    pub fn shift_right(&mut self) -> Result<()> {
        self.require(1)?;
        self.cells.rotate_right(1);
        Ok(())
    }

    /// `{`: the bottom moves to the top.
    pub fn shift_left(&mut self) -> Result<()> {
        self.require(1)?;
        self.cells.rotate_left(1);
        Ok(())
    }

    /// Removes the top `n` cells, keeping their order.
    pub(crate) fn split_off_top(&mut self, n: usize) -> Result<Vec<f64>> {
        self.require(n)?;
        Ok(self.cells.split_off(self.cells.len() - n))
    }

    /// Replaces the contents with `cells` and empties the register.
    pub(crate) fn refill(&mut self, cells: Vec<f64>) {
        self.cells = cells;
        self.register = None;
    }

    pub(crate) fn take_cells(&mut self) -> Vec<f64> {
        std::mem::take(&mut self.cells)
    }

    pub(crate) fn extend(&mut self, cells: Vec<f64>) {
        self.cells.extend(cells);
    }
}
