//! The codebox: a rectangular, space-padded grid of instruction bytes.

use crate::direction::Direction;
use crate::error::{Error, Result};

pub const FILL: u8 = b' ';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<u8>>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Builds a grid from program text. Carriage returns are dropped, every
    /// `\n` starts a row (a trailing one included) and rows are padded with
    /// spaces to the longest.
    pub fn parse(src: &str) -> Result<Self> {
        let src = src.replace('\r', "");
        if src.trim().is_empty() {
            return Err(Error::EmptyProgram);
        }

        let lines: Vec<&[u8]> = src.split('\n').map(str::as_bytes).collect();
        let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
        let cells: Vec<Vec<u8>> = lines
            .iter()
            .map(|line| {
                let mut row = line.to_vec();
                row.resize(width, FILL);
                row
            })
            .collect();
        let height = cells.len();

        Ok(Grid { cells, width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Caller guarantees `x < width` and `y < height`.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.cells[y][x] = value;
    }

    /// Converts stack values into a cell address, truncating toward zero.
    pub fn locate(&self, x: f64, y: f64) -> Result<(usize, usize)> {
        let fits = |v: f64, bound: usize| v.is_finite() && v >= 0.0 && (v.trunc() as usize) < bound;
        if fits(x, self.width) && fits(y, self.height) {
            Ok((x.trunc() as usize, y.trunc() as usize))
        } else {
            Err(Error::OutOfBounds { x, y })
        }
    }

    /// One step from `(x, y)` towards `direction`, wrapping at every edge.
    pub fn advance(&self, x: usize, y: usize, direction: Direction) -> (usize, usize) {
        let (dx, dy) = direction.delta();
        let x = (x as isize + dx).rem_euclid(self.width as isize) as usize;
        let y = (y as isize + dy).rem_euclid(self.height as isize) as usize;
        (x, y)
    }
}
