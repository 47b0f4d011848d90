//! The instruction table.

use std::io::Write;

use rand::Rng;
use tracing::debug;

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::input::Input;
use crate::render;
use crate::state::Fish;

fn truth(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

impl Fish {
    /// Executes `op` against the current state. Movement is left to the
    /// stepper; `!`, `?`, `.` and `;` only raise flags for it.
    pub(crate) fn execute<I: Input, W: Write>(&mut self, op: u8, input: &mut I, out: &mut W) -> Result<()> {
        match op {
            b' ' => {}
            b';' => self.halted = true,

            b'>' => self.direction = Direction::Right,
            b'v' => self.direction = Direction::Down,
            b'<' => self.direction = Direction::Left,
            b'^' => self.direction = Direction::Up,
            b'/' => self.direction = self.direction.slash(),
            b'\\' => self.direction = self.direction.backslash(),
            b'|' => self.direction = self.direction.vertical_mirror(),
            b'_' => self.direction = self.direction.horizontal_mirror(),
            b'#' => self.direction = self.direction.reversed(),
            b'x' => self.direction = Direction::ALL[self.rng.gen_range(0..4)],

            b'"' | b'\'' => match self.string_delimiter {
                None => self.string_delimiter = Some(op),
                Some(open) if open == op => self.string_delimiter = None,
                Some(_) => self.push(op as f64),
            },

            b'0'..=b'9' => self.push((op - b'0') as f64),
            b'a'..=b'f' => self.push((op - b'a' + 10) as f64),

            b'+' => self.binary(|b, a| Ok(b + a))?,
            b'-' => self.binary(|b, a| Ok(b - a))?,
            b'*' => self.binary(|b, a| Ok(b * a))?,
            b',' => self.binary(|b, a| Ok(b / a))?,
            b'%' => self.binary(|b, a| {
                let (b, a) = (b as i64, a as i64);
                if a == 0 {
                    return Err(Error::DivisionByZero);
                }
                Ok(b.wrapping_rem(a) as f64)
            })?,
            b'=' => self.binary(|b, a| Ok(truth(b == a)))?,
            b')' => self.binary(|b, a| Ok(truth(b > a)))?,
            b'(' => self.binary(|b, a| Ok(truth(b < a)))?,

            b'!' => self.skip_next = true,
            b'?' => {
                if self.pop()? == 0.0 {
                    self.skip_next = true;
                }
            }
            b'.' => {
                let y = self.pop()?;
                let x = self.pop()?;
                let (x, y) = self.grid.locate(x, y)?;
                self.x = x;
                self.y = y;
                self.jumped = true;
            }

            b'&' => self.stack_mut().register_toggle()?,
            b':' => self.stack_mut().duplicate_top()?,
            b'~' => {
                self.pop()?;
            }
            b'$' => self.stack_mut().swap_top_two()?,
            b'@' => self.stack_mut().rotate_top_three()?,
            b'}' => self.stack_mut().shift_right()?,
            b'{' => self.stack_mut().shift_left()?,
            b'r' => self.stack_mut().reverse(),
            b'l' => self.push(self.stack_length()),
            b'[' => {
                let n = self.pop()?;
                if !n.is_finite() || n < 0.0 {
                    return Err(Error::BadStackSize(n));
                }
                self.new_stack(n as usize)?;
            }
            b']' => self.close_stack()?,

            b'o' => {
                let c = char::from_u32(self.pop()? as u32).unwrap_or(char::REPLACEMENT_CHARACTER);
                write!(out, "{c}")?;
            }
            b'n' => {
                let v = self.pop()?;
                out.write_all(render::number(v).as_bytes())?;
            }
            b'i' => {
                let v = input.poll_byte().map_or(-1.0, f64::from);
                self.push(v);
            }

            b'g' => {
                let y = self.pop()?;
                let x = self.pop()?;
                let (x, y) = self.grid.locate(x, y)?;
                self.push(self.grid.get(x, y) as f64);
            }
            b'p' => {
                let y = self.pop()?;
                let x = self.pop()?;
                let v = self.pop()?;
                let (x, y) = self.grid.locate(x, y)?;
                let byte = (v as i64) as u8;
                debug!(x, y, byte, "cell rewritten");
                self.grid.set(x, y, byte);
            }

            _ => {
                return Err(Error::InvalidInstruction { byte: op, x: self.x, y: self.y });
            }
        }
        Ok(())
    }

    /// Pops `a` then `b` and pushes `f(b, a)`.
    fn binary<F: FnOnce(f64, f64) -> Result<f64>>(&mut self, f: F) -> Result<()> {
        let a = self.pop()?;
        let b = self.pop()?;
        let result = f(b, a)?;
        self.push(result);
        Ok(())
    }
}
