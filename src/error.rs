//! Interpreter errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("stack needs {needed} element(s) but holds {available}")]
    EmptyStack { needed: usize, available: usize },

    #[error("cannot split off {0} element(s) into a new stack")]
    BadStackSize(f64),

    #[error("cannot close the bottom stack")]
    NoParentStack,

    #[error("invalid instruction {:?} (0x{byte:02x}) at ({x}, {y})", as_char(.byte))]
    InvalidInstruction { byte: u8, x: usize, y: usize },

    #[error("cannot accept an empty program (no room for the fish to survive)")]
    EmptyProgram,

    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: f64, y: f64 },

    #[error("modulo by zero")]
    DivisionByZero,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}

impl Error {
    /// True for faults raised while the program is running, as opposed to
    /// load-time configuration errors.
    pub fn is_runtime(&self) -> bool {
        !matches!(self, Error::EmptyProgram)
    }
}
