//! An interpreter for ><>, a two-dimensional stack language.
//!
//! A program is a rectangular grid of instruction bytes. A single
//! instruction pointer (the fish) swims across it, wrapping at the edges,
//! and executes whatever it lands on against a stack of stacks.

pub mod direction;
pub mod dispatch;
pub mod error;
pub mod grid;
pub mod input;
pub mod render;
pub mod stack;
pub mod state;
pub mod stepper;

pub use direction::Direction;
pub use error::{Error, Result};
pub use grid::Grid;
pub use input::{Input, InputQueue, NoInput};
pub use stack::Stack;
pub use state::{Fish, Options};
pub use stepper::Step;
