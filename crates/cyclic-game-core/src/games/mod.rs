//! Move sets, cyclic rules, and the help table.

mod matrix;
mod moves;
mod rules;

pub use matrix::{HelpMatrix, PERSPECTIVE_NOTE};
pub use moves::{MoveSet, MIN_MOVES};
pub use rules::{CyclicRules, Outcome};
