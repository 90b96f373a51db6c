//! Game session: commands, rounds, and the play loop.

mod command;
mod controller;
mod round;

pub use command::{Command, EXIT_TOKEN, HELP_TOKEN};
pub use controller::{Session, Step, FAREWELL, INVALID_INPUT, PROMPT};
pub use round::{Round, RoundReport};
