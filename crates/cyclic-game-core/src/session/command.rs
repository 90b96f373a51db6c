//! Per-round console commands.

/// Input that ends the session
pub const EXIT_TOKEN: &str = "0";

/// Input that shows the results table
pub const HELP_TOKEN: &str = "?";

/// Parsed line of user input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    /// 1-based menu number, already checked against the move count
    Play(usize),
    Invalid(String),
}

impl Command {
    /// Parse one line of input against a menu of `move_count` moves
    pub fn parse(input: &str, move_count: usize) -> Self {
        let input = input.trim();
        match input {
            EXIT_TOKEN => Command::Exit,
            HELP_TOKEN => Command::Help,
            _ => match input.parse::<usize>() {
                Ok(n) if (1..=move_count).contains(&n) => Command::Play(n),
                _ => Command::Invalid(input.to_string()),
            },
        }
    }
}
