//! Interactive play loop.

use super::command::{Command, EXIT_TOKEN, HELP_TOKEN};
use super::round::{Round, RoundReport};
use crate::error::GameError;
use crate::games::{CyclicRules, HelpMatrix, MoveSet};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Prompt printed before each read
pub const PROMPT: &str = "Enter your move: ";

/// Line printed when the session ends
pub const FAREWELL: &str = "Exiting the game.";

/// Line printed for unrecognised input
pub const INVALID_INPUT: &str = "Invalid input, Please try again.";

/// Where the session stands after handling one command
#[derive(Debug)]
pub enum Step {
    /// Waiting for the next line. Holds the round to keep, if any;
    /// `None` means the next iteration commits to a fresh move.
    AwaitingInput(Option<Round>),
    Terminated,
}

/// One game session over a fixed move set
pub struct Session<R> {
    rules: CyclicRules,
    rng: R,
    json_reports: bool,
}

impl Session<OsRng> {
    /// Session drawing moves and keys from the operating system's CSPRNG
    pub fn new(moves: MoveSet) -> Self {
        Self::with_rng(moves, OsRng)
    }
}

impl<R: RngCore + CryptoRng> Session<R> {
    pub fn with_rng(moves: MoveSet, rng: R) -> Self {
        Self {
            rules: CyclicRules::new(moves),
            rng,
            json_reports: false,
        }
    }

    /// Also print each settled round as a single JSON line
    pub fn json_reports(mut self, enabled: bool) -> Self {
        self.json_reports = enabled;
        self
    }

    pub fn rules(&self) -> &CyclicRules {
        &self.rules
    }

    /// Commit to a fresh computer move
    pub fn begin_round(&mut self) -> Round {
        let round = Round::begin(self.rules.moves(), &mut self.rng);
        debug!(hmac = %round.commitment(), "round committed");
        round
    }

    /// Print the digest and the move menu
    pub fn present<W: Write>(&self, round: &Round, out: &mut W) -> Result<(), GameError> {
        writeln!(out)?;
        writeln!(out, "HMAC: {}", round.commitment())?;
        writeln!(out, "Available moves:")?;
        for (i, label) in self.rules.moves().iter().enumerate() {
            writeln!(out, "{} - {}", i + 1, label)?;
        }
        writeln!(out, "{EXIT_TOKEN} - exit")?;
        writeln!(out, "{HELP_TOKEN} - help")?;
        write!(out, "{PROMPT}")?;
        out.flush()?;
        Ok(())
    }

    /// Apply one command to the pending round
    pub fn handle<W: Write>(
        &self,
        round: Round,
        command: Command,
        out: &mut W,
    ) -> Result<Step, GameError> {
        match command {
            Command::Exit => {
                writeln!(out, "{FAREWELL}")?;
                Ok(Step::Terminated)
            }
            Command::Help => {
                writeln!(out, "{}", HelpMatrix::new(&self.rules))?;
                Ok(Step::AwaitingInput(Some(round)))
            }
            Command::Play(number) => {
                let report = self.settle(round, number)?;
                writeln!(out, "{report}")?;
                if self.json_reports {
                    writeln!(out, "{}", serde_json::to_string(&report)?)?;
                }
                Ok(Step::AwaitingInput(None))
            }
            Command::Invalid(input) => {
                debug!(%input, "discarding round after invalid input");
                writeln!(out, "{INVALID_INPUT}")?;
                Ok(Step::AwaitingInput(None))
            }
        }
    }

    fn settle(&self, round: Round, number: usize) -> Result<RoundReport, GameError> {
        let user_move = self
            .rules
            .moves()
            .by_number(number)
            .ok_or_else(|| GameError::LabelNotFound(number.to_string()))?;
        let report = round.settle(&self.rules, user_move)?;
        info!(
            user_move = %report.user_move,
            computer_move = %report.computer_move,
            outcome = ?report.outcome,
            "round settled"
        );
        Ok(report)
    }

    /// Run rounds until the user exits or input ends.
    /// Returns the number of rounds that were settled.
    pub fn run<I: BufRead, W: Write>(&mut self, mut input: I, mut out: W) -> Result<usize, GameError> {
        let mut pending: Option<Round> = None;
        let mut settled = 0;
        let mut line = Vec::new();

        loop {
            let round = match pending.take() {
                Some(round) => round,
                None => self.begin_round(),
            };
            self.present(&round, &mut out)?;

            line.clear();
            let command = if input.read_until(b'\n', &mut line)? == 0 {
                warn!("input closed, ending session");
                writeln!(out)?;
                Command::Exit
            } else {
                // Undecodable bytes become replacement characters and parse as invalid input.
                Command::parse(&String::from_utf8_lossy(&line), self.rules.moves().len())
            };

            let playing = matches!(command, Command::Play(_));
            match self.handle(round, command, &mut out)? {
                Step::AwaitingInput(next) => {
                    if playing {
                        settled += 1;
                    }
                    pending = next;
                }
                Step::Terminated => break,
            }
        }

        out.flush()?;
        info!(rounds = settled, "session finished");
        Ok(settled)
    }
}
