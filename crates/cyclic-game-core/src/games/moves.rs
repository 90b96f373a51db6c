//! Move set and its structural validation.

use crate::error::ConfigError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Smallest playable move set
pub const MIN_MOVES: usize = 3;

/// Ordered, odd-sized list of unique move labels.
///
/// The order defines the cycle: each move beats the `len() / 2` moves that
/// precede it (wrapping around) and loses to the `len() / 2` that follow it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet {
    moves: Vec<String>,
}

impl MoveSet {
    /// Validate a list of labels and build the move set.
    ///
    /// Rejects, in this order: fewer than three labels, an even count, and
    /// any label that appears twice (case-sensitive).
    pub fn validate<I, S>(labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = labels.into_iter().map(Into::into).collect();

        if moves.len() < MIN_MOVES {
            return Err(ConfigError::TooFewMoves(moves.len()));
        }
        if moves.len() % 2 == 0 {
            return Err(ConfigError::EvenMoveCount(moves.len()));
        }

        let mut seen = HashSet::with_capacity(moves.len());
        if let Some(dup) = moves.iter().find(|m| !seen.insert(m.as_str())) {
            return Err(ConfigError::DuplicateMove(dup.clone()));
        }

        Ok(Self { moves })
    }

    /// Number of moves (always odd, at least 3)
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false for a validated set
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Number of moves each move beats (and loses to)
    pub fn half(&self) -> usize {
        self.moves.len() / 2
    }

    /// Label at a 1-based menu position
    pub fn by_number(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.moves.get(i))
            .map(String::as_str)
    }

    /// Label at a 0-based index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.moves.get(index).map(String::as_str)
    }

    /// 0-based index of a label (exact match)
    pub fn position(&self, label: &str) -> Option<usize> {
        self.moves.iter().position(|m| m == label)
    }

    /// Pick a move uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Validated sets hold at least MIN_MOVES labels.
        &self.moves[rng.gen_range(0..self.moves.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.moves
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = ConfigError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::validate(labels)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(set: MoveSet) -> Self {
        set.moves
    }
}
