//! Cyclic win/lose/draw resolution.

use super::MoveSet;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Result of one round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Draw,
    ComputerWins,
    UserWins,
}

impl Outcome {
    /// Text shown to the player
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Draw => "Draw",
            Outcome::ComputerWins => "Computer wins!",
            Outcome::UserWins => "You win!",
        }
    }

    /// The same result seen with the players swapped
    pub fn reversed(&self) -> Outcome {
        match self {
            Outcome::Draw => Outcome::Draw,
            Outcome::ComputerWins => Outcome::UserWins,
            Outcome::UserWins => Outcome::ComputerWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rules engine for an odd cycle of moves.
///
/// A move at position `c` beats the move at `u` when `c` lies within the
/// `half` positions after `u` on the cycle.
#[derive(Clone, Debug)]
pub struct CyclicRules {
    moves: MoveSet,
    half: usize,
}

impl CyclicRules {
    pub fn new(moves: MoveSet) -> Self {
        let half = moves.half();
        Self { moves, half }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Resolve a round from the two labels
    pub fn resolve(&self, user_move: &str, computer_move: &str) -> Result<Outcome, GameError> {
        let u = self.index_of(user_move)?;
        let c = self.index_of(computer_move)?;
        Ok(self.resolve_indices(u, c))
    }

    /// Resolve a round from 0-based indices into the move set.
    ///
    /// `delta = ((c - u + half + n) mod n) - half` lies in `[-half, half]`;
    /// its sign picks the winner.
    pub fn resolve_indices(&self, user: usize, computer: usize) -> Outcome {
        let n = self.moves.len();
        debug_assert!(user < n && computer < n);

        // Adding `half + n` before subtracting `user` keeps everything unsigned.
        let shifted = (computer + self.half + n - user) % n;
        match shifted.cmp(&self.half) {
            Ordering::Equal => Outcome::Draw,
            Ordering::Greater => Outcome::ComputerWins,
            Ordering::Less => Outcome::UserWins,
        }
    }

    /// Full outcome grid: `grid[computer][user]`
    pub fn matrix(&self) -> Vec<Vec<Outcome>> {
        let n = self.moves.len();
        (0..n)
            .map(|computer| (0..n).map(|user| self.resolve_indices(user, computer)).collect())
            .collect()
    }

    fn index_of(&self, label: &str) -> Result<usize, GameError> {
        self.moves
            .position(label)
            .ok_or_else(|| GameError::LabelNotFound(label.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> CyclicRules {
        CyclicRules::new(MoveSet::validate(["rock", "paper", "scissors"]).unwrap())
    }

    fn sized(n: usize) -> CyclicRules {
        let labels: Vec<String> = (0..n).map(|i| format!("m{i}")).collect();
        CyclicRules::new(MoveSet::validate(labels).unwrap())
    }

    #[test]
    fn test_rock_beats_scissors() {
        let rules = classic();
        assert_eq!(rules.resolve("rock", "scissors").unwrap(), Outcome::UserWins);
        assert_eq!(rules.resolve("scissors", "rock").unwrap(), Outcome::ComputerWins);
    }

    #[test]
    fn test_paper_beats_rock() {
        let rules = classic();
        assert_eq!(rules.resolve("paper", "rock").unwrap(), Outcome::UserWins);
        assert_eq!(rules.resolve("rock", "paper").unwrap(), Outcome::ComputerWins);
    }

    #[test]
    fn test_scissors_beats_paper() {
        let rules = classic();
        assert_eq!(rules.resolve("scissors", "paper").unwrap(), Outcome::UserWins);
        assert_eq!(rules.resolve("paper", "scissors").unwrap(), Outcome::ComputerWins);
    }

    #[test]
    fn test_same_move_draws() {
        for n in [3, 5, 7, 9] {
            let rules = sized(n);
            for i in 0..n {
                assert_eq!(rules.resolve_indices(i, i), Outcome::Draw);
            }
        }
    }

    #[test]
    fn test_antisymmetry() {
        for n in [3, 5, 7, 9] {
            let rules = sized(n);
            for i in 0..n {
                for j in 0..n {
                    assert_eq!(
                        rules.resolve_indices(i, j),
                        rules.resolve_indices(j, i).reversed(),
                        "n={n} i={i} j={j}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_each_move_beats_exactly_half() {
        for n in [3, 5, 7, 9, 11] {
            let rules = sized(n);
            for user in 0..n {
                let wins = (0..n)
                    .filter(|&c| rules.resolve_indices(user, c) == Outcome::UserWins)
                    .count();
                let losses = (0..n)
                    .filter(|&c| rules.resolve_indices(user, c) == Outcome::ComputerWins)
                    .count();
                assert_eq!(wins, n / 2);
                assert_eq!(losses, n / 2);
            }
        }
    }

    #[test]
    fn test_next_move_wins_and_wraps() {
        let rules = sized(5);
        // m1 follows m0, so m1 wins
        assert_eq!(rules.resolve_indices(0, 1), Outcome::ComputerWins);
        // m0 follows m4 around the cycle
        assert_eq!(rules.resolve_indices(0, 4), Outcome::UserWins);
        assert_eq!(rules.resolve_indices(0, 2), Outcome::ComputerWins);
        assert_eq!(rules.resolve_indices(0, 3), Outcome::UserWins);
    }

    #[test]
    fn test_unknown_label_is_an_error() {
        let rules = classic();
        assert!(matches!(
            rules.resolve("lizard", "rock"),
            Err(GameError::LabelNotFound(label)) if label == "lizard"
        ));
        assert!(matches!(
            rules.resolve("rock", "Spock"),
            Err(GameError::LabelNotFound(label)) if label == "Spock"
        ));
    }

    #[test]
    fn test_matrix_matches_resolve() {
        let rules = sized(7);
        let grid = rules.matrix();
        assert_eq!(grid.len(), 7);
        for (computer, row) in grid.iter().enumerate() {
            assert_eq!(row.len(), 7);
            for (user, cell) in row.iter().enumerate() {
                assert_eq!(*cell, rules.resolve_indices(user, computer));
            }
        }
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        assert_eq!(Outcome::ComputerWins.to_string(), "Computer wins!");
        assert_eq!(Outcome::UserWins.to_string(), "You win!");
    }
}
