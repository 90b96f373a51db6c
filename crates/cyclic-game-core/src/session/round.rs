//! One commit-reveal round.

use crate::crypto::{Commitment, CommitmentKey};
use crate::error::GameError;
use crate::games::{CyclicRules, MoveSet, Outcome};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A round whose computer move is fixed and committed but not yet revealed
pub struct Round {
    computer_move: String,
    key: CommitmentKey,
    commitment: Commitment,
}

impl Round {
    /// Draw a computer move and a fresh key from `rng`, then commit
    pub fn begin<R: RngCore + CryptoRng>(moves: &MoveSet, rng: &mut R) -> Self {
        let computer_move = moves.choose(rng).to_string();
        let key = CommitmentKey::random_with(rng);
        Self::commit(computer_move, key)
    }

    /// Commit to a known move under a known key
    pub fn commit(computer_move: String, key: CommitmentKey) -> Self {
        let commitment = Commitment::new(&key, &computer_move);
        Self {
            computer_move,
            key,
            commitment,
        }
    }

    /// Digest published before the user chooses
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Resolve against the user's move and disclose the key.
    /// Consumes the round so the key cannot back a second move.
    pub fn settle(self, rules: &CyclicRules, user_move: &str) -> Result<RoundReport, GameError> {
        let outcome = rules.resolve(user_move, &self.computer_move)?;
        Ok(RoundReport {
            user_move: user_move.to_string(),
            computer_move: self.computer_move,
            outcome,
            hmac: self.commitment,
            key: self.key.reveal(),
        })
    }
}

impl fmt::Debug for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Round")
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

/// Everything disclosed once a round is settled
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub user_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
    /// The digest published at the start of the round
    pub hmac: Commitment,
    /// Revealed key, lowercase hex
    pub key: String,
}

impl RoundReport {
    /// Recompute the published digest from the revealed key and computer move
    pub fn verify(&self) -> bool {
        match self.key.parse::<CommitmentKey>() {
            Ok(key) => self.hmac.verify(&key, &self.computer_move),
            Err(_) => false,
        }
    }
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your move: {}", self.user_move)?;
        writeln!(f, "Computer move: {}", self.computer_move)?;
        writeln!(f, "{}", self.outcome)?;
        write!(f, "HMAC key: {}", self.key)
    }
}
