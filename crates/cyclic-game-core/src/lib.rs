//! Cyclic Game Core Library
//!
//! This crate provides the commit-reveal primitives, the cyclic rules engine,
//! and the session loop for rock-paper-scissors over any odd move set.

pub mod crypto;
pub mod error;
pub mod games;
pub mod session;

pub use crypto::{Commitment, CommitmentKey};
pub use error::{CommitmentError, ConfigError, GameError, USAGE_EXAMPLE};
pub use games::{CyclicRules, HelpMatrix, MoveSet, Outcome};
pub use session::{Command, Round, RoundReport, Session, Step};
