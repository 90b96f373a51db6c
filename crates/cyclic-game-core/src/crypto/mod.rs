//! Cryptographic primitives for the commit-reveal round.
//!
//! This module provides:
//! - CommitmentKey, the per-round secret HMAC key
//! - Commitment, the HMAC-SHA-256 digest published before the human moves

mod commitment;

pub use commitment::{Commitment, CommitmentKey, DIGEST_LEN, KEY_LEN};
