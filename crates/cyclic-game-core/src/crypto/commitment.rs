//! Commitment key and keyed digest for the commit-reveal round.

use crate::error::CommitmentError;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// Length of a commitment key in bytes
pub const KEY_LEN: usize = 32;

/// Length of a commitment digest in bytes
pub const DIGEST_LEN: usize = 32;

fn decode_array<const N: usize>(s: &str) -> Result<[u8; N], CommitmentError> {
    let bytes = hex::decode(s.trim())?;
    if bytes.len() != N {
        return Err(CommitmentError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut arr = [0u8; N];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}

/// Secret HMAC key for a single round.
///
/// Only the round that created it holds it. [`CommitmentKey::reveal`]
/// consumes the key, so a revealed key cannot go on to sign another move.
#[derive(Clone, PartialEq, Eq)]
pub struct CommitmentKey([u8; KEY_LEN]);

impl CommitmentKey {
    /// Create a new key from the operating system's CSPRNG
    pub fn random() -> Self {
        Self::random_with(&mut OsRng)
    }

    /// Create a new key from a caller-supplied cryptographic RNG
    pub fn random_with<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Disclose the key as lowercase hex
    pub fn reveal(self) -> String {
        hex::encode(self.0)
    }

    fn mac(&self) -> HmacSha256 {
        <HmacSha256 as Mac>::new_from_slice(&self.0).expect("HMAC accepts keys of any length")
    }
}

impl fmt::Debug for CommitmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CommitmentKey(<redacted>)")
    }
}

impl FromStr for CommitmentKey {
    type Err = CommitmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_array::<KEY_LEN>(s).map(Self)
    }
}

/// Commitment = HMAC-SHA-256(key, move)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Commitment([u8; DIGEST_LEN]);

impl Commitment {
    /// Commit to a move label under the given key
    pub fn new(key: &CommitmentKey, label: &str) -> Self {
        let mut mac = key.mac();
        mac.update(label.as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Verify that the given key and move produce this commitment.
    /// The comparison runs in constant time.
    pub fn verify(&self, key: &CommitmentKey, label: &str) -> bool {
        let mut mac = key.mac();
        mac.update(label.as_bytes());
        mac.verify_slice(&self.0).is_ok()
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for Commitment {
    type Err = CommitmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_array::<DIGEST_LEN>(s).map(Self)
    }
}

impl TryFrom<String> for Commitment {
    type Error = CommitmentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Commitment> for String {
    fn from(commitment: Commitment) -> Self {
        commitment.to_string()
    }
}
