//! Cryptographic primitives.
//!
//! The attestation scheme uses Keccak-256 exclusively: a fixed, publicly
//! known one-way function. No digital signatures are involved — the
//! authorization model is shared-secret keyed hashing, so confidentiality
//! of the backend keys carries the whole scheme.

use serde::{Deserialize, Serialize};
use sha3::{Digest as _, Keccak256};
use std::fmt;

/// A 32-byte Keccak-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest([u8; 32]);

impl Digest {
    /// The all-zero digest (placeholder, never a real hash output in practice)
    pub const ZERO: Self = Self([0u8; 32]);

    /// Create a digest from raw bytes
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex form with 0x prefix
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from hex string (with or without 0x prefix)
    ///
    /// # Errors
    /// Returns error if hex is invalid or wrong length
    pub fn from_hex(s: &str) -> Result<Self, DigestError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|_| DigestError::InvalidHex)?;

        if bytes.len() != 32 {
            return Err(DigestError::InvalidLength(bytes.len()));
        }

        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Digest parsing errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum DigestError {
    /// Invalid hex encoding
    #[error("invalid hex encoding")]
    InvalidHex,
    /// Invalid digest length
    #[error("invalid digest length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// Keccak-256 of `data`
#[must_use]
pub fn keccak(data: &[u8]) -> Digest {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    Digest(hasher.finalize().into())
}

/// Keccak-256 over the concatenation of `parts`, in order.
///
/// Concatenation order is load-bearing: the attestation scheme derives
/// its layer separation from it.
#[must_use]
pub fn keccak_concat(parts: &[&[u8]]) -> Digest {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    Digest(hasher.finalize().into())
}
