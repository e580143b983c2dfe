//! Two-layer keyed-digest redemption attestation.
//!
//! A redemption of custodied tokens is authorized by two independent
//! off-chain parties without transmitting their keys:
//!
//! 1. The game backend derives
//!    `inner = keccak(game_id ‖ lowercase(claimant) ‖ amount ‖ keccak(game_key))`
//! 2. The platform backend re-attests with
//!    `attestation = keccak(inner ‖ keccak(platform_key))`
//!
//! Layering separates the trust domains: the game backend authorizes an
//! amount without knowing the platform key, and the platform layer stops
//! a compromised game backend from authorizing redemptions on its own.
//! Both layers commit to the exact `(game_id, claimant, amount)` triple.
//!
//! Integers are packed as 32-byte big-endian words and the claimant as
//! its `0x`-prefixed lowercase hex string, so packing is order-sensitive
//! and case-insensitive spellings of one identity attest identically.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{keccak, keccak_concat, Digest};
use crate::types::{AccountId, GameId, TokenAmount};

/// The value proving both backends approved a specific redemption.
pub type Attestation = Digest;

/// A shared secret known to one off-chain backend and to the registry.
///
/// Used only as hash input, never transmitted in the clear. Leakage of
/// both backend keys is a full authorization bypass, so the buffer is
/// wiped on drop and never printed.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct BackendKey(String);

impl BackendKey {
    /// Wrap a secret key string
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Key bytes for hashing
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl PartialEq for BackendKey {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for BackendKey {}

impl std::fmt::Debug for BackendKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BackendKey(<redacted>)")
    }
}

/// Pack an unsigned integer as a 32-byte big-endian word
fn uint256_be(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Inner (game-layer) digest over the redemption triple.
///
/// This is what the game backend can produce on its own: it commits to
/// the triple and to knowledge of the game key, but carries no platform
/// approval yet.
#[must_use]
pub fn game_layer_digest(
    game_id: GameId,
    claimant: &AccountId,
    amount: TokenAmount,
    game_key: &BackendKey,
) -> Digest {
    let keyed = keccak(game_key.as_bytes());
    keccak_concat(&[
        &uint256_be(u128::from(game_id)),
        claimant.to_hex().as_bytes(),
        &uint256_be(amount.raw()),
        keyed.as_bytes(),
    ])
}

/// Full two-layer attestation over the redemption triple.
#[must_use]
pub fn compute_attestation(
    game_id: GameId,
    claimant: &AccountId,
    amount: TokenAmount,
    game_key: &BackendKey,
    platform_key: &BackendKey,
) -> Attestation {
    let inner = game_layer_digest(game_id, claimant, amount, game_key);
    let keyed = keccak(platform_key.as_bytes());
    keccak_concat(&[inner.as_bytes(), keyed.as_bytes()])
}

/// Check whether `supplied` authorizes releasing `amount` to `claimant`
/// for `game_id`.
///
/// Pure recompute-and-compare: exact 32-byte equality, no tolerance.
/// Malformed input can only produce a mismatch, never an error.
#[must_use]
pub fn verify_attestation(
    game_id: GameId,
    claimant: &AccountId,
    amount: TokenAmount,
    game_key: &BackendKey,
    platform_key: &BackendKey,
    supplied: &Attestation,
) -> bool {
    compute_attestation(game_id, claimant, amount, game_key, platform_key) == *supplied
}

/// Capability to produce redemption attestations.
///
/// The ledger only ever consumes `Attestation` values, so an
/// implementation backed by asymmetric signatures can replace the keyed
/// scheme without touching the ledger's call contract.
pub trait AttestationSigner {
    /// Attest that `claimant` may redeem `amount` for `game_id`
    fn compute_attestation(
        &self,
        game_id: GameId,
        claimant: &AccountId,
        amount: TokenAmount,
    ) -> Attestation;
}

/// Signer holding both backend keys.
///
/// Models the cooperating game + platform backend pair in tests and
/// off-chain tooling.
pub struct KeyedSigner {
    game_key: BackendKey,
    platform_key: BackendKey,
}

impl KeyedSigner {
    /// Create a signer from the two backend keys
    #[must_use]
    pub fn new(game_key: BackendKey, platform_key: BackendKey) -> Self {
        Self {
            game_key,
            platform_key,
        }
    }
}

impl AttestationSigner for KeyedSigner {
    fn compute_attestation(
        &self,
        game_id: GameId,
        claimant: &AccountId,
        amount: TokenAmount,
    ) -> Attestation {
        compute_attestation(game_id, claimant, amount, &self.game_key, &self.platform_key)
    }
}
