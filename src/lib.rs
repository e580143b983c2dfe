//! # Pointswap
//!
//! A custody ledger that converts a fungible token balance into off-chain
//! game points and back. The redemption direction is gated by a two-layer
//! keyed-hash attestation: both the game backend and the platform backend
//! must have approved the exact `(game, claimant, amount)` triple before
//! custodied tokens are released.
//!
//! ## Architecture
//!
//! - **Attestation**: pure two-layer Keccak-256 keyed digest; no state
//! - **Registry**: owner-gated per-game and platform configuration
//! - **Swap ledger**: custodied balance, buy/sell of game points,
//!   owner-only extraction, version-gated behavior
//! - **Version state machine**: one-way `V1 -> V2` upgrade that preserves
//!   all configuration and custody
//!
//! ## Security Model
//!
//! - Backend keys never leave the registry; they are hash inputs only
//! - Both backends must agree on the exact redemption triple
//! - Custody decreases only through verified redemption or owner extraction
//! - The owner identity is the top-level trust anchor

#![forbid(unsafe_code)]
#![deny(clippy::all, rust_2018_idioms)]
#![warn(clippy::pedantic, clippy::nursery, missing_docs)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Const fn not always beneficial for complex types
    clippy::missing_const_for_fn,
    // must_use on every fn is excessive
    clippy::must_use_candidate
)]

pub mod attestation;
pub mod crypto;
pub mod price;
pub mod store;
pub mod swap;
pub mod token;
pub mod types;

pub use attestation::{
    compute_attestation, game_layer_digest, verify_attestation, Attestation, AttestationSigner,
    BackendKey, KeyedSigner,
};
pub use crypto::{keccak, Digest};
pub use price::{PriceFeed, PriceFeedError, StaticPriceFeed};
pub use store::{DeployConfig, GameDeployConfig, StoreError, SwapStore};
pub use swap::{
    GameConfig, Registry, SwapError, SwapEvent, SwapLedger, SwapResult, SwapSnapshot, SwapVersion,
};
pub use token::{MemoryToken, TokenError, TokenLedger};
pub use types::{AccountId, GameId, TokenAmount};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
