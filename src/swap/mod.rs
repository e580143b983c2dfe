//! Token / game-point exchange core.
//!
//! This module holds the custody ledger and everything that gates it:
//!
//! 1. **Registry**: owner-controlled per-game and platform configuration
//! 2. **Version state machine**: one-way `V1 -> V2` behavior gate
//! 3. **Ledger**: buy/sell of game points and owner-only extraction
//!
//! ## Enforcement mechanism
//!
//! Custody only ever decreases through two paths: a redemption carrying a
//! valid two-layer attestation, or an owner-authorized extraction. Every
//! operation either fully commits or fails with a typed error and zero
//! state mutation — all checks precede the single token movement.

pub mod ledger;
pub mod registry;
pub mod version;

pub use ledger::{SwapLedger, SwapSnapshot};
pub use registry::{GameConfig, Registry};
pub use version::SwapVersion;

use serde::{Deserialize, Serialize};

use crate::price::PriceFeedError;
use crate::token::TokenError;
use crate::types::{AccountId, GameId, TokenAmount};

/// Result type for swap operations
pub type SwapResult<T> = Result<T, SwapError>;

/// Swap operation errors.
///
/// Every error aborts the triggering operation atomically; nothing is
/// retried internally. Retry with a fresh attestation is the caller's
/// concern.
#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    /// Non-owner calling an owner-only operation
    #[error("unauthorized: caller {caller} is not the owner")]
    Unauthorized {
        /// The rejected caller
        caller: AccountId,
    },

    /// Supplied attestation does not match the recomputed value
    #[error("verification data is incorrect for game {game_id}")]
    Verification {
        /// Game the redemption referenced
        game_id: GameId,
    },

    /// Operation referenced a game that was never configured
    #[error("game {0} is not configured")]
    GameNotConfigured(GameId),

    /// Game exists but has no backend key set
    #[error("game {0} has no backend key")]
    MissingGameKey(GameId),

    /// No platform backend key has been set
    #[error("platform backend key is not set")]
    MissingPlatformKey,

    /// Game point price is zero (game not open for purchases)
    #[error("game {0} has a zero point price")]
    ZeroPointPrice(GameId),

    /// Custody pool below the requested release
    #[error("insufficient custody: need {need}, have {have}")]
    InsufficientCustody {
        /// Amount needed
        need: TokenAmount,
        /// Amount held in custody
        have: TokenAmount,
    },

    /// Token transfer failed (caller balance or allowance on buy)
    #[error("token transfer failed: {0}")]
    Token(#[from] TokenError),

    /// Active price feed could not produce a quote
    #[error("price feed failed: {0}")]
    PriceFeed(#[from] PriceFeedError),

    /// Second initialization attempt
    #[error("already initialized")]
    AlreadyInitialized,

    /// Operation before initialization
    #[error("not initialized")]
    NotInitialized,

    /// Upgrade attempted from an unexpected version
    #[error("version mismatch: expected v{expected}, current v{actual}")]
    VersionMismatch {
        /// Version the transition requires
        expected: u32,
        /// Version actually active
        actual: u32,
    },
}

/// State-transition events, in commit order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapEvent {
    /// One-time initialization committed
    Initialized {
        /// Initial owner
        owner: AccountId,
        /// Custody account
        custody: AccountId,
    },
    /// Tokens pulled into custody for an off-chain point credit
    PointsPurchased {
        /// Game purchased for
        game_id: GameId,
        /// Paying caller
        buyer: AccountId,
        /// Tokens moved into custody
        token_amount: TokenAmount,
        /// Configured points-per-token price at purchase time
        point_price: u64,
        /// Active feed's token quote at purchase time
        quote: TokenAmount,
    },
    /// Custodied tokens released against a verified attestation
    PointsRedeemed {
        /// Game redeemed from
        game_id: GameId,
        /// Receiving claimant
        claimant: AccountId,
        /// Tokens released from custody
        token_amount: TokenAmount,
    },
    /// Owner extracted custodied funds
    FundsWithdrawn {
        /// Destination account
        to: AccountId,
        /// Amount extracted
        amount: TokenAmount,
    },
    /// Ownership handed over
    OwnershipTransferred {
        /// Previous owner
        from: AccountId,
        /// New owner
        to: AccountId,
    },
    /// Version transition committed
    Upgraded {
        /// Version before
        from: u32,
        /// Version after
        to: u32,
    },
}
