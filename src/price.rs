//! Read-only price feed boundary.
//!
//! The token's external price is computed elsewhere, typically derived
//! from a decentralized-exchange pair; the swap only reads it. Two feeds exist
//! in a deployment: the legacy pair-derived feed and a direct oracle.
//! Which one the buy path quotes from is decided by the active swap
//! version.

use crate::types::TokenAmount;

/// Price feed failures
#[derive(Debug, Clone, thiserror::Error)]
pub enum PriceFeedError {
    /// The feed has no price available
    #[error("price unavailable: {0}")]
    Unavailable(String),
}

/// Read-only source of the token's external price.
pub trait PriceFeed {
    /// Current price of one whole token, in raw quote-currency units
    ///
    /// # Errors
    /// Returns error if the feed cannot produce a price
    fn token_price(&self) -> Result<TokenAmount, PriceFeedError>;
}

/// Feed returning a fixed price; used in tests and as a placeholder
/// before a live feed is wired up.
#[derive(Debug, Clone, Copy)]
pub struct StaticPriceFeed {
    price: TokenAmount,
}

impl StaticPriceFeed {
    /// Create a feed that always returns `price`
    #[must_use]
    pub fn new(price: TokenAmount) -> Self {
        Self { price }
    }
}

impl PriceFeed for StaticPriceFeed {
    fn token_price(&self) -> Result<TokenAmount, PriceFeedError> {
        Ok(self.price)
    }
}
