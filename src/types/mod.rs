//! Core identity and amount types shared across the crate.

mod address;
mod amount;

pub use address::{AccountId, AddressError};
pub use amount::{TokenAmount, TOKEN_DECIMALS};

/// Identifier of a configured game.
///
/// Games are independent of each other; a `GameId` that was never
/// configured by the owner rejects every operation referencing it.
pub type GameId = u64;
