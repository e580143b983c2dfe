//! Per-game and platform configuration store.
//!
//! A plain owned store, mutated only through the ledger's owner-gated
//! entry points and passed by reference wherever redemption needs key
//! resolution. No read path hands key material out of the crate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::attestation::BackendKey;
use crate::swap::{SwapError, SwapResult};
use crate::types::GameId;

/// Configuration of a single game.
///
/// Absence of a game id in the registry means the game is unconfigured
/// and every operation referencing it fails.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    backend_key: Option<BackendKey>,
    point_price: u64,
}

impl GameConfig {
    /// Configured points-per-token price (zero until the owner sets it)
    #[must_use]
    pub fn point_price(&self) -> u64 {
        self.point_price
    }

    /// Whether a backend key has been set for this game
    #[must_use]
    pub fn has_backend_key(&self) -> bool {
        self.backend_key.is_some()
    }

    pub(crate) fn backend_key(&self) -> Option<&BackendKey> {
        self.backend_key.as_ref()
    }
}

/// Owner-controlled registry of game and platform configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    platform_key: Option<BackendKey>,
    games: HashMap<GameId, GameConfig>,
}

impl Registry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the platform-wide backend key (overwrites unconditionally)
    pub fn set_platform_key(&mut self, key: BackendKey) {
        self.platform_key = Some(key);
    }

    /// Set a game's backend key, creating the game entry if absent
    pub fn set_game_key(&mut self, game_id: GameId, key: BackendKey) {
        self.games.entry(game_id).or_default().backend_key = Some(key);
    }

    /// Set a game's point price, creating the game entry if absent
    pub fn set_game_point_price(&mut self, game_id: GameId, price: u64) {
        self.games.entry(game_id).or_default().point_price = price;
    }

    /// Look up a game's configuration
    #[must_use]
    pub fn game(&self, game_id: GameId) -> Option<&GameConfig> {
        self.games.get(&game_id)
    }

    /// Whether a platform backend key has been set
    #[must_use]
    pub fn has_platform_key(&self) -> bool {
        self.platform_key.is_some()
    }

    /// Number of configured games
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Resolve the key pair a redemption for `game_id` verifies against:
    /// game-specific key first, then the platform key.
    ///
    /// # Errors
    /// Returns a configuration error if the game or either key is missing
    pub(crate) fn resolve_keys(&self, game_id: GameId) -> SwapResult<(&BackendKey, &BackendKey)> {
        let game = self
            .games
            .get(&game_id)
            .ok_or(SwapError::GameNotConfigured(game_id))?;
        let game_key = game
            .backend_key()
            .ok_or(SwapError::MissingGameKey(game_id))?;
        let platform_key = self
            .platform_key
            .as_ref()
            .ok_or(SwapError::MissingPlatformKey)?;
        Ok((game_key, platform_key))
    }
}
