//! Swap state persistence and deployment configuration.
//!
//! The ledger's persistent state (version, owner, custody account,
//! registry) is bincode-encoded into a sled database so it survives
//! process restarts and behavior upgrades. Deployment parameters load
//! from TOML, allowing different configurations for testnet vs mainnet.
//! Backend keys are never written to config files; they are set at
//! runtime by the owner.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::swap::SwapSnapshot;
use crate::types::{AccountId, AddressError, GameId};

/// Key under which the swap snapshot is stored
const STATE_KEY: &[u8] = b"swap:state";

/// Persistence errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying database failure
    #[error("database error: {0}")]
    Db(#[from] sled::Error),

    /// Snapshot encoding/decoding failure
    #[error("codec error: {0}")]
    Codec(#[from] bincode::Error),

    /// Config file I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file parse failure
    #[error("config parse error: {0}")]
    Parse(String),

    /// Config contained an invalid account id
    #[error("invalid account id in config: {0}")]
    Address(#[from] AddressError),
}

/// Sled-backed store for the swap snapshot.
pub struct SwapStore {
    db: sled::Db,
}

impl SwapStore {
    /// Open (or create) a store at `path`
    ///
    /// # Errors
    /// Returns error if the database cannot be opened
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Open an ephemeral store (testing)
    ///
    /// # Errors
    /// Returns error if the database cannot be created
    pub fn temporary() -> Result<Self, StoreError> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    /// Persist a snapshot, replacing any previous one
    ///
    /// # Errors
    /// Returns error on encoding or database failure
    pub fn save(&self, snapshot: &SwapSnapshot) -> Result<(), StoreError> {
        let bytes = bincode::serialize(snapshot)?;
        self.db.insert(STATE_KEY, bytes)?;
        self.db.flush()?;
        Ok(())
    }

    /// Load the stored snapshot, if any
    ///
    /// # Errors
    /// Returns error on decoding or database failure
    pub fn load(&self) -> Result<Option<SwapSnapshot>, StoreError> {
        match self.db.get(STATE_KEY)? {
            Some(bytes) => Ok(Some(bincode::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }
}

/// TOML-serializable deployment parameters.
///
/// Carries only public configuration: identities and initial point
/// prices. Keys are deliberately absent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Initial owner (hex account id)
    pub owner: String,
    /// Custody account (hex account id)
    pub custody: String,
    /// Initially configured games
    #[serde(default)]
    pub games: Vec<GameDeployConfig>,
}

/// Initial configuration of one game
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameDeployConfig {
    /// Game identifier
    pub id: GameId,
    /// Points-per-token price (zero leaves the game closed for buys)
    #[serde(default)]
    pub point_price: u64,
}

impl DeployConfig {
    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns error if the file is unreadable or malformed
    pub fn load_from_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| StoreError::Parse(e.to_string()))
    }

    /// Save to a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be written
    pub fn save_to_file(&self, path: &Path) -> Result<(), StoreError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| StoreError::Parse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Parsed owner identity
    ///
    /// # Errors
    /// Returns error if the configured hex is invalid
    pub fn owner_account(&self) -> Result<AccountId, StoreError> {
        Ok(AccountId::from_hex(&self.owner)?)
    }

    /// Parsed custody identity
    ///
    /// # Errors
    /// Returns error if the configured hex is invalid
    pub fn custody_account(&self) -> Result<AccountId, StoreError> {
        Ok(AccountId::from_hex(&self.custody)?)
    }
}
