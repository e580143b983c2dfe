//! One-way behavior version state machine.
//!
//! The version is a tagged state, not a free counter: the only transition
//! accepts exactly its predecessor, so skipping or repeating an upgrade
//! is unrepresentable. Upgrading changes which code path subsequent
//! operations take; it never rewrites stored configuration or custody.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::swap::{SwapError, SwapResult};

/// Active behavior version of the swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapVersion {
    /// Initial behavior: buy quotes come from the pair-derived feed
    V1,
    /// Revised behavior: buy quotes come from the direct oracle feed
    V2,
}

impl SwapVersion {
    /// Monotonic version number (1-based)
    #[must_use]
    pub const fn number(self) -> u32 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    /// Transition to the next version.
    ///
    /// # Errors
    /// Returns `VersionMismatch` when no further transition exists —
    /// a repeated upgrade call surfaces the operator mistake instead of
    /// silently succeeding.
    pub fn upgraded(self) -> SwapResult<Self> {
        match self {
            Self::V1 => Ok(Self::V2),
            Self::V2 => Err(SwapError::VersionMismatch {
                expected: Self::V1.number(),
                actual: Self::V2.number(),
            }),
        }
    }
}

impl Default for SwapVersion {
    fn default() -> Self {
        Self::V1
    }
}

impl fmt::Display for SwapVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number())
    }
}
