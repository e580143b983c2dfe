//! Custody ledger: buy/sell of game points under registry + attestation
//! gating, with owner-only extraction and version-gated behavior.
//!
//! The custody balance is never shadowed in a field — it is always the
//! token ledger's observable balance of the custody account, so it cannot
//! drift from the asset actually held. The mutable token ledger is passed
//! into each operation; the price feeds are owned read-only collaborators.

use tracing::{debug, info, warn};

use serde::{Deserialize, Serialize};

use crate::attestation::{verify_attestation, Attestation, BackendKey};
use crate::price::PriceFeed;
use crate::swap::{Registry, SwapError, SwapEvent, SwapResult, SwapVersion};
use crate::token::TokenLedger;
use crate::types::{AccountId, GameId, TokenAmount};

/// Persistent state of a swap ledger.
///
/// Everything that must survive a process restart or a behavior upgrade:
/// version tag, owner, custody account, and the full registry (backend
/// keys included). Collaborator handles are reattached on restore.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwapSnapshot {
    /// Active behavior version
    pub version: SwapVersion,
    /// Owner identity
    pub owner: AccountId,
    /// Custody account
    pub custody: AccountId,
    /// Game and platform configuration
    pub registry: Registry,
}

/// The token / game-point exchange ledger.
pub struct SwapLedger {
    owner: AccountId,
    custody: AccountId,
    version: SwapVersion,
    registry: Registry,
    pair_feed: Option<Box<dyn PriceFeed>>,
    oracle_feed: Option<Box<dyn PriceFeed>>,
    events: Vec<SwapEvent>,
    initialized: bool,
}

impl SwapLedger {
    /// Create an uninitialized ledger.
    ///
    /// Every mutating operation fails with `NotInitialized` until
    /// [`init`](Self::init) has run exactly once.
    #[must_use]
    pub fn new() -> Self {
        Self {
            owner: AccountId::ZERO,
            custody: AccountId::ZERO,
            version: SwapVersion::V1,
            registry: Registry::new(),
            pair_feed: None,
            oracle_feed: None,
            events: Vec::new(),
            initialized: false,
        }
    }

    /// One-time initialization.
    ///
    /// `pair_feed` is the legacy pair-derived price source used under V1;
    /// `oracle_feed` is the direct oracle used once V2 is active.
    ///
    /// # Errors
    /// Returns `AlreadyInitialized` on any call after the first
    pub fn init(
        &mut self,
        owner: AccountId,
        custody: AccountId,
        pair_feed: Box<dyn PriceFeed>,
        oracle_feed: Box<dyn PriceFeed>,
    ) -> SwapResult<()> {
        if self.initialized {
            return Err(SwapError::AlreadyInitialized);
        }

        self.owner = owner;
        self.custody = custody;
        self.version = SwapVersion::V1;
        self.pair_feed = Some(pair_feed);
        self.oracle_feed = Some(oracle_feed);
        self.initialized = true;

        info!(%owner, %custody, "swap ledger initialized");
        self.events.push(SwapEvent::Initialized { owner, custody });
        Ok(())
    }

    /// Restore an initialized ledger from a snapshot, reattaching the
    /// price feed collaborators.
    #[must_use]
    pub fn restore(
        snapshot: SwapSnapshot,
        pair_feed: Box<dyn PriceFeed>,
        oracle_feed: Box<dyn PriceFeed>,
    ) -> Self {
        Self {
            owner: snapshot.owner,
            custody: snapshot.custody,
            version: snapshot.version,
            registry: snapshot.registry,
            pair_feed: Some(pair_feed),
            oracle_feed: Some(oracle_feed),
            events: Vec::new(),
            initialized: true,
        }
    }

    /// Snapshot the persistent state.
    ///
    /// # Errors
    /// Returns `NotInitialized` before init
    pub fn snapshot(&self) -> SwapResult<SwapSnapshot> {
        self.ensure_initialized()?;
        Ok(SwapSnapshot {
            version: self.version,
            owner: self.owner,
            custody: self.custody,
            registry: self.registry.clone(),
        })
    }

    fn ensure_initialized(&self) -> SwapResult<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(SwapError::NotInitialized)
        }
    }

    fn ensure_owner(&self, caller: AccountId) -> SwapResult<()> {
        if caller == self.owner {
            Ok(())
        } else {
            warn!(%caller, "rejected owner-only operation");
            Err(SwapError::Unauthorized { caller })
        }
    }

    /// The feed the active version quotes from
    fn active_feed(&self) -> SwapResult<&dyn PriceFeed> {
        let feed = match self.version {
            SwapVersion::V1 => self.pair_feed.as_deref(),
            SwapVersion::V2 => self.oracle_feed.as_deref(),
        };
        feed.ok_or(SwapError::NotInitialized)
    }

    // --- Owner-gated configuration ---

    /// Set the platform-wide backend key
    ///
    /// # Errors
    /// Returns `Unauthorized` unless `caller` is the owner
    pub fn set_platform_backend_key(
        &mut self,
        caller: AccountId,
        key: BackendKey,
    ) -> SwapResult<()> {
        self.ensure_initialized()?;
        self.ensure_owner(caller)?;
        self.registry.set_platform_key(key);
        info!("platform backend key updated");
        Ok(())
    }

    /// Set a game's backend key
    ///
    /// # Errors
    /// Returns `Unauthorized` unless `caller` is the owner
    pub fn set_game_backend_key(
        &mut self,
        caller: AccountId,
        game_id: GameId,
        key: BackendKey,
    ) -> SwapResult<()> {
        self.ensure_initialized()?;
        self.ensure_owner(caller)?;
        self.registry.set_game_key(game_id, key);
        info!(game_id, "game backend key updated");
        Ok(())
    }

    /// Set a game's points-per-token price
    ///
    /// # Errors
    /// Returns `Unauthorized` unless `caller` is the owner
    pub fn set_game_point_price(
        &mut self,
        caller: AccountId,
        game_id: GameId,
        price: u64,
    ) -> SwapResult<()> {
        self.ensure_initialized()?;
        self.ensure_owner(caller)?;
        self.registry.set_game_point_price(game_id, price);
        info!(game_id, price, "game point price updated");
        Ok(())
    }

    /// Hand ownership to `new_owner`
    ///
    /// # Errors
    /// Returns `Unauthorized` unless `caller` is the owner
    pub fn transfer_ownership(&mut self, caller: AccountId, new_owner: AccountId) -> SwapResult<()> {
        self.ensure_initialized()?;
        self.ensure_owner(caller)?;
        let previous = self.owner;
        self.owner = new_owner;
        info!(from = %previous, to = %new_owner, "ownership transferred");
        self.events.push(SwapEvent::OwnershipTransferred {
            from: previous,
            to: new_owner,
        });
        Ok(())
    }

    // --- Version state machine ---

    /// Current version number (1 before upgrade, 2 after)
    #[must_use]
    pub fn version(&self) -> u32 {
        self.version.number()
    }

    /// One-way transition to V2 behavior.
    ///
    /// Flips only the version tag: registry, custody, and owner survive
    /// untouched.
    ///
    /// # Errors
    /// Returns `Unauthorized` for non-owners and `VersionMismatch` when
    /// the ledger is not currently at V1
    pub fn upgrade_to_v2(&mut self, caller: AccountId) -> SwapResult<()> {
        self.ensure_initialized()?;
        self.ensure_owner(caller)?;

        let from = self.version;
        self.version = from.upgraded()?;

        info!(%from, to = %self.version, "behavior version upgraded");
        self.events.push(SwapEvent::Upgraded {
            from: from.number(),
            to: self.version.number(),
        });
        Ok(())
    }

    // --- Exchange operations ---

    /// Buy game points: pull `amount` of token from `caller` into custody.
    ///
    /// The on-chain-equivalent effect is solely the transfer into custody;
    /// point crediting is derived off-chain from the transferred amount
    /// and the configured price. No attestation is needed — the caller is
    /// spending tokens they already control.
    ///
    /// # Errors
    /// Returns a configuration error for an unconfigured or zero-priced
    /// game, and a token error when the caller's balance or allowance is
    /// short
    pub fn buy_game_point(
        &mut self,
        token: &mut dyn TokenLedger,
        caller: AccountId,
        game_id: GameId,
        amount: TokenAmount,
    ) -> SwapResult<()> {
        self.ensure_initialized()?;

        let game = self
            .registry
            .game(game_id)
            .ok_or(SwapError::GameNotConfigured(game_id))?;
        let point_price = game.point_price();
        if point_price == 0 {
            return Err(SwapError::ZeroPointPrice(game_id));
        }

        // Quote before moving funds so a feed failure aborts cleanly.
        let quote = self.active_feed()?.token_price()?;

        token.transfer_from(self.custody, caller, self.custody, amount)?;

        info!(game_id, buyer = %caller, %amount, "game points purchased");
        self.events.push(SwapEvent::PointsPurchased {
            game_id,
            buyer: caller,
            token_amount: amount,
            point_price,
            quote,
        });
        Ok(())
    }

    /// Sell game points: release `amount` of custodied token to `caller`
    /// against a two-layer attestation over exactly
    /// `(game_id, caller, amount)`.
    ///
    /// There is no on-ledger replay guard: the backend pair must never
    /// re-issue an attestation for an already-settled point balance.
    ///
    /// # Errors
    /// Returns `Verification` on attestation mismatch and
    /// `InsufficientCustody` when the shared pool cannot cover `amount` —
    /// checked even after a valid attestation, because custody is pooled
    /// across all games and users
    pub fn sell_game_point(
        &mut self,
        token: &mut dyn TokenLedger,
        caller: AccountId,
        game_id: GameId,
        amount: TokenAmount,
        attestation: &Attestation,
    ) -> SwapResult<()> {
        self.ensure_initialized()?;

        let (game_key, platform_key) = self.registry.resolve_keys(game_id)?;
        debug!(game_id, claimant = %caller, %amount, "verifying redemption attestation");

        if !verify_attestation(game_id, &caller, amount, game_key, platform_key, attestation) {
            warn!(game_id, claimant = %caller, %amount, "attestation mismatch");
            return Err(SwapError::Verification { game_id });
        }

        let have = token.balance_of(&self.custody);
        if have < amount {
            return Err(SwapError::InsufficientCustody { need: amount, have });
        }

        token.transfer(self.custody, caller, amount)?;

        info!(game_id, claimant = %caller, %amount, "game points redeemed");
        self.events.push(SwapEvent::PointsRedeemed {
            game_id,
            claimant: caller,
            token_amount: amount,
        });
        Ok(())
    }

    /// Owner-only extraction of custodied funds.
    ///
    /// Privileged escape hatch: no attestation and no per-game accounting,
    /// so the owner can drain funds belonging to all games' users. Owner
    /// access control is the top-level trust anchor of the whole system.
    ///
    /// # Errors
    /// Returns `Unauthorized` for non-owners (checked before anything
    /// else, including for zero amounts) and `InsufficientCustody` when
    /// the pool cannot cover `amount`
    pub fn transfer_to(
        &mut self,
        token: &mut dyn TokenLedger,
        caller: AccountId,
        to: AccountId,
        amount: TokenAmount,
    ) -> SwapResult<()> {
        self.ensure_initialized()?;
        self.ensure_owner(caller)?;

        let have = token.balance_of(&self.custody);
        if have < amount {
            return Err(SwapError::InsufficientCustody { need: amount, have });
        }

        token.transfer(self.custody, to, amount)?;

        info!(%to, %amount, "custodied funds withdrawn");
        self.events.push(SwapEvent::FundsWithdrawn { to, amount });
        Ok(())
    }

    // --- Reads ---

    /// Current owner
    #[must_use]
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// Custody account identity
    #[must_use]
    pub fn custody_account(&self) -> AccountId {
        self.custody
    }

    /// Tokens currently held in custody, as observed on the token ledger
    #[must_use]
    pub fn custody_balance(&self, token: &dyn TokenLedger) -> TokenAmount {
        token.balance_of(&self.custody)
    }

    /// Whether `game_id` has been configured
    #[must_use]
    pub fn is_game_configured(&self, game_id: GameId) -> bool {
        self.registry.game(game_id).is_some()
    }

    /// Configured point price for `game_id`, if any.
    ///
    /// Key material is deliberately not reachable through any read.
    #[must_use]
    pub fn game_point_price(&self, game_id: GameId) -> Option<u64> {
        self.registry.game(game_id).map(|game| game.point_price())
    }

    /// Events emitted so far, in commit order
    #[must_use]
    pub fn events(&self) -> &[SwapEvent] {
        &self.events
    }

    /// Drain the event log
    pub fn take_events(&mut self) -> Vec<SwapEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for SwapLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attestation::{compute_attestation, AttestationSigner, KeyedSigner};
    use crate::crypto::Digest;
    use crate::price::StaticPriceFeed;
    use crate::token::MemoryToken;

    const GAME: GameId = 1;

    fn acct(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 20])
    }

    fn feeds() -> (Box<StaticPriceFeed>, Box<StaticPriceFeed>) {
        (
            Box::new(StaticPriceFeed::new(TokenAmount::from_raw(100))),
            Box::new(StaticPriceFeed::new(TokenAmount::from_raw(200))),
        )
    }

    /// Ledger with owner/custody configured, custody pre-funded with
    /// 1000 tokens and `user` holding 10, mirroring the reference
    /// deployment shape.
    fn setup() -> (SwapLedger, MemoryToken, AccountId, AccountId) {
        let owner = acct(0xaa);
        let custody = acct(0xcc);
        let user = acct(0x11);

        let mut swap = SwapLedger::new();
        let (pair, oracle) = feeds();
        swap.init(owner, custody, pair, oracle).unwrap();

        swap.set_platform_backend_key(owner, BackendKey::new("ArcadeBackend"))
            .unwrap();
        swap.set_game_backend_key(owner, GAME, BackendKey::new("GameBackend"))
            .unwrap();
        swap.set_game_point_price(owner, GAME, 5).unwrap();

        let mut token = MemoryToken::new();
        token.mint(custody, TokenAmount::from_whole(1000));
        token.mint(user, TokenAmount::from_whole(10));

        (swap, token, owner, user)
    }

    fn signer() -> KeyedSigner {
        KeyedSigner::new(BackendKey::new("GameBackend"), BackendKey::new("ArcadeBackend"))
    }

    #[test]
    fn test_double_init_fails() {
        let (mut swap, _, _, _) = setup();
        let (pair, oracle) = feeds();
        let err = swap.init(acct(1), acct(2), pair, oracle).unwrap_err();
        assert!(matches!(err, SwapError::AlreadyInitialized));
    }

    #[test]
    fn test_operations_require_init() {
        let mut swap = SwapLedger::new();
        let mut token = MemoryToken::new();
        let err = swap
            .buy_game_point(&mut token, acct(1), GAME, TokenAmount::from_whole(1))
            .unwrap_err();
        assert!(matches!(err, SwapError::NotInitialized));
    }

    #[test]
    fn test_non_owner_cannot_configure() {
        let (mut swap, _, _, user) = setup();
        let err = swap
            .set_platform_backend_key(user, BackendKey::new("ABC"))
            .unwrap_err();
        assert!(matches!(err, SwapError::Unauthorized { .. }));
    }

    #[test]
    fn test_buy_moves_tokens_into_custody() {
        let (mut swap, mut token, _, user) = setup();

        token.approve(user, swap.custody_account(), TokenAmount::from_whole(5));
        swap.buy_game_point(&mut token, user, GAME, TokenAmount::from_whole(5))
            .unwrap();

        assert_eq!(swap.custody_balance(&token), TokenAmount::from_whole(1005));
        assert_eq!(token.balance_of(&user), TokenAmount::from_whole(5));

        let last = swap.events().last().unwrap();
        assert_eq!(
            *last,
            SwapEvent::PointsPurchased {
                game_id: GAME,
                buyer: user,
                token_amount: TokenAmount::from_whole(5),
                point_price: 5,
                quote: TokenAmount::from_raw(100),
            }
        );
    }

    #[test]
    fn test_buy_unconfigured_game_fails() {
        let (mut swap, mut token, _, user) = setup();
        let err = swap
            .buy_game_point(&mut token, user, 99, TokenAmount::from_whole(1))
            .unwrap_err();
        assert!(matches!(err, SwapError::GameNotConfigured(99)));
    }

    #[test]
    fn test_buy_zero_price_fails() {
        let (mut swap, mut token, owner, user) = setup();
        swap.set_game_point_price(owner, 2, 0).unwrap();
        swap.set_game_backend_key(owner, 2, BackendKey::new("Other"))
            .unwrap();

        let err = swap
            .buy_game_point(&mut token, user, 2, TokenAmount::from_whole(1))
            .unwrap_err();
        assert!(matches!(err, SwapError::ZeroPointPrice(2)));
    }

    #[test]
    fn test_buy_without_allowance_fails_cleanly() {
        let (mut swap, mut token, _, user) = setup();
        let err = swap
            .buy_game_point(&mut token, user, GAME, TokenAmount::from_whole(5))
            .unwrap_err();
        assert!(matches!(err, SwapError::Token(_)));
        assert_eq!(swap.custody_balance(&token), TokenAmount::from_whole(1000));
        assert_eq!(token.balance_of(&user), TokenAmount::from_whole(10));
    }

    #[test]
    fn test_sell_with_correct_attestation() {
        let (mut swap, mut token, _, user) = setup();
        let amount = TokenAmount::from_whole(5);

        let attestation = signer().compute_attestation(GAME, &user, amount);
        swap.sell_game_point(&mut token, user, GAME, amount, &attestation)
            .unwrap();

        assert_eq!(swap.custody_balance(&token), TokenAmount::from_whole(995));
        assert_eq!(token.balance_of(&user), TokenAmount::from_whole(15));
    }

    #[test]
    fn test_sell_with_wrong_attestation_changes_nothing() {
        let (mut swap, mut token, _, user) = setup();
        let amount = TokenAmount::from_whole(5);

        let garbage = Digest::from_bytes([0x5a; 32]);
        let err = swap
            .sell_game_point(&mut token, user, GAME, amount, &garbage)
            .unwrap_err();
        assert!(matches!(err, SwapError::Verification { game_id: GAME }));
        assert_eq!(swap.custody_balance(&token), TokenAmount::from_whole(1000));
        assert_eq!(token.balance_of(&user), TokenAmount::from_whole(10));
    }

    #[test]
    fn test_sell_attestation_for_other_amount_fails() {
        let (mut swap, mut token, _, user) = setup();

        let attested = TokenAmount::from_whole(5);
        let requested = TokenAmount::from_whole(7);
        let attestation = signer().compute_attestation(GAME, &user, attested);

        let err = swap
            .sell_game_point(&mut token, user, GAME, requested, &attestation)
            .unwrap_err();
        assert!(matches!(err, SwapError::Verification { .. }));
    }

    #[test]
    fn test_sell_beyond_custody_fails_after_valid_attestation() {
        let (mut swap, mut token, _, user) = setup();

        let amount = TokenAmount::from_whole(2000);
        let attestation = signer().compute_attestation(GAME, &user, amount);

        let err = swap
            .sell_game_point(&mut token, user, GAME, amount, &attestation)
            .unwrap_err();
        assert!(matches!(err, SwapError::InsufficientCustody { .. }));
        assert_eq!(swap.custody_balance(&token), TokenAmount::from_whole(1000));
    }

    #[test]
    fn test_reference_scenario_two_buys_one_sell() {
        // Custody 1000; two buys of 5 each; one redemption of the
        // combined 10; custody back to 1000 and the user made whole.
        let (mut swap, mut token, _, user) = setup();

        for _ in 0..2 {
            token.approve(user, swap.custody_account(), TokenAmount::from_whole(5));
            swap.buy_game_point(&mut token, user, GAME, TokenAmount::from_whole(5))
                .unwrap();
        }
        assert_eq!(swap.custody_balance(&token), TokenAmount::from_whole(1010));
        assert_eq!(token.balance_of(&user), TokenAmount::ZERO);

        let amount = TokenAmount::from_whole(10);
        let attestation = signer().compute_attestation(GAME, &user, amount);
        swap.sell_game_point(&mut token, user, GAME, amount, &attestation)
            .unwrap();

        assert_eq!(swap.custody_balance(&token), TokenAmount::from_whole(1000));
        assert_eq!(token.balance_of(&user), TokenAmount::from_whole(10));
    }

    #[test]
    fn test_transfer_to_by_owner() {
        let (mut swap, mut token, owner, user) = setup();

        swap.transfer_to(&mut token, owner, user, TokenAmount::from_raw(50))
            .unwrap();
        assert_eq!(
            token.balance_of(&user),
            TokenAmount::from_whole(10).saturating_add(TokenAmount::from_raw(50))
        );
    }

    #[test]
    fn test_transfer_to_by_non_owner_fails_even_for_zero() {
        let (mut swap, mut token, _, user) = setup();

        let err = swap
            .transfer_to(&mut token, user, user, TokenAmount::ZERO)
            .unwrap_err();
        assert!(matches!(err, SwapError::Unauthorized { .. }));

        let err = swap
            .transfer_to(&mut token, user, user, TokenAmount::from_whole(1))
            .unwrap_err();
        assert!(matches!(err, SwapError::Unauthorized { .. }));
    }

    #[test]
    fn test_transfer_to_beyond_custody_fails() {
        let (mut swap, mut token, owner, user) = setup();
        let err = swap
            .transfer_to(&mut token, owner, user, TokenAmount::from_whole(1001))
            .unwrap_err();
        assert!(matches!(err, SwapError::InsufficientCustody { .. }));
    }

    #[test]
    fn test_upgrade_gates_and_preserves_state() {
        let (mut swap, _, owner, _) = setup();

        assert_eq!(swap.version(), 1);
        let before = bincode::serialize(&swap.snapshot().unwrap().registry).unwrap();

        swap.upgrade_to_v2(owner).unwrap();
        assert_eq!(swap.version(), 2);

        let after = bincode::serialize(&swap.snapshot().unwrap().registry).unwrap();
        assert_eq!(before, after);

        let err = swap.upgrade_to_v2(owner).unwrap_err();
        assert!(matches!(err, SwapError::VersionMismatch { .. }));
        assert_eq!(swap.version(), 2);
    }

    #[test]
    fn test_upgrade_requires_owner() {
        let (mut swap, _, _, user) = setup();
        let err = swap.upgrade_to_v2(user).unwrap_err();
        assert!(matches!(err, SwapError::Unauthorized { .. }));
        assert_eq!(swap.version(), 1);
    }

    #[test]
    fn test_v2_switches_quote_source() {
        let (mut swap, mut token, owner, user) = setup();

        swap.upgrade_to_v2(owner).unwrap();

        token.approve(user, swap.custody_account(), TokenAmount::from_whole(5));
        swap.buy_game_point(&mut token, user, GAME, TokenAmount::from_whole(5))
            .unwrap();

        match swap.events().last().unwrap() {
            SwapEvent::PointsPurchased { quote, .. } => {
                assert_eq!(*quote, TokenAmount::from_raw(200));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_redemption_survives_upgrade() {
        let (mut swap, mut token, owner, user) = setup();
        swap.upgrade_to_v2(owner).unwrap();

        let amount = TokenAmount::from_whole(3);
        let attestation = signer().compute_attestation(GAME, &user, amount);
        swap.sell_game_point(&mut token, user, GAME, amount, &attestation)
            .unwrap();
        assert_eq!(swap.custody_balance(&token), TokenAmount::from_whole(997));
    }

    #[test]
    fn test_snapshot_restore_roundtrip() {
        let (mut swap, mut token, owner, user) = setup();
        swap.upgrade_to_v2(owner).unwrap();

        let snapshot = swap.snapshot().unwrap();
        let (pair, oracle) = feeds();
        let mut restored = SwapLedger::restore(snapshot, pair, oracle);

        assert_eq!(restored.version(), 2);
        assert_eq!(restored.owner(), owner);

        // Redemption still verifies against the restored registry keys.
        let amount = TokenAmount::from_whole(4);
        let attestation = signer().compute_attestation(GAME, &user, amount);
        restored
            .sell_game_point(&mut token, user, GAME, amount, &attestation)
            .unwrap();
        assert_eq!(restored.custody_balance(&token), TokenAmount::from_whole(996));
    }

    #[test]
    fn test_transfer_ownership_hands_over_gate() {
        let (mut swap, mut token, owner, user) = setup();

        swap.transfer_ownership(owner, user).unwrap();
        assert_eq!(swap.owner(), user);

        let err = swap
            .transfer_to(&mut token, owner, owner, TokenAmount::ZERO)
            .unwrap_err();
        assert!(matches!(err, SwapError::Unauthorized { .. }));
        swap.transfer_to(&mut token, user, user, TokenAmount::from_raw(1))
            .unwrap();
    }

    #[test]
    fn test_mixed_case_claimant_redeems() {
        let (mut swap, mut token, _, _) = setup();

        let mixed = AccountId::from_hex("0x70997970C51812dc3A010C7d01b50e0d17dc79C8").unwrap();
        token.mint(mixed, TokenAmount::from_whole(1));

        let amount = TokenAmount::from_whole(2);
        // Attestation computed over the lowercase spelling.
        let lower = AccountId::from_hex("0x70997970c51812dc3a010c7d01b50e0d17dc79c8").unwrap();
        let attestation = compute_attestation(
            GAME,
            &lower,
            amount,
            &BackendKey::new("GameBackend"),
            &BackendKey::new("ArcadeBackend"),
        );

        swap.sell_game_point(&mut token, mixed, GAME, amount, &attestation)
            .unwrap();
    }
}
