//! Slot session — spin generation plus debit/credit settlement

use axp_core::{Profile, ProfileId};
use axp_games::{SlotEngine, SpinBand, SpinOutcome};
use axp_store::{ProfileStore, Settlement, StoreError};

use crate::ArenaError;

/// One open slot machine modal
///
/// Enforces the spin precondition, single-flight settlement, and the
/// debit rules: one spin consumed per spin, except the bonus band which
/// consumes nothing. Balances shown to the user come from the returned
/// authoritative [`Profile`], never from a local counter.
pub struct SlotSession {
    engine: SlotEngine,
    in_flight: bool,
}

impl SlotSession {
    pub fn new() -> Self {
        Self {
            engine: SlotEngine::new(),
            in_flight: false,
        }
    }

    /// Seed the outcome generator for reproducible runs
    pub fn seed(&mut self, seed: u64) {
        self.engine.seed(seed);
    }

    /// The underlying engine (stats, reward table)
    pub fn engine(&self) -> &SlotEngine {
        &self.engine
    }

    /// Execute one spin and settle it
    pub async fn spin(
        &mut self,
        store: &impl ProfileStore,
        profile_id: ProfileId,
    ) -> Result<(SpinOutcome, Profile), ArenaError> {
        self.spin_inner(store, profile_id, None).await
    }

    /// Execute a spin forced into a band, then settle it normally
    ///
    /// Same settlement path as [`spin`](Self::spin); used by scripted demos
    /// and tier-precise tests.
    pub async fn spin_forced(
        &mut self,
        store: &impl ProfileStore,
        profile_id: ProfileId,
        band: SpinBand,
    ) -> Result<(SpinOutcome, Profile), ArenaError> {
        self.spin_inner(store, profile_id, Some(band)).await
    }

    async fn spin_inner(
        &mut self,
        store: &impl ProfileStore,
        profile_id: ProfileId,
        band: Option<SpinBand>,
    ) -> Result<(SpinOutcome, Profile), ArenaError> {
        if self.in_flight {
            return Err(ArenaError::SpinInFlight);
        }

        let before = store.profile(profile_id).await?;
        if before.spins == 0 {
            return Err(ArenaError::NoSpinsRemaining);
        }

        self.in_flight = true;
        let outcome = match band {
            Some(band) => self.engine.spin_forced(band),
            None => self.engine.spin(),
        };

        // Bonus band hands the spin back: nothing is debited
        let settlement = if outcome.bonus_spin {
            Settlement::points(outcome.points)
        } else {
            Settlement::spin_consumed(outcome.points)
        };
        let settled = store.apply_settlement(profile_id, settlement).await;
        self.in_flight = false;

        let profile = settled.map_err(|e| match e {
            StoreError::SpinsExhausted(_) => ArenaError::NoSpinsRemaining,
            other => ArenaError::Store(other),
        })?;

        log::debug!(
            "[Slot] {} landed {:?} (+{} pts, spins {})",
            profile_id,
            outcome.band,
            outcome.points,
            profile.spins
        );
        Ok((outcome, profile))
    }
}

impl Default for SlotSession {
    fn default() -> Self {
        Self::new()
    }
}
