//! The profile store trait — boundary to the hosted backend

use axp_core::{Profile, ProfileId};

use crate::{Settlement, StoreError};

/// Async surface over the backend's `profiles` and `referrals` tables
///
/// Every method models one remote call. Mutating methods are atomic on the
/// backend side: they either fully apply or leave the row untouched, and the
/// returned [`Profile`] is the authoritative post-write row callers should
/// re-render from (never an optimistic local copy).
#[allow(async_fn_in_trait)]
pub trait ProfileStore: Send + Sync {
    /// Insert a fresh profile row (sign-up)
    async fn create_profile(
        &self,
        display_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Profile, StoreError>;

    /// Read one profile row
    async fn profile(&self, id: ProfileId) -> Result<Profile, StoreError>;

    /// Look up the profile owning a referral code
    async fn find_by_referral_code(&self, code: &str) -> Result<Option<Profile>, StoreError>;

    /// Apply a settlement to a profile in one write
    ///
    /// Rejects with [`StoreError::SpinsExhausted`] if the debit would take
    /// the spin balance below zero; in that case nothing is applied.
    async fn apply_settlement(
        &self,
        id: ProfileId,
        settlement: Settlement,
    ) -> Result<Profile, StoreError>;

    /// Count referral rows for a referrer
    async fn referral_count(&self, referrer: ProfileId) -> Result<usize, StoreError>;

    /// Is there already a row for this (referrer, referred) pair?
    async fn referral_exists(
        &self,
        referrer: ProfileId,
        referred: ProfileId,
    ) -> Result<bool, StoreError>;

    /// Insert a referral row and credit the referrer's bonus spin as one
    /// atomic step (the backend's `process_referral` procedure)
    ///
    /// Idempotent per (referrer, referred) pair: a repeated call changes
    /// nothing and returns the current referrer row.
    async fn record_referral(
        &self,
        referrer: ProfileId,
        referred: ProfileId,
    ) -> Result<Profile, StoreError>;
}
