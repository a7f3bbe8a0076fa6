//! Referral accounting rule
//!
//! Product policy: at most [`REFERRAL_CAP`] qualifying referrals per user,
//! one bonus spin each, applied exactly once per (referrer, referred) pair.
//! Rejections are silent toward the end user but always logged.

use serde::{Deserialize, Serialize};

use axp_core::{Profile, ProfileId, REFERRAL_CAP};

use crate::{ProfileStore, StoreError};

/// Why a referral did not count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// No profile owns the presented code
    InvalidCode,
    /// The code resolves to the new user themselves
    SelfReferral,
    /// Referrer already has the maximum counted referrals
    CapReached,
    /// This (referrer, referred) pair was already counted
    Duplicate,
}

impl RejectReason {
    /// Telemetry tag
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::InvalidCode => "invalid_code",
            RejectReason::SelfReferral => "self_referral",
            RejectReason::CapReached => "cap_reached",
            RejectReason::Duplicate => "duplicate",
        }
    }
}

/// Result of applying a referral code
#[derive(Debug, Clone, PartialEq)]
pub enum ReferralOutcome {
    /// Row inserted, bonus spin credited; carries the updated referrer row
    Accepted { referrer: Profile },
    /// Policy rejection; nothing changed
    Rejected(RejectReason),
}

impl ReferralOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ReferralOutcome::Accepted { .. })
    }
}

/// Apply a referral code on behalf of a newly signed-up user
///
/// Policy checks run first; acceptance delegates to the store's atomic
/// [`ProfileStore::record_referral`] step so the row insert and the spin
/// credit can never apply partially.
pub async fn apply_referral(
    store: &impl ProfileStore,
    referrer_code: &str,
    new_user: ProfileId,
) -> Result<ReferralOutcome, StoreError> {
    let Some(referrer) = store.find_by_referral_code(referrer_code).await? else {
        log::info!("[Referral] rejected ({}): code {referrer_code:?}", RejectReason::InvalidCode.as_str());
        return Ok(ReferralOutcome::Rejected(RejectReason::InvalidCode));
    };

    if referrer.id == new_user {
        log::info!("[Referral] rejected ({}): {new_user}", RejectReason::SelfReferral.as_str());
        return Ok(ReferralOutcome::Rejected(RejectReason::SelfReferral));
    }

    if store.referral_exists(referrer.id, new_user).await? {
        log::info!("[Referral] rejected ({}): {} -> {new_user}", RejectReason::Duplicate.as_str(), referrer.id);
        return Ok(ReferralOutcome::Rejected(RejectReason::Duplicate));
    }

    if store.referral_count(referrer.id).await? >= REFERRAL_CAP {
        log::info!("[Referral] rejected ({}): {}", RejectReason::CapReached.as_str(), referrer.id);
        return Ok(ReferralOutcome::Rejected(RejectReason::CapReached));
    }

    let referrer = store.record_referral(referrer.id, new_user).await?;
    log::info!(
        "[Referral] accepted: {} referred {new_user}, spins now {}",
        referrer.id,
        referrer.spins
    );
    Ok(ReferralOutcome::Accepted { referrer })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    async fn referrer_and_code(store: &MemoryStore) -> (Profile, String) {
        let profile = store.create_profile(Some("Ref"), None).await.unwrap();
        let code = profile.referral_code.clone();
        (profile, code)
    }

    #[tokio::test]
    async fn test_qualifying_referral_grants_one_spin() {
        let store = MemoryStore::new();
        let (referrer, code) = referrer_and_code(&store).await;
        let friend = store.create_profile(None, None).await.unwrap();

        let outcome = apply_referral(&store, &code, friend.id).await.unwrap();
        match outcome {
            ReferralOutcome::Accepted { referrer: after } => {
                assert_eq!(after.id, referrer.id);
                assert_eq!(after.spins, 1);
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_code_rejected() {
        let store = MemoryStore::new();
        let friend = store.create_profile(None, None).await.unwrap();

        let outcome = apply_referral(&store, "00000000", friend.id).await.unwrap();
        assert_eq!(outcome, ReferralOutcome::Rejected(RejectReason::InvalidCode));
    }

    #[tokio::test]
    async fn test_self_referral_rejected() {
        let store = MemoryStore::new();
        let (referrer, code) = referrer_and_code(&store).await;

        let outcome = apply_referral(&store, &code, referrer.id).await.unwrap();
        assert_eq!(outcome, ReferralOutcome::Rejected(RejectReason::SelfReferral));
        assert_eq!(store.profile(referrer.id).await.unwrap().spins, 0);
    }

    #[tokio::test]
    async fn test_fourth_referral_hits_cap() {
        let store = MemoryStore::new();
        let (referrer, code) = referrer_and_code(&store).await;

        for expected_spins in 1..=3u32 {
            let friend = store.create_profile(None, None).await.unwrap();
            let outcome = apply_referral(&store, &code, friend.id).await.unwrap();
            assert!(outcome.is_accepted());
            assert_eq!(store.profile(referrer.id).await.unwrap().spins, expected_spins);
        }

        let fourth = store.create_profile(None, None).await.unwrap();
        let outcome = apply_referral(&store, &code, fourth.id).await.unwrap();
        assert_eq!(outcome, ReferralOutcome::Rejected(RejectReason::CapReached));

        let after = store.profile(referrer.id).await.unwrap();
        assert_eq!(after.spins, 3);
        assert_eq!(store.referral_count(referrer.id).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_repeat_application_is_a_no_op() {
        let store = MemoryStore::new();
        let (referrer, code) = referrer_and_code(&store).await;
        let friend = store.create_profile(None, None).await.unwrap();

        assert!(apply_referral(&store, &code, friend.id).await.unwrap().is_accepted());
        let second = apply_referral(&store, &code, friend.id).await.unwrap();
        assert_eq!(second, ReferralOutcome::Rejected(RejectReason::Duplicate));

        assert_eq!(store.profile(referrer.id).await.unwrap().spins, 1);
        assert_eq!(store.referral_count(referrer.id).await.unwrap(), 1);
    }
}
