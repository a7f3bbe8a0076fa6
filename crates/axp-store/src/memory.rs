//! In-memory reference backend

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use parking_lot::RwLock;

use axp_core::{Profile, ProfileId, REFERRAL_BONUS_SPINS, Referral};

use crate::{ProfileStore, Settlement, StoreError};

#[derive(Default)]
struct Inner {
    profiles: HashMap<ProfileId, Profile>,
    codes: HashMap<String, ProfileId>,
    referrals: Vec<Referral>,
}

/// In-memory [`ProfileStore`] used by tests and the simulator
///
/// Mutations take the write lock for their whole read-modify-write step, so
/// every settlement and referral insert is atomic the way the hosted
/// backend's row update / stored procedure is.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every mutating call fail with a backend error
    ///
    /// Test hook for the settlement-failure path: callers must surface the
    /// error and leave local state unadvanced.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Referral rows inserted so far
    pub fn referral_rows(&self) -> Vec<Referral> {
        self.inner.read().referrals.clone()
    }

    fn check_writes(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(StoreError::Backend("write rejected".into()))
        } else {
            Ok(())
        }
    }
}

impl ProfileStore for MemoryStore {
    async fn create_profile(
        &self,
        display_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Profile, StoreError> {
        self.check_writes()?;
        let profile = Profile::new(
            display_name.map(str::to_string),
            email.map(str::to_string),
        );

        let mut inner = self.inner.write();
        inner
            .codes
            .insert(profile.referral_code.clone(), profile.id);
        inner.profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn profile(&self, id: ProfileId) -> Result<Profile, StoreError> {
        self.inner
            .read()
            .profiles
            .get(&id)
            .cloned()
            .ok_or(StoreError::ProfileNotFound(id))
    }

    async fn find_by_referral_code(&self, code: &str) -> Result<Option<Profile>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .codes
            .get(code)
            .and_then(|id| inner.profiles.get(id))
            .cloned())
    }

    async fn apply_settlement(
        &self,
        id: ProfileId,
        settlement: Settlement,
    ) -> Result<Profile, StoreError> {
        self.check_writes()?;
        let mut inner = self.inner.write();
        let profile = inner
            .profiles
            .get_mut(&id)
            .ok_or(StoreError::ProfileNotFound(id))?;

        let spins = profile.spins as i64 + settlement.spins_delta as i64;
        if spins < 0 {
            return Err(StoreError::SpinsExhausted(id));
        }

        profile.points += settlement.points_credit;
        profile.spins = spins as u32;
        profile.updated_at = Utc::now();
        Ok(profile.clone())
    }

    async fn referral_count(&self, referrer: ProfileId) -> Result<usize, StoreError> {
        Ok(self
            .inner
            .read()
            .referrals
            .iter()
            .filter(|r| r.referrer == referrer)
            .count())
    }

    async fn referral_exists(
        &self,
        referrer: ProfileId,
        referred: ProfileId,
    ) -> Result<bool, StoreError> {
        Ok(self
            .inner
            .read()
            .referrals
            .iter()
            .any(|r| r.referrer == referrer && r.referred == referred))
    }

    async fn record_referral(
        &self,
        referrer: ProfileId,
        referred: ProfileId,
    ) -> Result<Profile, StoreError> {
        self.check_writes()?;
        let mut inner = self.inner.write();

        if !inner.profiles.contains_key(&referrer) {
            return Err(StoreError::ProfileNotFound(referrer));
        }
        let already = inner
            .referrals
            .iter()
            .any(|r| r.referrer == referrer && r.referred == referred);

        if !already {
            inner.referrals.push(Referral::new(referrer, referred));
            // Same lock scope as the insert: row and spin move together
            let profile = inner
                .profiles
                .get_mut(&referrer)
                .ok_or(StoreError::ProfileNotFound(referrer))?;
            profile.spins += REFERRAL_BONUS_SPINS;
            profile.updated_at = Utc::now();
        }

        inner
            .profiles
            .get(&referrer)
            .cloned()
            .ok_or(StoreError::ProfileNotFound(referrer))
    }
}
