//! Session hook for deferred referral codes
//!
//! The landing page arrives with an optional `?ref=` query parameter; the
//! code is held until the auth service reports a signed-in session, then
//! applied exactly once.

use axp_core::ProfileId;

use crate::{ProfileStore, ReferralOutcome, StoreError, apply_referral};

/// Auth state change delivered by the external auth service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(ProfileId),
    SignedOut,
}

/// Extract the `ref` parameter from a URL query string
///
/// Accepts with or without the leading `?`; empty values count as absent.
pub fn referral_code_from_query(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "ref")
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Applies a pending referral code on the first signed-in session
///
/// The pending code is consumed on the first application attempt whether or
/// not the policy accepts it; later sign-ins change nothing. Rule-level
/// idempotence additionally guards against the same pair being processed
/// twice across sessions.
#[derive(Debug, Default)]
pub struct SessionReferralHook {
    pending: Option<String>,
}

impl SessionReferralHook {
    pub fn new(pending: Option<String>) -> Self {
        Self { pending }
    }

    /// Seed from the page's query string
    pub fn from_query(query: &str) -> Self {
        Self::new(referral_code_from_query(query))
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed one auth event; returns the referral outcome if one was applied
    pub async fn on_auth_event(
        &mut self,
        store: &impl ProfileStore,
        event: AuthEvent,
    ) -> Result<Option<ReferralOutcome>, StoreError> {
        let AuthEvent::SignedIn(user) = event else {
            return Ok(None);
        };
        let Some(code) = self.pending.take() else {
            return Ok(None);
        };

        log::debug!("[Session] applying pending referral code {code:?} for {user}");
        apply_referral(store, &code, user).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_query_parsing() {
        assert_eq!(
            referral_code_from_query("?ref=722f74aa"),
            Some("722f74aa".to_string())
        );
        assert_eq!(
            referral_code_from_query("utm=x&ref=abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(referral_code_from_query("?ref="), None);
        assert_eq!(referral_code_from_query("?other=1"), None);
        assert_eq!(referral_code_from_query(""), None);
    }

    #[tokio::test]
    async fn test_pending_code_applied_once_on_sign_in() {
        let store = MemoryStore::new();
        let referrer = store.create_profile(Some("Ref"), None).await.unwrap();
        let friend = store.create_profile(None, None).await.unwrap();

        let mut hook =
            SessionReferralHook::from_query(&format!("?ref={}", referrer.referral_code));
        assert!(hook.has_pending());

        // Sign-out first: nothing happens
        let none = hook.on_auth_event(&store, AuthEvent::SignedOut).await.unwrap();
        assert!(none.is_none());
        assert!(hook.has_pending());

        let outcome = hook
            .on_auth_event(&store, AuthEvent::SignedIn(friend.id))
            .await
            .unwrap();
        assert!(outcome.unwrap().is_accepted());
        assert!(!hook.has_pending());

        // A second sign-in applies nothing further
        let again = hook
            .on_auth_event(&store, AuthEvent::SignedIn(friend.id))
            .await
            .unwrap();
        assert!(again.is_none());
        assert_eq!(store.profile(referrer.id).await.unwrap().spins, 1);
    }

    #[tokio::test]
    async fn test_no_pending_code_is_inert() {
        let store = MemoryStore::new();
        let user = store.create_profile(None, None).await.unwrap();

        let mut hook = SessionReferralHook::from_query("");
        let outcome = hook
            .on_auth_event(&store, AuthEvent::SignedIn(user.id))
            .await
            .unwrap();
        assert!(outcome.is_none());
    }
}
