//! Store error types

use axp_core::ProfileId;
use thiserror::Error;

/// Errors from the persistence boundary
///
/// All variants are recoverable; the caller may re-read and retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("profile not found: {0}")]
    ProfileNotFound(ProfileId),

    /// Debit would take the spin balance below zero
    #[error("spin balance exhausted for profile {0}")]
    SpinsExhausted(ProfileId),

    /// Remote call failed (network or backend)
    #[error("backend error: {0}")]
    Backend(String),
}
