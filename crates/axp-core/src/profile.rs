//! Player profile — the one row per user everything settles against

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique profile identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(Uuid);

impl ProfileId {
    /// Generate a fresh id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First 8 hex chars, the short form used for referral codes
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player profile
///
/// Point and spin balances are unsigned so they can never go negative by
/// construction; debits must be checked before they are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier
    pub id: ProfileId,
    /// Display name (optional)
    pub display_name: Option<String>,
    /// Email (optional)
    pub email: Option<String>,
    /// Point balance
    pub points: u64,
    /// Spin balance
    pub spins: u32,
    /// Unique referral code (8 lowercase hex chars)
    pub referral_code: String,
    /// Last settlement timestamp
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a fresh profile with zero balances and a derived referral code
    pub fn new(display_name: Option<String>, email: Option<String>) -> Self {
        let id = ProfileId::new();
        Self {
            referral_code: id.short(),
            id,
            display_name,
            email,
            points: 0,
            spins: 0,
            updated_at: Utc::now(),
        }
    }
}
