//! Referral row and the product's referral policy constants

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ProfileId;

/// Maximum successful referrals counted per referring user
pub const REFERRAL_CAP: usize = 3;

/// Spins credited per qualifying referral
pub const REFERRAL_BONUS_SPINS: u32 = 1;

/// One successful referred sign-up
///
/// Created exactly once per qualifying sign-up, immutable thereafter. At most
/// one row may exist per (referrer, referred) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referral {
    /// Profile that shared the code
    pub referrer: ProfileId,
    /// Profile that signed up with it
    pub referred: ProfileId,
    /// Insertion timestamp
    pub created_at: DateTime<Utc>,
}

impl Referral {
    pub fn new(referrer: ProfileId, referred: ProfileId) -> Self {
        Self {
            referrer,
            referred,
            created_at: Utc::now(),
        }
    }
}
