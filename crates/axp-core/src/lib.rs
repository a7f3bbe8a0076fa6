//! axp-core: Shared domain types for the AqubeXP rewards engine
//!
//! Profiles, referral rows, and the referral policy constants used by every
//! other crate in the workspace.

mod profile;
mod referral;

pub use profile::*;
pub use referral::*;
