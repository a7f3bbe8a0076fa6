//! # axp-store — Persistence boundary for AqubeXP
//!
//! The hosted backend's row storage (`profiles`, `referrals`) and its
//! `process_referral` procedure, consumed as an opaque async request/response
//! surface behind [`ProfileStore`]. Ships an in-memory reference backend for
//! tests and simulation.
//!
//! All balance mutation goes through [`Settlement`], one atomic write per
//! game round. The referral accounting rule (cap 3, +1 spin per qualifying
//! referral, idempotent per pair) lives here next to the store it guards.

mod error;
mod memory;
mod referral;
mod session;
mod settlement;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use referral::{RejectReason, ReferralOutcome, apply_referral};
pub use session::{AuthEvent, SessionReferralHook, referral_code_from_query};
pub use settlement::Settlement;
pub use store::ProfileStore;
