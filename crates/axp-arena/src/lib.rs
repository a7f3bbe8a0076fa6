//! # axp-arena — Round orchestration for AqubeXP
//!
//! Binds game rounds to the profile store: preconditions before play,
//! exactly one settlement write after scoring is final, never an optimistic
//! local balance. One session object per open game modal; dropping a session
//! mid-round settles nothing.

mod error;
mod quiz;
mod scramble;
mod slot;

pub use error::ArenaError;
pub use quiz::QuizSession;
pub use scramble::ScrambleSession;
pub use slot::SlotSession;
