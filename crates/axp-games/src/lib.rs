//! # axp-games — Mini-game logic for AqubeXP
//!
//! The three engagement games behind the pre-registration page, with all
//! scoring and selection logic kept free of any UI state.
//!
//! ## Components
//!
//! - **Slot machine**: weighted outcome generator over an 8-symbol wheel,
//!   resolved against a fixed reward table
//! - **Quiz**: 5 questions drawn without replacement, per-question countdown
//! - **Word scramble**: single round countdown over a shuffled word queue
//!
//! ## Architecture
//!
//! ```text
//! SlotEngine ──► SpinBand ──► RewardTable ──► SpinOutcome
//! QuizRound / ScrambleRound ──► tick()/submit ──► RoundResults
//! ```
//!
//! Rounds are ephemeral value objects: created when a game opens, dropped
//! without settlement when it closes. Engines own a seedable `StdRng`.

mod error;
pub mod quiz;
pub mod scramble;
pub mod slot;

pub use error::GameError;
pub use quiz::{Question, QuizResults, QuizRound};
pub use scramble::{ScrambleResults, ScrambleRound, Word, scramble_word};
pub use slot::{Reward, RewardTable, SlotEngine, SpinBand, SpinOutcome, SpinStats, Symbol};
