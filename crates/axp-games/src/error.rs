//! Error types for the mini-games

use thiserror::Error;

/// Game round error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Operation on a round that already reached its results state
    #[error("round is already over")]
    RoundOver,

    /// Not enough catalog entries to start a round
    #[error("bank too small: need {need}, have {have}")]
    BankTooSmall { need: usize, have: usize },

    /// Answer index outside the option range
    #[error("invalid choice index: {0}")]
    InvalidChoice(usize),
}
