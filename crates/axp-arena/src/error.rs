//! Arena error types

use axp_games::GameError;
use axp_store::StoreError;
use thiserror::Error;

/// Errors from round orchestration
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArenaError {
    /// Spin requested with a zero spin balance
    #[error("no spins remaining")]
    NoSpinsRemaining,

    /// A settlement write for this session is still in flight
    #[error("spin settlement already in flight")]
    SpinInFlight,

    /// No round has been started in this session
    #[error("no active round")]
    NoActiveRound,

    /// Settlement requested before the round reached its results state
    #[error("round is not finished")]
    RoundNotFinished,

    /// This round's settlement already succeeded
    #[error("round already settled")]
    AlreadySettled,

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
