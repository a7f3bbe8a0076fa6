//! Scramble session — one timed round, one settlement written

use axp_core::{Profile, ProfileId};
use axp_games::scramble::default_bank;
use axp_games::{GameError, ScrambleResults, ScrambleRound, Word};
use axp_store::{ProfileStore, Settlement};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::ArenaError;

/// One open word-scramble modal
///
/// Same settlement discipline as the quiz: nothing is credited until the
/// countdown reaches zero and [`finish`](Self::finish) writes the final
/// score in a single settlement.
pub struct ScrambleSession {
    bank: Vec<Word>,
    rng: StdRng,
    round: Option<ScrambleRound>,
    settled: bool,
}

impl ScrambleSession {
    pub fn new() -> Self {
        Self::with_bank(default_bank())
    }

    pub fn with_bank(bank: Vec<Word>) -> Self {
        Self {
            bank,
            rng: StdRng::from_os_rng(),
            round: None,
            settled: false,
        }
    }

    /// Seed the word draw and scrambling for reproducible runs
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Start a fresh round, replacing any previous one without settling it
    pub fn start(&mut self) -> Result<(), ArenaError> {
        let round = ScrambleRound::start(&self.bank, &mut self.rng)?;
        self.round = Some(round);
        self.settled = false;
        Ok(())
    }

    /// The active round, if one has been started
    pub fn round(&self) -> Option<&ScrambleRound> {
        self.round.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.round.as_ref().is_some_and(ScrambleRound::is_finished)
    }

    /// Evaluate a guess; `true` means it solved the current word
    pub fn submit_guess(&mut self, guess: &str) -> Result<bool, ArenaError> {
        let Self { rng, round, .. } = self;
        match round.as_mut() {
            Some(round) if !round.is_finished() => Ok(round.submit_guess(guess, rng)?),
            Some(_) => Err(ArenaError::Game(GameError::RoundOver)),
            None => Err(ArenaError::NoActiveRound),
        }
    }

    /// Advance to a new word without scoring
    pub fn skip(&mut self) -> Result<(), ArenaError> {
        let Self { rng, round, .. } = self;
        match round.as_mut() {
            Some(round) if !round.is_finished() => Ok(round.skip(rng)?),
            Some(_) => Err(ArenaError::Game(GameError::RoundOver)),
            None => Err(ArenaError::NoActiveRound),
        }
    }

    /// One-second countdown tick; inert without an active round
    pub fn tick(&mut self) {
        if let Some(round) = self.round.as_mut() {
            round.tick();
        }
    }

    /// Settle the finished round against the profile
    ///
    /// Same contract as the quiz session: one settlement per round, zero
    /// scores write nothing, a failed write leaves the round retryable.
    pub async fn finish(
        &mut self,
        store: &impl ProfileStore,
        profile_id: ProfileId,
    ) -> Result<(ScrambleResults, Profile), ArenaError> {
        let round = self.round.as_ref().ok_or(ArenaError::NoActiveRound)?;
        let results = round.results().ok_or(ArenaError::RoundNotFinished)?;
        if self.settled {
            return Err(ArenaError::AlreadySettled);
        }

        let profile = if results.score > 0 {
            store
                .apply_settlement(profile_id, Settlement::points(results.score))
                .await?
        } else {
            store.profile(profile_id).await?
        };
        self.settled = true;

        log::info!(
            "[Scramble] {} solved {} words for {} pts",
            profile_id,
            results.words_completed,
            results.score
        );
        Ok((results, profile))
    }

    /// Drop the active round without settling anything
    pub fn abandon(&mut self) {
        self.round = None;
        self.settled = false;
    }
}

impl Default for ScrambleSession {
    fn default() -> Self {
        Self::new()
    }
}
