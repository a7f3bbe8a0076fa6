//! Quiz session — one round drawn, one settlement written

use axp_core::{Profile, ProfileId};
use axp_games::quiz::default_bank;
use axp_games::{GameError, Question, QuizResults, QuizRound};
use axp_store::{ProfileStore, Settlement};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::ArenaError;

/// One open quiz modal
///
/// Holds the question bank and the active round. Points are credited only
/// through [`finish`](Self::finish), which writes exactly one settlement per
/// round; closing the modal mid-round (or calling [`abandon`](Self::abandon))
/// credits nothing.
pub struct QuizSession {
    bank: Vec<Question>,
    rng: StdRng,
    round: Option<QuizRound>,
    settled: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::with_bank(default_bank())
    }

    pub fn with_bank(bank: Vec<Question>) -> Self {
        Self {
            bank,
            rng: StdRng::from_os_rng(),
            round: None,
            settled: false,
        }
    }

    /// Seed the question draw for reproducible runs
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Draw a fresh round, replacing any previous one without settling it
    pub fn start(&mut self) -> Result<(), ArenaError> {
        let round = QuizRound::start(&self.bank, &mut self.rng)?;
        self.round = Some(round);
        self.settled = false;
        Ok(())
    }

    /// The active round, if one has been started
    pub fn round(&self) -> Option<&QuizRound> {
        self.round.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.round.as_ref().is_some_and(QuizRound::is_finished)
    }

    /// Highlight an option on the current question
    pub fn select(&mut self, choice: usize) -> Result<(), ArenaError> {
        Ok(self.active_round()?.select(choice)?)
    }

    /// Answer the current question and advance
    pub fn submit_answer(&mut self, choice: usize) -> Result<(), ArenaError> {
        Ok(self.active_round()?.submit_answer(choice)?)
    }

    /// Submit whatever is selected (possibly nothing) and advance
    pub fn submit(&mut self) -> Result<(), ArenaError> {
        Ok(self.active_round()?.submit()?)
    }

    /// One-second countdown tick; inert without an active round
    pub fn tick(&mut self) {
        if let Some(round) = self.round.as_mut() {
            round.tick();
        }
    }

    /// Settle the finished round against the profile
    ///
    /// Credits the final score in a single settlement write and returns the
    /// updated profile. A zero score writes nothing. On a failed write the
    /// round stays finished and unsettled, so the call can be retried; once a
    /// write succeeds, further calls return [`ArenaError::AlreadySettled`].
    pub async fn finish(
        &mut self,
        store: &impl ProfileStore,
        profile_id: ProfileId,
    ) -> Result<(QuizResults, Profile), ArenaError> {
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
            "[Quiz] {} finished {}/{} correct for {} pts",
            profile_id,
            results.correct,
            results.total_questions,
            results.score
        );
        Ok((results, profile))
    }

    /// Drop the active round without settling anything
    pub fn abandon(&mut self) {
        self.round = None;
        self.settled = false;
    }

    fn active_round(&mut self) -> Result<&mut QuizRound, ArenaError> {
        match self.round.as_mut() {
            Some(round) if !round.is_finished() => Ok(round),
            Some(_) => Err(ArenaError::Game(GameError::RoundOver)),
            None => Err(ArenaError::NoActiveRound),
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
