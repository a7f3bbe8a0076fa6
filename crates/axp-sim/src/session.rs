//! End-to-end session demo against the in-memory store

use anyhow::Result;

use axp_arena::{ArenaError, QuizSession, ScrambleSession, SlotSession};
use axp_store::{MemoryStore, ProfileStore, ReferralOutcome, apply_referral};

/// Walk one profile through the whole funnel: sign-up, referrals, slots,
/// quiz, scramble. Prints the running balances after each stage.
pub async fn run(seed: u64, referrals: u32) -> Result<()> {
    let store = MemoryStore::new();
    let player = store.create_profile(Some("Demo Player"), None).await?;
    println!(
        "Created {} (code {})",
        player.id.short(),
        player.referral_code
    );

    // Friends sign up through the player's code; the cap bites eventually
    let mut accepted = 0;
    for n in 1..=referrals {
        let friend = store.create_profile(None, None).await?;
        match apply_referral(&store, &player.referral_code, friend.id).await? {
            ReferralOutcome::Accepted { referrer } => {
                accepted += 1;
                println!("Referral {n}: accepted (spins now {})", referrer.spins);
            }
            ReferralOutcome::Rejected(reason) => {
                println!("Referral {n}: rejected ({})", reason.as_str());
            }
        }
    }

    // Spend every earned spin
    let mut slots = SlotSession::new();
    slots.seed(seed);
    loop {
        match slots.spin(&store, player.id).await {
            Ok((outcome, profile)) => {
                let reels: String = outcome.reels.iter().map(|s| s.emoji()).collect();
                println!(
                    "Spin {}: {} {} ({} pts, {} spins left)",
                    outcome.spin_index, reels, outcome.label, profile.points, profile.spins
                );
            }
            Err(ArenaError::NoSpinsRemaining) => break,
            Err(e) => return Err(e.into()),
        }
    }

    // One quiz round, answered perfectly
    let mut quiz = QuizSession::new();
    quiz.seed(seed);
    quiz.start()?;
    while !quiz.is_finished() {
        let correct = quiz
            .round()
            .and_then(|r| r.current_question())
            .map(|q| q.correct)
            .ok_or(ArenaError::NoActiveRound)?;
        quiz.submit_answer(correct)?;
    }
    let (results, profile) = quiz.finish(&store, player.id).await?;
    println!(
        "Quiz: {}/{} correct, +{} pts (total {})",
        results.correct, results.total_questions, results.score, profile.points
    );

    // One scramble round, run out the clock
    let mut scramble = ScrambleSession::new();
    scramble.seed(seed);
    scramble.start()?;
    while !scramble.is_finished() {
        scramble.tick();
    }
    let (results, profile) = scramble.finish(&store, player.id).await?;
    println!(
        "Scramble: {} words, +{} pts (total {})",
        results.words_completed, results.score, profile.points
    );

    let end = store.profile(player.id).await?;
    println!();
    println!(
        "Final: {} pts, {} spins, {}/{} referrals counted",
        end.points, end.spins, accepted, referrals
    );
    Ok(())
}
