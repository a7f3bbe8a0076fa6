//! End-to-end session flows against the in-memory store

use axp_arena::{ArenaError, QuizSession, ScrambleSession, SlotSession};
use axp_core::ProfileId;
use axp_games::{SpinBand, Word};
use axp_store::{MemoryStore, ProfileStore, RejectReason, ReferralOutcome, Settlement, apply_referral};

async fn profile_with_spins(store: &MemoryStore, spins: u32) -> ProfileId {
    let profile = store.create_profile(Some("Player"), None).await.unwrap();
    if spins > 0 {
        store
            .apply_settlement(profile.id, Settlement::spins(spins))
            .await
            .unwrap();
    }
    profile.id
}

#[tokio::test]
async fn test_clover_spin_credits_and_consumes() {
    let store = MemoryStore::new();
    let id = profile_with_spins(&store, 1).await;

    let mut session = SlotSession::new();
    let (outcome, profile) = session
        .spin_forced(&store, id, SpinBand::Clover)
        .await
        .unwrap();

    assert_eq!(outcome.points, 100);
    assert!(!outcome.bonus_spin);
    assert_eq!(profile.points, 100);
    assert_eq!(profile.spins, 0);
}

#[tokio::test]
async fn test_bonus_band_returns_the_spin() {
    let store = MemoryStore::new();
    let id = profile_with_spins(&store, 1).await;

    let mut session = SlotSession::new();
    let (outcome, profile) = session
        .spin_forced(&store, id, SpinBand::Target)
        .await
        .unwrap();

    assert!(outcome.bonus_spin);
    assert_eq!(outcome.points, 0);
    // The spin that was played comes straight back
    assert_eq!(profile.spins, 1);
    assert_eq!(profile.points, 0);

    // And it remains playable
    let (_, after) = session
        .spin_forced(&store, id, SpinBand::Fire)
        .await
        .unwrap();
    assert_eq!(after.points, 1000);
    assert_eq!(after.spins, 0);
}

#[tokio::test]
async fn test_zero_spins_rejected_before_any_outcome() {
    let store = MemoryStore::new();
    let id = profile_with_spins(&store, 0).await;

    let mut session = SlotSession::new();
    session.seed(42);
    let err = session.spin(&store, id).await.unwrap_err();
    assert_eq!(err, ArenaError::NoSpinsRemaining);

    // No outcome was generated, no settlement written
    assert_eq!(session.engine().stats().total_spins, 0);
    let profile = store.profile(id).await.unwrap();
    assert_eq!(profile.points, 0);
    assert_eq!(profile.spins, 0);
}

#[tokio::test]
async fn test_failed_settlement_leaves_profile_and_session_usable() {
    let store = MemoryStore::new();
    let id = profile_with_spins(&store, 2).await;

    let mut session = SlotSession::new();
    store.set_fail_writes(true);
    let err = session
        .spin_forced(&store, id, SpinBand::Star)
        .await
        .unwrap_err();
    assert!(matches!(err, ArenaError::Store(_)));

    // Balances did not move
    let profile = store.profile(id).await.unwrap();
    assert_eq!(profile.points, 0);
    assert_eq!(profile.spins, 2);

    // The session recovers once the backend does
    store.set_fail_writes(false);
    let (_, after) = session
        .spin_forced(&store, id, SpinBand::Star)
        .await
        .unwrap();
    assert_eq!(after.points, 500);
    assert_eq!(after.spins, 1);
}

#[tokio::test]
async fn test_referral_chain_funds_arena_spins() {
    let store = MemoryStore::new();
    let referrer = store.create_profile(Some("Host"), None).await.unwrap();

    // Three friends sign up through the code; the fourth hits the cap
    for _ in 0..3 {
        let friend = store.create_profile(None, None).await.unwrap();
        let outcome = apply_referral(&store, &referrer.referral_code, friend.id)
            .await
            .unwrap();
        assert!(outcome.is_accepted());
    }
    let fourth = store.create_profile(None, None).await.unwrap();
    let outcome = apply_referral(&store, &referrer.referral_code, fourth.id)
        .await
        .unwrap();
    assert_eq!(
        outcome,
        ReferralOutcome::Rejected(RejectReason::CapReached)
    );

    let funded = store.profile(referrer.id).await.unwrap();
    assert_eq!(funded.spins, 3);

    // Spend every earned spin at the slot machine
    let mut session = SlotSession::new();
    for _ in 0..3 {
        session
            .spin_forced(&store, referrer.id, SpinBand::Mixed)
            .await
            .unwrap();
    }
    let err = session.spin(&store, referrer.id).await.unwrap_err();
    assert_eq!(err, ArenaError::NoSpinsRemaining);

    // Three consolation payouts
    let drained = store.profile(referrer.id).await.unwrap();
    assert_eq!(drained.points, 30);
    assert_eq!(drained.spins, 0);
}

#[tokio::test]
async fn test_quiz_round_settles_final_score_once() {
    let store = MemoryStore::new();
    let id = profile_with_spins(&store, 0).await;

    let mut session = QuizSession::new();
    session.seed(7);
    session.start().unwrap();

    // Answer three correctly, miss two
    let mut expected = 0;
    for i in 0..5 {
        let question = session.round().unwrap().current_question().unwrap().clone();
        if i < 3 {
            expected += question.points;
            session.submit_answer(question.correct).unwrap();
        } else {
            session.submit_answer((question.correct + 1) % 4).unwrap();
        }
    }
    assert!(session.is_finished());

    let (results, profile) = session.finish(&store, id).await.unwrap();
    assert_eq!(results.correct, 3);
    assert_eq!(results.score, expected);
    assert_eq!(profile.points, expected);
    // Quiz play never touches the spin balance
    assert_eq!(profile.spins, 0);

    let err = session.finish(&store, id).await.unwrap_err();
    assert_eq!(err, ArenaError::AlreadySettled);
}

#[tokio::test]
async fn test_quiz_settlement_guards() {
    let store = MemoryStore::new();
    let id = profile_with_spins(&store, 0).await;

    let mut session = QuizSession::new();
    let err = session.finish(&store, id).await.unwrap_err();
    assert_eq!(err, ArenaError::NoActiveRound);

    session.start().unwrap();
    let err = session.finish(&store, id).await.unwrap_err();
    assert_eq!(err, ArenaError::RoundNotFinished);
}

#[tokio::test]
async fn test_quiz_zero_score_writes_nothing() {
    let store = MemoryStore::new();
    let id = profile_with_spins(&store, 0).await;

    let mut session = QuizSession::new();
    session.start().unwrap();
    while !session.is_finished() {
        let question = session.round().unwrap().current_question().unwrap().clone();
        session.submit_answer((question.correct + 1) % 4).unwrap();
    }

    store.set_fail_writes(true);
    let (results, profile) = session.finish(&store, id).await.unwrap();
    assert_eq!(results.score, 0);
    assert_eq!(profile.points, 0);
}

#[tokio::test]
async fn test_quiz_failed_settlement_is_retryable() {
    let store = MemoryStore::new();
    let id = profile_with_spins(&store, 0).await;

    let mut session = QuizSession::new();
    session.start().unwrap();
    while !session.is_finished() {
        let question = session.round().unwrap().current_question().unwrap().clone();
        session.submit_answer(question.correct).unwrap();
    }

    store.set_fail_writes(true);
    let err = session.finish(&store, id).await.unwrap_err();
    assert!(matches!(err, ArenaError::Store(_)));
    assert_eq!(store.profile(id).await.unwrap().points, 0);

    // Retry succeeds and settles exactly once
    store.set_fail_writes(false);
    let (results, profile) = session.finish(&store, id).await.unwrap();
    assert!(results.score > 0);
    assert_eq!(profile.points, results.score);
    let err = session.finish(&store, id).await.unwrap_err();
    assert_eq!(err, ArenaError::AlreadySettled);
}

#[tokio::test]
async fn test_abandoned_round_settles_nothing() {
    let store = MemoryStore::new();
    let id = profile_with_spins(&store, 0).await;

    let mut session = QuizSession::new();
    session.start().unwrap();
    let question = session.round().unwrap().current_question().unwrap().clone();
    session.submit_answer(question.correct).unwrap();
    session.abandon();

    let err = session.finish(&store, id).await.unwrap_err();
    assert_eq!(err, ArenaError::NoActiveRound);
    assert_eq!(store.profile(id).await.unwrap().points, 0);
}

#[tokio::test]
async fn test_scramble_round_settles_final_score() {
    let store = MemoryStore::new();
    let id = profile_with_spins(&store, 0).await;

    let bank = vec![Word::new("ARCADE", "Coin-op gaming venue", 40)];
    let mut session = ScrambleSession::with_bank(bank);
    session.seed(9);
    session.start().unwrap();

    assert!(!session.submit_guess("ACADRE").unwrap());
    assert!(session.submit_guess("arcade").unwrap());
    while !session.is_finished() {
        session.tick();
    }

    let (results, profile) = session.finish(&store, id).await.unwrap();
    assert_eq!(results.words_completed, 1);
    assert_eq!(results.score, 40);
    assert_eq!(profile.points, 40);
    assert_eq!(profile.spins, 0);

    let err = session.finish(&store, id).await.unwrap_err();
    assert_eq!(err, ArenaError::AlreadySettled);
}

#[tokio::test]
async fn test_scramble_requires_finished_round() {
    let store = MemoryStore::new();
    let id = profile_with_spins(&store, 0).await;

    let mut session = ScrambleSession::new();
    let err = session.finish(&store, id).await.unwrap_err();
    assert_eq!(err, ArenaError::NoActiveRound);

    session.start().unwrap();
    let err = session.finish(&store, id).await.unwrap_err();
    assert_eq!(err, ArenaError::RoundNotFinished);

    // Skipping is free and never ends the round by itself
    session.skip().unwrap();
    assert!(!session.is_finished());
}
