//! Quiz and scramble round simulation with a tunable skill knob

use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use axp_games::quiz::default_bank as quiz_bank;
use axp_games::scramble::default_bank as scramble_bank;
use axp_games::{QuizRound, ScrambleRound, Word};

/// Aggregate over simulated quiz rounds
#[derive(Debug, Serialize)]
pub struct QuizReport {
    pub rounds: u32,
    pub skill: f64,
    pub mean_score: f64,
    pub mean_correct: f64,
    pub best_score: u64,
}

/// Play `rounds` quiz rounds, answering correctly with probability `skill`
pub fn run_quiz(rounds: u32, skill: f64, seed: u64) -> Result<QuizReport> {
    let bank = quiz_bank();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut total_score = 0u64;
    let mut total_correct = 0u64;
    let mut best_score = 0u64;

    for _ in 0..rounds {
        let mut round = QuizRound::start(&bank, &mut rng)?;
        while let Some(question) = round.current_question() {
            let correct = question.correct;
            let choice = if rng.random::<f64>() < skill {
                correct
            } else {
                (correct + 1 + rng.random_range(0..3)) % 4
            };
            round.submit_answer(choice)?;
        }
        if let Some(results) = round.results() {
            total_score += results.score;
            total_correct += results.correct as u64;
            best_score = best_score.max(results.score);
        }
    }

    Ok(QuizReport {
        rounds,
        skill,
        mean_score: total_score as f64 / rounds.max(1) as f64,
        mean_correct: total_correct as f64 / rounds.max(1) as f64,
        best_score,
    })
}

impl QuizReport {
    pub fn print(&self) {
        println!("Quiz rounds:    {}", self.rounds);
        println!("Skill:          {:.0}%", self.skill * 100.0);
        println!("Mean score:     {:.1}", self.mean_score);
        println!("Mean correct:   {:.2}/5", self.mean_correct);
        println!("Best score:     {}", self.best_score);
    }
}

/// Aggregate over simulated scramble rounds
#[derive(Debug, Serialize)]
pub struct ScrambleReport {
    pub rounds: u32,
    pub skill: f64,
    pub mean_score: f64,
    pub mean_words: f64,
}

/// Find the bank word whose letters match the scramble on screen
fn solve(bank: &[Word], scrambled: &str) -> Option<String> {
    let key = sorted_letters(scrambled);
    bank.iter()
        .find(|w| sorted_letters(&w.word) == key)
        .map(|w| w.word.clone())
}

fn sorted_letters(word: &str) -> Vec<char> {
    let mut letters: Vec<char> = word.to_ascii_uppercase().chars().collect();
    letters.sort_unstable();
    letters
}

/// Play `rounds` scramble rounds at one guess-or-skip action per second
pub fn run_scramble(rounds: u32, skill: f64, seed: u64) -> Result<ScrambleReport> {
    let bank = scramble_bank();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut total_score = 0u64;
    let mut total_words = 0u64;

    for _ in 0..rounds {
        let mut round = ScrambleRound::start(&bank, &mut rng)?;
        while !round.is_finished() {
            let answer = solve(&bank, round.scrambled());
            match answer {
                Some(word) if rng.random::<f64>() < skill => {
                    round.submit_guess(&word, &mut rng)?;
                }
                _ => round.skip(&mut rng)?,
            }
            round.tick();
        }
        if let Some(results) = round.results() {
            total_score += results.score;
            total_words += results.words_completed as u64;
        }
    }

    Ok(ScrambleReport {
        rounds,
        skill,
        mean_score: total_score as f64 / rounds.max(1) as f64,
        mean_words: total_words as f64 / rounds.max(1) as f64,
    })
}

impl ScrambleReport {
    pub fn print(&self) {
        println!("Scramble rounds: {}", self.rounds);
        println!("Skill:           {:.0}%", self.skill * 100.0);
        println!("Mean score:      {:.1}", self.mean_score);
        println!("Mean words:      {:.2}", self.mean_words);
    }
}
