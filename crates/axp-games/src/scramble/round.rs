//! Scramble round state machine

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::scramble::{ROUND_TIME_SECS, Word};

/// Scramble a word by a uniform random permutation of its letters
///
/// Resamples while the permutation equals the original, so a word with at
/// least two distinct letters never comes back unchanged. Words whose letters
/// are all identical are returned as-is.
pub fn scramble_word(word: &str, rng: &mut impl Rng) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    let distinct = {
        let mut sorted = letters.clone();
        sorted.sort_unstable();
        sorted.dedup();
        sorted.len()
    };
    if distinct < 2 {
        return word.to_string();
    }

    loop {
        letters.shuffle(rng);
        let scrambled: String = letters.iter().collect();
        if scrambled != word {
            return scrambled;
        }
    }
}

/// Terminal results of a scramble round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleResults {
    /// Total points across solved words
    pub score: u64,
    /// Words solved before time ran out
    pub words_completed: u32,
}

/// One play-through of the word scramble
///
/// A single 60-second countdown covers the whole round. Words are drawn from
/// the unused portion of the bank; once every word has been shown the used
/// set clears and words may repeat.
#[derive(Debug, Clone)]
pub struct ScrambleRound {
    bank: Vec<Word>,
    used: Vec<String>,
    current: Word,
    scrambled: String,
    score: u64,
    words_completed: u32,
    time_left: u32,
    finished: bool,
}

impl ScrambleRound {
    /// Start a round with a fresh word
    pub fn start(bank: &[Word], rng: &mut impl Rng) -> Result<Self, GameError> {
        if bank.is_empty() {
            return Err(GameError::BankTooSmall { need: 1, have: 0 });
        }

        let mut round = Self {
            bank: bank.to_vec(),
            used: Vec::new(),
            current: bank[0].clone(),
            scrambled: String::new(),
            score: 0,
            words_completed: 0,
            time_left: ROUND_TIME_SECS,
            finished: false,
        };
        round.next_word(rng);
        Ok(round)
    }

    /// The scrambled letters currently on screen
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    /// Hint for the current word
    pub fn hint(&self) -> &str {
        &self.current.hint
    }

    /// Point value of the current word
    pub fn current_points(&self) -> u64 {
        self.current.points
    }

    /// Seconds left in the round
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Evaluate a guess against the canonical word, case-insensitively
    ///
    /// A correct guess credits the word's points and advances to a new word.
    /// An incorrect guess costs nothing and leaves the same scramble up.
    pub fn submit_guess(&mut self, guess: &str, rng: &mut impl Rng) -> Result<bool, GameError> {
        if self.finished {
            return Err(GameError::RoundOver);
        }

        if guess.trim().eq_ignore_ascii_case(&self.current.word) {
            self.score += self.current.points;
            self.words_completed += 1;
            self.next_word(rng);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Discard the current word and advance without scoring
    pub fn skip(&mut self, rng: &mut impl Rng) -> Result<(), GameError> {
        if self.finished {
            return Err(GameError::RoundOver);
        }
        self.next_word(rng);
        Ok(())
    }

    /// One-second countdown tick; at zero the round ends regardless of any
    /// in-progress guess
    pub fn tick(&mut self) {
        if self.finished {
            return;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.finished = true;
        }
    }

    /// Final results, available only once time is up
    pub fn results(&self) -> Option<ScrambleResults> {
        self.finished.then_some(ScrambleResults {
            score: self.score,
            words_completed: self.words_completed,
        })
    }

    fn next_word(&mut self, rng: &mut impl Rng) {
        let available: Vec<&Word> = self
            .bank
            .iter()
            .filter(|w| !self.used.contains(&w.word))
            .collect();

        let word = match available.choose(rng) {
            Some(w) => (*w).clone(),
            None => {
                // Bank exhausted within this round: reset and keep going
                self.used.clear();
                // Bank is never empty here
                self.bank
                    .choose(rng)
                    .cloned()
                    .unwrap_or_else(|| self.current.clone())
            }
        };

        self.scrambled = scramble_word(&word.word, rng);
        self.used.push(word.word.clone());
        self.current = word;
    }
}
