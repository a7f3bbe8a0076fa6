//! Quiz round state machine

use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::quiz::{QUESTION_TIME_SECS, QUESTIONS_PER_ROUND, Question};

/// Terminal results of a quiz round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResults {
    /// Total points across all scored questions
    pub score: u64,
    /// Count of correctly answered questions
    pub correct: u32,
    /// Questions in the round
    pub total_questions: usize,
}

/// One play-through of the quiz
///
/// Ephemeral: created when the game opens, dropped without settlement when it
/// closes. The running score stays hidden until the final question has been
/// processed.
#[derive(Debug, Clone)]
pub struct QuizRound {
    questions: Vec<Question>,
    current: usize,
    selected: Option<usize>,
    score: u64,
    correct_count: u32,
    time_left: u32,
    finished: bool,
}

impl QuizRound {
    /// Draw a fresh round: 5 distinct questions, uniformly without replacement
    pub fn start(bank: &[Question], rng: &mut impl Rng) -> Result<Self, GameError> {
        if bank.len() < QUESTIONS_PER_ROUND {
            return Err(GameError::BankTooSmall {
                need: QUESTIONS_PER_ROUND,
                have: bank.len(),
            });
        }

        let questions = index::sample(rng, bank.len(), QUESTIONS_PER_ROUND)
            .iter()
            .map(|i| bank[i].clone())
            .collect();

        Ok(Self {
            questions,
            current: 0,
            selected: None,
            score: 0,
            correct_count: 0,
            time_left: QUESTION_TIME_SECS,
            finished: false,
        })
    }

    /// The question currently on screen, if the round is still active
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// 1-based position of the current question
    pub fn question_number(&self) -> usize {
        (self.current + 1).min(self.questions.len())
    }

    /// Seconds left on the current question
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Currently highlighted option
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Highlight an option for the current question
    pub fn select(&mut self, choice: usize) -> Result<(), GameError> {
        if self.finished {
            return Err(GameError::RoundOver);
        }
        if choice >= 4 {
            return Err(GameError::InvalidChoice(choice));
        }
        self.selected = Some(choice);
        Ok(())
    }

    /// Score the current selection and advance
    ///
    /// A correct selection adds the question's own point value; anything else
    /// (including no selection at all) adds zero.
    pub fn submit(&mut self) -> Result<(), GameError> {
        if self.finished {
            return Err(GameError::RoundOver);
        }

        let question = &self.questions[self.current];
        if self.selected == Some(question.correct) {
            self.score += question.points;
            self.correct_count += 1;
        }

        self.selected = None;
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.time_left = QUESTION_TIME_SECS;
        } else {
            self.finished = true;
        }
        Ok(())
    }

    /// Select and submit in one step
    pub fn submit_answer(&mut self, choice: usize) -> Result<(), GameError> {
        self.select(choice)?;
        self.submit()
    }

    /// One-second countdown tick
    ///
    /// Reaching zero auto-advances as if the current selection (possibly
    /// none) had been submitted; an unanswered question scores zero.
    pub fn tick(&mut self) {
        if self.finished {
            return;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            // Round is active here, so submit cannot fail
            let _ = self.submit();
        }
    }

    /// Final results, available only once the round is over
    pub fn results(&self) -> Option<QuizResults> {
        self.finished.then_some(QuizResults {
            score: self.score,
            correct: self.correct_count,
            total_questions: self.questions.len(),
        })
    }
}
