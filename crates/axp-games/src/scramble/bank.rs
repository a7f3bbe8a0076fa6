//! Word catalog

use serde::{Deserialize, Serialize};

/// Seconds per round (one countdown for the whole round, not per word)
pub const ROUND_TIME_SECS: u32 = 60;

/// A static catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Canonical uppercase word
    pub word: String,
    /// Hint shown under the scramble
    pub hint: String,
    /// Points for solving it
    pub points: u64,
}

impl Word {
    pub fn new(word: &str, hint: &str, points: u64) -> Self {
        Self {
            word: word.to_string(),
            hint: hint.to_string(),
            points,
        }
    }
}

/// The shipped 20-word gaming bank
pub fn default_bank() -> Vec<Word> {
    vec![
        Word::new("GAMING", "Playing video games", 30),
        Word::new("CONSOLE", "Gaming device for TV", 40),
        Word::new("CONTROLLER", "Input device for games", 50),
        Word::new("STREAMER", "Person who broadcasts games", 45),
        Word::new("ESPORTS", "Competitive gaming", 40),
        Word::new("MULTIPLAYER", "Games with multiple players", 60),
        Word::new("DOWNLOAD", "Getting files from internet", 45),
        Word::new("KEYBOARD", "Computer input device", 45),
        Word::new("HEADSET", "Audio device for gaming", 40),
        Word::new("PIXEL", "Smallest unit of digital image", 35),
        Word::new("VIRTUAL", "Computer simulated", 40),
        Word::new("CHAMPION", "Winner of competition", 45),
        Word::new("STRATEGY", "Game planning approach", 50),
        Word::new("ADVENTURE", "Story-driven game genre", 55),
        Word::new("GRAPHICS", "Visual elements in games", 45),
        Word::new("JOYSTICK", "Gaming control stick", 45),
        Word::new("NETWORK", "Connected system", 40),
        Word::new("AVATAR", "Player character representation", 40),
        Word::new("QUEST", "Game mission or task", 35),
        Word::new("LEVEL", "Game stage or difficulty", 30),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_is_uppercase() {
        for w in default_bank() {
            assert_eq!(w.word, w.word.to_uppercase());
            assert!(w.word.len() > 1);
        }
    }

    #[test]
    fn test_bank_size() {
        assert_eq!(default_bank().len(), 20);
    }
}
