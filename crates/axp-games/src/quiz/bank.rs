//! Question catalog

use serde::{Deserialize, Serialize};

/// Questions per round, drawn without replacement
pub const QUESTIONS_PER_ROUND: usize = 5;

/// Seconds allowed per question
pub const QUESTION_TIME_SECS: u32 = 30;

/// A static catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Catalog id
    pub id: u32,
    /// Question text
    pub text: String,
    /// The four presented options
    pub options: [String; 4],
    /// Index of the correct option
    pub correct: usize,
    /// Points for a correct answer
    pub points: u64,
}

impl Question {
    pub fn new(id: u32, text: &str, options: [&str; 4], correct: usize, points: u64) -> Self {
        Self {
            id,
            text: text.to_string(),
            options: options.map(str::to_string),
            correct,
            points,
        }
    }
}

/// The shipped 15-question gaming bank (point values 25–65)
pub fn default_bank() -> Vec<Question> {
    vec![
        Question::new(
            1,
            "Which gaming console was released first?",
            ["PlayStation", "Nintendo 64", "Sega Genesis", "Xbox"],
            2,
            50,
        ),
        Question::new(
            2,
            "What does RPG stand for in gaming?",
            [
                "Real Player Game",
                "Role Playing Game",
                "Random Player Generator",
                "Racing Performance Game",
            ],
            1,
            30,
        ),
        Question::new(
            3,
            "Which game popularized the battle royale genre?",
            ["PUBG", "Fortnite", "Apex Legends", "H1Z1"],
            0,
            40,
        ),
        Question::new(
            4,
            "What is the maximum level in Pokémon games (original)?",
            ["99", "100", "120", "255"],
            1,
            35,
        ),
        Question::new(
            5,
            "Which company developed the game 'Valorant'?",
            ["Blizzard", "Valve", "Riot Games", "Epic Games"],
            2,
            45,
        ),
        Question::new(
            6,
            "What is the currency used in Minecraft?",
            ["Coins", "Gems", "Emeralds", "Diamonds"],
            2,
            25,
        ),
        Question::new(
            7,
            "Which game won Game of the Year 2020?",
            [
                "Cyberpunk 2077",
                "The Last of Us Part II",
                "Ghost of Tsushima",
                "Hades",
            ],
            1,
            55,
        ),
        Question::new(
            8,
            "In League of Legends, what is the name of the jungle monster that gives a blue buff?",
            ["Baron Nashor", "Dragon", "Blue Sentinel", "Red Brambleback"],
            2,
            60,
        ),
        Question::new(
            9,
            "Which game engine does Unity use?",
            ["Unreal Engine", "Unity Engine", "CryEngine", "Godot"],
            1,
            40,
        ),
        Question::new(
            10,
            "What does FPS stand for in gaming?",
            [
                "First Person Shooter",
                "Frames Per Second",
                "Fast Paced Strategy",
                "All of the above",
            ],
            3,
            30,
        ),
        Question::new(
            11,
            "Which game features the character Master Chief?",
            ["Call of Duty", "Halo", "Doom", "Destiny"],
            1,
            35,
        ),
        Question::new(
            12,
            "What is the highest rank in CS:GO?",
            [
                "Global Elite",
                "Supreme Master",
                "Legendary Eagle",
                "Master Guardian",
            ],
            0,
            65,
        ),
        Question::new(
            13,
            "Which game popularized the 'sliding' mechanic in FPS games?",
            [
                "Call of Duty: Modern Warfare",
                "Titanfall",
                "Apex Legends",
                "Overwatch",
            ],
            1,
            50,
        ),
        Question::new(
            14,
            "In which year was Steam launched?",
            ["2003", "2004", "2005", "2006"],
            0,
            45,
        ),
        Question::new(
            15,
            "What is the main currency in World of Warcraft?",
            ["Silver", "Gold", "Copper", "Platinum"],
            1,
            30,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_shape() {
        let bank = default_bank();
        assert_eq!(bank.len(), 15);
        for q in &bank {
            assert!(q.correct < 4);
            assert!((25..=65).contains(&q.points));
        }
    }

    #[test]
    fn test_bank_ids_unique() {
        let bank = default_bank();
        let mut ids: Vec<u32> = bank.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), bank.len());
    }
}
