//! Reel symbol alphabet

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// One of the 8 reel symbols
///
/// Order matches the wheel as presented in the product, machine first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Symbol {
    /// 🎰
    Machine = 0,
    /// 🍀
    Clover = 1,
    /// 💎
    Diamond = 2,
    /// 👑
    Crown = 3,
    /// ⭐
    Star = 4,
    /// 🔥
    Fire = 5,
    /// 💰
    Coins = 6,
    /// 🎯
    Target = 7,
}

impl Symbol {
    /// Full alphabet in wheel order
    pub const ALL: [Symbol; 8] = [
        Symbol::Machine,
        Symbol::Clover,
        Symbol::Diamond,
        Symbol::Crown,
        Symbol::Star,
        Symbol::Fire,
        Symbol::Coins,
        Symbol::Target,
    ];

    /// Draw one symbol uniformly
    pub fn draw(rng: &mut impl Rng) -> Self {
        // ALL is never empty
        *Self::ALL.choose(rng).unwrap_or(&Symbol::Machine)
    }

    /// Emoji used on the reels
    pub fn emoji(self) -> &'static str {
        match self {
            Symbol::Machine => "🎰",
            Symbol::Clover => "🍀",
            Symbol::Diamond => "💎",
            Symbol::Crown => "👑",
            Symbol::Star => "⭐",
            Symbol::Fire => "🔥",
            Symbol::Coins => "💰",
            Symbol::Target => "🎯",
        }
    }

    /// Lowercase symbol name
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Machine => "machine",
            Symbol::Clover => "clover",
            Symbol::Diamond => "diamond",
            Symbol::Crown => "crown",
            Symbol::Star => "star",
            Symbol::Fire => "fire",
            Symbol::Coins => "coins",
            Symbol::Target => "target",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_alphabet_size() {
        assert_eq!(Symbol::ALL.len(), 8);
    }

    #[test]
    fn test_draw_covers_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(Symbol::draw(&mut rng));
        }
        assert_eq!(seen.len(), 8);
    }
}
