//! Probability bands and the reward table

use serde::{Deserialize, Serialize};

use crate::slot::Symbol;

/// Flat award for a spin that lands outside every winning band
pub const CONSOLATION_POINTS: u64 = 10;

/// Outcome band for one spin
///
/// The bands form a non-overlapping cumulative partition of [0, 1). The
/// shipped page compared the same roll against non-cumulative thresholds in
/// an `else if` chain, which made three of the four bands unreachable; the
/// partition below is the documented intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpinBand {
    /// First 5%: triple fire, 1000 points
    Fire,
    /// Next 10%: triple target, bonus spin (the spin used is not consumed)
    Target,
    /// Next 15%: triple star, 500 points
    Star,
    /// Next 30%: triple clover, 100 points
    Clover,
    /// Remaining 40%: three independent reels, consolation points
    Mixed,
}

impl SpinBand {
    /// All bands, in threshold order
    pub const ALL: [SpinBand; 5] = [
        SpinBand::Fire,
        SpinBand::Target,
        SpinBand::Star,
        SpinBand::Clover,
        SpinBand::Mixed,
    ];

    /// Resolve a uniform roll in [0, 1) to its band
    pub fn from_roll(r: f64) -> Self {
        if r < 0.05 {
            SpinBand::Fire
        } else if r < 0.15 {
            SpinBand::Target
        } else if r < 0.30 {
            SpinBand::Star
        } else if r < 0.60 {
            SpinBand::Clover
        } else {
            SpinBand::Mixed
        }
    }

    /// Documented probability mass of this band
    pub fn probability(self) -> f64 {
        match self {
            SpinBand::Fire => 0.05,
            SpinBand::Target => 0.10,
            SpinBand::Star => 0.15,
            SpinBand::Clover => 0.30,
            SpinBand::Mixed => 0.40,
        }
    }

    /// The triple shown for this band, if it is a winning band
    pub fn triple(self) -> Option<Symbol> {
        match self {
            SpinBand::Fire => Some(Symbol::Fire),
            SpinBand::Target => Some(Symbol::Target),
            SpinBand::Star => Some(Symbol::Star),
            SpinBand::Clover => Some(Symbol::Clover),
            SpinBand::Mixed => None,
        }
    }

    /// Dense index for stats counters
    pub fn index(self) -> usize {
        match self {
            SpinBand::Fire => 0,
            SpinBand::Target => 1,
            SpinBand::Star => 2,
            SpinBand::Clover => 3,
            SpinBand::Mixed => 4,
        }
    }
}

/// What a resolved outcome awards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// Points credited
    pub points: u64,
    /// Spin credited back instead of consumed
    pub bonus_spin: bool,
    /// Win banner text
    pub label: &'static str,
}

/// One line of the displayed paytable
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RewardEntry {
    /// Triple symbol
    pub symbol: Symbol,
    /// Points for the triple
    pub points: u64,
    /// Grants a bonus spin instead of points
    pub bonus_spin: bool,
    /// Banner text
    pub label: &'static str,
    /// False for promotional display rows the generator can never produce
    pub reachable: bool,
}

/// Maps a 3-symbol outcome to its award
#[derive(Debug, Clone)]
pub struct RewardTable {
    entries: Vec<RewardEntry>,
}

impl RewardTable {
    /// The product's fixed table: four winning triples plus the promotional
    /// prize rows shown on the machine but never rolled.
    pub fn standard() -> Self {
        let win = |symbol, points, label| RewardEntry {
            symbol,
            points,
            bonus_spin: false,
            label,
            reachable: true,
        };
        let promo = |symbol, label| RewardEntry {
            symbol,
            points: 0,
            bonus_spin: false,
            label,
            reachable: false,
        };

        Self {
            entries: vec![
                win(Symbol::Clover, 100, "100 Points!"),
                win(Symbol::Star, 500, "500 Points!"),
                win(Symbol::Fire, 1000, "1000 Points!"),
                RewardEntry {
                    symbol: Symbol::Target,
                    points: 0,
                    bonus_spin: true,
                    label: "Extra Spin!",
                    reachable: true,
                },
                promo(Symbol::Diamond, "Gaming Headset!"),
                promo(Symbol::Crown, "Nintendo Switch!"),
                promo(Symbol::Machine, "Free Credit Card!"),
                promo(Symbol::Coins, "Gaming Headset!"),
            ],
        }
    }

    /// All table rows, display order
    pub fn entries(&self) -> &[RewardEntry] {
        &self.entries
    }

    /// Does this outcome form one of the four winning triples?
    pub fn is_winning_triple(&self, reels: [Symbol; 3]) -> bool {
        reels[0] == reels[1]
            && reels[1] == reels[2]
            && self
                .entries
                .iter()
                .any(|e| e.reachable && e.symbol == reels[0])
    }

    /// Resolve a 3-symbol outcome to its award
    ///
    /// Anything that is not one of the four winning triples (including a
    /// promotional triple, were one ever drawn) gets the flat consolation.
    pub fn resolve(&self, reels: [Symbol; 3]) -> Reward {
        if reels[0] == reels[1] && reels[1] == reels[2] {
            if let Some(entry) = self
                .entries
                .iter()
                .find(|e| e.reachable && e.symbol == reels[0])
            {
                return Reward {
                    points: entry.points,
                    bonus_spin: entry.bonus_spin,
                    label: entry.label,
                };
            }
        }
        Reward {
            points: CONSOLATION_POINTS,
            bonus_spin: false,
            label: "Better luck next time!",
        }
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::standard()
    }
}
