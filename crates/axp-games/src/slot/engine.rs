//! Slot engine — weighted outcome generation

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::slot::{Reward, RewardTable, SpinBand, Symbol};

/// Complete outcome of one spin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Spin sequence number within this engine
    pub spin_index: u64,
    /// Final reel faces
    pub reels: [Symbol; 3],
    /// Band the roll landed in
    pub band: SpinBand,
    /// Points awarded
    pub points: u64,
    /// Spin is credited back instead of consumed
    pub bonus_spin: bool,
    /// Win banner text
    pub label: &'static str,
}

impl SpinOutcome {
    /// Did this spin pay more than the consolation?
    pub fn is_win(&self) -> bool {
        self.band != SpinBand::Mixed
    }
}

/// Running per-engine statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpinStats {
    pub total_spins: u64,
    pub total_points: u64,
    pub bonus_spins_granted: u64,
    /// Spin count per band, indexed by [`SpinBand::index`]
    pub band_counts: [u64; 5],
}

impl SpinStats {
    /// Observed frequency of a band
    pub fn band_frequency(&self, band: SpinBand) -> f64 {
        if self.total_spins > 0 {
            self.band_counts[band.index()] as f64 / self.total_spins as f64
        } else {
            0.0
        }
    }

    /// Average points per spin
    pub fn points_per_spin(&self) -> f64 {
        if self.total_spins > 0 {
            self.total_points as f64 / self.total_spins as f64
        } else {
            0.0
        }
    }
}

/// Weighted outcome generator over the 8-symbol wheel
///
/// Draws one uniform roll per spin, maps it through the band partition, and
/// resolves the resulting reels against the reward table.
pub struct SlotEngine {
    table: RewardTable,
    rng: StdRng,
    spin_count: u64,
    stats: SpinStats,
}

impl SlotEngine {
    /// Create an engine with the standard table and an OS-seeded RNG
    pub fn new() -> Self {
        Self {
            table: RewardTable::standard(),
            rng: StdRng::from_os_rng(),
            spin_count: 0,
            stats: SpinStats::default(),
        }
    }

    /// Seed the RNG for reproducible results
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// The reward table in use
    pub fn table(&self) -> &RewardTable {
        &self.table
    }

    /// Session stats so far
    pub fn stats(&self) -> &SpinStats {
        &self.stats
    }

    /// Reset session stats
    pub fn reset_stats(&mut self) {
        self.stats = SpinStats::default();
        self.spin_count = 0;
    }

    /// Execute one random spin
    pub fn spin(&mut self) -> SpinOutcome {
        let roll: f64 = self.rng.random();
        self.spin_in_band(SpinBand::from_roll(roll))
    }

    /// Execute a spin forced into a specific band
    ///
    /// Reels are still drawn normally within the band; use for tier-precise
    /// tests and scripted demos.
    pub fn spin_forced(&mut self, band: SpinBand) -> SpinOutcome {
        self.spin_in_band(band)
    }

    fn spin_in_band(&mut self, band: SpinBand) -> SpinOutcome {
        self.spin_count += 1;

        let reels = match band.triple() {
            Some(symbol) => [symbol; 3],
            None => self.mixed_reels(),
        };
        let Reward {
            points,
            bonus_spin,
            label,
        } = self.table.resolve(reels);

        let outcome = SpinOutcome {
            spin_index: self.spin_count,
            reels,
            band,
            points,
            bonus_spin,
            label,
        };
        self.update_stats(&outcome);
        outcome
    }

    /// Three independent draws, repaired so they never form a winning triple
    ///
    /// Repair mirrors the shipped behavior: the third reel is swapped for the
    /// first alphabet symbol that differs from the other two.
    fn mixed_reels(&mut self) -> [Symbol; 3] {
        let mut reels = [
            Symbol::draw(&mut self.rng),
            Symbol::draw(&mut self.rng),
            Symbol::draw(&mut self.rng),
        ];
        if self.table.is_winning_triple(reels) {
            reels[2] = Symbol::ALL
                .iter()
                .copied()
                .find(|&s| s != reels[0] && s != reels[1])
                .unwrap_or(Symbol::Machine);
        }
        reels
    }

    fn update_stats(&mut self, outcome: &SpinOutcome) {
        self.stats.total_spins += 1;
        self.stats.total_points += outcome.points;
        self.stats.band_counts[outcome.band.index()] += 1;
        if outcome.bonus_spin {
            self.stats.bonus_spins_granted += 1;
        }
    }
}

impl Default for SlotEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_bands_produce_their_triples() {
        let mut engine = SlotEngine::new();
        engine.seed(42);

        let fire = engine.spin_forced(SpinBand::Fire);
        assert_eq!(fire.reels, [Symbol::Fire; 3]);
        assert_eq!(fire.points, 1000);
        assert!(!fire.bonus_spin);

        let target = engine.spin_forced(SpinBand::Target);
        assert_eq!(target.reels, [Symbol::Target; 3]);
        assert_eq!(target.points, 0);
        assert!(target.bonus_spin);

        let star = engine.spin_forced(SpinBand::Star);
        assert_eq!(star.points, 500);

        let clover = engine.spin_forced(SpinBand::Clover);
        assert_eq!(clover.points, 100);
    }

    #[test]
    fn test_mixed_band_never_wins() {
        let mut engine = SlotEngine::new();
        engine.seed(1234);

        for _ in 0..10_000 {
            let outcome = engine.spin_forced(SpinBand::Mixed);
            assert!(!engine.table().is_winning_triple(outcome.reels));
            assert_eq!(outcome.points, crate::slot::CONSOLATION_POINTS);
            assert!(!outcome.bonus_spin);
        }
    }

    #[test]
    fn test_band_frequencies_converge() {
        let mut engine = SlotEngine::new();
        engine.seed(99);

        let n = 200_000;
        for _ in 0..n {
            engine.spin();
        }

        let stats = engine.stats();
        assert_eq!(stats.total_spins, n);
        for band in SpinBand::ALL {
            let observed = stats.band_frequency(band);
            let expected = band.probability();
            // ±1.5% absolute is far beyond sampling noise at 200k draws
            assert!(
                (observed - expected).abs() < 0.015,
                "band {:?}: observed {:.4}, expected {:.4}",
                band,
                observed,
                expected
            );
        }
    }

    #[test]
    fn test_outcome_matches_resolved_reward() {
        let mut engine = SlotEngine::new();
        engine.seed(7);

        for _ in 0..1_000 {
            let outcome = engine.spin();
            let reward = engine.table().resolve(outcome.reels);
            assert_eq!(outcome.points, reward.points);
            assert_eq!(outcome.bonus_spin, reward.bonus_spin);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut a = SlotEngine::new();
        let mut b = SlotEngine::new();
        a.seed(555);
        b.seed(555);

        for _ in 0..100 {
            assert_eq!(a.spin().reels, b.spin().reels);
        }
    }
}
