//! Batch spin runs and band convergence reporting

use serde::Serialize;

use axp_games::{SlotEngine, SpinBand};

/// One band's observed vs documented frequency
#[derive(Debug, Serialize)]
pub struct BandRow {
    pub band: &'static str,
    pub count: u64,
    pub observed: f64,
    pub expected: f64,
}

/// Aggregate over a batch run
#[derive(Debug, Serialize)]
pub struct SpinReport {
    pub total_spins: u64,
    pub total_points: u64,
    pub points_per_spin: f64,
    pub bonus_spins_granted: u64,
    pub bands: Vec<BandRow>,
}

fn band_name(band: SpinBand) -> &'static str {
    match band {
        SpinBand::Fire => "fire",
        SpinBand::Target => "target",
        SpinBand::Star => "star",
        SpinBand::Clover => "clover",
        SpinBand::Mixed => "mixed",
    }
}

/// Run `count` spins on one engine and report band frequencies
pub fn run(count: u64, seed: Option<u64>) -> SpinReport {
    let mut engine = SlotEngine::new();
    if let Some(seed) = seed {
        engine.seed(seed);
    }

    log::info!("[Sim] running {count} spins (seed: {seed:?})");
    for _ in 0..count {
        engine.spin();
    }

    let stats = engine.stats();
    SpinReport {
        total_spins: stats.total_spins,
        total_points: stats.total_points,
        points_per_spin: stats.points_per_spin(),
        bonus_spins_granted: stats.bonus_spins_granted,
        bands: SpinBand::ALL
            .iter()
            .map(|&band| BandRow {
                band: band_name(band),
                count: stats.band_counts[band.index()],
                observed: stats.band_frequency(band),
                expected: band.probability(),
            })
            .collect(),
    }
}

impl SpinReport {
    pub fn print(&self) {
        println!("Spins:          {}", self.total_spins);
        println!("Total points:   {}", self.total_points);
        println!("Points/spin:    {:.2}", self.points_per_spin);
        println!("Bonus spins:    {}", self.bonus_spins_granted);
        println!();
        println!("{:<8} {:>10} {:>10} {:>10} {:>8}", "band", "count", "observed", "expected", "delta");
        for row in &self.bands {
            println!(
                "{:<8} {:>10} {:>9.4}% {:>9.4}% {:>+7.4}%",
                row.band,
                row.count,
                row.observed * 100.0,
                row.expected * 100.0,
                (row.observed - row.expected) * 100.0,
            );
        }
    }
}
