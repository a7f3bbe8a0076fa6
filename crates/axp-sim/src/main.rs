//! AqubeXP round simulator
//!
//! Usage:
//!   axp-sim spins --count 1000000      - Batch spins, band convergence
//!   axp-sim paytable                   - Print the reward table
//!   axp-sim quiz --rounds 100          - Simulated quiz rounds
//!   axp-sim scramble --rounds 100      - Simulated scramble rounds
//!   axp-sim session                    - End-to-end funnel demo

use anyhow::Result;
use clap::{Parser, Subcommand};

use axp_games::RewardTable;

mod rounds;
mod session;
mod spins;

#[derive(Parser)]
#[command(name = "axp-sim", about = "AqubeXP rewards engine simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch of slot spins and report band frequencies
    Spins {
        /// Number of spins
        #[arg(short, long, default_value_t = 1_000_000)]
        count: u64,
        /// RNG seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the reward table, promotional rows included
    Paytable,
    /// Simulate quiz rounds with a fixed answer accuracy
    Quiz {
        /// Rounds to play
        #[arg(short, long, default_value_t = 100)]
        rounds: u32,
        /// Probability of answering correctly
        #[arg(long, default_value_t = 0.6)]
        skill: f64,
        /// RNG seed
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Simulate scramble rounds with a fixed solve rate
    Scramble {
        /// Rounds to play
        #[arg(short, long, default_value_t = 100)]
        rounds: u32,
        /// Probability of solving the word on screen
        #[arg(long, default_value_t = 0.5)]
        skill: f64,
        /// RNG seed
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Walk a demo profile through referrals, slots, quiz, and scramble
    Session {
        /// RNG seed
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
        /// Friends signing up through the demo code
        #[arg(long, default_value_t = 4)]
        referrals: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Spins { count, seed, json } => {
            let report = spins::run(count, seed);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print();
            }
        }
        Commands::Paytable => print_paytable(),
        Commands::Quiz {
            rounds,
            skill,
            seed,
            json,
        } => {
            let report = rounds::run_quiz(rounds, skill, seed)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print();
            }
        }
        Commands::Scramble {
            rounds,
            skill,
            seed,
            json,
        } => {
            let report = rounds::run_scramble(rounds, skill, seed)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print();
            }
        }
        Commands::Session { seed, referrals } => {
            session::run(seed, referrals).await?;
        }
    }
    Ok(())
}

fn print_paytable() {
    let table = RewardTable::standard();
    println!("{:<14} {:<20} {:>8}  note", "triple", "prize", "points");
    for entry in table.entries() {
        let triple = format!("{0} {0} {0}", entry.symbol.emoji());
        let note = if entry.bonus_spin {
            "bonus spin"
        } else if entry.reachable {
            ""
        } else {
            "display only"
        };
        println!("{:<14} {:<20} {:>8}  {}", triple, entry.label, entry.points, note);
    }
}
