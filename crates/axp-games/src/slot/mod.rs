//! Slot machine: weighted outcome generator + reward table resolver

mod engine;
mod rewards;
mod symbols;

pub use engine::*;
pub use rewards::*;
pub use symbols::*;
