//! Word scramble: one 60-second round over a shuffled word queue

mod bank;
mod round;

pub use bank::*;
pub use round::*;
