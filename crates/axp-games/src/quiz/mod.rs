//! Gaming quiz: timed 5-question rounds over a static bank

mod bank;
mod round;

pub use bank::*;
pub use round::*;
