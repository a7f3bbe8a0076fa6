//! Settlement — the single atomic balance write per round

use serde::{Deserialize, Serialize};

/// Net point/spin delta applied to a profile in one store write
///
/// Points are only ever credited by the mini-games; spins move both ways
/// (debited by the slot machine, credited by referrals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Points credited
    pub points_credit: u64,
    /// Signed spin delta
    pub spins_delta: i32,
}

impl Settlement {
    pub fn new(points_credit: u64, spins_delta: i32) -> Self {
        Self {
            points_credit,
            spins_delta,
        }
    }

    /// A slot spin that consumed the spin it used
    pub fn spin_consumed(points_credit: u64) -> Self {
        Self::new(points_credit, -1)
    }

    /// Round points with no spin movement (quiz/scramble finish, bonus-spin
    /// slot outcome)
    pub fn points(points_credit: u64) -> Self {
        Self::new(points_credit, 0)
    }

    /// Spin grant with no points
    pub fn spins(spins: u32) -> Self {
        Self::new(0, spins as i32)
    }

    /// True when applying this settlement would change nothing
    pub fn is_noop(&self) -> bool {
        self.points_credit == 0 && self.spins_delta == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Settlement::spin_consumed(100).spins_delta, -1);
        assert_eq!(Settlement::points(500).spins_delta, 0);
        assert_eq!(Settlement::spins(1).points_credit, 0);
        assert!(Settlement::points(0).is_noop());
        assert!(!Settlement::spin_consumed(0).is_noop());
    }
}
