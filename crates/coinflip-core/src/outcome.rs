//! Coin flip outcomes and the weighted outcome policy
//!
//! A flip is decided by a single uniform draw `r` in `[0, 1)`:
//!
//! - `r < 0.01`  -> Edge  (1%)
//! - `r < 0.505` -> Heads (49.5%)
//! - otherwise   -> Tails (49.5%)
//!
//! The intervals are half-open, so the three branches partition `[0, 1)`
//! exactly -- no draw can match zero or two outcomes. Boundary draws belong
//! to the branch above them: `r = 0.01` is Heads, `r = 0.505` is Tails.

use std::fmt;

/// Upper bound of the Edge interval (1% of draws)
pub const EDGE_THRESHOLD: f64 = 0.01;

/// Upper bound of the Heads interval (49.5% of draws)
pub const HEADS_THRESHOLD: f64 = 0.505;

/// The three ways a coin can land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Heads,
    Tails,
    /// The rare 1% result. Deliberately asymmetric from a fair coin.
    Edge,
}

impl Outcome {
    /// Decide an outcome from a uniform draw in `[0, 1)`
    pub fn from_draw(r: f64) -> Self {
        if r < EDGE_THRESHOLD {
            Outcome::Edge
        } else if r < HEADS_THRESHOLD {
            Outcome::Heads
        } else {
            Outcome::Tails
        }
    }

    /// All outcomes, in display order
    pub const ALL: [Outcome; 3] = [Outcome::Heads, Outcome::Tails, Outcome::Edge];
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Heads => "Heads",
            Outcome::Tails => "Tails",
            Outcome::Edge => "Edge",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_interval() {
        assert_eq!(Outcome::from_draw(0.0), Outcome::Edge);
        assert_eq!(Outcome::from_draw(0.003), Outcome::Edge);
        assert_eq!(Outcome::from_draw(0.009999), Outcome::Edge);
    }

    #[test]
    fn test_heads_interval() {
        // Boundary draw belongs to the interval above it (half-open rule)
        assert_eq!(Outcome::from_draw(0.01), Outcome::Heads);
        assert_eq!(Outcome::from_draw(0.2), Outcome::Heads);
        assert_eq!(Outcome::from_draw(0.5049999), Outcome::Heads);
    }

    #[test]
    fn test_tails_interval() {
        assert_eq!(Outcome::from_draw(0.505), Outcome::Tails);
        assert_eq!(Outcome::from_draw(0.75), Outcome::Tails);
        assert_eq!(Outcome::from_draw(0.999999), Outcome::Tails);
    }

    #[test]
    fn test_every_draw_matches_exactly_one_outcome() {
        // Sweep [0, 1) at fine granularity; each draw must land in exactly
        // one interval, which from_draw guarantees by construction. Check
        // the partition has no gap by confirming counts add up.
        let steps = 100_000u32;
        let mut counts = [0u32; 3];
        for i in 0..steps {
            let r = f64::from(i) / f64::from(steps);
            match Outcome::from_draw(r) {
                Outcome::Heads => counts[0] += 1,
                Outcome::Tails => counts[1] += 1,
                Outcome::Edge => counts[2] += 1,
            }
        }
        assert_eq!(counts[0] + counts[1] + counts[2], steps);
        // Exact interval widths at this granularity
        assert_eq!(counts[2], 1_000); // 1% edge
        assert_eq!(counts[0], 49_500); // 49.5% heads
        assert_eq!(counts[1], 49_500); // 49.5% tails
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Outcome::Heads.to_string(), "Heads");
        assert_eq!(Outcome::Tails.to_string(), "Tails");
        assert_eq!(Outcome::Edge.to_string(), "Edge");
    }
}
