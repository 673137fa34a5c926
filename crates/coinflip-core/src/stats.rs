//! Cumulative flip statistics

use crate::outcome::Outcome;

/// Cumulative heads/tails/edge counters.
///
/// Each counter grows by exactly 1 per settled flip of the matching outcome.
/// The record itself is plain data; persistence is the store's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatisticsRecord {
    pub heads: u64,
    pub tails: u64,
    pub edge: u64,
}

impl StatisticsRecord {
    pub fn new(heads: u64, tails: u64, edge: u64) -> Self {
        Self { heads, tails, edge }
    }

    /// Count for a single outcome
    pub fn count(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Heads => self.heads,
            Outcome::Tails => self.tails,
            Outcome::Edge => self.edge,
        }
    }

    /// Record one settled flip
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Heads => self.heads += 1,
            Outcome::Tails => self.tails += 1,
            Outcome::Edge => self.edge += 1,
        }
    }

    /// Total flips across all outcomes
    pub fn total(&self) -> u64 {
        self.heads + self.tails + self.edge
    }

    /// Tooltip text: `"Heads: N | Tails: N"`, with the edge count appended
    /// only once an edge has actually been seen.
    pub fn summary(&self) -> String {
        let mut stats = format!("Heads: {} | Tails: {}", self.heads, self.tails);
        if self.edge > 0 {
            stats.push_str(&format!(" | Edge: {}", self.edge));
        }
        stats
    }
}
