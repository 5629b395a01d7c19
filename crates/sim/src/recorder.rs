// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation results recording.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_eval::HandCategory;

use crate::deal::Deal;

/// Records the outcome of each simulated deal.
pub trait Recorder: Send {
    /// Records a deal and its hand category.
    fn record(&mut self, deal: &Deal, category: HandCategory) -> Result<()>;

    /// Makes sure all recorded deals have been stored.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// In memory hand categories counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    counts: [u64; HandCategory::COUNT],
}

impl Tally {
    /// Adds `n` hands to a category.
    pub fn add(&mut self, category: HandCategory, n: u64) {
        self.counts[category.index()] += n;
    }

    /// The number of hands for a category.
    pub fn count(&self, category: HandCategory) -> u64 {
        self.counts[category.index()]
    }

    /// The total number of hands.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The fraction of hands in a category, zero if there are no hands.
    pub fn frequency(&self, category: HandCategory) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(category) as f64 / total as f64,
        }
    }

    /// Adds another tally counters to this tally.
    pub fn merge(&mut self, other: &Tally) {
        for (c, o) in self.counts.iter_mut().zip(other.counts) {
            *c += o;
        }
    }
}

impl Recorder for Tally {
    fn record(&mut self, _deal: &Deal, category: HandCategory) -> Result<()> {
        self.add(category, 1);
        Ok(())
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total hands      {}", self.total())?;
        for category in HandCategory::ALL {
            writeln!(
                f,
                "{:<16} {:>10} {:>9.4}%",
                format!("{category}:"),
                self.count(category),
                self.frequency(category) * 100.0
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_eval::{Card, Rank, Suit};

    fn deal() -> Deal {
        let c = |r| Card::new(r, Suit::Hearts);
        Deal::new(
            2,
            [c(Rank::Deuce), c(Rank::Trey)],
            [
                c(Rank::Four),
                c(Rank::Five),
                c(Rank::Six),
                c(Rank::Eight),
                c(Rank::Nine),
            ],
        )
    }

    #[test]
    fn tally_counts() {
        let mut tally = Tally::default();
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.frequency(HandCategory::Pair), 0.0);

        let deal = deal();
        tally.record(&deal, HandCategory::StraightFlush).unwrap();
        tally.record(&deal, HandCategory::Pair).unwrap();
        tally.record(&deal, HandCategory::Pair).unwrap();
        tally.add(HandCategory::HighCard, 1);

        assert_eq!(tally.total(), 4);
        assert_eq!(tally.count(HandCategory::Pair), 2);
        assert_eq!(tally.count(HandCategory::Flush), 0);
        assert_eq!(tally.frequency(HandCategory::Pair), 0.5);
        assert_eq!(tally.frequency(HandCategory::HighCard), 0.25);
    }

    #[test]
    fn tally_merge() {
        let mut t1 = Tally::default();
        t1.add(HandCategory::TwoPair, 3);
        t1.add(HandCategory::Flush, 1);

        let mut t2 = Tally::default();
        t2.add(HandCategory::TwoPair, 2);
        t2.add(HandCategory::RoyalFlush, 1);

        t1.merge(&t2);
        assert_eq!(t1.count(HandCategory::TwoPair), 5);
        assert_eq!(t1.count(HandCategory::Flush), 1);
        assert_eq!(t1.count(HandCategory::RoyalFlush), 1);
        assert_eq!(t1.total(), 7);
    }

    #[test]
    fn tally_report() {
        let mut tally = Tally::default();
        tally.add(HandCategory::Pair, 3);
        tally.add(HandCategory::HighCard, 1);

        let report = tally.to_string();
        assert!(report.starts_with("Total hands      4\n"));
        assert!(report.contains("Pair:                     3   75.0000%"));
        assert!(report.contains("Royal Flush:              0    0.0000%"));
        assert_eq!(report.lines().count(), HandCategory::COUNT + 1);
    }
}
