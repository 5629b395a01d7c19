// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The category of the best five cards hand, ordered from the weakest to the
/// strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandCategory {
    /// No other category, the highest card plays.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards of consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five cards of consecutive ranks of the same suit.
    StraightFlush,
    /// Ten to ace of the same suit.
    RoyalFlush,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// All categories from the weakest to the strongest.
    pub const ALL: [HandCategory; Self::COUNT] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    /// A snake case label, used as a column name when storing results.
    pub const fn label(self) -> &'static str {
        match self {
            HandCategory::HighCard => "high_card",
            HandCategory::Pair => "pair",
            HandCategory::TwoPair => "two_pair",
            HandCategory::ThreeOfAKind => "three_of_a_kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full_house",
            HandCategory::FourOfAKind => "four_of_a_kind",
            HandCategory::StraightFlush => "straight_flush",
            HandCategory::RoyalFlush => "royal_flush",
        }
    }

    /// The position of this category in [HandCategory::ALL].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        f.pad(name)
    }
}

/// Error returned when parsing an unknown category label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hand category '{0}'")]
pub struct ParseCategoryError(String);

impl FromStr for HandCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandCategory::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_order() {
        assert!(HandCategory::ALL.windows(2).all(|w| w[0] < w[1]));
        for (idx, c) in HandCategory::ALL.iter().enumerate() {
            assert_eq!(c.index(), idx);
        }

        assert!(HandCategory::RoyalFlush > HandCategory::StraightFlush);
        assert!(HandCategory::Flush > HandCategory::Straight);
        assert!(HandCategory::FullHouse > HandCategory::Flush);
        assert!(HandCategory::Pair > HandCategory::HighCard);
    }

    #[test]
    fn category_labels() {
        assert_eq!(HandCategory::ThreeOfAKind.label(), "three_of_a_kind");
        assert_eq!(HandCategory::RoyalFlush.to_string(), "Royal Flush");
        assert_eq!(format!("{:<8}|", HandCategory::Pair), "Pair    |");

        for c in HandCategory::ALL {
            assert_eq!(c.label().parse(), Ok(c));
        }

        assert!("five_of_a_kind".parse::<HandCategory>().is_err());
    }
}
