// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seven cards hand classifier.
//!
//! The classifier computes once per hand a table with the number of cards for
//! each rank and a rank bit mask for each suit, all categories are then
//! checked against these from the strongest to the weakest and the first match
//! is returned.
//!
//! Rank bit masks have bit `n` set for a rank of value `n`, so that deuces use
//! bit 2 and aces use bit 14, and five consecutive ranks are five consecutive
//! bits. Aces only count as high cards, the lowest straight is 2 to 6.
use thiserror::Error;

use crate::{Card, HandCategory, Rank, Suit};

/// Error returned when the cards to classify are not 7 distinct cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand doesn't have exactly 7 cards.
    #[error("expected 7 cards, got {0}")]
    CardCount(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Seven distinct cards: a player pocket cards and the community cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSet([Card; 7]);

impl CardSet {
    /// The number of cards in a set.
    pub const SIZE: usize = 7;

    /// Creates a set from 7 distinct cards.
    pub fn new(cards: &[Card]) -> Result<Self, EvalError> {
        let cards: [Card; Self::SIZE] = cards
            .try_into()
            .map_err(|_| EvalError::CardCount(cards.len()))?;

        let mut seen = 0u64;
        for card in cards {
            let bit = 1u64 << card.index();
            if seen & bit != 0 {
                return Err(EvalError::DuplicateCard(card));
            }

            seen |= bit;
        }

        Ok(Self(cards))
    }

    /// Creates a set from a player pocket cards and the community cards.
    pub fn from_deal(pocket: &[Card], community: &[Card]) -> Result<Self, EvalError> {
        let count = pocket.len() + community.len();
        if count != Self::SIZE {
            return Err(EvalError::CardCount(count));
        }

        let mut cards = [Card::new(Rank::Ace, Suit::Spades); Self::SIZE];
        for (dst, src) in cards.iter_mut().zip(pocket.iter().chain(community)) {
            *dst = *src;
        }

        Self::new(&cards)
    }

    /// The cards in this set.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Returns the category of the best five cards hand in this set.
    pub fn classify(&self) -> HandCategory {
        let a = Analysis::new(&self.0);

        if let Some(suited) = a.flush_ranks() {
            match highest_run(suited) {
                Some(Rank::Ace) => return HandCategory::RoyalFlush,
                Some(_) => return HandCategory::StraightFlush,
                None => {}
            }
        }

        if a.groups_of(4) > 0 {
            return HandCategory::FourOfAKind;
        }

        // Two trips is a full house as the second trips plays as a pair.
        let (trips, pairs) = (a.groups_of(3), a.groups_of(2));
        if trips >= 2 || (trips == 1 && pairs >= 1) {
            return HandCategory::FullHouse;
        }

        if a.flush_ranks().is_some() {
            return HandCategory::Flush;
        }

        if highest_run(a.ranks).is_some() {
            return HandCategory::Straight;
        }

        match (trips, pairs) {
            (1, _) => HandCategory::ThreeOfAKind,
            (_, 2..) => HandCategory::TwoPair,
            (_, 1) => HandCategory::Pair,
            _ => HandCategory::HighCard,
        }
    }
}

impl TryFrom<&[Card]> for CardSet {
    type Error = EvalError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        CardSet::new(cards)
    }
}

/// Classifies 7 distinct cards.
///
/// Returns an error if there are not exactly 7 cards or if a card is repeated.
pub fn classify(cards: &[Card]) -> Result<HandCategory, EvalError> {
    CardSet::new(cards).map(|set| set.classify())
}

/// Rank and suit counts shared by all the category checks.
struct Analysis {
    /// Number of cards for each rank value.
    counts: [u8; 15],
    /// Rank bits for each suit.
    suits: [u16; 4],
    /// Rank bits for all cards.
    ranks: u16,
}

impl Analysis {
    fn new(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        let mut suits = [0u16; 4];

        for card in cards {
            let value = card.rank().value();
            counts[value as usize] += 1;
            suits[card.suit().value() as usize] |= 1 << value;
        }

        let ranks = suits.iter().fold(0, |acc, s| acc | s);
        Self {
            counts,
            suits,
            ranks,
        }
    }

    /// The number of ranks with exactly `n` cards.
    fn groups_of(&self, n: u8) -> usize {
        self.counts.iter().filter(|&&c| c == n).count()
    }

    /// The rank bits of the suit with five or more cards.
    ///
    /// With 7 cards at most one suit can have five cards.
    fn flush_ranks(&self) -> Option<u16> {
        self.suits.iter().copied().find(|s| s.count_ones() >= 5)
    }
}

/// Returns the top rank of the highest five consecutive ranks in `ranks`.
fn highest_run(ranks: u16) -> Option<Rank> {
    const RUN: u16 = 0b11111;

    (Rank::Six.value()..=Rank::Ace.value())
        .rev()
        .find(|top| {
            let run = RUN << (top - 4);
            ranks & run == run
        })
        .and_then(Rank::from_value)
}
