// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dealing a Hold'em hand.
use anyhow::{Result, anyhow, ensure};

use holdem_eval::{Card, CardSet, Deck, EvalError, HandCategory};

/// The cards a simulated player sees at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    players: usize,
    pocket: [Card; 2],
    community: [Card; 5],
}

impl Deal {
    /// Creates a deal for a table with the given number of players.
    pub fn new(players: usize, pocket: [Card; 2], community: [Card; 5]) -> Self {
        Self {
            players,
            pocket,
            community,
        }
    }

    /// The number of players at the table.
    pub fn players(&self) -> usize {
        self.players
    }

    /// The player pocket cards.
    pub fn pocket(&self) -> &[Card] {
        &self.pocket
    }

    /// The five community cards.
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// The first three community cards.
    pub fn flop(&self) -> &[Card] {
        &self.community[..3]
    }

    /// The fourth community card.
    pub fn turn(&self) -> Card {
        self.community[3]
    }

    /// The fifth community card.
    pub fn river(&self) -> Card {
        self.community[4]
    }

    /// Classifies the player pocket cards with the community cards.
    pub fn classify(&self) -> Result<HandCategory, EvalError> {
        CardSet::from_deal(&self.pocket, &self.community).map(|set| set.classify())
    }
}

/// Deals Hold'em hands for a player sitting at a given position.
#[derive(Debug, Clone, Copy)]
pub struct Dealer {
    players: usize,
    position: usize,
}

impl Dealer {
    /// The minimum number of players at a table.
    pub const MIN_PLAYERS: usize = 2;

    /// The maximum number of players at a table.
    pub const MAX_PLAYERS: usize = 10;

    /// Creates a dealer for a table with `players` players where the simulated
    /// player is the `position`th player to receive cards, starting from 1.
    pub fn new(players: usize, position: usize) -> Result<Self> {
        ensure!(
            (Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&players),
            "Invalid number of players {players}, must be between {} and {}",
            Self::MIN_PLAYERS,
            Self::MAX_PLAYERS
        );

        ensure!(
            (1..=players).contains(&position),
            "Invalid position {position} for a {players} players table"
        );

        Ok(Self { players, position })
    }

    /// The number of players at the table.
    pub fn players(&self) -> usize {
        self.players
    }

    /// The simulated player position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Deals a hand from the top of the deck.
    ///
    /// The players before the simulated player get their two cards first, then
    /// the simulated player and the players after, then the dealer burns a card
    /// before the flop, the turn, and the river.
    pub fn deal(&self, deck: &mut Deck) -> Result<Deal> {
        take(deck, (self.position - 1) * 2)?;
        let pocket = take_array::<2>(deck)?;
        take(deck, (self.players - self.position) * 2)?;

        take(deck, 1)?;
        let flop = take_array::<3>(deck)?;
        take(deck, 1)?;
        let [turn] = take_array::<1>(deck)?;
        take(deck, 1)?;
        let [river] = take_array::<1>(deck)?;

        let community = [flop[0], flop[1], flop[2], turn, river];
        Ok(Deal::new(self.players, pocket, community))
    }
}

fn take(deck: &mut Deck, n: usize) -> Result<Vec<Card>> {
    deck.deal_cards(n)
        .ok_or_else(|| anyhow!("Cannot deal {n} cards from a deck with {} cards", deck.count()))
}

fn take_array<const N: usize>(deck: &mut Deck) -> Result<[Card; N]> {
    let cards = take(deck, N)?;
    cards
        .try_into()
        .map_err(|cards: Vec<Card>| anyhow!("Expected {N} cards, got {}", cards.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::prelude::*;

    use holdem_eval::{Rank, Suit};

    #[test]
    fn dealer_config() {
        assert!(Dealer::new(8, 5).is_ok());
        assert!(Dealer::new(2, 1).is_ok());
        assert!(Dealer::new(10, 10).is_ok());

        assert!(Dealer::new(1, 1).is_err());
        assert!(Dealer::new(11, 1).is_err());
        assert!(Dealer::new(8, 0).is_err());
        assert!(Dealer::new(8, 9).is_err());
    }

    #[test]
    fn deal_order() {
        // With an unshuffled deck the cards come out in order:
        // 2C 3C | 4C 5C | 6C 7C | 8C | 9C TC JC | QC | KC | AC | 2D ...
        let dealer = Dealer::new(3, 2).unwrap();
        let mut deck = Deck::default();
        let deal = dealer.deal(&mut deck).unwrap();

        let c = |r| Card::new(r, Suit::Clubs);
        assert_eq!(deal.players(), 3);
        assert_eq!(deal.pocket(), &[c(Rank::Four), c(Rank::Five)]);
        assert_eq!(deal.flop(), &[c(Rank::Nine), c(Rank::Ten), c(Rank::Jack)]);
        assert_eq!(deal.turn(), c(Rank::King));
        assert_eq!(deal.river(), Card::new(Rank::Deuce, Suit::Diamonds));

        // 3 players, 3 burns, 5 community cards.
        assert_eq!(deck.count(), Deck::SIZE - (2 * 3 + 3 + 5));
    }

    #[test]
    fn deal_distinct_cards() {
        let mut rng = SmallRng::seed_from_u64(3);
        let dealer = Dealer::new(Dealer::MAX_PLAYERS, 1).unwrap();

        for _ in 0..100 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let deal = dealer.deal(&mut deck).unwrap();
            assert_eq!(deck.count(), Deck::SIZE - (2 * Dealer::MAX_PLAYERS + 3 + 5));

            let cards = deal
                .pocket()
                .iter()
                .chain(deal.community())
                .copied()
                .collect::<HashSet<_>>();
            assert_eq!(cards.len(), CardSet::SIZE);
            assert!(deal.classify().is_ok());
        }
    }

    #[test]
    fn deal_exhausted_deck() {
        let dealer = Dealer::new(8, 5).unwrap();
        let mut deck = Deck::default();
        assert!(deck.deal_cards(40).is_some());
        assert!(dealer.deal(&mut deck).is_err());
    }

    #[test]
    fn deal_classify() {
        let cards = |s: &str| {
            s.split_whitespace()
                .map(|c| c.parse::<Card>().unwrap())
                .collect::<Vec<_>>()
        };

        let pocket = cards("KC KD");
        let community = cards("KH 7S 7C 2D 3H");
        let deal = Deal::new(
            6,
            pocket.try_into().unwrap(),
            community.try_into().unwrap(),
        );
        assert_eq!(deal.classify(), Ok(HandCategory::FullHouse));
    }
}
