// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "TD".parse::<Card>().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert!(ah.rank() > td.rank());
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards from the top, as done at a
//! Hold'em table:
//!
//! ```
//! # use holdem_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let pocket = deck.deal_cards(2).unwrap();
//! deck.burn();
//! let flop = deck.deal_cards(3).unwrap();
//! assert_eq!(pocket.len() + flop.len(), 5);
//! assert_eq!(deck.count(), 46);
//! ```
//!
//! A deck can also iterate through all k-cards hands of its cards:
//!
//! ```no_run
//! # use holdem_cards::Deck;
//! // Iterate through all 7 cards hands (133M hands).
//! let mut counter = 0;
//! Deck::default().for_each(7, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 133_784_560);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
