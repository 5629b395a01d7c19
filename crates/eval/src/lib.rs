// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em hand classifier.
//!
//! Classifies seven cards, a player two pocket cards and the five community
//! cards, into the [HandCategory] of the best five cards hand they can form.
//! Categories are checked from the strongest to the weakest so that only the
//! best one is reported, a four of a kind is never reported as three of a kind
//! or as a pair.
//!
//! ```
//! # use holdem_eval::*;
//! let cards = ["AC", "6D", "AH", "AS", "9C", "AD", "4H"]
//!     .into_iter()
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//! assert_eq!(classify(&cards), Ok(HandCategory::FourOfAKind));
//!
//! // Anything other than 7 distinct cards is rejected.
//! assert_eq!(classify(&cards[..6]), Err(EvalError::CardCount(6)));
//! ```
//!
//! Straights are ace high only, the lowest straight is 2 to 6.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub use category::{HandCategory, ParseCategoryError};

pub mod classify;
pub use classify::{CardSet, EvalError, classify};

// Reexport cards types.
pub use holdem_cards::{Card, Deck, ParseCardError, Rank, Suit};
