// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em deals simulator.
//!
//! Deals Hold'em hands from shuffled decks for a player at a given table
//! position, classifies the player best hand, and records the hand categories
//! in memory and optionally in a SQLite database with counters for each board.
//!
//! ```
//! # use holdem_sim::{Config, run};
//! let config = Config {
//!     deals: 100,
//!     seed: Some(1),
//!     ..Config::default()
//! };
//!
//! let tally = run(&config).unwrap();
//! assert_eq!(tally.total(), 100);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod db;
pub mod deal;
pub mod recorder;
pub mod sim;
pub use sim::{Config, run, run_with_db};
