// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example classify_all7
// ```
use std::time::Instant;

use holdem_eval::*;

fn main() {
    // Classify all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandCategory::COUNT];

    Deck::default().for_each(CardSet::SIZE, |hand| {
        if let Ok(category) = classify(hand) {
            counts[category.index()] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::ALL {
        println!("{:<16} {}", format!("{category}:"), counts[category.index()]);
    }
}
