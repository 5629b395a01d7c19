// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use log::error;
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of deals to simulate.
    #[clap(long, short, default_value_t = 10_000)]
    deals: u64,
    /// The number of players at the table.
    #[clap(long, short, default_value_t = 8, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,
    /// The simulated player position, the first player to get cards is 1.
    #[clap(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
    position: u8,
    /// The number of parallel tasks.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Seed for reproducible runs.
    #[clap(long)]
    seed: Option<u64>,
    /// The SQLite database to store the results for each board.
    #[clap(long)]
    db: Option<PathBuf>,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = holdem_sim::Config {
        deals: cli.deals,
        players: cli.players as usize,
        position: cli.position as usize,
        tasks: cli.tasks as usize,
        seed: cli.seed,
        db: cli.db,
    };

    match holdem_sim::run(&config) {
        Ok(tally) => print!("{tally}"),
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    }
}
