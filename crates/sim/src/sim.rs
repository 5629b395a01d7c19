// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em deals simulation.
use anyhow::{Result, anyhow, ensure};
use log::{debug, info};
use rand::prelude::*;
use std::{path::PathBuf, thread, time::Instant};

use holdem_eval::Deck;

use crate::{
    db::Db,
    deal::Dealer,
    recorder::{Recorder, Tally},
};

/// The number of deals each task buffers before writing to the database.
const DB_BATCH_SIZE: usize = 10_000;

/// Simulation config.
#[derive(Debug, Clone)]
pub struct Config {
    /// The number of deals to simulate.
    pub deals: u64,
    /// The number of players at the table.
    pub players: usize,
    /// The simulated player position, starting from 1.
    pub position: usize,
    /// The number of parallel tasks.
    pub tasks: usize,
    /// Seed for reproducible runs, each task uses `seed + task_id`.
    pub seed: Option<u64>,
    /// The results database path.
    pub db: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deals: 10_000,
            players: 8,
            position: 5,
            tasks: 1,
            seed: None,
            db: None,
        }
    }
}

/// Runs a simulation and returns the hand categories counters.
pub fn run(config: &Config) -> Result<Tally> {
    let db = config.db.as_ref().map(Db::open).transpose()?;
    run_with_db(config, db)
}

/// Runs a simulation writing the per board results to the given database.
pub fn run_with_db(config: &Config, db: Option<Db>) -> Result<Tally> {
    ensure!(config.tasks > 0, "The number of tasks must be positive");
    let dealer = Dealer::new(config.players, config.position)?;

    info!(
        "Simulating {} deals for {} players at position {} with {} tasks",
        config.deals, config.players, config.position, config.tasks
    );

    let now = Instant::now();

    let tally = thread::scope(|s| {
        let handles = (0..config.tasks)
            .map(|task_id| {
                let deals = task_deals(config.deals, config.tasks, task_id);
                let recorder = db.as_ref().map(|db| db.recorder(DB_BATCH_SIZE));
                let dealer = &dealer;

                s.spawn(move || {
                    let rng = match config.seed {
                        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
                        None => SmallRng::from_os_rng(),
                    };

                    let tally = simulate(dealer, rng, deals, recorder)?;
                    debug!("Task {task_id} completed {deals} deals");
                    Ok::<_, anyhow::Error>(tally)
                })
            })
            .collect::<Vec<_>>();

        handles.into_iter().try_fold(Tally::default(), |mut total, handle| {
            let tally = handle
                .join()
                .map_err(|_| anyhow!("Simulation task panicked"))??;
            total.merge(&tally);
            Ok::<_, anyhow::Error>(total)
        })
    })?;

    let elapsed = now.elapsed().as_secs_f64();
    info!(
        "Simulated {} deals in {elapsed:.3}s ({:.0} deals/sec)",
        tally.total(),
        tally.total() as f64 / elapsed.max(f64::EPSILON)
    );

    Ok(tally)
}

/// Deals and classifies `deals` hands, each from a new shuffled deck.
fn simulate<R: Rng>(
    dealer: &Dealer,
    mut rng: R,
    deals: u64,
    mut recorder: Option<impl Recorder>,
) -> Result<Tally> {
    let mut tally = Tally::default();

    for _ in 0..deals {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let deal = dealer.deal(&mut deck)?;
        let category = deal.classify()?;

        tally.record(&deal, category)?;
        if let Some(recorder) = recorder.as_mut() {
            recorder.record(&deal, category)?;
        }
    }

    if let Some(recorder) = recorder.as_mut() {
        recorder.flush()?;
    }

    Ok(tally)
}

/// Splits deals among tasks, the first tasks get the remainder.
fn task_deals(deals: u64, tasks: usize, task_id: usize) -> u64 {
    let tasks = tasks as u64;
    let task_id = task_id as u64;
    deals / tasks + u64::from(task_id < deals % tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_eval::HandCategory;

    #[test]
    fn split_deals() {
        assert_eq!(task_deals(10, 3, 0), 4);
        assert_eq!(task_deals(10, 3, 1), 3);
        assert_eq!(task_deals(10, 3, 2), 3);
        assert_eq!((0..7).map(|t| task_deals(100, 7, t)).sum::<u64>(), 100);
        assert_eq!(task_deals(2, 4, 3), 0);
    }

    #[test]
    fn run_single_task() -> Result<()> {
        let config = Config {
            deals: 2_000,
            seed: Some(11),
            ..Config::default()
        };

        let tally = run(&config)?;
        assert_eq!(tally.total(), 2_000);

        // Same seed same results.
        assert_eq!(run(&config)?, tally);

        // Pair and high card account for more than half of the hands.
        let common = tally.count(HandCategory::Pair) + tally.count(HandCategory::HighCard);
        assert!(common > 1_000);

        Ok(())
    }

    #[test]
    fn run_parallel_with_db() -> Result<()> {
        let config = Config {
            deals: 3_001,
            players: 6,
            position: 6,
            tasks: 4,
            seed: Some(5),
            db: None,
        };

        let db = Db::open_in_memory()?;
        let tally = run_with_db(&config, Some(db.clone()))?;
        assert_eq!(tally.total(), 3_001);
        assert_eq!(db.totals()?, tally);
        assert!(db.boards()? > 0);

        Ok(())
    }

    #[test]
    fn run_invalid_config() {
        let config = Config {
            players: 4,
            position: 5,
            ..Config::default()
        };
        assert!(run(&config).is_err());

        let config = Config {
            tasks: 0,
            ..Config::default()
        };
        assert!(run(&config).is_err());
    }
}
