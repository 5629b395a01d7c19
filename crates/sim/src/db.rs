// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Database for persisting per board results.
use ahash::AHashMap;
use anyhow::Result;
use log::debug;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params, params_from_iter, types::Value};
use std::{path::Path, sync::Arc};

use holdem_eval::{Card, HandCategory};

use crate::{
    deal::Deal,
    recorder::{Recorder, Tally},
};

/// The key of a results row, the cards formatted as `rank:suit` numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardKey {
    /// The pocket cards sorted by suit and rank.
    pub pocket: String,
    /// The flop cards sorted by rank and suit.
    pub flop: String,
    /// The turn card.
    pub turn: String,
    /// The river card.
    pub river: String,
}

impl From<&Deal> for BoardKey {
    fn from(deal: &Deal) -> Self {
        let mut pocket = deal.pocket().to_vec();
        pocket.sort_by_key(|c| (c.suit().value(), c.rank()));

        let mut flop = deal.flop().to_vec();
        flop.sort_by_key(|c| (c.rank(), c.suit().value()));

        Self {
            pocket: join_cards(&pocket),
            flop: join_cards(&flop),
            turn: card_key(deal.turn()),
            river: card_key(deal.river()),
        }
    }
}

fn card_key(card: Card) -> String {
    format!("{}:{}", card.rank().value(), card.suit().value())
}

fn join_cards(cards: &[Card]) -> String {
    cards.iter().map(|&c| card_key(c)).collect::<Vec<_>>().join(",")
}

/// Database for persisting results counters for each board.
#[derive(Debug, Clone)]
pub struct Db {
    db: Arc<Mutex<Connection>>,
}

impl Db {
    /// Open a database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Open an in memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let counters = HandCategory::ALL
            .iter()
            .map(|c| format!("{} INTEGER NOT NULL DEFAULT 0,", c.label()))
            .collect::<Vec<_>>()
            .join("\n");

        // Create tables
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS results (
                   player_count INTEGER NOT NULL,
                   pocket TEXT NOT NULL,
                   flop TEXT NOT NULL,
                   turn TEXT NOT NULL,
                   river TEXT NOT NULL,
                   {counters}
                   PRIMARY KEY (pocket, flop, turn, river)
                )"
            ),
            (),
        )?;

        Ok(Db {
            db: Arc::new(Mutex::new(conn)),
        })
    }

    /// Creates a recorder that writes to this database every `batch_size` deals.
    pub fn recorder(&self, batch_size: usize) -> DbRecorder {
        DbRecorder {
            db: self.clone(),
            batch_size: batch_size.max(1),
            pending: 0,
            rows: AHashMap::default(),
        }
    }

    /// Adds counters to the rows for the given boards in one transaction.
    pub fn update(&self, rows: impl IntoIterator<Item = (BoardKey, usize, Tally)>) -> Result<usize> {
        let labels = HandCategory::ALL.map(|c| c.label());
        let sql = format!(
            "INSERT INTO results (player_count, pocket, flop, turn, river, {columns})
             VALUES (?1, ?2, ?3, ?4, ?5, {values})
             ON CONFLICT (pocket, flop, turn, river) DO UPDATE SET {updates}",
            columns = labels.join(", "),
            values = (6..6 + labels.len())
                .map(|n| format!("?{n}"))
                .collect::<Vec<_>>()
                .join(", "),
            updates = labels
                .iter()
                .map(|l| format!("{l} = {l} + excluded.{l}"))
                .collect::<Vec<_>>()
                .join(", "),
        );

        let mut db = self.db.lock();
        let tx = db.transaction()?;

        let mut count = 0;
        {
            let mut stmt = tx.prepare_cached(&sql)?;
            for (key, players, tally) in rows {
                let mut values = vec![
                    Value::Integer(players as i64),
                    Value::Text(key.pocket),
                    Value::Text(key.flop),
                    Value::Text(key.turn),
                    Value::Text(key.river),
                ];

                values.extend(
                    HandCategory::ALL
                        .iter()
                        .map(|&c| Value::Integer(tally.count(c) as i64)),
                );

                stmt.execute(params_from_iter(values))?;
                count += 1;
            }
        }

        tx.commit()?;

        Ok(count)
    }

    /// Returns the counters for a board, if the board has been recorded.
    pub fn counts(&self, key: &BoardKey) -> Result<Option<Tally>> {
        let db = self.db.lock();

        let sql = format!(
            "SELECT {}
             FROM results
             WHERE pocket = ?1 AND flop = ?2 AND turn = ?3 AND river = ?4",
            HandCategory::ALL.map(|c| c.label()).join(", ")
        );

        let mut stmt = db.prepare(&sql)?;
        let tally = stmt
            .query_row(params![key.pocket, key.flop, key.turn, key.river], |row| {
                let mut tally = Tally::default();
                for (idx, category) in HandCategory::ALL.into_iter().enumerate() {
                    tally.add(category, row.get::<usize, i64>(idx)? as u64);
                }

                Ok(tally)
            })
            .optional()?;

        Ok(tally)
    }

    /// Returns the counters summed over all boards.
    pub fn totals(&self) -> Result<Tally> {
        let db = self.db.lock();

        let sql = format!(
            "SELECT {} FROM results",
            HandCategory::ALL
                .map(|c| format!("COALESCE(SUM({}), 0)", c.label()))
                .join(", ")
        );

        let tally = db.query_row(&sql, (), |row| {
            let mut tally = Tally::default();
            for (idx, category) in HandCategory::ALL.into_iter().enumerate() {
                tally.add(category, row.get::<usize, i64>(idx)? as u64);
            }

            Ok(tally)
        })?;

        Ok(tally)
    }

    /// The number of boards in the database.
    pub fn boards(&self) -> Result<usize> {
        let db = self.db.lock();
        let count = db.query_row("SELECT COUNT(*) FROM results", (), |row| {
            row.get::<usize, i64>(0)
        })?;

        Ok(count as usize)
    }
}

/// A [Recorder] that buffers deals and writes them to a [Db] in batches.
#[derive(Debug)]
pub struct DbRecorder {
    db: Db,
    batch_size: usize,
    pending: usize,
    rows: AHashMap<BoardKey, (usize, Tally)>,
}

impl Recorder for DbRecorder {
    fn record(&mut self, deal: &Deal, category: HandCategory) -> Result<()> {
        let (_, tally) = self
            .rows
            .entry(BoardKey::from(deal))
            .or_insert_with(|| (deal.players(), Tally::default()));
        tally.add(category, 1);

        self.pending += 1;
        if self.pending >= self.batch_size {
            self.flush()?;
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }

        let rows = self
            .rows
            .drain()
            .map(|(key, (players, tally))| (key, players, tally));
        let count = self.db.update(rows)?;
        debug!("Stored {} deals in {count} rows", self.pending);

        self.pending = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(pocket: &str, community: &str) -> Deal {
        let cards = |s: &str| {
            s.split_whitespace()
                .map(|c| c.parse::<Card>().unwrap())
                .collect::<Vec<_>>()
        };

        Deal::new(
            8,
            cards(pocket).try_into().unwrap(),
            cards(community).try_into().unwrap(),
        )
    }

    #[test]
    fn board_key() {
        let key = BoardKey::from(&deal("AS 3C", "KD 2H KC 9S TC"));
        assert_eq!(key.pocket, "3:0,14:3");
        assert_eq!(key.flop, "2:2,13:0,13:1");
        assert_eq!(key.turn, "9:3");
        assert_eq!(key.river, "10:0");

        // Pocket cards order doesn't matter.
        let other = BoardKey::from(&deal("3C AS", "KC KD 2H 9S TC"));
        assert_eq!(key, other);
    }

    #[test]
    fn record_and_read_back() -> Result<()> {
        let db = Db::open_in_memory()?;
        let mut recorder = db.recorder(100);

        let d1 = deal("KC KD", "KH 7S 7C 2D 3H");
        let d2 = deal("2C 4D", "6H 8S TC QD 3H");

        recorder.record(&d1, HandCategory::FullHouse)?;
        recorder.record(&d2, HandCategory::HighCard)?;
        recorder.record(&d1, HandCategory::FullHouse)?;

        // Nothing is written before a flush.
        assert_eq!(db.boards()?, 0);
        recorder.flush()?;
        assert_eq!(db.boards()?, 2);

        let counts = db.counts(&BoardKey::from(&d1))?.unwrap();
        assert_eq!(counts.count(HandCategory::FullHouse), 2);
        assert_eq!(counts.total(), 2);

        // Same board increments the same row.
        recorder.record(&d2, HandCategory::HighCard)?;
        recorder.flush()?;
        assert_eq!(db.boards()?, 2);

        let counts = db.counts(&BoardKey::from(&d2))?.unwrap();
        assert_eq!(counts.count(HandCategory::HighCard), 2);

        let totals = db.totals()?;
        assert_eq!(totals.total(), 4);
        assert_eq!(totals.count(HandCategory::FullHouse), 2);
        assert_eq!(totals.count(HandCategory::HighCard), 2);

        let missing = deal("AS AD", "6H 8S TC QD 3H");
        assert_eq!(db.counts(&BoardKey::from(&missing))?, None);

        Ok(())
    }

    #[test]
    fn recorder_batches() -> Result<()> {
        let db = Db::open_in_memory()?;
        let mut recorder = db.recorder(2);

        recorder.record(&deal("KC KD", "KH 7S 7C 2D 3H"), HandCategory::FullHouse)?;
        assert_eq!(db.boards()?, 0);

        // Second deal fills the batch.
        recorder.record(&deal("AS AD", "6H 8S TC QD 3H"), HandCategory::Pair)?;
        assert_eq!(db.boards()?, 2);

        // Flushing an empty recorder is a no-op.
        recorder.flush()?;
        assert_eq!(db.totals()?.total(), 2);

        Ok(())
    }

    #[test]
    fn empty_totals() -> Result<()> {
        let db = Db::open_in_memory()?;
        assert_eq!(db.totals()?, Tally::default());
        assert_eq!(db.boards()?, 0);
        Ok(())
    }
}
