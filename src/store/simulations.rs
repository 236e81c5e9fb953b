//! Work-shift simulation store.
//!
//! Economics are frozen at creation (see core::calculator::economics);
//! editing a simulation's inputs deliberately does NOT refresh them, which
//! mirrors how stored history behaves everywhere else in the app.

use crate::core::calculator::economics::shift_economics;
use crate::db::kv;
use crate::errors::{AppError, AppResult};
use crate::models::Simulation;
use chrono::NaiveDate;
use rusqlite::Connection;

#[derive(Debug, Clone)]
pub struct SimulationDraft {
    pub date: NaiveDate,
    pub hours: f64,
    pub distance: f64,
    pub fuel_price: f64,
    pub gross: f64,
    pub consumption: f64,
}

pub struct SimulationStore<'c> {
    conn: &'c Connection,
    items: Vec<Simulation>,
}

impl<'c> SimulationStore<'c> {
    pub fn open(conn: &'c Connection) -> AppResult<Self> {
        Ok(Self {
            conn,
            items: kv::load(conn, kv::KEY_SIMULATIONS)?,
        })
    }

    pub fn items(&self) -> &[Simulation] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&Simulation> {
        self.items.iter().find(|s| s.id == id)
    }

    pub fn add(&mut self, draft: SimulationDraft) -> AppResult<i64> {
        let taken: Vec<i64> = self.items.iter().map(|s| s.id).collect();
        let id = super::next_id(&taken);

        let economics = shift_economics(
            draft.hours,
            draft.distance,
            draft.fuel_price,
            draft.gross,
            draft.consumption,
        );

        self.items.push(Simulation {
            id,
            date: draft.date,
            hours: draft.hours,
            distance: draft.distance,
            fuel_price: draft.fuel_price,
            gross: draft.gross,
            consumption: draft.consumption,
            economics,
        });

        self.persist()?;
        Ok(id)
    }

    /// Insert a record fetched from the remote collection, keeping its id
    /// and frozen economics as-is. Replaces a local record with the same id.
    pub fn upsert(&mut self, sim: Simulation) -> AppResult<()> {
        self.items.retain(|s| s.id != sim.id);
        self.items.push(sim);
        self.persist()
    }

    pub fn remove(&mut self, id: i64) -> AppResult<()> {
        let before = self.items.len();
        self.items.retain(|s| s.id != id);

        if self.items.len() == before {
            return Err(AppError::not_found("simulation", id));
        }

        self.persist()
    }

    /// Net earnings ordered by shift date, for the trend statistics.
    pub fn net_by_date(&self) -> Vec<f64> {
        let mut sorted: Vec<&Simulation> = self.items.iter().collect();
        sorted.sort_by_key(|s| s.date);
        sorted.iter().map(|s| s.economics.net).collect()
    }

    fn persist(&self) -> AppResult<()> {
        kv::save(self.conn, kv::KEY_SIMULATIONS, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;

    fn draft(date: &str, gross: f64) -> SimulationDraft {
        SimulationDraft {
            date: date.parse().unwrap(),
            hours: 8.0,
            distance: 100.0,
            fuel_price: 6.0,
            gross,
            consumption: 10.0,
        }
    }

    #[test]
    fn add_freezes_derived_economics() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = SimulationStore::open(&pool.conn).unwrap();

        let id = store.add(draft("2025-06-01", 200.0)).unwrap();
        let sim = store.get(id).unwrap();
        assert_eq!(sim.economics.fuel_cost, 60.0);
        assert_eq!(sim.economics.net, 140.0);
        assert_eq!(sim.economics.per_hour, Some(17.5));
        assert_eq!(sim.economics.per_km, Some(1.4));
    }

    #[test]
    fn net_by_date_sorts_before_reporting() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = SimulationStore::open(&pool.conn).unwrap();

        store.add(draft("2025-06-03", 260.0)).unwrap();
        store.add(draft("2025-06-01", 200.0)).unwrap();
        store.add(draft("2025-06-02", 230.0)).unwrap();

        let nets = store.net_by_date();
        assert_eq!(nets, vec![140.0, 170.0, 200.0]);
    }
}
