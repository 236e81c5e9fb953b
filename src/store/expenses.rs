//! Expense store plus the financial summary reactor.
//!
//! The summary singleton is derived state: it is recomputed from the base
//! values and the full expense collection inside every mutation here, after
//! the expense snapshot is persisted. Nothing else writes the summary key.

use crate::core::summary::recompute;
use crate::db::kv;
use crate::errors::{AppError, AppResult};
use crate::models::expense::ExpensePatch;
use crate::models::{BaseValues, Expense, Payment, Summary};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::Connection;

#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub name: String,
    pub value: f64,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub payment: Payment,
    pub recurring: bool,
}

pub struct ExpenseStore<'c> {
    conn: &'c Connection,
    items: Vec<Expense>,
}

impl<'c> ExpenseStore<'c> {
    pub fn open(conn: &'c Connection) -> AppResult<Self> {
        Ok(Self {
            conn,
            items: kv::load(conn, kv::KEY_EXPENSES)?,
        })
    }

    pub fn items(&self) -> &[Expense] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&Expense> {
        self.items.iter().find(|e| e.id == id)
    }

    pub fn add(&mut self, draft: ExpenseDraft) -> AppResult<i64> {
        if draft.name.trim().is_empty() {
            return Err(AppError::Validation("expense name is required".to_string()));
        }
        if draft.value < 0.0 {
            return Err(AppError::Validation(
                "expense value cannot be negative".to_string(),
            ));
        }

        let taken: Vec<i64> = self.items.iter().map(|e| e.id).collect();
        let id = super::next_id(&taken);

        self.items.push(Expense {
            id,
            name: draft.name.trim().to_string(),
            value: draft.value,
            date: draft.date,
            time: draft.time,
            payment: draft.payment,
            recurring: draft.recurring,
        });

        self.persist()?;
        Ok(id)
    }

    pub fn update(&mut self, id: i64, patch: ExpensePatch) -> AppResult<()> {
        let exp = self
            .items
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::not_found("expense", id))?;

        if let Some(name) = patch.name {
            exp.name = name;
        }
        if let Some(value) = patch.value {
            exp.value = value;
        }
        if let Some(date) = patch.date {
            exp.date = date;
        }
        if let Some(time) = patch.time {
            exp.time = Some(time);
        }
        if let Some(payment) = patch.payment {
            exp.payment = payment;
        }
        if let Some(recurring) = patch.recurring {
            exp.recurring = recurring;
        }

        self.persist()
    }

    pub fn remove(&mut self, id: i64) -> AppResult<()> {
        let before = self.items.len();
        self.items.retain(|e| e.id != id);

        if self.items.len() == before {
            return Err(AppError::not_found("expense", id));
        }

        self.persist()
    }

    // ---------------------------
    // Summary
    // ---------------------------

    pub fn summary(&self) -> AppResult<Summary> {
        kv::load(self.conn, kv::KEY_SUMMARY)
    }

    pub fn base_values(&self) -> AppResult<BaseValues> {
        kv::load(self.conn, kv::KEY_SUMMARY_BASE)
    }

    /// Explicit base edit (the only user-facing way to touch the summary);
    /// triggers the same reactive recompute as an expense mutation.
    pub fn set_base(&mut self, base: BaseValues) -> AppResult<Summary> {
        kv::save(self.conn, kv::KEY_SUMMARY_BASE, &base)?;
        self.react()
    }

    /// Persist the expense snapshot, then unconditionally overwrite the
    /// summary derived from it.
    fn persist(&self) -> AppResult<()> {
        kv::save(self.conn, kv::KEY_EXPENSES, &self.items)?;
        self.react()?;
        Ok(())
    }

    fn react(&self) -> AppResult<Summary> {
        let base: BaseValues = kv::load(self.conn, kv::KEY_SUMMARY_BASE)?;
        let summary = recompute(&base, &self.items);
        kv::save(self.conn, kv::KEY_SUMMARY, &summary)?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;

    fn draft(name: &str, value: f64, payment: Payment, recurring: bool) -> ExpenseDraft {
        ExpenseDraft {
            name: name.to_string(),
            value,
            date: "2025-05-02".parse().unwrap(),
            time: None,
            payment,
            recurring,
        }
    }

    #[test]
    fn sequential_adds_get_distinct_ids_and_both_persist() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = ExpenseStore::open(&pool.conn).unwrap();

        let a = store.add(draft("coffee", 4.5, Payment::Debit, false)).unwrap();
        let b = store.add(draft("lunch", 18.0, Payment::Debit, false)).unwrap();
        assert_ne!(a, b);

        let reopened = ExpenseStore::open(&pool.conn).unwrap();
        assert_eq!(reopened.items().len(), 2);
        assert!(reopened.get(a).is_some());
        assert!(reopened.get(b).is_some());
    }

    #[test]
    fn every_mutation_rewrites_the_summary() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = ExpenseStore::open(&pool.conn).unwrap();

        store
            .set_base(BaseValues {
                balance: 1000.0,
                credit_limit: 300.0,
            })
            .unwrap();

        let id = store.add(draft("rent", 600.0, Payment::Debit, true)).unwrap();
        store.add(draft("shoes", 100.0, Payment::Credit, false)).unwrap();

        let s = store.summary().unwrap();
        assert_eq!(s.balance, 400.0);
        assert_eq!(s.credit_remaining, 200.0);
        assert_eq!(s.open_bills, 600.0);

        store.remove(id).unwrap();
        let s = store.summary().unwrap();
        assert_eq!(s.balance, 1000.0);
        assert_eq!(s.open_bills, 0.0);
    }

    #[test]
    fn recurring_flag_is_informational_only() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = ExpenseStore::open(&pool.conn).unwrap();
        store
            .add(draft("netflix", 12.0, Payment::Credit, true))
            .unwrap();
        // no expansion: exactly one record
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn update_unknown_id_errors() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = ExpenseStore::open(&pool.conn).unwrap();
        assert!(store.update(7, ExpensePatch::default()).is_err());
    }
}
