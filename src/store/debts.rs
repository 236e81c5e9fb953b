//! Debt store: personal debts plus the categories they reference.

use crate::db::kv;
use crate::errors::{AppError, AppResult};
use crate::models::debt::DebtPatch;
use crate::models::{Category, ColorTag, Debt};
use chrono::NaiveDate;
use rusqlite::Connection;

#[derive(Debug, Clone)]
pub struct DebtDraft {
    pub name: String,
    pub value: f64,
    pub category_id: i64,
    pub due: NaiveDate,
    pub notes: Option<String>,
}

pub struct DebtStore<'c> {
    conn: &'c Connection,
    debts: Vec<Debt>,
    categories: Vec<Category>,
}

impl<'c> DebtStore<'c> {
    pub fn open(conn: &'c Connection) -> AppResult<Self> {
        Ok(Self {
            conn,
            debts: kv::load(conn, kv::KEY_DEBTS)?,
            categories: kv::load(conn, kv::KEY_CATEGORIES)?,
        })
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: i64) -> Option<&Debt> {
        self.debts.iter().find(|d| d.id == id)
    }

    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn add(&mut self, draft: DebtDraft) -> AppResult<i64> {
        if draft.name.trim().is_empty() {
            return Err(AppError::Validation("debt name is required".to_string()));
        }
        self.require_category(draft.category_id)?;

        let taken: Vec<i64> = self.debts.iter().map(|d| d.id).collect();
        let id = super::next_id(&taken);

        self.debts.push(Debt {
            id,
            name: draft.name.trim().to_string(),
            value: draft.value,
            category_id: draft.category_id,
            due: draft.due,
            paid: false,
            notes: draft.notes,
        });

        self.persist_debts()?;
        Ok(id)
    }

    pub fn update(&mut self, id: i64, patch: DebtPatch) -> AppResult<()> {
        if let Some(cid) = patch.category_id {
            self.require_category(cid)?;
        }

        let debt = self
            .debts
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::not_found("debt", id))?;

        if let Some(name) = patch.name {
            debt.name = name;
        }
        if let Some(value) = patch.value {
            debt.value = value;
        }
        if let Some(cid) = patch.category_id {
            debt.category_id = cid;
        }
        if let Some(due) = patch.due {
            debt.due = due;
        }
        if let Some(notes) = patch.notes {
            debt.notes = Some(notes);
        }

        self.persist_debts()
    }

    /// Flip the paid flag; returns the new state.
    pub fn toggle_paid(&mut self, id: i64) -> AppResult<bool> {
        let debt = self
            .debts
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::not_found("debt", id))?;

        debt.paid = !debt.paid;
        let state = debt.paid;
        self.persist_debts()?;
        Ok(state)
    }

    pub fn remove(&mut self, id: i64) -> AppResult<()> {
        let before = self.debts.len();
        self.debts.retain(|d| d.id != id);

        if self.debts.len() == before {
            return Err(AppError::not_found("debt", id));
        }

        self.persist_debts()
    }

    // ---------------------------
    // Categories
    // ---------------------------

    pub fn category_add(&mut self, name: &str, color: ColorTag) -> AppResult<i64> {
        if name.trim().is_empty() {
            return Err(AppError::Validation(
                "category name is required".to_string(),
            ));
        }

        let taken: Vec<i64> = self.categories.iter().map(|c| c.id).collect();
        let id = super::next_id(&taken);

        self.categories.push(Category {
            id,
            name: name.trim().to_string(),
            color,
        });

        kv::save(self.conn, kv::KEY_CATEGORIES, &self.categories)?;
        Ok(id)
    }

    /// Deletion is blocked while any debt references the category; both
    /// collections stay untouched in that case.
    pub fn category_remove(&mut self, id: i64) -> AppResult<()> {
        if self.category(id).is_none() {
            return Err(AppError::not_found("category", id));
        }

        if self.debts.iter().any(|d| d.category_id == id) {
            return Err(AppError::CategoryInUse(id));
        }

        self.categories.retain(|c| c.id != id);
        kv::save(self.conn, kv::KEY_CATEGORIES, &self.categories)
    }

    fn require_category(&self, id: i64) -> AppResult<()> {
        if self.category(id).is_none() {
            return Err(AppError::not_found("category", id));
        }
        Ok(())
    }

    fn persist_debts(&self) -> AppResult<()> {
        kv::save(self.conn, kv::KEY_DEBTS, &self.debts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;

    fn draft(name: &str, value: f64, category_id: i64) -> DebtDraft {
        DebtDraft {
            name: name.to_string(),
            value,
            category_id,
            due: "2025-07-01".parse().unwrap(),
            notes: None,
        }
    }

    #[test]
    fn category_with_debts_cannot_be_deleted() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = DebtStore::open(&pool.conn).unwrap();

        let cid = store.category_add("car", ColorTag::Red).unwrap();
        store.add(draft("tires", 400.0, cid)).unwrap();

        assert!(matches!(
            store.category_remove(cid),
            Err(AppError::CategoryInUse(_))
        ));

        // nothing changed, in memory or on disk
        assert_eq!(store.categories().len(), 1);
        assert_eq!(store.debts().len(), 1);
        let reopened = DebtStore::open(&pool.conn).unwrap();
        assert_eq!(reopened.categories().len(), 1);
        assert_eq!(reopened.debts().len(), 1);
    }

    #[test]
    fn unreferenced_category_deletes_cleanly() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = DebtStore::open(&pool.conn).unwrap();

        let cid = store.category_add("misc", ColorTag::Teal).unwrap();
        store.category_remove(cid).unwrap();
        assert!(store.categories().is_empty());
    }

    #[test]
    fn debt_requires_an_existing_category() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = DebtStore::open(&pool.conn).unwrap();
        assert!(store.add(draft("loan", 100.0, 404)).is_err());
        assert!(store.debts().is_empty());
    }

    #[test]
    fn toggle_paid_twice_round_trips() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = DebtStore::open(&pool.conn).unwrap();
        let cid = store.category_add("home", ColorTag::Green).unwrap();
        let id = store.add(draft("electricity", 80.0, cid)).unwrap();

        assert!(store.toggle_paid(id).unwrap());
        assert!(!store.toggle_paid(id).unwrap());
        assert!(!store.get(id).unwrap().paid);
    }
}
