//! Local session snapshot: who is signed in, and the remote token.

use crate::db::kv;
use crate::errors::AppResult;
use crate::models::{Profile, Session};
use rusqlite::Connection;

pub struct SessionStore<'c> {
    conn: &'c Connection,
    session: Session,
}

impl<'c> SessionStore<'c> {
    pub fn open(conn: &'c Connection) -> AppResult<Self> {
        Ok(Self {
            conn,
            session: kv::load(conn, kv::KEY_SESSION)?,
        })
    }

    pub fn current(&self) -> &Session {
        &self.session
    }

    pub fn sign_in(&mut self, profile: Profile, token: String) -> AppResult<()> {
        self.session = Session {
            logged_in: true,
            token: Some(token),
            profile: Some(profile),
        };
        kv::save(self.conn, kv::KEY_SESSION, &self.session)
    }

    pub fn sign_out(&mut self) -> AppResult<()> {
        self.session = Session::default();
        kv::save(self.conn, kv::KEY_SESSION, &self.session)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    /// Repair an inconsistent persisted shape (logged-in flag without a
    /// profile) by force-clearing the whole session snapshot.
    /// Returns true when a repair happened.
    pub fn repair_if_inconsistent(&mut self) -> AppResult<bool> {
        if self.session.is_consistent() {
            return Ok(false);
        }

        kv::clear(self.conn, kv::KEY_SESSION)?;
        self.session = Session::default();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;

    fn profile() -> Profile {
        Profile {
            id: "u-1".to_string(),
            email: "me@example.com".to_string(),
            name: "Me".to_string(),
            admin: false,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn sign_in_then_out_round_trips() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = SessionStore::open(&pool.conn).unwrap();

        store.sign_in(profile(), "tok".to_string()).unwrap();
        assert!(store.current().logged_in);

        store.sign_out().unwrap();
        let reopened = SessionStore::open(&pool.conn).unwrap();
        assert!(!reopened.current().logged_in);
    }

    #[test]
    fn inconsistent_session_is_force_cleared() {
        let pool = DbPool::in_memory().unwrap();

        // logged_in flag with no profile: the broken shape
        kv::save(
            &pool.conn,
            kv::KEY_SESSION,
            &Session {
                logged_in: true,
                token: None,
                profile: None,
            },
        )
        .unwrap();

        let mut store = SessionStore::open(&pool.conn).unwrap();
        assert!(store.repair_if_inconsistent().unwrap());
        assert!(!store.current().logged_in);

        // second check is a no-op
        assert!(!store.repair_if_inconsistent().unwrap());
    }
}
