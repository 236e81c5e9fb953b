//! Record stores: one in-memory collection per entity area plus its
//! snapshot persistence and mutation operations.
//!
//! Stores are plain structs holding a borrowed `Connection` (no ambient
//! singletons); command handlers open the store they need, mutate it and
//! drop it. Every mutation rewrites the store's whole snapshot.

pub mod debts;
pub mod events;
pub mod expenses;
pub mod session;
pub mod simulations;

use chrono::Utc;

/// Identifier generation: creation timestamp in Unix milliseconds, bumped
/// past any id already taken so rapid sequential adds and recurrence
/// batches always come out distinct.
pub(crate) fn next_id(taken: &[i64]) -> i64 {
    let mut id = Utc::now().timestamp_millis();
    while taken.contains(&id) {
        id += 1;
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_skips_taken_ids() {
        let base = next_id(&[]);
        let taken = vec![base, base + 1, base + 2];
        let id = next_id(&taken);
        assert!(!taken.contains(&id));
        assert!(id > base);
    }
}
