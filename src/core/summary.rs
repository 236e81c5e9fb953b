//! Financial summary derivation.
//!
//! The summary is never edited directly: the expense store recomputes and
//! persists it after every one of its mutations, from the user-edited base
//! values plus the current expense collection.

use crate::models::{BaseValues, Expense, Payment, Summary};

pub fn recompute(base: &BaseValues, expenses: &[Expense]) -> Summary {
    let debit: f64 = expenses
        .iter()
        .filter(|e| e.payment == Payment::Debit)
        .map(|e| e.value)
        .sum();

    let credit: f64 = expenses
        .iter()
        .filter(|e| e.payment == Payment::Credit)
        .map(|e| e.value)
        .sum();

    let open_bills: f64 = expenses.iter().filter(|e| e.recurring).map(|e| e.value).sum();

    Summary {
        balance: base.balance - debit,
        credit_remaining: base.credit_limit - credit,
        open_bills,
    }
}
