use crate::cli::parser::{Commands, ExpenseCmd};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::range::parse_range;
use crate::models::Payment;
use crate::models::expense::ExpensePatch;
use crate::store::expenses::{ExpenseDraft, ExpenseStore};
use crate::ui::messages::{header, info, success};
use crate::utils::date;
use crate::utils::money;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_optional_time, parse_optional_time};

fn parse_payment(code: &str) -> AppResult<Payment> {
    Payment::from_code(code)
        .ok_or_else(|| AppError::Validation(format!("unknown payment method: {code}")))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Expense { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open_ready(&cfg.database)?;
    let mut store = ExpenseStore::open(&pool.conn)?;

    match action {
        ExpenseCmd::Add {
            name,
            value,
            date: date_arg,
            time,
            payment,
            recurring,
        } => {
            let payment = match payment {
                Some(code) => parse_payment(code)?,
                None => parse_payment(&cfg.default_payment)?,
            };

            let draft = ExpenseDraft {
                name: name.clone(),
                value: *value,
                date: match date_arg {
                    Some(d) => date::canonicalize(d)?,
                    None => date::today(),
                },
                time: parse_optional_time(time.as_ref())?,
                payment,
                recurring: *recurring,
            };

            let id = store.add(draft)?;
            ttlog(
                &pool.conn,
                "add",
                "expense",
                &format!("Added expense '{}' ({:.2})", name, value),
            )?;

            success(format!("Expense '{}' added (id {}).", name, id));
            print_summary_line(&store, cfg)?;
        }

        ExpenseCmd::List { range } => {
            let bounds = match range {
                Some(r) if !r.eq_ignore_ascii_case("all") => Some(parse_range(r)?),
                _ => None,
            };

            let mut selected: Vec<_> = store
                .items()
                .iter()
                .filter(|e| match bounds {
                    Some((start, end)) => e.date >= start && e.date <= end,
                    None => true,
                })
                .collect();
            selected.sort_by_key(|e| (e.date, e.id));

            if selected.is_empty() {
                info("No expenses to show.");
                return Ok(());
            }

            header(format!("💸 Expenses ({})", selected.len()));

            let mut table = Table::new(vec![
                Column::new("Id", 4),
                Column::new("Date", 10),
                Column::new("Time", 5),
                Column::new("Name", 12),
                Column::new("Value", 9),
                Column::new("Pay", 6),
                Column::new("Rec", 3),
            ]);

            let mut total = 0.0;
            for e in &selected {
                total += e.value;
                table.add_row(vec![
                    e.id.to_string(),
                    e.date.format("%Y-%m-%d").to_string(),
                    format_optional_time(e.time),
                    e.name.clone(),
                    money(e.value, &cfg.currency),
                    e.payment.code().to_string(),
                    (if e.recurring { "↻" } else { " " }).to_string(),
                ]);
            }

            print!("{}", table.render());
            println!("\nTotal: {}", money(total, &cfg.currency));
        }

        ExpenseCmd::Edit {
            id,
            name,
            value,
            date: date_arg,
            time,
            payment,
            recurring,
        } => {
            let patch = ExpensePatch {
                name: name.clone(),
                value: *value,
                date: date_arg
                    .as_deref()
                    .map(date::canonicalize)
                    .transpose()?,
                time: parse_optional_time(time.as_ref())?,
                payment: payment.as_deref().map(parse_payment).transpose()?,
                recurring: *recurring,
            };

            store.update(*id, patch)?;
            ttlog(&pool.conn, "edit", "expense", &format!("Edited expense {id}"))?;
            success(format!("Expense {} updated.", id));
            print_summary_line(&store, cfg)?;
        }

        ExpenseCmd::Rm { id } => {
            store.remove(*id)?;
            ttlog(&pool.conn, "del", "expense", &format!("Deleted expense {id}"))?;
            success(format!("Expense {} deleted.", id));
            print_summary_line(&store, cfg)?;
        }
    }

    Ok(())
}

/// Every expense mutation rewrites the summary; echo the fresh one so the
/// user sees the effect immediately.
fn print_summary_line(store: &ExpenseStore, cfg: &Config) -> AppResult<()> {
    let s = store.summary()?;
    info(format!(
        "Balance: {}   Credit left: {}   Open bills: {}",
        money(s.balance, &cfg.currency),
        money(s.credit_remaining, &cfg.currency),
        money(s.open_bills, &cfg.currency),
    ));
    Ok(())
}
