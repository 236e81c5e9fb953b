use crate::cli::parser::{Commands, DebtCmd};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::debt::DebtPatch;
use crate::store::debts::{DebtDraft, DebtStore};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{RESET, colorize_flag};
use crate::utils::date;
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Debt { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open_ready(&cfg.database)?;
    let mut store = DebtStore::open(&pool.conn)?;

    match action {
        DebtCmd::Add {
            name,
            value,
            category,
            due,
            notes,
        } => {
            let draft = DebtDraft {
                name: name.clone(),
                value: *value,
                category_id: *category,
                due: date::canonicalize(due)?,
                notes: notes.clone(),
            };

            let id = store.add(draft)?;
            ttlog(
                &pool.conn,
                "add",
                "debt",
                &format!("Added debt '{}' ({:.2})", name, value),
            )?;
            success(format!("Debt '{}' added (id {}).", name, id));
        }

        DebtCmd::List { unpaid } => {
            let mut selected: Vec<_> = store
                .debts()
                .iter()
                .filter(|d| !*unpaid || !d.paid)
                .collect();
            selected.sort_by_key(|d| (d.due, d.id));

            if selected.is_empty() {
                info("No debts to show.");
                return Ok(());
            }

            header(format!("🧾 Debts ({})", selected.len()));

            let mut table = Table::new(vec![
                Column::new("Id", 4),
                Column::new("Due", 10),
                Column::new("Name", 12),
                Column::new("Value", 9),
                Column::new("Category", 10),
                Column::new("Paid", 4),
                Column::new("Notes", 8),
            ]);

            let mut open = 0.0;
            for d in &selected {
                if !d.paid {
                    open += d.value;
                }

                let category = store
                    .category(d.category_id)
                    .map(|c| format!("{}{}{}", c.color.ansi(), c.name, RESET))
                    .unwrap_or_else(|| d.category_id.to_string());

                table.add_row(vec![
                    d.id.to_string(),
                    d.due.format("%Y-%m-%d").to_string(),
                    d.name.clone(),
                    money(d.value, &cfg.currency),
                    category,
                    colorize_flag(if d.paid { "✔" } else { " " }, d.paid),
                    d.notes.clone().unwrap_or_else(|| "--".to_string()),
                ]);
            }

            print!("{}", table.render());
            println!("\nStill owed: {}", money(open, &cfg.currency));
        }

        DebtCmd::Edit {
            id,
            name,
            value,
            category,
            due,
            notes,
        } => {
            let patch = DebtPatch {
                name: name.clone(),
                value: *value,
                category_id: *category,
                due: due.as_deref().map(date::canonicalize).transpose()?,
                notes: notes.clone(),
            };

            store.update(*id, patch)?;
            ttlog(&pool.conn, "edit", "debt", &format!("Edited debt {id}"))?;
            success(format!("Debt {} updated.", id));
        }

        DebtCmd::Pay { id } => {
            let paid = store.toggle_paid(*id)?;
            ttlog(
                &pool.conn,
                "pay",
                "debt",
                &format!("Debt {id} paid={paid}"),
            )?;

            if paid {
                success(format!("Debt {} marked as paid.", id));
            } else {
                success(format!("Debt {} reopened.", id));
            }
        }

        DebtCmd::Rm { id } => {
            store.remove(*id)?;
            ttlog(&pool.conn, "del", "debt", &format!("Deleted debt {id}"))?;
            success(format!("Debt {} deleted.", id));
        }
    }

    Ok(())
}
