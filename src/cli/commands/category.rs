use crate::cli::parser::{CategoryCmd, Commands};
use crate::config::Config;
use crate::core::calculator::rollup;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::ColorTag;
use crate::store::debts::DebtStore;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::RESET;
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Category { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open_ready(&cfg.database)?;
    let mut store = DebtStore::open(&pool.conn)?;

    match action {
        CategoryCmd::Add { name, color } => {
            let tag = ColorTag::from_code(color)
                .ok_or_else(|| AppError::InvalidColor(color.clone()))?;

            let id = store.category_add(name, tag)?;
            ttlog(
                &pool.conn,
                "add",
                "category",
                &format!("Added category '{name}'"),
            )?;
            success(format!("Category '{}' added (id {}).", name, id));
        }

        CategoryCmd::List => {
            let categories = store.categories();

            if categories.is_empty() {
                info("No categories defined.");
                return Ok(());
            }

            header(format!("📂 Categories ({})", categories.len()));

            let rollups = rollup::rollup(categories, store.debts());

            let mut table = Table::new(vec![
                Column::new("Id", 4),
                Column::new("Name", 10),
                Column::new("Debts", 5),
                Column::new("Total", 9),
                Column::new("Unpaid", 9),
            ]);

            for r in &rollups {
                let color = categories
                    .iter()
                    .find(|c| c.id == r.category_id)
                    .map(|c| c.color.ansi())
                    .unwrap_or("");

                table.add_row(vec![
                    r.category_id.to_string(),
                    format!("{}{}{}", color, r.category_name, RESET),
                    r.count.to_string(),
                    money(r.total, &cfg.currency),
                    money(r.unpaid_total, &cfg.currency),
                ]);
            }

            print!("{}", table.render());
            println!(
                "\nAll debts: {}   Unpaid: {}",
                money(rollup::total(store.debts()), &cfg.currency),
                money(rollup::unpaid_total(store.debts()), &cfg.currency),
            );
        }

        CategoryCmd::Rm { id } => {
            store.category_remove(*id)?;
            ttlog(
                &pool.conn,
                "del",
                "category",
                &format!("Deleted category {id}"),
            )?;
            success(format!("Category {} deleted.", id));
        }
    }

    Ok(())
}
