use crate::cli::parser::{Commands, MarkerCmd};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::ColorTag;
use crate::store::events::EventStore;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::RESET;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Marker { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open_ready(&cfg.database)?;
    let mut store = EventStore::open(&pool.conn)?;

    match action {
        MarkerCmd::Add { name, color } => {
            let tag = ColorTag::from_code(color)
                .ok_or_else(|| AppError::InvalidColor(color.clone()))?;

            let id = store.marker_add(name, tag)?;
            ttlog(
                &pool.conn,
                "add",
                "marker",
                &format!("Added marker '{name}'"),
            )?;
            success(format!("Marker '{}' added (id {}).", name, id));
        }

        MarkerCmd::List => {
            let markers = store.markers();

            if markers.is_empty() {
                info("No markers defined.");
                return Ok(());
            }

            header(format!("🏷️  Markers ({})", markers.len()));

            let mut table = Table::new(vec![
                Column::new("Id", 4),
                Column::new("Name", 10),
                Column::new("Color", 6),
                Column::new("Events", 6),
            ]);

            for m in markers {
                let used = store
                    .events()
                    .iter()
                    .filter(|e| e.marker_id == Some(m.id))
                    .count();

                table.add_row(vec![
                    m.id.to_string(),
                    format!("{}{}{}", m.color.ansi(), m.name, RESET),
                    m.color.code().to_string(),
                    used.to_string(),
                ]);
            }

            print!("{}", table.render());
        }

        MarkerCmd::Rm { id } => {
            let detached = store.marker_remove(*id)?;
            ttlog(
                &pool.conn,
                "del",
                "marker",
                &format!("Deleted marker {id}, detached {detached} event(s)"),
            )?;
            success(format!(
                "Marker {} deleted; {} event(s) kept without a marker.",
                id, detached
            ));
        }
    }

    Ok(())
}
