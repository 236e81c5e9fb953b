use crate::cli::parser::{Commands, EventCmd};
use crate::config::Config;
use crate::core::calculator::agenda;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventPatch;
use crate::models::{Event, Recurrence};
use crate::store::events::{EventDraft, EventStore};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{RESET, colorize_flag};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_optional_time, parse_optional_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Event { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open_ready(&cfg.database)?;
    let mut store = EventStore::open(&pool.conn)?;

    match action {
        EventCmd::Add {
            title,
            date: date_arg,
            time,
            description,
            repeat,
            marker,
        } => {
            let recurrence = match repeat {
                Some(code) => Some(
                    Recurrence::from_code(code)
                        .ok_or_else(|| AppError::InvalidRecurrence(code.clone()))?,
                ),
                None => None,
            };

            let draft = EventDraft {
                title: title.clone(),
                date: date_arg
                    .as_deref()
                    .map(date::canonicalize)
                    .transpose()?,
                time: parse_optional_time(time.as_ref())?,
                description: description.clone(),
                recurrence,
                marker_id: *marker,
            };

            let ids = store.add(draft)?;

            ttlog(
                &pool.conn,
                "add",
                "event",
                &format!("Added event '{}' ({} record(s))", title, ids.len()),
            )?;

            if ids.len() > 1 {
                success(format!(
                    "Event '{}' added with {} future occurrences (ids {:?}).",
                    title,
                    ids.len() - 1,
                    ids
                ));
            } else {
                success(format!("Event '{}' added (id {}).", title, ids[0]));
            }
        }

        EventCmd::List {
            pending,
            week,
            date: day,
        } => {
            let events = store.events();

            let selected: Vec<&Event> = if *pending {
                agenda::pending(events)
            } else if *week {
                agenda::completed_in_week(events, date::today())
            } else if let Some(d) = day {
                agenda::on_day(events, date::canonicalize(d)?)
            } else {
                events.iter().collect()
            };

            if selected.is_empty() {
                info("No events to show.");
                return Ok(());
            }

            header(format!("📅 Events ({})", selected.len()));

            let mut table = Table::new(vec![
                Column::new("Id", 4),
                Column::new("Date", 10),
                Column::new("Time", 5),
                Column::new("Done", 4),
                Column::new("Title", 12),
                Column::new("Repeat", 7),
                Column::new("Marker", 8),
            ]);

            for ev in selected {
                let marker = ev
                    .marker_id
                    .and_then(|id| store.marker(id))
                    .map(|m| format!("{}{}{}", m.color.ansi(), m.name, RESET))
                    .unwrap_or_else(|| "--".to_string());

                table.add_row(vec![
                    ev.id.to_string(),
                    ev.date_str(),
                    format_optional_time(ev.time),
                    colorize_flag(if ev.completed { "✔" } else { " " }, ev.completed),
                    ev.title.clone(),
                    ev.recurrence.map(|r| r.code()).unwrap_or("--").to_string(),
                    marker,
                ]);
            }

            print!("{}", table.render());
        }

        EventCmd::Edit {
            id,
            title,
            date: date_arg,
            time,
            description,
            marker,
            no_marker,
        } => {
            let patch = EventPatch {
                title: title.clone(),
                date: date_arg
                    .as_deref()
                    .map(date::canonicalize)
                    .transpose()?,
                time: parse_optional_time(time.as_ref())?,
                description: description.clone(),
                marker_id: *marker,
                clear_marker: *no_marker,
            };

            store.update(*id, patch)?;
            ttlog(&pool.conn, "edit", "event", &format!("Edited event {id}"))?;
            success(format!("Event {} updated.", id));
        }

        EventCmd::Done { id } => {
            let completed = store.toggle(*id)?;
            ttlog(
                &pool.conn,
                "toggle",
                "event",
                &format!("Event {id} completed={completed}"),
            )?;

            if completed {
                success(format!("Event {} marked as done.", id));
            } else {
                success(format!("Event {} reopened.", id));
            }
        }

        EventCmd::Rm { id } => {
            store.remove(*id)?;
            ttlog(&pool.conn, "del", "event", &format!("Deleted event {id}"))?;
            success(format!("Event {} deleted.", id));
        }
    }

    Ok(())
}
