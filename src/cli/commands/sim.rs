use crate::cli::parser::{Commands, SimCmd};
use crate::config::Config;
use crate::core::calculator::trend::trend_pct;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Simulation;
use crate::remote::RemoteClient;
use crate::store::session::SessionStore;
use crate::store::simulations::{SimulationDraft, SimulationStore};
use crate::ui::messages::{header, info, success};
use crate::utils::date;
use crate::utils::formatting::rate;
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Sim { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open_ready(&cfg.database)?;
    let mut store = SimulationStore::open(&pool.conn)?;

    match action {
        SimCmd::Add {
            date: date_arg,
            hours,
            distance,
            fuel_price,
            gross,
            consumption,
        } => {
            let draft = SimulationDraft {
                date: date::canonicalize(date_arg)?,
                hours: *hours,
                distance: *distance,
                fuel_price: *fuel_price,
                gross: *gross,
                consumption: *consumption,
            };

            let id = store.add(draft)?;
            ttlog(
                &pool.conn,
                "add",
                "sim",
                &format!("Added simulation for {date_arg}"),
            )?;

            let sim = store
                .get(id)
                .ok_or_else(|| AppError::not_found("simulation", id))?;

            success(format!("Simulation added (id {}).", id));
            info(format!(
                "Net: {}   Per hour: {}   Per km: {}",
                money(sim.economics.net, &cfg.currency),
                rate(sim.economics.per_hour),
                rate(sim.economics.per_km),
            ));
        }

        SimCmd::List => {
            let mut items: Vec<&Simulation> = store.items().iter().collect();
            items.sort_by_key(|s| (s.date, s.id));

            if items.is_empty() {
                info("No simulations recorded.");
                return Ok(());
            }

            header(format!("🚗 Work-shift simulations ({})", items.len()));

            let mut table = Table::new(vec![
                Column::new("Id", 4),
                Column::new("Date", 10),
                Column::new("Hours", 5),
                Column::new("Km", 6),
                Column::new("Gross", 9),
                Column::new("Fuel", 9),
                Column::new("Net", 9),
                Column::new("Per h", 6),
                Column::new("Per km", 6),
            ]);

            for s in &items {
                table.add_row(vec![
                    s.id.to_string(),
                    s.date.format("%Y-%m-%d").to_string(),
                    format!("{:.1}", s.hours),
                    format!("{:.1}", s.distance),
                    money(s.gross, &cfg.currency),
                    money(s.economics.fuel_cost, &cfg.currency),
                    money(s.economics.net, &cfg.currency),
                    rate(s.economics.per_hour),
                    rate(s.economics.per_km),
                ]);
            }

            print!("{}", table.render());
        }

        SimCmd::Rm { id, remote } => {
            store.remove(*id)?;
            ttlog(&pool.conn, "del", "sim", &format!("Deleted simulation {id}"))?;
            success(format!("Simulation {} deleted.", id));

            if *remote {
                let session = SessionStore::open(&pool.conn)?;
                let token = session.token().ok_or(AppError::NotSignedIn)?;
                let client = RemoteClient::new(&cfg.remote_url)?;

                let matches: Vec<Simulation> =
                    client.doc_query_eq(token, "simulations", "id", &id.to_string())?;

                if matches.is_empty() {
                    info("No matching remote document.");
                } else {
                    client.doc_delete(token, "simulations", &id.to_string())?;
                    success("Remote document deleted.");
                }
            }
        }

        SimCmd::Stats => {
            let items = store.items();

            if items.is_empty() {
                info("No simulations recorded.");
                return Ok(());
            }

            let count = items.len();
            let total_net: f64 = items.iter().map(|s| s.economics.net).sum();
            let total_hours: f64 = items.iter().map(|s| s.hours).sum();
            let total_km: f64 = items.iter().map(|s| s.distance).sum();

            header("📈 Shift statistics");
            println!("Shifts:        {}", count);
            println!("Total net:     {}", money(total_net, &cfg.currency));
            println!(
                "Average net:   {}",
                money(total_net / count as f64, &cfg.currency)
            );
            println!("Total hours:   {:.1}", total_hours);
            println!("Total km:      {:.1}", total_km);

            match trend_pct(&store.net_by_date()) {
                Some(pct) => println!("Earnings trend: {:+.1}% (recent vs earlier shifts)", pct),
                None => println!("Earnings trend: -- (not enough history)"),
            }
        }

        SimCmd::Push => {
            let session = SessionStore::open(&pool.conn)?;
            let token = session.token().ok_or(AppError::NotSignedIn)?;

            let client = RemoteClient::new(&cfg.remote_url)?;
            let items = store.items();

            for sim in items {
                client.doc_add(token, "simulations", sim)?;
            }

            ttlog(
                &pool.conn,
                "push",
                "sim",
                &format!("Pushed {} simulation(s)", items.len()),
            )?;
            success(format!("Pushed {} simulation(s).", items.len()));
        }

        SimCmd::Pull => {
            let session = SessionStore::open(&pool.conn)?;
            let token = session.token().ok_or(AppError::NotSignedIn)?;

            let client = RemoteClient::new(&cfg.remote_url)?;
            let fetched: Vec<Simulation> = client.doc_order_by(token, "simulations", "date")?;
            let count = fetched.len();

            for sim in fetched {
                store.upsert(sim)?;
            }

            ttlog(
                &pool.conn,
                "pull",
                "sim",
                &format!("Pulled {count} simulation(s)"),
            )?;
            success(format!("Pulled {} simulation(s).", count));
        }
    }

    Ok(())
}
