use crate::cli::parser::{Commands, SummaryCmd};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::BaseValues;
use crate::store::expenses::ExpenseStore;
use crate::ui::messages::{header, success};
use crate::utils::money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Summary { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open_ready(&cfg.database)?;
    let mut store = ExpenseStore::open(&pool.conn)?;

    // bare `daykeeper summary` behaves like `summary show`
    match action.as_ref().unwrap_or(&SummaryCmd::Show) {
        SummaryCmd::Show => {
            let base = store.base_values()?;
            let s = store.summary()?;

            header("💰 Financial summary");
            println!("Base balance:   {}", money(base.balance, &cfg.currency));
            println!("Credit limit:   {}", money(base.credit_limit, &cfg.currency));
            println!();
            println!("Balance:        {}", money(s.balance, &cfg.currency));
            println!("Credit left:    {}", money(s.credit_remaining, &cfg.currency));
            println!("Open bills:     {}", money(s.open_bills, &cfg.currency));
        }

        SummaryCmd::SetBase {
            balance,
            credit_limit,
        } => {
            let s = store.set_base(BaseValues {
                balance: *balance,
                credit_limit: *credit_limit,
            })?;

            ttlog(
                &pool.conn,
                "edit",
                "summary",
                &format!("Base set to balance={balance:.2} credit_limit={credit_limit:.2}"),
            )?;

            success(format!(
                "Base values saved. Balance: {}   Credit left: {}   Open bills: {}",
                money(s.balance, &cfg.currency),
                money(s.credit_remaining, &cfg.currency),
                money(s.open_bills, &cfg.currency),
            ));
        }
    }

    Ok(())
}
