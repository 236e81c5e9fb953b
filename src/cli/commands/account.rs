use crate::cli::parser::{AccountCmd, Commands};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::remote::RemoteClient;
use crate::store::session::SessionStore;
use crate::ui::messages::{header, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Account { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open_ready(&cfg.database)?;
    let mut session = SessionStore::open(&pool.conn)?;

    match action {
        AccountCmd::Login { email, password } => {
            let client = RemoteClient::new(&cfg.remote_url)?;
            let (profile, token) = client.sign_in(email, password)?;
            let name = profile.name.clone();

            session.sign_in(profile, token)?;
            ttlog(&pool.conn, "login", "account", &format!("Signed in as {email}"))?;
            success(format!("Signed in as {} <{}>.", name, email));
        }

        AccountCmd::Signup {
            email,
            name,
            password,
        } => {
            let client = RemoteClient::new(&cfg.remote_url)?;
            let (profile, token) = client.sign_up(email, name, password)?;

            session.sign_in(profile, token)?;
            ttlog(
                &pool.conn,
                "signup",
                "account",
                &format!("Account created for {email}"),
            )?;
            success(format!("Account created; signed in as {} <{}>.", name, email));
        }

        AccountCmd::Logout => {
            // best-effort remote logout; the local session is cleared anyway
            if let Some(token) = session.token() {
                let client = RemoteClient::new(&cfg.remote_url)?;
                if let Err(e) = client.sign_out(token) {
                    warning(format!("Remote sign-out failed: {e}"));
                }
            }

            session.sign_out()?;
            ttlog(&pool.conn, "logout", "account", "Signed out")?;
            success("Signed out.");
        }

        AccountCmd::Reset { email } => {
            let client = RemoteClient::new(&cfg.remote_url)?;
            client.reset_email(email)?;
            success(format!("Password reset email sent to {}.", email));
        }

        AccountCmd::Passwd { new_password } => {
            let token = session.token().ok_or(AppError::NotSignedIn)?;

            let client = RemoteClient::new(&cfg.remote_url)?;
            client.update_password(token, new_password)?;
            success("Password updated.");
        }

        AccountCmd::Whoami => {
            let current = session.current();

            match (&current.profile, current.logged_in) {
                (Some(profile), true) => {
                    header("👤 Account");
                    println!("Name:    {}", profile.name);
                    println!("Email:   {}", profile.email);
                    println!("Id:      {}", profile.id);
                    println!("Admin:   {}", if profile.admin { "yes" } else { "no" });
                    println!("Since:   {}", profile.created_at);
                }
                _ => info("Not signed in."),
            }
        }
    }

    Ok(())
}
