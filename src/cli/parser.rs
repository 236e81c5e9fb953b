use crate::export::{ExportData, ExportFormat};
use clap::{Parser, Subcommand};

/// Command-line interface definition for daykeeper
/// CLI application to track expenses, agenda events, debts and
/// work-shift simulations with SQLite
#[derive(Parser)]
#[command(
    name = "daykeeper",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal organizer CLI: finances, agenda and work-shift simulations on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(
            long = "check",
            help = "Check database integrity and repair a broken session snapshot"
        )]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage agenda events
    Event {
        #[command(subcommand)]
        action: EventCmd,
    },

    /// Manage agenda markers (colored labels events point at)
    Marker {
        #[command(subcommand)]
        action: MarkerCmd,
    },

    /// Manage expenses (mutations also refresh the financial summary)
    Expense {
        #[command(subcommand)]
        action: ExpenseCmd,
    },

    /// Manage debts
    Debt {
        #[command(subcommand)]
        action: DebtCmd,
    },

    /// Manage debt categories
    Category {
        #[command(subcommand)]
        action: CategoryCmd,
    },

    /// Manage work-shift simulations
    Sim {
        #[command(subcommand)]
        action: SimCmd,
    },

    /// Show or re-base the financial summary
    Summary {
        #[command(subcommand)]
        action: Option<SummaryCmd>,
    },

    /// Remote account: login, signup, password management
    Account {
        #[command(subcommand)]
        action: AccountCmd,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export one record store to CSV or JSON
    Export {
        #[arg(long = "what", value_enum, default_value = "expenses")]
        data: ExportData,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EventCmd {
    /// Add an event; with --repeat and a date, six future occurrences are
    /// created along with it
    Add {
        title: String,

        #[arg(long, help = "Event date (YYYY-MM-DD or DD/MM/YYYY)")]
        date: Option<String>,

        #[arg(long, help = "Event time (HH:MM)")]
        time: Option<String>,

        #[arg(long = "desc", help = "Free-form description")]
        description: Option<String>,

        #[arg(long = "repeat", help = "Recurrence: daily, weekly or monthly")]
        repeat: Option<String>,

        #[arg(long = "marker", help = "Marker id to attach")]
        marker: Option<i64>,
    },

    /// List events
    List {
        #[arg(long, help = "Only events not yet completed")]
        pending: bool,

        #[arg(long, help = "Only events completed in the current week")]
        week: bool,

        #[arg(long, help = "Only events on one day (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Edit an existing event
    Edit {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        time: Option<String>,

        #[arg(long = "desc")]
        description: Option<String>,

        #[arg(long = "marker", conflicts_with = "no_marker")]
        marker: Option<i64>,

        #[arg(long = "no-marker", help = "Detach the current marker")]
        no_marker: bool,
    },

    /// Toggle the completed flag of an event
    Done { id: i64 },

    /// Delete an event by id
    Rm { id: i64 },
}

#[derive(Subcommand)]
pub enum MarkerCmd {
    /// Add a marker
    Add {
        name: String,

        #[arg(
            long,
            default_value = "blue",
            help = "Color: red, green, blue, yellow, purple, orange, teal, pink"
        )]
        color: String,
    },

    /// List markers
    List,

    /// Delete a marker; events that used it are kept and detached
    Rm { id: i64 },
}

#[derive(Subcommand)]
pub enum ExpenseCmd {
    /// Add an expense
    Add {
        name: String,

        value: f64,

        #[arg(long, help = "Expense date, defaults to today")]
        date: Option<String>,

        #[arg(long, help = "Expense time (HH:MM)")]
        time: Option<String>,

        #[arg(long = "pay", help = "Payment method: debit (d) or credit (c)")]
        payment: Option<String>,

        #[arg(long, help = "Mark as a recurring expense (informational)")]
        recurring: bool,
    },

    /// List expenses
    List {
        #[arg(long, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,
    },

    /// Edit an existing expense
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        value: Option<f64>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        time: Option<String>,

        #[arg(long = "pay")]
        payment: Option<String>,

        #[arg(long)]
        recurring: Option<bool>,
    },

    /// Delete an expense by id
    Rm { id: i64 },
}

#[derive(Subcommand)]
pub enum DebtCmd {
    /// Add a debt (requires an existing category)
    Add {
        name: String,

        value: f64,

        #[arg(long, help = "Category id the debt belongs to")]
        category: i64,

        #[arg(long, help = "Due date (YYYY-MM-DD)")]
        due: String,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List debts
    List {
        #[arg(long, help = "Only debts not yet paid")]
        unpaid: bool,
    },

    /// Edit an existing debt
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        value: Option<f64>,

        #[arg(long)]
        category: Option<i64>,

        #[arg(long)]
        due: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Toggle the paid flag of a debt
    Pay { id: i64 },

    /// Delete a debt by id
    Rm { id: i64 },
}

#[derive(Subcommand)]
pub enum CategoryCmd {
    /// Add a category
    Add {
        name: String,

        #[arg(
            long,
            default_value = "teal",
            help = "Color: red, green, blue, yellow, purple, orange, teal, pink"
        )]
        color: String,
    },

    /// List categories with per-category debt rollups
    List,

    /// Delete a category (refused while debts still reference it)
    Rm { id: i64 },
}

#[derive(Subcommand)]
pub enum SimCmd {
    /// Add a work-shift simulation; economics are computed and frozen now
    Add {
        #[arg(help = "Shift date (YYYY-MM-DD)")]
        date: String,

        #[arg(long, help = "Hours worked")]
        hours: f64,

        #[arg(long, help = "Distance traveled, km")]
        distance: f64,

        #[arg(long = "fuel-price", help = "Fuel price per liter")]
        fuel_price: f64,

        #[arg(long, help = "Gross earnings")]
        gross: f64,

        #[arg(long, help = "Fuel consumption, km per liter")]
        consumption: f64,
    },

    /// List simulations with their frozen economics
    List,

    /// Delete a simulation by id
    Rm {
        id: i64,

        #[arg(long, help = "Also delete the matching remote document")]
        remote: bool,
    },

    /// Aggregate statistics and earnings trend
    Stats,

    /// Upload all local simulations to the remote collection
    Push,

    /// Download simulations from the remote collection
    Pull,
}

#[derive(Subcommand)]
pub enum SummaryCmd {
    /// Print the current financial summary
    Show,

    /// Set the base values the summary is derived from
    SetBase {
        #[arg(long, help = "Account balance before recorded expenses")]
        balance: f64,

        #[arg(long = "credit-limit", help = "Total credit available")]
        credit_limit: f64,
    },
}

#[derive(Subcommand)]
pub enum AccountCmd {
    /// Sign in to the remote account service
    Login { email: String, password: String },

    /// Create a remote account and sign in
    Signup {
        email: String,
        name: String,
        password: String,
    },

    /// Sign out and clear the local session
    Logout,

    /// Send a password reset email
    Reset { email: String },

    /// Change the password of the signed-in account
    Passwd { new_password: String },

    /// Show the locally stored profile
    Whoami,
}
