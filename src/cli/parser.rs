use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for dronelog
/// CLI application to log drone flights with SQLite
#[derive(Parser, Debug)]
#[command(
    name = "dronelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple drone flight log: record flights and report flight hours per pilot and drone using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (user configuration file is neither read nor written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "fleet", help = "List the configured pilots and drones")]
        fleet: bool,

        #[arg(long = "check", help = "Validate the configured pilot and drone lists")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
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

        #[arg(long = "check", help = "Check database integrity")]
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

    /// Log a flight
    Add {
        /// Date of the flight (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Take-off time (HH:MM, default from configuration)
        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: Option<String>,

        /// Landing time (HH:MM, default from configuration)
        #[arg(long = "end", help = "End time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "project", default_value = "", help = "Project number")]
        project: String,

        #[arg(long = "pilot", help = "Pilot name, as listed by `config --fleet`")]
        pilot: String,

        #[arg(long = "drone", help = "Drone, as listed by `config --fleet`")]
        drone: String,
    },

    /// Delete a flight by ID
    Del {
        #[arg(long = "id", help = "Flight id, as shown by `list`")]
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List logged flights
    List {
        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Only flights of this pilot")]
        pilot: Option<String>,

        #[arg(long, help = "Only flights of this drone")]
        drone: Option<String>,
    },

    /// Show total flight hours per pilot and per drone
    Stats {
        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range"
        )]
        range: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup without asking")]
        force: bool,
    },

    /// Export logged flights
    Export {
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

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
