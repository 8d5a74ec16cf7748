use crate::core::report::Stage;
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for punchsheet
#[derive(Parser)]
#[command(
    name = "punchsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile clock-in/clock-out punches: worked time, balance, lunch break and overtime",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Disable ANSI colors in tables
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Verbose logging (debug level) on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read punches from and which slice of them to process.
#[derive(Args, Debug, Clone)]
pub struct Selection {
    /// Directory with punches.json, holidays.json and optionally employees.json
    #[arg(long, value_name = "DIR")]
    pub source: String,

    /// First day of the period (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last day of the period (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Only this employee id
    #[arg(long, short = 'e')]
    pub employee: Option<i64>,

    /// Which table(s) to produce
    #[arg(long, value_enum, default_value = "both")]
    pub stage: Stage,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration")]
        check: bool,
    },

    /// List the employees known to a source
    Employees {
        #[arg(long, value_name = "DIR")]
        source: String,
    },

    /// Print the pre-adjustment and adjusted tables
    Report {
        #[command(flatten)]
        selection: Selection,
    },

    /// Export the tables to a file
    Export {
        #[command(flatten)]
        selection: Selection,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
