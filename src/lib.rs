//! punchsheet library root.
//! Exposes the reconciliation core, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let use_color = !cli.no_color;

    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Employees { .. } => cli::commands::employees::handle(&cli.command),
        Commands::Report { .. } => {
            let policy = cfg.policy()?;
            cli::commands::report::handle(&cli.command, cfg, &policy, use_color)
        }
        Commands::Export { .. } => {
            let policy = cfg.policy()?;
            cli::commands::export::handle(&cli.command, cfg, &policy)
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "punchsheet=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref().map(expand_tilde);
    let cfg = Config::load(config_path.as_deref())?;

    dispatch(&cli, &cfg)
}
