use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = cli
            .config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file);

        if path.exists() && !force {
            warning(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(());
        }

        let written = Config::init(Some(path.as_path()))?;
        success(format!("Config file: {}", written.display()));
    }
    Ok(())
}
