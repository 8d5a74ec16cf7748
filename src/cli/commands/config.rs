use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            let policy = cfg.policy()?;
            success(format!(
                "Configuration is valid (timezone {}, cap {} min, minimum break {} min)",
                policy.timezone, policy.overtime_cap, policy.min_break
            ));
        }
    }

    Ok(())
}
