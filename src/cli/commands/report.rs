use crate::cli::commands::load_reconciliations;
use crate::cli::parser::Commands;
use crate::config::{Config, Policy};
use crate::core::report::render;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config, policy: &Policy, use_color: bool) -> AppResult<()> {
    if let Commands::Report { selection } = cmd {
        for rec in load_reconciliations(selection, cfg, policy)? {
            print!("{}", render(&rec, selection.stage, use_color));
        }
    }
    Ok(())
}
