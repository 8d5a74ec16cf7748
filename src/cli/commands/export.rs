use crate::cli::commands::load_reconciliations;
use crate::cli::parser::Commands;
use crate::config::{Config, Policy};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::absolute_output;

pub fn handle(cmd: &Commands, cfg: &Config, policy: &Policy) -> AppResult<()> {
    if let Commands::Export {
        selection,
        format,
        file,
        force,
    } = cmd
    {
        let path = absolute_output(file)?;
        let reconciliations = load_reconciliations(selection, cfg, policy)?;
        ExportLogic::export(&reconciliations, format, &path, selection.stage, *force)?;
    }
    Ok(())
}
