pub mod config;
pub mod employees;
pub mod export;
pub mod init;
pub mod report;

use crate::cli::parser::Selection;
use crate::config::{Config, Policy};
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::reconciliation::Reconciliation;
use crate::source::{JsonFileSource, PunchSource, fetch_punches_in_chunks};
use crate::ui::messages::warning;
use crate::utils::date::resolve_range;
use crate::utils::path::expand_tilde;

/// Fetch the selected period from the source and run the pipeline.
pub(crate) fn load_reconciliations(
    selection: &Selection,
    cfg: &Config,
    policy: &Policy,
) -> AppResult<Vec<Reconciliation>> {
    let (from, to) = resolve_range(selection.from.as_deref(), selection.to.as_deref())?;
    let source = JsonFileSource::new(expand_tilde(&selection.source));

    let punches =
        fetch_punches_in_chunks(&source, selection.employee, from, to, cfg.fetch_chunk_days);
    let holidays = source.holidays(from, to);

    tracing::info!(%from, %to, punches = punches.len(), holidays = holidays.len(), "period loaded");

    if punches.is_empty() {
        warning(format!("No punches found between {from} and {to}."));
        return Ok(Vec::new());
    }

    Core::reconcile(&punches, &holidays, policy)
}
