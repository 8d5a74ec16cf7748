// src/export/logic.rs

use crate::core::report::Stage;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::models::reconciliation::Reconciliation;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the selected tables of every reconciliation.
    ///
    /// - `format`: csv | json | xlsx
    /// - `path`: absolute output path
    /// - `stage`: pre | adjusted | both
    pub fn export(
        reconciliations: &[Reconciliation],
        format: &ExportFormat,
        path: &Path,
        stage: Stage,
        force: bool,
    ) -> AppResult<()> {
        if path.exists() && !force {
            let stdin = io::stdin();
            confirm_overwrite(path, &mut stdin.lock())?;
        }

        let rows = Self::rows(reconciliations, stage);

        if rows.is_empty() {
            warning("No records found for selected range.");
            return Ok(());
        }

        tracing::debug!(format = format.as_str(), rows = rows.len(), "exporting");

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }

    /// Flatten reconciliations into export rows: pre-adjustment rows first,
    /// then adjusted rows, each grouped by employee.
    pub fn rows(reconciliations: &[Reconciliation], stage: Stage) -> Vec<RecordExport> {
        let mut rows = Vec::new();

        if stage.includes_pre() {
            for rec in reconciliations {
                rows.extend(rec.pre_adjustment.iter().map(|r| RecordExport::from_record("pre", r)));
            }
        }

        if stage.includes_adjusted() {
            for rec in reconciliations {
                rows.extend(rec.adjusted.iter().map(|r| RecordExport::from_record("adjusted", r)));
            }
        }

        rows
    }
}

/// Ask before replacing an existing export. Anything but `y`/`yes` cancels.
fn confirm_overwrite<R: BufRead>(path: &Path, input: &mut R) -> AppResult<()> {
    warning(format!("{} already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            tracing::debug!(path = %path.display(), "overwriting existing export");
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "{} exists and was not overwritten",
            path.display()
        ))),
    }
}
