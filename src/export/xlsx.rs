// src/export/xlsx.rs

use crate::config::policy::{ADJUST_FLAG, INSUFFICIENT_PUNCHES};
use crate::errors::{AppError, AppResult};
use crate::export::model::{export_to_row, get_headers};
use crate::export::{RecordExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: one worksheet per stage, styled header and auto column widths.
pub(crate) fn export_xlsx(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    for stage in ["pre", "adjusted"] {
        let stage_rows: Vec<&RecordExport> = rows.iter().filter(|r| r.stage == stage).collect();
        if stage_rows.is_empty() {
            continue;
        }

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(stage)?;
        write_sheet(worksheet, &stage_rows)?;
    }

    if rows.is_empty() {
        workbook.add_worksheet().write(0, 0, "No data available")?;
    }

    workbook.save(path_str(path)?)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, rows: &[&RecordExport]) -> AppResult<()> {
    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, rec) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in export_to_row(rec).iter().enumerate() {
            let bg = cell_background(value).unwrap_or(band);
            let fmt = Format::new()
                .set_background_color(bg)
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin);

            worksheet.write_with_format(row, col as u16, value.as_str(), &fmt)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    Ok(())
}

/// Red for days without enough punches, green for adjusted days.
fn cell_background(value: &str) -> Option<Color> {
    match value {
        INSUFFICIENT_PUNCHES => Some(Color::RGB(0xF4CCCC)),
        ADJUST_FLAG => Some(Color::RGB(0xC8E6C9)),
        _ => None,
    }
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("invalid path: {}", path.display())))
}
