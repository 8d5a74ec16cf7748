//! Terminal rendering of the pre-adjustment and adjusted tables.

use crate::config::policy::INSUFFICIENT_PUNCHES;
use crate::models::daily_record::DailyRecord;
use crate::models::reconciliation::Reconciliation;
use crate::utils::colors::{GREEN_BG, RED_BG, color_for_balance};
use crate::utils::table::{Cell, Table};
use clap::ValueEnum;

pub const HEADERS: [&str; 12] = [
    "ID",
    "Name",
    "Date",
    "Weekday",
    "Punches",
    "Adjusted?",
    "Worked",
    "Expected",
    "Balance",
    "Break",
    "Excess OT",
    "Available OT",
];

pub const STATUS_HEADER: &str = "Status";

/// Which table(s) to show or export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Stage {
    Pre,
    Adjusted,
    Both,
}

impl Stage {
    pub fn includes_pre(&self) -> bool {
        matches!(self, Stage::Pre | Stage::Both)
    }

    pub fn includes_adjusted(&self) -> bool {
        matches!(self, Stage::Adjusted | Stage::Both)
    }
}

/// The twelve shared columns of a record, as text.
pub fn record_columns(r: &DailyRecord) -> Vec<String> {
    vec![
        r.employee_id.to_string(),
        r.employee_name.clone(),
        r.date_text.clone(),
        r.weekday.clone(),
        r.punches_text(),
        r.is_adjustment_text().to_string(),
        r.worked_text(),
        r.expected_text(),
        r.balance_text(),
        r.break_text(),
        r.excess_overtime_text(),
        r.available_overtime_text(),
    ]
}

fn record_cells(r: &DailyRecord) -> Vec<Cell> {
    let insufficient = |text: &str| (text == INSUFFICIENT_PUNCHES).then_some(RED_BG);

    record_columns(r)
        .into_iter()
        .enumerate()
        .map(|(i, text)| match i {
            6 => {
                let c = insufficient(&text);
                Cell::colored(text, c)
            }
            8 => {
                let c = insufficient(&text).or_else(|| r.balance.minutes().and_then(color_for_balance));
                Cell::colored(text, c)
            }
            _ => Cell::plain(text),
        })
        .collect()
}

pub fn pre_adjustment_table(records: &[DailyRecord]) -> Table {
    let mut table = Table::new(&HEADERS);
    for r in records {
        table.add_row(record_cells(r));
    }
    table
}

pub fn adjusted_table(records: &[DailyRecord]) -> Table {
    let mut headers: Vec<&str> = HEADERS.to_vec();
    headers.push(STATUS_HEADER);

    let mut table = Table::new(&headers);
    for r in records {
        let mut cells = record_cells(r);
        cells.push(Cell::colored(r.adjusted_text(), r.adjusted.then_some(GREEN_BG)));
        table.add_row(cells);
    }
    table
}

/// Render one employee's reconciliation for the terminal.
pub fn render(rec: &Reconciliation, stage: Stage, use_color: bool) -> String {
    let mut out = String::new();

    if stage.includes_pre() {
        out.push_str(&format!(
            "\n=== Pre-adjustment: {} ({}) ===\n",
            rec.employee_name, rec.employee_id
        ));
        out.push_str(&pre_adjustment_table(&rec.pre_adjustment).render(use_color));
    }

    if stage.includes_adjusted() {
        out.push_str(&format!(
            "\n=== Adjusted punches: {} ({}), {} day(s) to adjust ===\n",
            rec.employee_name,
            rec.employee_id,
            rec.adjusted_count()
        ));
        out.push_str(&adjusted_table(&rec.adjusted).render(use_color));
    }

    out
}
