//! Table rendering utilities for CLI outputs.

use crate::utils::colors::RESET;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// A cell with an optional ANSI color applied on render.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored<S: Into<String>>(text: S, color: Option<&'static str>) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

impl Table {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.text.width());
            }
        }
        widths
    }

    pub fn render(&self, use_color: bool) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (h, w) in self.headers.iter().zip(&widths) {
            out.push_str(&pad(h, *w));
            out.push_str("  ");
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push_str("  ");
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (cell, w) in row.iter().zip(&widths) {
                let padded = pad(&cell.text, *w);
                match cell.color {
                    Some(c) if use_color => out.push_str(&format!("{c}{padded}{RESET}")),
                    _ => out.push_str(&padded),
                }
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}

/// Left-align by display width, not byte length.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}
