use unicode_width::UnicodeWidthStr;

use crate::table::{MISSING_MARKER, Table};

pub const REPORT_TITLE: &str = "KARATE TOURNAMENT — MISSING INFORMATION REPORT";
const COLUMN_GAP: &str = "  ";

fn legend() -> String {
    format!(
        "NOTE: '{MISSING_MARKER}' indicates missing data.  \
         Please contact the competitor's dojo to obtain correct information."
    )
}

/// Renders the table as a plain text document for a monospaced printer.
pub fn format_report(table: &Table) -> String {
    let separator = "=".repeat(REPORT_TITLE.width());
    format!(
        "{REPORT_TITLE}\n{separator}\n\n{}\n\n{}\n",
        format_grid(table),
        legend()
    )
}

/// Display width of the widest cell of each column, header included.
pub fn column_widths(table: &Table) -> [usize; 6] {
    let mut widths = table.columns().map(|c| c.width());
    for record in table.records() {
        for (width, field) in widths.iter_mut().zip(record.fields()) {
            *width = (*width).max(field.width());
        }
    }
    widths
}

/// Header plus one line per record, every column padded to its widest cell.
pub fn format_grid(table: &Table) -> String {
    let widths = column_widths(table);
    let header = format_line(&table.columns(), &widths);
    let lines = std::iter::once(header)
        .chain(table.records().iter().map(|r| format_line(&r.fields(), &widths)));
    lines.collect::<Vec<String>>().join("\n")
}

fn format_line(cells: &[&str; 6], widths: &[usize; 6]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        // Pad by display width, wide glyphs take two printer columns.
        .map(|(cell, &width)| format!("{cell}{}", " ".repeat(width.saturating_sub(cell.width()))))
        .collect::<Vec<String>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}
