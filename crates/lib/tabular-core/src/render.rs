//! Shared text rendering for analysis reports.
//!
//! Every operation renders through these helpers so titles, numeric
//! precision, and table alignment stay consistent across reports.

use std::fmt::Write;

const RULE_WIDTH: usize = 50;

/// Section title followed by a rule line.
#[must_use]
pub fn section(title: &str) -> String {
    format!("{title}\n{}", "=".repeat(RULE_WIDTH))
}

/// Four-decimal rendering; `NaN` stays `NaN`.
#[must_use]
pub fn float4(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.4}")
    }
}

/// Two-decimal percentage rendering.
#[must_use]
pub fn percent2(value: f64) -> String {
    format!("{value:.2}%")
}

/// Raw number rendering for ranges (no forced precision).
#[must_use]
pub fn number(value: f64) -> String {
    format!("{value}")
}

/// Renders an aligned table: first column left-aligned, the rest
/// right-aligned, two spaces between columns.
///
/// `rows` must all have the same arity as `headers`.
#[must_use]
pub fn aligned_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.len());
        }
    }

    let mut out = String::new();
    render_row(&mut out, headers, &widths);
    for row in rows {
        out.push('\n');
        render_row(&mut out, row, &widths);
    }
    out
}

fn render_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            out.push_str("  ");
        }
        let width = widths[index];
        if index == 0 {
            let _ = write!(out, "{cell:<width$}");
        } else {
            let _ = write!(out, "{cell:>width$}");
        }
    }
    // Trailing spaces from left-padding the last cell never occur since
    // the last cell is right-aligned; strip any from a one-column row.
    while out.ends_with(' ') {
        out.pop();
    }
}
