//! Summary statistics: shape, column kinds, and per-numeric-column
//! descriptive statistics.

use std::fmt::Write;

use crate::render;
use crate::stats;
use crate::table::{Column, Table};

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

/// Computes descriptive statistics over a column's non-missing values.
///
/// A column with zero non-missing values yields `count = 0` and `NaN`
/// everywhere else.
#[must_use]
pub fn numeric_summary(column: &Column) -> NumericSummary {
    let values = stats::sorted(&column.numbers());
    let (min, max) = match (values.first(), values.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => (f64::NAN, f64::NAN),
    };
    NumericSummary {
        count: values.len(),
        mean: stats::mean(&values),
        std: stats::sample_std(&values),
        min,
        p25: stats::percentile(&values, 25.0),
        p50: stats::percentile(&values, 50.0),
        p75: stats::percentile(&values, 75.0),
        max,
    }
}

/// Renders the summary report for a table.
#[must_use]
pub fn report(table: &Table) -> String {
    let mut out = render::section("CSV Summary Statistics");
    let _ = write!(
        out,
        "\nRows: {}, Columns: {}\n\nColumn Types:\n",
        table.row_count(),
        table.column_count()
    );
    for column in table.columns() {
        let _ = writeln!(out, "- {}: {}", column.name, column.kind);
    }

    out.push_str("\nNumeric Statistics:");
    let mut any_numeric = false;
    for column in table.numeric_columns() {
        any_numeric = true;
        let summary = numeric_summary(column);
        let _ = write!(
            out,
            "\n{}:\n  count: {}\n  mean: {}\n  std: {}\n  min: {}\n  25%: {}\n  50%: {}\n  75%: {}\n  max: {}",
            column.name,
            summary.count,
            render::float4(summary.mean),
            render::float4(summary.std),
            render::float4(summary.min),
            render::float4(summary.p25),
            render::float4(summary.p50),
            render::float4(summary.p75),
            render::float4(summary.max),
        );
    }
    if !any_numeric {
        out.push_str("\nNo numeric columns found.");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CellValue, ColumnKind};

    fn numeric_column(name: &str, cells: Vec<CellValue>) -> Column {
        Column {
            name: name.to_string(),
            kind: ColumnKind::Numeric,
            cells,
        }
    }

    #[test]
    fn summary_skips_missing_values_in_statistics() {
        let column = numeric_column(
            "score",
            vec![
                CellValue::Number(1.0),
                CellValue::Missing,
                CellValue::Number(2.0),
                CellValue::Number(3.0),
                CellValue::Number(4.0),
                CellValue::Number(5.0),
            ],
        );
        let summary = numeric_summary(&column);
        assert_eq!(summary.count, 5);
        assert!((summary.mean - 3.0).abs() < 1e-9);
        assert!((summary.p25 - 2.0).abs() < 1e-9);
        assert!((summary.p75 - 4.0).abs() < 1e-9);
    }

    #[test]
    fn all_missing_column_reports_nan_not_panic() {
        let column = numeric_column("empty", vec![CellValue::Missing, CellValue::Missing]);
        let summary = numeric_summary(&column);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.min.is_nan());
    }

    #[test]
    fn report_lists_every_column_kind_in_declaration_order() {
        let table = Table::from_columns(vec![
            numeric_column("a", vec![CellValue::Number(1.0), CellValue::Number(2.0)]),
            Column {
                name: "label".to_string(),
                kind: ColumnKind::Text,
                cells: vec![
                    CellValue::Text("x".to_string()),
                    CellValue::Text("y".to_string()),
                ],
            },
        ]);
        let rendered = report(&table);
        assert!(rendered.starts_with("CSV Summary Statistics"));
        assert!(rendered.contains("Rows: 2, Columns: 2"));
        let a_pos = rendered.find("- a: numeric").expect("numeric line");
        let label_pos = rendered.find("- label: text").expect("text line");
        assert!(a_pos < label_pos);
        assert!(rendered.contains("mean: 1.5000"));
    }
}
