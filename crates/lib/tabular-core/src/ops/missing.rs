//! Missing-value analysis: per-column counts and dataset-wide totals.

use std::fmt::Write;

use crate::render;
use crate::table::Table;

/// Per-column missing counts, only for columns with at least one missing
/// cell.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingReport {
    pub per_column: Vec<(String, usize)>,
    pub total_missing: usize,
    pub total_cells: usize,
}

/// Counts missing cells per column and across the whole table.
#[must_use]
pub fn analyze(table: &Table) -> MissingReport {
    let per_column: Vec<(String, usize)> = table
        .columns()
        .iter()
        .filter_map(|column| {
            let count = column.missing_count();
            (count > 0).then(|| (column.name.clone(), count))
        })
        .collect();
    let total_missing = per_column.iter().map(|(_, count)| count).sum();
    MissingReport {
        per_column,
        total_missing,
        total_cells: table.row_count() * table.column_count(),
    }
}

/// Renders the missing-value report for a table.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn report(table: &Table) -> String {
    let analysis = analyze(table);
    let mut out = render::section("Missing Values Analysis");
    out.push('\n');

    if analysis.per_column.is_empty() {
        out.push_str("No missing values found in the dataset.");
        return out;
    }

    let rows = table.row_count() as f64;
    for (name, count) in &analysis.per_column {
        let share = *count as f64 / rows * 100.0;
        let _ = writeln!(
            out,
            "- {name}: {count} missing values ({})",
            render::percent2(share)
        );
    }
    let total_share = analysis.total_missing as f64 / analysis.total_cells as f64 * 100.0;
    let _ = write!(
        out,
        "\nTotal missing values: {} ({} of all data)",
        analysis.total_missing,
        render::percent2(total_share)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CellValue, Column, ColumnKind};

    fn column(name: &str, cells: Vec<CellValue>) -> Column {
        Column {
            name: name.to_string(),
            kind: ColumnKind::Numeric,
            cells,
        }
    }

    #[test]
    fn clean_table_reports_no_missing_values() {
        let table = Table::from_columns(vec![column(
            "a",
            vec![CellValue::Number(1.0), CellValue::Number(2.0)],
        )]);
        let rendered = report(&table);
        assert!(rendered.contains("No missing values found in the dataset."));
        assert!(!rendered.contains("Total missing values"));
    }

    #[test]
    fn only_columns_with_missing_cells_are_listed() {
        let table = Table::from_columns(vec![
            column("clean", vec![CellValue::Number(1.0); 4]),
            column(
                "holey",
                vec![
                    CellValue::Number(1.0),
                    CellValue::Missing,
                    CellValue::Missing,
                    CellValue::Number(4.0),
                ],
            ),
        ]);
        let rendered = report(&table);
        assert!(!rendered.contains("- clean:"));
        assert!(rendered.contains("- holey: 2 missing values (50.00%)"));
        assert!(rendered.contains("Total missing values: 2 (25.00% of all data)"));
    }

    #[test]
    fn per_column_counts_sum_to_the_reported_total() {
        let table = Table::from_columns(vec![
            column(
                "a",
                vec![CellValue::Missing, CellValue::Number(1.0), CellValue::Missing],
            ),
            column(
                "b",
                vec![CellValue::Number(1.0), CellValue::Missing, CellValue::Number(2.0)],
            ),
        ]);
        let analysis = analyze(&table);
        let summed: usize = analysis.per_column.iter().map(|(_, count)| count).sum();
        assert_eq!(summed, analysis.total_missing);
        assert_eq!(analysis.total_missing, 3);
        assert_eq!(analysis.total_cells, 6);
    }
}
