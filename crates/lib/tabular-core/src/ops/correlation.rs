//! Pairwise Pearson correlation over numeric columns.
//!
//! Uses pairwise-complete observations: each pair of columns is
//! correlated over only the rows where both cells are non-missing.

use crate::render;
use crate::stats;
use crate::table::{Column, Table};

const NO_NUMERIC: &str = "No numeric columns found for correlation analysis.";

/// Correlation matrix in column-declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub names: Vec<String>,
    pub coefficients: Vec<Vec<f64>>,
}

/// Computes the pairwise-complete Pearson matrix, or `None` when the
/// table has no numeric columns.
#[must_use]
pub fn matrix(table: &Table) -> Option<CorrelationMatrix> {
    let columns: Vec<&Column> = table.numeric_columns().collect();
    if columns.is_empty() {
        return None;
    }

    let n = columns.len();
    let mut coefficients = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        coefficients[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = pairwise_pearson(columns[i], columns[j]);
            coefficients[i][j] = r;
            coefficients[j][i] = r;
        }
    }

    Some(CorrelationMatrix {
        names: columns.iter().map(|column| column.name.clone()).collect(),
        coefficients,
    })
}

fn pairwise_pearson(a: &Column, b: &Column) -> f64 {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (left, right) in a.cells.iter().zip(&b.cells) {
        if let (Some(x), Some(y)) = (left.as_number(), right.as_number()) {
            xs.push(x);
            ys.push(y);
        }
    }
    stats::pearson(&xs, &ys)
}

/// Renders the correlation report for a table.
#[must_use]
pub fn report(table: &Table) -> String {
    let Some(matrix) = matrix(table) else {
        return NO_NUMERIC.to_string();
    };

    let mut headers = vec![String::new()];
    headers.extend(matrix.names.iter().cloned());
    let rows: Vec<Vec<String>> = matrix
        .names
        .iter()
        .zip(&matrix.coefficients)
        .map(|(name, row)| {
            let mut cells = vec![name.clone()];
            cells.extend(row.iter().map(|r| render::float4(*r)));
            cells
        })
        .collect();

    format!(
        "{}\n{}",
        render::section("Correlation Matrix"),
        render::aligned_table(&headers, &rows)
    )
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::table::{CellValue, ColumnKind};

    fn column(name: &str, cells: Vec<CellValue>) -> Column {
        Column {
            name: name.to_string(),
            kind: ColumnKind::Numeric,
            cells,
        }
    }

    fn numbers(values: &[f64]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::Number(*v)).collect()
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let table = Table::from_columns(vec![
            column("x", numbers(&[1.0, 2.0, 3.0, 4.0])),
            column("y", numbers(&[2.0, 4.0, 6.0, 8.0])),
        ]);
        let matrix = matrix(&table).expect("numeric columns present");
        assert_eq!(matrix.coefficients[0][0], 1.0);
        assert_eq!(matrix.coefficients[1][1], 1.0);
        assert_eq!(matrix.coefficients[0][1], matrix.coefficients[1][0]);
        assert!((matrix.coefficients[0][1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pairwise_complete_skips_rows_with_either_side_missing() {
        let table = Table::from_columns(vec![
            column(
                "x",
                vec![
                    CellValue::Number(1.0),
                    CellValue::Missing,
                    CellValue::Number(3.0),
                    CellValue::Number(4.0),
                ],
            ),
            column(
                "y",
                vec![
                    CellValue::Number(2.0),
                    CellValue::Number(100.0),
                    CellValue::Number(6.0),
                    CellValue::Missing,
                ],
            ),
        ]);
        let matrix = matrix(&table).expect("numeric columns present");
        // Only rows 0 and 2 are complete; they are perfectly correlated.
        assert!((matrix.coefficients[0][1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_variance_column_yields_nan_off_diagonal_without_panicking() {
        let table = Table::from_columns(vec![
            column("x", numbers(&[1.0, 2.0, 3.0])),
            column("constant", numbers(&[5.0, 5.0, 5.0])),
        ]);
        let matrix = matrix(&table).expect("numeric columns present");
        assert_eq!(matrix.coefficients[1][1], 1.0);
        assert!(matrix.coefficients[0][1].is_nan());
    }

    #[test]
    fn no_numeric_columns_returns_the_sentinel_message() {
        let table = Table::from_columns(vec![Column {
            name: "label".to_string(),
            kind: ColumnKind::Text,
            cells: vec![CellValue::Text("a".to_string())],
        }]);
        assert_eq!(report(&table), NO_NUMERIC);
    }
}
