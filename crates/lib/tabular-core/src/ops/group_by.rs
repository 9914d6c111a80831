//! Group-by aggregation: partition rows by the group column's raw key
//! and aggregate each requested column with each requested function.
//!
//! Missing group keys form their own partition rather than being
//! dropped; callers relying on this are covered by an explicit test.

use std::collections::HashMap;
use std::fmt::Write;

use crate::error::AnalyticsError;
use crate::render;
use crate::stats;
use crate::table::{CellValue, Table};

const NO_VALID_FUNCTIONS: &str = "No valid aggregation functions specified.";

/// The closed set of aggregation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggFn {
    Mean,
    Sum,
    Count,
    Min,
    Max,
    Median,
}

impl AggFn {
    /// Parses a function name, case-insensitively. Unknown names return
    /// `None` and are silently dropped by validation.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mean" => Some(Self::Mean),
            "sum" => Some(Self::Sum),
            "count" => Some(Self::Count),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "median" => Some(Self::Median),
            _ => None,
        }
    }

    /// Short label used in rendered column headers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Sum => "sum",
            Self::Count => "count",
            Self::Min => "min",
            Self::Max => "max",
            Self::Median => "median",
        }
    }
}

/// Keeps the valid functions from a requested name list, in request
/// order.
#[must_use]
pub fn validate_functions(names: &[String]) -> Vec<AggFn> {
    names.iter().filter_map(|name| AggFn::parse(name)).collect()
}

/// Group key with hashable equality semantics over cells.
///
/// Numbers key on their bit pattern; Missing is its own key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum GroupKey {
    Number(u64),
    Bool(bool),
    Text(String),
    Missing,
}

impl GroupKey {
    fn of(cell: &CellValue) -> Self {
        match cell {
            CellValue::Number(value) => Self::Number(value.to_bits()),
            CellValue::Bool(value) => Self::Bool(*value),
            CellValue::Text(value) => Self::Text(value.clone()),
            CellValue::Missing => Self::Missing,
        }
    }

    fn display(&self) -> String {
        match self {
            Self::Number(bits) => format!("{}", f64::from_bits(*bits)),
            Self::Bool(value) => format!("{value}"),
            Self::Text(value) => value.clone(),
            Self::Missing => "NaN".to_string(),
        }
    }

    /// Numbers sort numerically, then booleans, then text lexically,
    /// with the missing partition last.
    fn sort_rank(&self) -> (u8, f64, &str, bool) {
        match self {
            Self::Number(bits) => (0, f64::from_bits(*bits), "", false),
            Self::Bool(value) => (1, 0.0, "", *value),
            Self::Text(value) => (2, 0.0, value.as_str(), false),
            Self::Missing => (3, 0.0, "", false),
        }
    }
}

/// Runs the group-by aggregation and renders the result table.
///
/// # Errors
/// Returns [`AnalyticsError::EmptyResult`] when no requested function is
/// valid, and [`AnalyticsError::ColumnNotFound`] when the group or an
/// aggregate column is absent.
pub fn report(
    table: &Table,
    group_column: &str,
    agg_columns: &[String],
    agg_functions: &[String],
) -> Result<String, AnalyticsError> {
    let functions = validate_functions(agg_functions);
    if functions.is_empty() || agg_columns.is_empty() {
        return Err(AnalyticsError::EmptyResult {
            message: NO_VALID_FUNCTIONS.to_string(),
        });
    }

    let group = table.require_column(group_column)?;
    for name in agg_columns {
        table.require_column(name)?;
    }

    // Partition rows by raw key equality, Missing included.
    let mut partitions: Vec<(GroupKey, Vec<usize>)> = Vec::new();
    let mut index_of: HashMap<GroupKey, usize> = HashMap::new();
    for (row, cell) in group.cells.iter().enumerate() {
        let key = GroupKey::of(cell);
        if let Some(position) = index_of.get(&key) {
            partitions[*position].1.push(row);
        } else {
            index_of.insert(key.clone(), partitions.len());
            partitions.push((key, vec![row]));
        }
    }
    partitions.sort_by(|(a, _), (b, _)| {
        let (rank_a, num_a, text_a, bool_a) = a.sort_rank();
        let (rank_b, num_b, text_b, bool_b) = b.sort_rank();
        rank_a
            .cmp(&rank_b)
            .then(num_a.total_cmp(&num_b))
            .then(text_a.cmp(text_b))
            .then(bool_a.cmp(&bool_b))
    });

    let mut headers = vec![group_column.to_string()];
    for name in agg_columns {
        for function in &functions {
            headers.push(format!("{name}_{}", function.label()));
        }
    }

    let mut rows = Vec::with_capacity(partitions.len());
    for (key, members) in &partitions {
        let mut cells = vec![key.display()];
        for name in agg_columns {
            let column = table.require_column(name)?;
            for function in &functions {
                cells.push(aggregate(column.cells.as_slice(), members, *function));
            }
        }
        rows.push(cells);
    }

    let mut out = format!("Group by analysis for {group_column}:\n\n");
    let _ = write!(out, "{}", render::aligned_table(&headers, &rows));
    Ok(out)
}

/// Aggregates one column over the partition's rows. Missing cells are
/// ignored; `count` counts the non-missing cells.
fn aggregate(cells: &[CellValue], members: &[usize], function: AggFn) -> String {
    if function == AggFn::Count {
        return members
            .iter()
            .filter(|row| !cells[**row].is_missing())
            .count()
            .to_string();
    }

    let values: Vec<f64> = members
        .iter()
        .filter_map(|row| cells[*row].as_number())
        .collect();
    let sorted = stats::sorted(&values);
    let result = match function {
        AggFn::Mean => stats::mean(&values),
        AggFn::Sum => values.iter().sum(),
        AggFn::Min => sorted.first().copied().unwrap_or(f64::NAN),
        AggFn::Max => sorted.last().copied().unwrap_or(f64::NAN),
        AggFn::Median => stats::median(&sorted),
        AggFn::Count => f64::NAN,
    };
    render::float4(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, ColumnKind};

    fn sales_table() -> Table {
        Table::from_columns(vec![
            Column {
                name: "city".to_string(),
                kind: ColumnKind::Text,
                cells: vec![
                    CellValue::Text("A".to_string()),
                    CellValue::Text("A".to_string()),
                    CellValue::Text("B".to_string()),
                ],
            },
            Column {
                name: "sales".to_string(),
                kind: ColumnKind::Numeric,
                cells: vec![
                    CellValue::Number(10.0),
                    CellValue::Number(20.0),
                    CellValue::Number(5.0),
                ],
            },
        ])
    }

    #[test]
    fn sum_by_city_produces_the_expected_totals() {
        let table = sales_table();
        let rendered = report(
            &table,
            "city",
            &["sales".to_string()],
            &["sum".to_string()],
        )
        .expect("group-by");
        assert!(rendered.starts_with("Group by analysis for city:"));
        let lines: Vec<&str> = rendered.lines().collect();
        let a_line = lines.iter().find(|l| l.starts_with('A')).expect("A row");
        assert!(a_line.ends_with("30.0000"));
        let b_line = lines.iter().find(|l| l.starts_with('B')).expect("B row");
        assert!(b_line.ends_with("5.0000"));
    }

    #[test]
    fn invalid_function_names_are_silently_dropped() {
        let table = sales_table();
        let rendered = report(
            &table,
            "city",
            &["sales".to_string()],
            &["variance".to_string(), "mean".to_string()],
        )
        .expect("group-by");
        assert!(rendered.contains("sales_mean"));
        assert!(!rendered.contains("variance"));
    }

    #[test]
    fn all_invalid_functions_is_an_empty_result() {
        let table = sales_table();
        let err = report(
            &table,
            "city",
            &["sales".to_string()],
            &["variance".to_string()],
        )
        .expect_err("no valid functions");
        assert_eq!(err.to_string(), NO_VALID_FUNCTIONS);
    }

    #[test]
    fn missing_group_keys_form_their_own_partition() {
        let table = Table::from_columns(vec![
            Column {
                name: "region".to_string(),
                kind: ColumnKind::Text,
                cells: vec![
                    CellValue::Text("east".to_string()),
                    CellValue::Missing,
                    CellValue::Missing,
                ],
            },
            Column {
                name: "n".to_string(),
                kind: ColumnKind::Numeric,
                cells: vec![
                    CellValue::Number(1.0),
                    CellValue::Number(2.0),
                    CellValue::Number(4.0),
                ],
            },
        ]);
        let rendered = report(
            &table,
            "region",
            &["n".to_string()],
            &["sum".to_string()],
        )
        .expect("group-by");
        // The missing partition renders as NaN, last, and aggregates
        // the two rows with a missing region.
        let lines: Vec<&str> = rendered.lines().collect();
        let last = lines.last().expect("rows rendered");
        assert!(last.starts_with("NaN"));
        assert!(last.ends_with("6.0000"));
    }

    #[test]
    fn count_counts_non_missing_cells_per_partition() {
        let table = Table::from_columns(vec![
            Column {
                name: "g".to_string(),
                kind: ColumnKind::Text,
                cells: vec![
                    CellValue::Text("x".to_string()),
                    CellValue::Text("x".to_string()),
                    CellValue::Text("x".to_string()),
                ],
            },
            Column {
                name: "v".to_string(),
                kind: ColumnKind::Numeric,
                cells: vec![
                    CellValue::Number(1.0),
                    CellValue::Missing,
                    CellValue::Number(3.0),
                ],
            },
        ]);
        let rendered = report(&table, "g", &["v".to_string()], &["count".to_string()])
            .expect("group-by");
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines.last().expect("row").ends_with('2'));
    }

    #[test]
    fn unknown_aggregate_column_is_a_typed_error() {
        let table = sales_table();
        let err = report(
            &table,
            "city",
            &["revenue".to_string()],
            &["mean".to_string()],
        )
        .expect_err("missing column");
        assert!(matches!(err, AnalyticsError::ColumnNotFound { .. }));
    }

    #[test]
    fn numeric_group_keys_sort_numerically() {
        let table = Table::from_columns(vec![
            Column {
                name: "year".to_string(),
                kind: ColumnKind::Numeric,
                cells: vec![
                    CellValue::Number(2021.0),
                    CellValue::Number(2019.0),
                    CellValue::Number(2021.0),
                ],
            },
            Column {
                name: "v".to_string(),
                kind: ColumnKind::Numeric,
                cells: vec![
                    CellValue::Number(1.0),
                    CellValue::Number(2.0),
                    CellValue::Number(3.0),
                ],
            },
        ]);
        let rendered = report(&table, "year", &["v".to_string()], &["sum".to_string()])
            .expect("group-by");
        let lines: Vec<&str> = rendered.lines().collect();
        let year_rows: Vec<&&str> = lines.iter().filter(|l| l.starts_with('2')).collect();
        assert!(year_rows[0].starts_with("2019"));
        assert!(year_rows[1].starts_with("2021"));
    }
}
