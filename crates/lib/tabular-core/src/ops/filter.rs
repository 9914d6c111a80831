//! Row filtering: predicate evaluation and materialization of the
//! matching rows into a new table.
//!
//! The comparison value is typed at parse time from the target column's
//! kind and the condition: numeric comparisons require a parseable
//! number, string predicates coerce cells to text. Rows where the
//! predicate cannot be evaluated (missing cell, non-numeric cell under a
//! numeric comparison) are excluded, never errored.

use std::path::Path;

use crate::error::AnalyticsError;
use crate::table::{CellValue, ColumnKind, Table};

/// The closed set of filter condition tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    Contains,
    StartsWith,
    EndsWith,
}

impl Condition {
    /// Parses a condition tag; word tags are case-insensitive. Unknown
    /// tags return `None` and the caller reports them verbatim.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "=" => return Some(Self::Eq),
            "!=" => return Some(Self::Ne),
            ">" => return Some(Self::Gt),
            "<" => return Some(Self::Lt),
            ">=" => return Some(Self::Ge),
            "<=" => return Some(Self::Le),
            _ => {}
        }
        match tag.to_ascii_lowercase().as_str() {
            "contains" => Some(Self::Contains),
            "startswith" => Some(Self::StartsWith),
            "endswith" => Some(Self::EndsWith),
            _ => None,
        }
    }

    /// Ordering comparisons require a numeric comparison value.
    #[must_use]
    pub const fn is_ordering(self) -> bool {
        matches!(self, Self::Gt | Self::Lt | Self::Ge | Self::Le)
    }
}

/// Comparison value typed from the target column's kind.
#[derive(Debug, Clone, PartialEq)]
enum FilterValue {
    Number(f64),
    Text(String),
}

/// Result of applying a filter: the materialized table plus match
/// counts.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub table: Table,
    pub matched: usize,
    pub total: usize,
}

/// Applies a filter predicate row-wise and materializes the matching
/// rows.
///
/// # Errors
/// Returns [`AnalyticsError::ColumnNotFound`] when the column is absent,
/// and [`AnalyticsError::ValueParse`] when a numeric condition's
/// comparison value does not parse as a number.
pub fn apply(
    table: &Table,
    column_name: &str,
    condition: Condition,
    value: &str,
) -> Result<FilterOutcome, AnalyticsError> {
    let column = table.require_column(column_name)?;
    let typed = type_value(condition, column.kind, value)?;

    let keep: Vec<bool> = column
        .cells
        .iter()
        .map(|cell| matches(cell, condition, &typed))
        .collect();
    let matched = keep.iter().filter(|kept| **kept).count();

    Ok(FilterOutcome {
        table: table.select_rows(&keep),
        matched,
        total: table.row_count(),
    })
}

/// Derives the default output path by inserting `_filtered` before the
/// source extension.
#[must_use]
pub fn derive_output_path(source: &str) -> String {
    let path = Path::new(source);
    let extension = path.extension().and_then(|ext| ext.to_str());
    extension.map_or_else(
        || format!("{source}_filtered"),
        |ext| {
            let stem = &source[..source.len() - ext.len() - 1];
            format!("{stem}_filtered.{ext}")
        },
    )
}

fn type_value(
    condition: Condition,
    kind: ColumnKind,
    value: &str,
) -> Result<FilterValue, AnalyticsError> {
    let needs_number =
        condition.is_ordering() || (matches!(condition, Condition::Eq | Condition::Ne)
            && kind == ColumnKind::Numeric);
    if needs_number {
        value
            .trim()
            .parse::<f64>()
            .map(FilterValue::Number)
            .map_err(|_| AnalyticsError::ValueParse {
                value: value.to_string(),
            })
    } else {
        Ok(FilterValue::Text(value.to_string()))
    }
}

// Missing cells never match; a predicate that cannot be evaluated
// excludes the row.
#[allow(clippy::float_cmp)]
fn matches(cell: &CellValue, condition: Condition, value: &FilterValue) -> bool {
    match (condition, value) {
        (Condition::Eq, FilterValue::Number(target)) => {
            cell.as_number().is_some_and(|v| v == *target)
        }
        (Condition::Ne, FilterValue::Number(target)) => {
            cell.as_number().is_some_and(|v| v != *target)
        }
        (Condition::Gt, FilterValue::Number(target)) => {
            cell.as_number().is_some_and(|v| v > *target)
        }
        (Condition::Lt, FilterValue::Number(target)) => {
            cell.as_number().is_some_and(|v| v < *target)
        }
        (Condition::Ge, FilterValue::Number(target)) => {
            cell.as_number().is_some_and(|v| v >= *target)
        }
        (Condition::Le, FilterValue::Number(target)) => {
            cell.as_number().is_some_and(|v| v <= *target)
        }
        (Condition::Eq, FilterValue::Text(target)) => {
            cell.render().is_some_and(|text| text == *target)
        }
        (Condition::Ne, FilterValue::Text(target)) => {
            cell.render().is_some_and(|text| text != *target)
        }
        (Condition::Contains, FilterValue::Text(target)) => {
            cell.render().is_some_and(|text| text.contains(target))
        }
        (Condition::StartsWith, FilterValue::Text(target)) => {
            cell.render().is_some_and(|text| text.starts_with(target))
        }
        (Condition::EndsWith, FilterValue::Text(target)) => {
            cell.render().is_some_and(|text| text.ends_with(target))
        }
        // Ordering against a text value cannot arise: type_value always
        // produces a number for ordering conditions.
        _ => false,
    }
}
