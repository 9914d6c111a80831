//! Text-boundary entry points for the tool surface.
//!
//! Each function loads its own table snapshot per call and converts
//! every internal failure into a descriptive string. The tool interface
//! never raises: success and error are framed the same way, and callers
//! distinguish them by the `Error ...` prefix. Sentinel messages (for
//! example "No valid aggregation functions specified.") pass through
//! unprefixed, matching the analytics surface this replaces.

use tracing::debug;

use crate::error::AnalyticsError;
use crate::ops::AnalyzeOp;
use crate::ops::filter::{self, Condition};
use crate::ops::group_by;
use crate::table::Table;

/// Runs the requested analysis operations against a freshly loaded
/// table and concatenates the rendered reports in request order.
///
/// Unknown operation names produce an inline `Unknown operation: X`
/// line in place of a report. Any failure becomes an
/// `Error analyzing CSV file: ...` string.
#[must_use]
pub fn analyze_csv(file_path: &str, operations: &[String]) -> String {
    debug!(file_path, ?operations, "analyze request");
    match Table::load_csv(file_path) {
        Ok(table) => {
            let reports: Vec<String> = operations
                .iter()
                .map(|name| {
                    AnalyzeOp::parse(name).map_or_else(
                        || format!("Unknown operation: {name}"),
                        |op| op.run(&table),
                    )
                })
                .collect();
            reports.join("\n\n")
        }
        Err(err) => error_text("Error analyzing CSV file", &err),
    }
}

/// Filters a CSV file by one condition and writes the matching rows to
/// a new file.
///
/// An unknown condition tag returns `Unknown condition: X` verbatim;
/// any other failure becomes an `Error filtering CSV file: ...` string.
#[must_use]
pub fn filter_csv(
    file_path: &str,
    column: &str,
    condition: &str,
    value: &str,
    output_path: Option<&str>,
) -> String {
    debug!(file_path, column, condition, value, "filter request");
    let Some(parsed_condition) = Condition::parse(condition) else {
        return format!("Unknown condition: {condition}");
    };

    match run_filter(file_path, column, parsed_condition, value, output_path) {
        Ok(status) => status,
        Err(err) => error_text("Error filtering CSV file", &err),
    }
}

fn run_filter(
    file_path: &str,
    column: &str,
    condition: Condition,
    value: &str,
    output_path: Option<&str>,
) -> Result<String, AnalyticsError> {
    let table = Table::load_csv(file_path)?;
    let outcome = filter::apply(&table, column, condition, value)?;
    let destination = output_path.map_or_else(|| filter::derive_output_path(file_path), str::to_string);
    outcome.table.write_csv(&destination)?;
    Ok(format!(
        "Filtered CSV saved to {destination}. {} rows match the filter criteria out of {} total rows.",
        outcome.matched, outcome.total
    ))
}

/// Runs a group-by aggregation and renders the result table.
///
/// Failures become an `Error performing group-by analysis: ...` string,
/// except the "no valid aggregation functions" sentinel which passes
/// through verbatim.
#[must_use]
pub fn group_by_csv(
    file_path: &str,
    group_column: &str,
    agg_columns: &[String],
    agg_functions: &[String],
) -> String {
    debug!(file_path, group_column, "group-by request");
    let result = Table::load_csv(file_path).and_then(|table| {
        group_by::report(&table, group_column, agg_columns, agg_functions)
    });
    match result {
        Ok(rendered) => rendered,
        Err(err) => error_text("Error performing group-by analysis", &err),
    }
}

/// Converts a typed error into boundary text. `EmptyResult` carries its
/// own user-facing sentinel and is rendered without the prefix.
fn error_text(prefix: &str, err: &AnalyticsError) -> String {
    match err {
        AnalyticsError::EmptyResult { message } => message.clone(),
        other => format!("{prefix}: {other}"),
    }
}
