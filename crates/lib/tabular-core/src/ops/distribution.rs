//! Distribution analysis for numeric columns: central tendency, spread,
//! shape, and quartiles after dropping missing values.

use std::fmt::Write;

use crate::render;
use crate::stats;
use crate::table::{Column, Table};

const NO_NUMERIC: &str = "No numeric columns found for distribution analysis.";

/// Distribution statistics for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub std: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
}

/// Computes distribution statistics over a column's non-missing values,
/// or `None` when nothing remains after dropping missing cells.
#[must_use]
pub fn column_stats(column: &Column) -> Option<DistributionStats> {
    let values = stats::sorted(&column.numbers());
    let (min, max) = match (values.first(), values.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return None,
    };
    Some(DistributionStats {
        min,
        max,
        mean: stats::mean(&values),
        median: stats::median(&values),
        mode: stats::mode(&values),
        std: stats::sample_std(&values),
        skewness: stats::skewness(&values),
        kurtosis: stats::excess_kurtosis(&values),
        p25: stats::percentile(&values, 25.0),
        p50: stats::percentile(&values, 50.0),
        p75: stats::percentile(&values, 75.0),
    })
}

/// Renders the distribution report for a table.
#[must_use]
pub fn report(table: &Table) -> String {
    let columns: Vec<&Column> = table.numeric_columns().collect();
    if columns.is_empty() {
        return NO_NUMERIC.to_string();
    }

    let mut out = render::section("Distribution Analysis");
    for column in columns {
        let _ = write!(out, "\n\n{}:", column.name);
        let Some(stats) = column_stats(column) else {
            out.push_str("\n- no data");
            continue;
        };
        let _ = write!(
            out,
            "\n- Range: {} to {}\n- Mean: {}\n- Median: {}\n- Mode: {}\n- Standard Deviation: {}\n- Skewness: {}\n- Kurtosis: {}\n- 25th Percentile: {}\n- 50th Percentile: {}\n- 75th Percentile: {}",
            render::number(stats.min),
            render::number(stats.max),
            render::float4(stats.mean),
            render::float4(stats.median),
            render::float4(stats.mode),
            render::float4(stats.std),
            render::float4(stats.skewness),
            render::float4(stats.kurtosis),
            render::float4(stats.p25),
            render::float4(stats.p50),
            render::float4(stats.p75),
        );
    }
    out
}
