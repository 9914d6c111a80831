//! Analysis operations over a loaded table.
//!
//! The four `analyze` operations are a closed set dispatched through
//! [`AnalyzeOp`]; filter and group-by are separate top-level operations
//! with their own parameter shapes.

pub mod correlation;
pub mod distribution;
pub mod filter;
pub mod group_by;
pub mod missing;
pub mod summary;

use crate::table::Table;

/// The closed set of `analyze` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeOp {
    Summary,
    Correlation,
    Missing,
    Distribution,
}

impl AnalyzeOp {
    /// Parses an operation name, case-insensitively. Unknown names return
    /// `None`; the caller reports them inline instead of failing the
    /// whole request.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "summary" => Some(Self::Summary),
            "correlation" => Some(Self::Correlation),
            "missing" => Some(Self::Missing),
            "distribution" => Some(Self::Distribution),
            _ => None,
        }
    }

    /// Runs the operation against a table snapshot and renders its report.
    #[must_use]
    pub fn run(self, table: &Table) -> String {
        match self {
            Self::Summary => summary::report(table),
            Self::Correlation => correlation::report(table),
            Self::Missing => missing::report(table),
            Self::Distribution => distribution::report(table),
        }
    }
}
