use std::{error::Error, fmt};

/// All errors produced by the CSV analytics operations.
///
/// None of these escape the [`service`](crate::service) boundary; the
/// service functions convert every variant into a descriptive message so
/// the tool surface always returns text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// The source file could not be read or parsed into a table.
    Load { path: String, message: String },
    /// A referenced column is absent from the table.
    ColumnNotFound { name: String },
    /// A comparison value could not be coerced to the type the condition
    /// requires.
    ValueParse { value: String },
    /// The operation has nothing valid to compute. The message is the
    /// user-facing sentinel text, rendered verbatim at the boundary.
    EmptyResult { message: String },
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { path, message } => {
                write!(f, "failed to load '{path}': {message}")
            }
            Self::ColumnNotFound { name } => {
                write!(f, "column '{name}' not found")
            }
            Self::ValueParse { value } => {
                write!(f, "could not parse '{value}' as a number")
            }
            Self::EmptyResult { message } => write!(f, "{message}"),
        }
    }
}

impl Error for AnalyticsError {}
