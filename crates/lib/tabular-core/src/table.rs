//! In-memory table model and CSV loader/writer.
//!
//! A [`Table`] is an ordered sequence of named, typed, equal-length
//! columns. Column kinds are inferred from the full column: a column is
//! numeric only if every non-missing cell parses as a number, boolean only
//! if every non-missing cell is a true/false literal, otherwise text.
//! Missing values are a distinct [`CellValue::Missing`] variant, never a
//! sentinel number or empty string.

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::error::AnalyticsError;

/// Cell spellings treated as a missing value when loading.
///
/// Matches the markers emitted by common tabular tooling; comparison is
/// done after trimming surrounding whitespace.
const MISSING_MARKERS: [&str; 8] = ["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

/// Inferred element kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Boolean,
    Text,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Boolean => write!(f, "boolean"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// A single cell: a number, text, boolean, or the missing marker.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Bool(bool),
    Text(String),
    Missing,
}

impl CellValue {
    /// Returns `true` for the missing marker.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns the numeric value, or `None` for non-numeric or missing
    /// cells.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Text representation used by string predicates and the CSV writer.
    /// Missing cells have no representation.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Number(value) => Some(format!("{value}")),
            Self::Bool(value) => Some(format!("{value}")),
            Self::Text(value) => Some(value.clone()),
            Self::Missing => None,
        }
    }
}

/// A named column with a fixed kind and one cell per table row.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub cells: Vec<CellValue>,
}

impl Column {
    /// Non-missing numeric values in row order.
    #[must_use]
    pub fn numbers(&self) -> Vec<f64> {
        self.cells.iter().filter_map(CellValue::as_number).collect()
    }

    /// Count of missing cells.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_missing()).count()
    }
}

/// An immutable tabular dataset loaded from a delimited file.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Builds a table from pre-built columns.
    ///
    /// Callers guarantee equal column lengths; the loader and the filter
    /// operation construct columns row-by-row and uphold this.
    #[must_use]
    pub fn from_columns(columns: Vec<Column>) -> Self {
        let row_count = columns.first().map_or(0, |column| column.cells.len());
        debug_assert!(
            columns.iter().all(|column| column.cells.len() == row_count),
            "all columns must have the same length"
        );
        Self { columns, row_count }
    }

    /// Parses a CSV file into a typed table.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::Load`] when the path cannot be read, the
    /// file is not well-formed CSV, a column name repeats, or the file has
    /// no data rows.
    pub fn load_csv(path: &str) -> Result<Self, AnalyticsError> {
        let load_err = |message: String| AnalyticsError::Load {
            path: path.to_string(),
            message,
        };

        let mut reader = csv::Reader::from_path(path).map_err(|err| load_err(err.to_string()))?;
        let names: Vec<String> = reader
            .headers()
            .map_err(|err| load_err(err.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(load_err(format!("duplicate column name '{name}'")));
            }
        }

        let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); names.len()];
        for record in reader.records() {
            let record = record.map_err(|err| load_err(err.to_string()))?;
            for (index, field) in record.iter().enumerate() {
                raw_columns[index].push(field.to_string());
            }
        }

        let row_count = raw_columns.first().map_or(0, Vec::len);
        if names.is_empty() || row_count == 0 {
            return Err(load_err("no data rows found".to_string()));
        }

        let columns = names
            .into_iter()
            .zip(raw_columns)
            .map(|(name, raw)| build_column(name, &raw))
            .collect();

        debug!(path, rows = row_count, "loaded CSV file");
        Ok(Self { columns, row_count })
    }

    /// Writes the table back out as CSV, headers first, missing cells as
    /// empty fields.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::Load`] when the destination cannot be
    /// written.
    pub fn write_csv(&self, path: &str) -> Result<(), AnalyticsError> {
        let write_err = |message: String| AnalyticsError::Load {
            path: path.to_string(),
            message,
        };

        let mut writer = csv::Writer::from_path(path).map_err(|err| write_err(err.to_string()))?;
        writer
            .write_record(self.columns.iter().map(|column| column.name.as_str()))
            .map_err(|err| write_err(err.to_string()))?;

        for row in 0..self.row_count {
            let record: Vec<String> = self
                .columns
                .iter()
                .map(|column| column.cells[row].render().unwrap_or_default())
                .collect();
            writer
                .write_record(&record)
                .map_err(|err| write_err(err.to_string()))?;
        }

        writer.flush().map_err(|err| write_err(err.to_string()))?;
        debug!(path, rows = self.row_count, "wrote CSV file");
        Ok(())
    }

    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Looks up a column by name, failing with a typed error.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::ColumnNotFound`] when the column is
    /// absent.
    pub fn require_column(&self, name: &str) -> Result<&Column, AnalyticsError> {
        self.column(name).ok_or_else(|| AnalyticsError::ColumnNotFound {
            name: name.to_string(),
        })
    }

    /// Numeric columns in declaration order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns
            .iter()
            .filter(|column| column.kind == ColumnKind::Numeric)
    }

    /// Materializes a new table keeping only the rows flagged in `keep`.
    #[must_use]
    pub fn select_rows(&self, keep: &[bool]) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|column| Column {
                name: column.name.clone(),
                kind: column.kind,
                cells: column
                    .cells
                    .iter()
                    .zip(keep)
                    .filter_map(|(cell, kept)| kept.then(|| cell.clone()))
                    .collect(),
            })
            .collect();
        Self::from_columns(columns)
    }
}

fn is_missing_marker(raw: &str) -> bool {
    MISSING_MARKERS.contains(&raw.trim())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn infer_kind(raw: &[String]) -> ColumnKind {
    let mut present = raw
        .iter()
        .filter(|value| !is_missing_marker(value))
        .peekable();
    if present.peek().is_none() {
        return ColumnKind::Text;
    }
    let values: Vec<&String> = present.collect();
    if values.iter().all(|value| value.trim().parse::<f64>().is_ok()) {
        ColumnKind::Numeric
    } else if values.iter().all(|value| parse_bool(value).is_some()) {
        ColumnKind::Boolean
    } else {
        ColumnKind::Text
    }
}

fn build_column(name: String, raw: &[String]) -> Column {
    let kind = infer_kind(raw);
    let cells = raw
        .iter()
        .map(|value| {
            if is_missing_marker(value) {
                return CellValue::Missing;
            }
            match kind {
                // Cells that fail to parse under the inferred kind become
                // missing rather than poisoning the column.
                ColumnKind::Numeric => value
                    .trim()
                    .parse::<f64>()
                    .map_or(CellValue::Missing, CellValue::Number),
                ColumnKind::Boolean => {
                    parse_bool(value).map_or(CellValue::Missing, CellValue::Bool)
                }
                ColumnKind::Text => CellValue::Text(value.clone()),
            }
        })
        .collect();
    Column { name, kind, cells }
}
