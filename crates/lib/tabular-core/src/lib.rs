//! Core CSV analytics for tabular-mcp.
//!
//! This crate owns the in-memory table model, the CSV loader/writer, the
//! analysis operations (summary, correlation, missing values, distribution),
//! row filtering, group-by aggregation, and the text rendering for each
//! report. The MCP surface in `tabular-mcp` is a thin wrapper around
//! [`service`], which converts every internal failure into a descriptive
//! string at the tool boundary.

pub mod error;
pub mod ops;
pub mod render;
pub mod service;
pub mod stats;
pub mod table;
