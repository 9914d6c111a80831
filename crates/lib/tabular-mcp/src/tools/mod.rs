//! MCP tool modules.
//!
//! Tools are grouped by domain: analysis reports, row filtering, and
//! group-by aggregation, plus contextual help.

pub mod aggregate;
pub mod analysis;
pub mod transform;
mod context;
