//! MCP server implementation for tabular-mcp.
//!
//! This crate wires the CSV analytics service into rmcp tool handlers
//! and exposes the MCP-facing API surface for analysis, filtering, and
//! aggregation.

mod helpers;
mod tools;
pub mod server;

use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};

const SERVER_INSTRUCTIONS: &str = r"tabular-mcp provides MCP tools for analyzing CSV files.

Workflow:
1. Analyze a file with `analyze_csv`, passing an ordered list of operations
   drawn from: summary, correlation, missing, distribution (default: summary).
   Each operation renders one report; reports are concatenated in request
   order, separated by a blank line.
2. Select rows with `filter_csv` using a condition tag
   ('=', '!=', '>', '<', '>=', '<=', 'contains', 'startswith', 'endswith');
   the matching rows are written to a new CSV file.
3. Aggregate with `group_by_analysis`: one group column, a list of columns
   to aggregate, and functions drawn from mean, sum, count, min, max, median
   (default: mean).

Notes:
- Every tool returns text. Failures come back as 'Error ...: <message>'
  strings instead of protocol errors, so inspect the text for the prefix.
- Each call loads the file fresh; nothing is cached between calls.
- Missing cells (empty, NA, N/A, NaN, null, None) are excluded from numeric
  aggregations and counted by the `missing` operation.
- `help` lists the commands; `health` returns `ok`.";

/// MCP server wrapper around the CSV analytics tool routers.
///
/// Holds no shared table state: every tool call loads its own snapshot
/// of the named file.
#[derive(Clone)]
pub struct TabularMcp {
    tool_router: ToolRouter<Self>,
}

impl TabularMcp {
    /// Creates a new server with all tool routers attached.
    #[must_use]
    pub fn new() -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_analysis()
            + Self::tool_router_transform()
            + Self::tool_router_aggregate()
            + Self::tool_router_context();
        Self { tool_router }
    }
}

impl Default for TabularMcp {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl TabularMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for TabularMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
