use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::TabularMcp;

/// Payload listing the MCP commands this server exposes.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub commands: Vec<String>,
}

impl Default for HelpCommands {
    fn default() -> Self {
        Self {
            commands: vec![
                "analyze_csv - Analyze a CSV file with summary, correlation, missing, and/or distribution reports."
                    .to_string(),
                "filter_csv - Filter a CSV file by one condition and save the matching rows to a new file."
                    .to_string(),
                "group_by_analysis - Group rows by a column and aggregate other columns (mean, sum, count, min, max, median)."
                    .to_string(),
                "help - List MCP commands and how this server works.".to_string(),
                "health - Returns 'ok'.".to_string(),
            ],
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl TabularMcp {
    #[tool(description = "List the MCP commands this CSV analytics server exposes.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(
            HelpCommands::default(),
        )?]))
    }
}
