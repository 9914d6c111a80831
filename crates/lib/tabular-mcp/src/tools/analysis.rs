use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{TabularMcp, helpers};

/// Parameters for analyzing a CSV file.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeCsvParams {
    /// Path to the CSV file to analyze.
    pub file_path: String,
    /// Ordered list of operations: summary, correlation, missing,
    /// distribution. Defaults to [summary].
    pub operations: Option<Vec<String>>,
}

#[tool_router(router = tool_router_analysis, vis = "pub")]
impl TabularMcp {
    #[tool(
        description = "Analyze a CSV file. Operations: summary (shape, column types, descriptive statistics), correlation (Pearson matrix over numeric columns), missing (missing-value counts), distribution (per-column distribution statistics). Returns one report per operation."
    )]
    async fn analyze_csv(
        &self,
        Parameters(params): Parameters<AnalyzeCsvParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let operations = params
            .operations
            .unwrap_or_else(|| vec!["summary".to_string()]);
        let text = helpers::run_blocking(move || {
            tabular_core::service::analyze_csv(&params.file_path, &operations)
        })
        .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
