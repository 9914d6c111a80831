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

/// Parameters for a group-by aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GroupByParams {
    /// Path to the CSV file to analyze.
    pub file_path: String,
    /// Column to group by. Rows with a missing group key form their own
    /// partition.
    pub group_column: String,
    /// Columns to aggregate.
    pub agg_columns: Vec<String>,
    /// Aggregation functions: mean, sum, count, min, max, median.
    /// Defaults to [mean]; invalid names are dropped.
    pub agg_functions: Option<Vec<String>>,
}

#[tool_router(router = tool_router_aggregate, vis = "pub")]
impl TabularMcp {
    #[tool(
        description = "Perform a group-by analysis on a CSV file: partition rows by the group column and aggregate the requested columns with mean, sum, count, min, max, and/or median."
    )]
    async fn group_by_analysis(
        &self,
        Parameters(params): Parameters<GroupByParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let functions = params
            .agg_functions
            .unwrap_or_else(|| vec!["mean".to_string()]);
        let text = helpers::run_blocking(move || {
            tabular_core::service::group_by_csv(
                &params.file_path,
                &params.group_column,
                &params.agg_columns,
                &functions,
            )
        })
        .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
