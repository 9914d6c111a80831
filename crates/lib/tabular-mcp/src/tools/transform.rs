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

/// Parameters for filtering a CSV file into a new file.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FilterCsvParams {
    /// Path to the CSV file to filter.
    pub file_path: String,
    /// Column name to apply the filter on.
    pub column: String,
    /// Condition tag: '=', '!=', '>', '<', '>=', '<=', 'contains',
    /// 'startswith', 'endswith'.
    pub condition: String,
    /// Value to filter by. Strings compare as text against text columns;
    /// numeric conditions require a number.
    pub value: serde_json::Value,
    /// Destination path. Defaults to the source path with '_filtered'
    /// inserted before the extension.
    pub output_path: Option<String>,
}

#[tool_router(router = tool_router_transform, vis = "pub")]
impl TabularMcp {
    #[tool(
        description = "Filter a CSV file by one condition and save the matching rows to a new CSV file. Returns the output path and matched/total row counts."
    )]
    async fn filter_csv(
        &self,
        Parameters(params): Parameters<FilterCsvParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let value = helpers::value_text(&params.value);
        let text = helpers::run_blocking(move || {
            tabular_core::service::filter_csv(
                &params.file_path,
                &params.column,
                &params.condition,
                &value,
                params.output_path.as_deref(),
            )
        })
        .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
