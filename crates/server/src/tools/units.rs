//! check_units tool implementation.
//!
//! Reads the remaining API units from a trial keyword-metrics call.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use seozoom_client::SeoZoomClient;

pub async fn check_units_impl(client: &SeoZoomClient) -> Result<CallToolResult, McpError> {
    let remaining = client.remaining_units().await?;
    Ok(CallToolResult::success(vec![Content::text(format!("Remaining API units: {remaining}"))]))
}
