//! MCP tool implementations.
//!
//! One tool per SEOZoom operation, grouped by API resource. Every tool
//! forwards to the client and renders the JSON result with
//! [`format_envelope`]; client errors pass through unchanged.

pub mod domains;
pub mod keywords;
pub mod projects;
pub mod units;
pub mod urls;

use rmcp::model::{CallToolResult, Content};
use seozoom_client::format_envelope;
use serde_json::Value;

/// Wrap an API response as a single text block.
pub(crate) fn render(value: &Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(format_envelope(value))])
}
