//! URL tools: page authority, metrics, ranked keywords and intent gap.

use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use seozoom_client::SeoZoomClient;
use serde::{Deserialize, Serialize};

use super::render;

/// Input parameters for url_page_authority.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UrlParams {
    /// A single absolute URL.
    pub url: String,

    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,
}

/// Input parameters for url_metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UrlListParams {
    /// Absolute URLs to analyze (max 30).
    pub urls: Vec<String>,

    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,
}

/// Input parameters for url_keywords and url_intent_gap.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UrlLimitParams {
    /// A single absolute URL.
    pub url: String,

    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,

    /// Maximum number of results.
    #[serde(default)]
    pub limit: Option<u32>,
}

pub async fn page_authority_impl(client: &SeoZoomClient, params: UrlParams) -> Result<CallToolResult, McpError> {
    let data = client.url_page_authority(&params.url, params.db.as_deref()).await?;
    Ok(render(&data))
}

pub async fn metrics_impl(client: &SeoZoomClient, params: UrlListParams) -> Result<CallToolResult, McpError> {
    let data = client.url_metrics(&params.urls, params.db.as_deref()).await?;
    Ok(render(&data))
}

pub async fn keywords_impl(client: &SeoZoomClient, params: UrlLimitParams) -> Result<CallToolResult, McpError> {
    let data = client
        .url_keywords(&params.url, params.db.as_deref(), params.limit)
        .await?;
    Ok(render(&data))
}

pub async fn intent_gap_impl(client: &SeoZoomClient, params: UrlLimitParams) -> Result<CallToolResult, McpError> {
    let data = client
        .url_intent_gap(&params.url, params.db.as_deref(), params.limit)
        .await?;
    Ok(render(&data))
}
