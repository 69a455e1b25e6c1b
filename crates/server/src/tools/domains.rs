//! Domain tools: metrics, authority, niches, pages, keywords and competitors.

use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use seozoom_client::{DomainKeywordType, SeoZoomClient};
use serde::{Deserialize, Serialize};

use super::render;

/// Input parameters for domain_metrics and domain_authority.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DomainListParams {
    /// Domains to analyze (max 50 for metrics, 100 for authority).
    pub domains: Vec<String>,

    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,
}

/// Input parameters for domain_metrics_history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DomainMetricsHistoryParams {
    /// Domains to analyze (max 50).
    pub domains: Vec<String>,

    /// Date in yyyy-MM-dd format.
    pub date: String,

    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,
}

/// Input parameters for domain_niches and domain_competitors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DomainListLimitParams {
    /// Domains to analyze (max 10).
    pub domains: Vec<String>,

    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,

    /// Maximum number of results per domain.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Input parameters for domain_best_pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DomainPagesParams {
    /// A single domain.
    pub domain: String,

    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,

    /// Maximum number of pages.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Input parameters for domain_ai_keywords.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DomainAiKeywordsParams {
    /// A single domain.
    pub domain: String,

    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,

    /// Index of the first result.
    #[serde(default)]
    pub offset: Option<u32>,

    /// Maximum number of keywords.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Input parameters for domain_keywords.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DomainKeywordsParams {
    /// A single domain.
    pub domain: String,

    /// Keyword filter.
    #[serde(rename = "type")]
    pub kind: DomainKeywordType,

    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,

    /// Index of the first result.
    #[serde(default)]
    pub offset: Option<u32>,

    /// Maximum number of keywords.
    #[serde(default)]
    pub limit: Option<u32>,
}

pub async fn metrics_impl(client: &SeoZoomClient, params: DomainListParams) -> Result<CallToolResult, McpError> {
    let data = client.domain_metrics(&params.domains, params.db.as_deref()).await?;
    Ok(render(&data))
}

pub async fn metrics_history_impl(
    client: &SeoZoomClient, params: DomainMetricsHistoryParams,
) -> Result<CallToolResult, McpError> {
    let data = client
        .domain_metrics_history(&params.domains, &params.date, params.db.as_deref())
        .await?;
    Ok(render(&data))
}

pub async fn authority_impl(client: &SeoZoomClient, params: DomainListParams) -> Result<CallToolResult, McpError> {
    let data = client.domain_authority(&params.domains, params.db.as_deref()).await?;
    Ok(render(&data))
}

pub async fn niches_impl(client: &SeoZoomClient, params: DomainListLimitParams) -> Result<CallToolResult, McpError> {
    let data = client
        .domain_niches(&params.domains, params.db.as_deref(), params.limit)
        .await?;
    Ok(render(&data))
}

pub async fn best_pages_impl(client: &SeoZoomClient, params: DomainPagesParams) -> Result<CallToolResult, McpError> {
    let data = client
        .domain_best_pages(&params.domain, params.db.as_deref(), params.limit)
        .await?;
    Ok(render(&data))
}

pub async fn ai_keywords_impl(
    client: &SeoZoomClient, params: DomainAiKeywordsParams,
) -> Result<CallToolResult, McpError> {
    let data = client
        .domain_ai_keywords(&params.domain, params.db.as_deref(), params.offset, params.limit)
        .await?;
    Ok(render(&data))
}

pub async fn keywords_impl(client: &SeoZoomClient, params: DomainKeywordsParams) -> Result<CallToolResult, McpError> {
    let data = client
        .domain_keywords(&params.domain, params.kind, params.db.as_deref(), params.offset, params.limit)
        .await?;
    Ok(render(&data))
}

pub async fn competitors_impl(
    client: &SeoZoomClient, params: DomainListLimitParams,
) -> Result<CallToolResult, McpError> {
    let data = client
        .domain_competitors(&params.domains, params.db.as_deref(), params.limit)
        .await?;
    Ok(render(&data))
}
