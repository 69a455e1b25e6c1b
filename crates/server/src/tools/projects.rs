//! Project tools. Projects are addressed by their SEOZoom ID.

use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use seozoom_client::SeoZoomClient;
use serde::{Deserialize, Serialize};

use super::render;

/// Input parameters for project_list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ProjectListParams {
    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,
}

/// Input parameters for project_overview and project_keywords.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ProjectParams {
    /// Project ID.
    pub id: String,

    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,
}

/// Input parameters for the project page tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ProjectPagesParams {
    /// Project ID.
    pub id: String,

    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,

    /// Maximum number of pages.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Which page ranking of a project to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPages {
    Best,
    MoreKeywords,
    Potential,
    Winners,
    Losers,
}

pub async fn list_impl(client: &SeoZoomClient, params: ProjectListParams) -> Result<CallToolResult, McpError> {
    let data = client.project_list(params.db.as_deref()).await?;
    Ok(render(&data))
}

pub async fn overview_impl(client: &SeoZoomClient, params: ProjectParams) -> Result<CallToolResult, McpError> {
    let data = client.project_overview(&params.id, params.db.as_deref()).await?;
    Ok(render(&data))
}

pub async fn keywords_impl(client: &SeoZoomClient, params: ProjectParams) -> Result<CallToolResult, McpError> {
    let data = client.project_keywords(&params.id, params.db.as_deref()).await?;
    Ok(render(&data))
}

pub async fn pages_impl(
    client: &SeoZoomClient, pages: ProjectPages, params: ProjectPagesParams,
) -> Result<CallToolResult, McpError> {
    let (id, db, limit) = (params.id.as_str(), params.db.as_deref(), params.limit);
    let data = match pages {
        ProjectPages::Best => client.project_best_pages(id, db, limit).await?,
        ProjectPages::MoreKeywords => client.project_pages_with_more_keywords(id, db, limit).await?,
        ProjectPages::Potential => client.project_pages_with_potential(id, db, limit).await?,
        ProjectPages::Winners => client.project_winner_pages(id, db, limit).await?,
        ProjectPages::Losers => client.project_loser_pages(id, db, limit).await?,
    };
    Ok(render(&data))
}
