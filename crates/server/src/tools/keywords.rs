//! Keyword tools: metrics, SERP, SERP history and related keywords.

use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use seozoom_client::SeoZoomClient;
use serde::{Deserialize, Serialize};

use super::render;

/// Input parameters for keyword_metrics and keyword_serp.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct KeywordListParams {
    /// Keywords to analyze (max 100).
    pub keywords: Vec<String>,

    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,
}

/// Input parameters for keyword_serp_history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct KeywordSerpHistoryParams {
    /// A single keyword.
    pub keyword: String,

    /// Snapshot date in yyyy-MM-dd format.
    pub date: String,

    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,
}

/// Input parameters for keyword_related.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct KeywordRelatedParams {
    /// A single keyword.
    pub keyword: String,

    /// Country database: it, es, fr, de, uk. Defaults to the server default.
    #[serde(default)]
    pub db: Option<String>,

    /// Maximum number of related keywords (default 50).
    #[serde(default)]
    pub limit: Option<u32>,
}

pub async fn metrics_impl(client: &SeoZoomClient, params: KeywordListParams) -> Result<CallToolResult, McpError> {
    let data = client.keyword_metrics(&params.keywords, params.db.as_deref()).await?;
    Ok(render(&data))
}

pub async fn serp_impl(client: &SeoZoomClient, params: KeywordListParams) -> Result<CallToolResult, McpError> {
    let data = client.keyword_serp(&params.keywords, params.db.as_deref()).await?;
    Ok(render(&data))
}

pub async fn serp_history_impl(
    client: &SeoZoomClient, params: KeywordSerpHistoryParams,
) -> Result<CallToolResult, McpError> {
    let data = client
        .keyword_serp_history(&params.keyword, &params.date, params.db.as_deref())
        .await?;
    Ok(render(&data))
}

pub async fn related_impl(client: &SeoZoomClient, params: KeywordRelatedParams) -> Result<CallToolResult, McpError> {
    let data = client
        .keyword_related(&params.keyword, params.db.as_deref(), params.limit)
        .await?;
    Ok(render(&data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{client, text};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_metrics_renders_envelope() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/keywords/"))
            .and(query_param("action", "metrics"))
            .and(query_param("db", "it"))
            .and(query_param("keyword", "seo|zoom"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "UnitsUsed": 20,
                "UnitsRemaining": 980,
                "ResultRows": 2,
                "response": [{"keyword": "seo"}, {"keyword": "zoom"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client(&mock_server.uri());
        let params = KeywordListParams { keywords: vec!["seo".into(), "zoom".into()], db: None };
        let result = metrics_impl(&client, params).await.unwrap();

        let text = text(&result);
        assert!(text.starts_with("[Cost: 20 units | Remaining: 980 | Results: 2]\n\n"));
        assert!(text.contains("\"keyword\": \"zoom\""));
        assert!(!text.contains("UnitsUsed"));
    }

    #[tokio::test]
    async fn test_invalid_db_is_invalid_params() {
        let client = client("http://127.0.0.1:9");
        let params = KeywordListParams { keywords: vec!["seo".into()], db: Some("us".into()) };

        let err = serp_impl(&client, params).await.unwrap_err();
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("'us'"));
    }

    #[tokio::test]
    async fn test_upstream_error_passes_through() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})))
            .mount(&mock_server)
            .await;

        let client = client(&mock_server.uri());
        let params = KeywordRelatedParams { keyword: "seo".into(), ..Default::default() };

        let err = related_impl(&client, params).await.unwrap_err();
        assert_eq!(err.message, "Invalid API key");
        assert_eq!(err.data, Some(json!({"status": 401})));
    }

    #[test]
    fn test_params_deserialize_without_optionals() {
        let params: KeywordSerpHistoryParams =
            serde_json::from_value(json!({"keyword": "seo", "date": "2024-01-31"})).unwrap();
        assert!(params.db.is_none());
    }
}
