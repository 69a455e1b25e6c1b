//! Domain endpoints: metrics, authority, niches, pages, keywords and competitors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use seozoom_core::Error;
use std::fmt;

use super::{Resource, SeoZoomClient};

/// Limit sent by [`SeoZoomClient::domain_niches`] when none is given.
pub const NICHES_DEFAULT_LIMIT: u32 = 10;

/// Filter for the ranked keywords of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DomainKeywordType {
    /// Best positioned keywords.
    Best,
    /// Keywords bringing traffic.
    WithTraffic,
    /// Keywords gaining positions.
    Up,
    /// Keywords losing positions.
    Down,
    /// Keywords holding their position.
    Stable,
    /// Keywords that entered the rankings.
    Entered,
    /// Keywords that left the rankings.
    Exited,
    /// Keywords grouped by page.
    ByPage,
    /// Keywords grouped by position.
    ByPosition,
    /// Newly ranked keywords.
    NewEntry,
}

impl DomainKeywordType {
    pub fn as_str(self) -> &'static str {
        match self {
            DomainKeywordType::Best => "best",
            DomainKeywordType::WithTraffic => "withtraffic",
            DomainKeywordType::Up => "up",
            DomainKeywordType::Down => "down",
            DomainKeywordType::Stable => "stable",
            DomainKeywordType::Entered => "entered",
            DomainKeywordType::Exited => "exited",
            DomainKeywordType::ByPage => "bypage",
            DomainKeywordType::ByPosition => "byposition",
            DomainKeywordType::NewEntry => "newentry",
        }
    }
}

impl fmt::Display for DomainKeywordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SeoZoomClient {
    /// Estimated traffic, ranked keywords and ZA for up to 50 domains.
    pub async fn domain_metrics<S: AsRef<str>>(&self, domains: &[S], db: Option<&str>) -> Result<Value, Error> {
        let req = self.request(Resource::Domains, "metrics", db)?.list_param("domain", domains);
        self.execute(req).await
    }

    /// Domain metrics as of a past date (`yyyy-MM-dd`).
    pub async fn domain_metrics_history<S: AsRef<str>>(
        &self, domains: &[S], date: &str, db: Option<&str>,
    ) -> Result<Value, Error> {
        let req = self
            .request(Resource::Domains, "metricshistory", db)?
            .list_param("domain", domains)
            .param("date", date);
        self.execute(req).await
    }

    /// Zoom Authority, Trust, Stability and Opportunity for up to 100 domains.
    pub async fn domain_authority<S: AsRef<str>>(&self, domains: &[S], db: Option<&str>) -> Result<Value, Error> {
        let req = self.request(Resource::Domains, "authority", db)?.list_param("domain", domains);
        self.execute(req).await
    }

    /// Topical niches of up to 10 domains.
    ///
    /// Sends `limit=10` when `limit` is `None`.
    pub async fn domain_niches<S: AsRef<str>>(
        &self, domains: &[S], db: Option<&str>, limit: Option<u32>,
    ) -> Result<Value, Error> {
        let req = self
            .request(Resource::Domains, "niches", db)?
            .list_param("domain", domains)
            .param("limit", limit.unwrap_or(NICHES_DEFAULT_LIMIT));
        self.execute(req).await
    }

    /// Best pages of a domain with PZA and ranked keyword count.
    pub async fn domain_best_pages(&self, domain: &str, db: Option<&str>, limit: Option<u32>) -> Result<Value, Error> {
        let req = self
            .request(Resource::Domains, "bestpages", db)?
            .param("domain", domain)
            .opt_param("limit", limit);
        self.execute(req).await
    }

    /// Keywords for which the domain appears in Google AI Overviews.
    pub async fn domain_ai_keywords(
        &self, domain: &str, db: Option<&str>, offset: Option<u32>, limit: Option<u32>,
    ) -> Result<Value, Error> {
        let req = self
            .request(Resource::Domains, "aikeywords", db)?
            .param("domain", domain)
            .opt_param("offset", offset)
            .opt_param("limit", limit);
        self.execute(req).await
    }

    /// Ranked keywords of a domain, filtered by `kind`.
    pub async fn domain_keywords(
        &self, domain: &str, kind: DomainKeywordType, db: Option<&str>, offset: Option<u32>, limit: Option<u32>,
    ) -> Result<Value, Error> {
        let req = self
            .request(Resource::Domains, "keywords", db)?
            .param("domain", domain)
            .param("type", kind)
            .opt_param("offset", offset)
            .opt_param("limit", limit);
        self.execute(req).await
    }

    /// Main organic competitors of up to 10 domains.
    pub async fn domain_competitors<S: AsRef<str>>(
        &self, domains: &[S], db: Option<&str>, limit: Option<u32>,
    ) -> Result<Value, Error> {
        let req = self
            .request(Resource::Domains, "competitor", db)?
            .list_param("domain", domains)
            .opt_param("limit", limit);
        self.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seozoom::tests::test_client;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_keyword_type_serde() {
        let kind: DomainKeywordType = serde_json::from_str("\"withtraffic\"").unwrap();
        assert_eq!(kind, DomainKeywordType::WithTraffic);
        assert_eq!(serde_json::to_string(&DomainKeywordType::ByPosition).unwrap(), "\"byposition\"");
        assert!(serde_json::from_str::<DomainKeywordType>("\"sideways\"").is_err());
    }

    #[test]
    fn test_keyword_type_wire_matches_serde() {
        for kind in [
            DomainKeywordType::Best,
            DomainKeywordType::WithTraffic,
            DomainKeywordType::Up,
            DomainKeywordType::Down,
            DomainKeywordType::Stable,
            DomainKeywordType::Entered,
            DomainKeywordType::Exited,
            DomainKeywordType::ByPage,
            DomainKeywordType::ByPosition,
            DomainKeywordType::NewEntry,
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
        }
    }

    #[tokio::test]
    async fn test_domain_metrics_joins_domains() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains/"))
            .and(query_param("action", "metrics"))
            .and(query_param("domain", "example.com|example.org"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        client.domain_metrics(&["example.com", "example.org"], None).await.unwrap();
    }

    #[tokio::test]
    async fn test_niches_default_limit() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains/"))
            .and(query_param("action", "niches"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        client.domain_niches(&["example.com"], None, None).await.unwrap();
    }

    #[tokio::test]
    async fn test_best_pages_omits_limit() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains/"))
            .and(query_param("action", "bestpages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        client.domain_best_pages("example.com", Some("fr"), None).await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        let keys: Vec<String> = requests[0].url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(keys, vec!["api_key", "db", "action", "domain"]);
    }

    #[tokio::test]
    async fn test_domain_keywords_type_and_paging() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains/"))
            .and(query_param("action", "keywords"))
            .and(query_param("domain", "example.com"))
            .and(query_param("type", "entered"))
            .and(query_param("offset", "100"))
            .and(query_param("limit", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        client
            .domain_keywords("example.com", DomainKeywordType::Entered, None, Some(100), Some(50))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_competitor_action_name() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains/"))
            .and(query_param("action", "competitor"))
            .and(query_param("domain", "a.com|b.com"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        client.domain_competitors(&["a.com", "b.com"], None, Some(3)).await.unwrap();
    }
}
