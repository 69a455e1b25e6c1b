//! Project endpoints. Projects are identified by their SEOZoom ID.

use serde_json::Value;
use seozoom_core::Error;

use super::{Resource, SeoZoomClient};

impl SeoZoomClient {
    /// All projects of the account with headline metrics.
    pub async fn project_list(&self, db: Option<&str>) -> Result<Value, Error> {
        let req = self.request(Resource::Projects, "list", db)?;
        self.execute(req).await
    }

    /// Project overview: tracked keywords, traffic, ZA, trust.
    pub async fn project_overview(&self, id: &str, db: Option<&str>) -> Result<Value, Error> {
        let req = self.request(Resource::Projects, "overview", db)?.param("id", id);
        self.execute(req).await
    }

    /// Tracked keywords with volume, position and estimated traffic.
    pub async fn project_keywords(&self, id: &str, db: Option<&str>) -> Result<Value, Error> {
        let req = self.request(Resource::Projects, "keywords", db)?.param("id", id);
        self.execute(req).await
    }

    pub async fn project_best_pages(&self, id: &str, db: Option<&str>, limit: Option<u32>) -> Result<Value, Error> {
        self.project_pages("bestpages", id, db, limit).await
    }

    pub async fn project_pages_with_more_keywords(
        &self, id: &str, db: Option<&str>, limit: Option<u32>,
    ) -> Result<Value, Error> {
        self.project_pages("pageswithmorekeywords", id, db, limit).await
    }

    pub async fn project_pages_with_potential(
        &self, id: &str, db: Option<&str>, limit: Option<u32>,
    ) -> Result<Value, Error> {
        self.project_pages("pageswithpotential", id, db, limit).await
    }

    /// Pages with positive traffic variation.
    pub async fn project_winner_pages(&self, id: &str, db: Option<&str>, limit: Option<u32>) -> Result<Value, Error> {
        self.project_pages("winnerpages", id, db, limit).await
    }

    /// Pages with negative traffic variation.
    pub async fn project_loser_pages(&self, id: &str, db: Option<&str>, limit: Option<u32>) -> Result<Value, Error> {
        self.project_pages("loserpages", id, db, limit).await
    }

    async fn project_pages(
        &self, action: &'static str, id: &str, db: Option<&str>, limit: Option<u32>,
    ) -> Result<Value, Error> {
        let req = self
            .request(Resource::Projects, action, db)?
            .param("id", id)
            .opt_param("limit", limit);
        self.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use crate::seozoom::tests::test_client;
    use seozoom_core::Error;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_project_list_has_only_fixed_params() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/"))
            .and(query_param("action", "list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "123"}])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        client.project_list(None).await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query_pairs().count(), 3);
    }

    #[tokio::test]
    async fn test_page_actions() {
        let mock_server = MockServer::start().await;
        for action in ["bestpages", "pageswithmorekeywords", "pageswithpotential", "winnerpages", "loserpages"] {
            Mock::given(method("GET"))
                .and(path("/projects/"))
                .and(query_param("action", action))
                .and(query_param("id", "42"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"action": action})))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = test_client(&mock_server.uri());
        assert_eq!(client.project_best_pages("42", None, None).await.unwrap()["action"], "bestpages");
        assert_eq!(
            client.project_pages_with_more_keywords("42", None, Some(5)).await.unwrap()["action"],
            "pageswithmorekeywords"
        );
        assert_eq!(
            client.project_pages_with_potential("42", None, None).await.unwrap()["action"],
            "pageswithpotential"
        );
        assert_eq!(client.project_winner_pages("42", None, None).await.unwrap()["action"], "winnerpages");
        assert_eq!(client.project_loser_pages("42", None, None).await.unwrap()["action"], "loserpages");
    }

    #[tokio::test]
    async fn test_upstream_message_surfaces() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client.project_overview("42", None).await.unwrap_err();
        assert_eq!(err.message(), "Invalid API key");
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_server_error_without_json() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client.project_keywords("42", None).await.unwrap_err();
        assert_eq!(err, Error::http(500, "HTTP 500"));
    }
}
