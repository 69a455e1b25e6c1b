//! URL endpoints: page authority, metrics, ranked keywords and intent gap.

use serde_json::Value;
use seozoom_core::Error;

use super::{Resource, SeoZoomClient};

impl SeoZoomClient {
    /// Page Zoom Authority of a single URL.
    pub async fn url_page_authority(&self, url: &str, db: Option<&str>) -> Result<Value, Error> {
        let req = self.request(Resource::Urls, "urlpza", db)?.param("url", url);
        self.execute(req).await
    }

    /// Total keywords, traffic and PZA for up to 30 URLs.
    pub async fn url_metrics<S: AsRef<str>>(&self, urls: &[S], db: Option<&str>) -> Result<Value, Error> {
        let req = self.request(Resource::Urls, "metrics", db)?.list_param("url", urls);
        self.execute(req).await
    }

    /// Keywords a URL ranks for, with volume, position and CPC.
    pub async fn url_keywords(&self, url: &str, db: Option<&str>, limit: Option<u32>) -> Result<Value, Error> {
        let req = self
            .request(Resource::Urls, "keywords", db)?
            .param("url", url)
            .opt_param("limit", limit);
        self.execute(req).await
    }

    /// Keywords with untapped potential for a URL.
    pub async fn url_intent_gap(&self, url: &str, db: Option<&str>, limit: Option<u32>) -> Result<Value, Error> {
        let req = self
            .request(Resource::Urls, "intentgap", db)?
            .param("url", url)
            .opt_param("limit", limit);
        self.execute(req).await
    }
}
