//! Keyword endpoints: metrics, SERP, SERP history and related keywords.

use serde_json::Value;
use seozoom_core::Error;

use super::response::usage_field;
use super::{Resource, SeoZoomClient};

/// Limit sent by [`SeoZoomClient::keyword_related`] when none is given.
pub const RELATED_DEFAULT_LIMIT: u32 = 50;

impl SeoZoomClient {
    /// Search volume, KD, CPC, intent and monthly trend for up to 100 keywords.
    pub async fn keyword_metrics<S: AsRef<str>>(&self, keywords: &[S], db: Option<&str>) -> Result<Value, Error> {
        let req = self.request(Resource::Keywords, "metrics", db)?.list_param("keyword", keywords);
        self.execute(req).await
    }

    /// Current organic SERP (up to 50 results) for up to 100 keywords.
    pub async fn keyword_serp<S: AsRef<str>>(&self, keywords: &[S], db: Option<&str>) -> Result<Value, Error> {
        let req = self.request(Resource::Keywords, "serp", db)?.list_param("keyword", keywords);
        self.execute(req).await
    }

    /// SERP snapshot for one keyword on a past date (`yyyy-MM-dd`).
    pub async fn keyword_serp_history(&self, keyword: &str, date: &str, db: Option<&str>) -> Result<Value, Error> {
        let req = self
            .request(Resource::Keywords, "serphistory", db)?
            .param("keyword", keyword)
            .param("date", date);
        self.execute(req).await
    }

    /// Related keywords with volume and SERP affinity.
    ///
    /// Sends `limit=50` when `limit` is `None`.
    pub async fn keyword_related(&self, keyword: &str, db: Option<&str>, limit: Option<u32>) -> Result<Value, Error> {
        let req = self
            .request(Resource::Keywords, "related", db)?
            .param("keyword", keyword)
            .param("limit", limit.unwrap_or(RELATED_DEFAULT_LIMIT));
        self.execute(req).await
    }

    /// Remaining API units, read from a trial keyword-metrics call.
    ///
    /// The trial call itself is billed. Yields `?` when the response carries
    /// no `UnitsRemaining`.
    pub async fn remaining_units(&self) -> Result<String, Error> {
        let data = self.keyword_metrics(&["test"], None).await?;
        Ok(usage_field(&data, "UnitsRemaining"))
    }
}
