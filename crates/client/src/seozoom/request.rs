//! SEOZoom API request construction.
//!
//! Every call is a GET on `{base_url}/{resource}/` whose query carries the API
//! key, the database code, an `action` discriminator and the operation's own
//! parameters. List-valued parameters are joined with `|` into a single value,
//! and absent optional parameters are never sent.

use seozoom_core::Database;
use url::Url;

/// Separator for multi-value parameters (keywords, domains, URLs).
pub const LIST_SEPARATOR: &str = "|";

/// Top-level SEOZoom API resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Keywords,
    Domains,
    Urls,
    Projects,
}

impl Resource {
    /// Path segment for this resource.
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Keywords => "keywords",
            Resource::Domains => "domains",
            Resource::Urls => "urls",
            Resource::Projects => "projects",
        }
    }
}

/// A single API call, built fresh for every operation.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    resource: Resource,
    action: &'static str,
    db: Database,
    params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// Start a request for `action` on `resource` against database `db`.
    pub fn new(resource: Resource, action: &'static str, db: Database) -> Self {
        Self { resource, action, db, params: Vec::new() }
    }

    /// Add a required parameter.
    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    /// Add an optional parameter; `None` leaves the query untouched.
    pub fn opt_param<T: ToString>(self, name: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Add a multi-value parameter as one `|`-joined value.
    ///
    /// An empty slice is still sent, as an empty value; the upstream decides
    /// how to answer (and bills the call).
    pub fn list_param<S: AsRef<str>>(self, name: &'static str, values: &[S]) -> Self {
        self.param(name, join_values(values))
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn action(&self) -> &'static str {
        self.action
    }

    pub fn db(&self) -> Database {
        self.db
    }

    /// Operation parameters in insertion order, excluding key, db and action.
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Full request URL, query included.
    ///
    /// `base` must be a hierarchical URL (checked when the client is built).
    pub fn to_url(&self, base: &Url, api_key: &str) -> Url {
        let mut url = base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(self.resource.as_str()).push("");
        }

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("api_key", api_key)
                .append_pair("db", self.db.as_str())
                .append_pair("action", self.action);
            for (name, value) in &self.params {
                query.append_pair(name, value);
            }
        }

        url
    }
}

/// Join values with [`LIST_SEPARATOR`].
pub fn join_values<S: AsRef<str>>(values: &[S]) -> String {
    values.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(LIST_SEPARATOR)
}
