//! SEOZoom v2 API client.
//!
//! Provides an authenticated client for the SEOZoom keyword, domain, URL and
//! project endpoints.
//!
//! ### Protocol
//!
//! - **Endpoint**: `https://apiv2.seozoom.com/api/v2/{resource}/`
//! - **Authentication**: `api_key` query parameter on every request.
//! - **Database**: `db` query parameter, one of `it`, `es`, `fr`, `de`, `uk`.
//!   Calls without one use the configured default.
//! - **Errors**: status >= 400 becomes a transport error carrying the body's
//!   `message` (or `HTTP {status}`). No retries.
//! - **Responses**: returned as opaque JSON; see [`format_envelope`] for the
//!   text rendering used by the tools.

pub mod domains;
pub mod error;
pub mod keywords;
pub mod projects;
pub mod request;
pub mod response;
pub mod urls;

pub use domains::DomainKeywordType;
pub use error::translate_error;
pub use request::{ApiRequest, LIST_SEPARATOR, Resource};
pub use response::format_envelope;

use reqwest::header;
use serde_json::Value;
use seozoom_core::{AppConfig, Database, Error};
use std::time::{Duration, Instant};
use url::Url;

/// SEOZoom client configuration.
#[derive(Debug, Clone)]
pub struct SeoZoomConfig {
    /// API key from SEOZOOM_API_KEY.
    pub api_key: String,
    /// Database code used when a call names none (default: it).
    pub default_db: String,
    /// Base URL (default: https://apiv2.seozoom.com/api/v2).
    pub base_url: String,
    /// Request timeout (default: 30s).
    pub timeout: Duration,
    /// User-agent string (default: seozoom-mcp/0.x).
    pub user_agent: String,
}

impl Default for SeoZoomConfig {
    /// Same defaults as [`AppConfig::default`], without an API key.
    fn default() -> Self {
        let app = AppConfig::default();
        Self {
            api_key: String::new(),
            timeout: app.timeout(),
            default_db: app.default_db,
            base_url: app.base_url,
            user_agent: app.user_agent,
        }
    }
}

impl SeoZoomConfig {
    /// Build the client configuration from loaded application config.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the API key is missing or empty.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, Error> {
        let api_key = config.require_api_key()?.to_string();

        Ok(Self {
            api_key,
            default_db: config.default_db.clone(),
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        })
    }
}

/// SEOZoom API client.
///
/// Cheap to share: the underlying connection pool is reference counted and
/// nothing is mutated after construction.
#[derive(Debug, Clone)]
pub struct SeoZoomClient {
    http: reqwest::Client,
    api_key: String,
    default_db: Database,
    base_url: Url,
}

impl SeoZoomClient {
    /// Create a new client with the given configuration.
    ///
    /// The API key is checked first, then the base URL, then the default
    /// database code.
    ///
    /// # Errors
    ///
    /// - `Error::Configuration` for a missing API key, an unusable base URL,
    ///   or an HTTP client that cannot be built
    /// - `Error::Validation` for an unknown default database code
    pub fn new(config: SeoZoomConfig) -> Result<Self, Error> {
        if config.api_key.is_empty() {
            return Err(Error::Configuration(
                "missing API key: SEOZOOM_API_KEY environment variable is required".to_string(),
            ));
        }

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::Configuration(format!("invalid base URL '{}': {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Configuration(format!("invalid base URL '{}': not a hierarchical URL", config.base_url)));
        }

        let default_db: Database = config.default_db.parse()?;

        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, api_key: config.api_key, default_db, base_url })
    }

    /// Create a new client from loaded application config.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, Error> {
        Self::new(SeoZoomConfig::from_app_config(config)?)
    }

    /// Create a new client from environment variables (and config file).
    pub fn from_env() -> Result<Self, Error> {
        Self::from_app_config(&AppConfig::load()?)
    }

    /// The database used when a call does not name one.
    pub fn default_db(&self) -> Database {
        self.default_db
    }

    /// Resolve and validate a per-call database code.
    pub fn resolve_db(&self, db: Option<&str>) -> Result<Database, Error> {
        Database::resolve(db, self.default_db)
    }

    /// Full URL for `req`, API key included.
    pub fn request_url(&self, req: &ApiRequest) -> Url {
        req.to_url(&self.base_url, &self.api_key)
    }

    /// Issue one authenticated GET and return the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` on connection failure, timeout, status >= 400
    /// or a success body that is not JSON.
    pub async fn execute(&self, req: ApiRequest) -> Result<Value, Error> {
        let start = Instant::now();
        let url = self.request_url(&req);

        tracing::debug!(
            resource = req.resource().as_str(),
            action = req.action(),
            db = %req.db(),
            "calling SEOZoom API"
        );

        let http_response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(error::from_reqwest)?;

        let status = http_response.status();
        let bytes = http_response.bytes().await.map_err(error::from_reqwest)?;

        tracing::debug!(status = status.as_u16(), elapsed = ?start.elapsed(), "SEOZoom API response");

        if status.as_u16() >= 400 {
            let err = translate_error(status, &bytes);
            tracing::warn!(
                resource = req.resource().as_str(),
                action = req.action(),
                status = status.as_u16(),
                "SEOZoom API error: {}",
                err.message()
            );
            return Err(err);
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| Error::http(status.as_u16(), format!("invalid JSON response: {e}")))
    }

    /// Start a request on `resource` after validating the database code.
    fn request(&self, resource: Resource, action: &'static str, db: Option<&str>) -> Result<ApiRequest, Error> {
        Ok(ApiRequest::new(resource, action, self.resolve_db(db)?))
    }
}
