//! Client code for the SEOZoom MCP server.
//!
//! This crate provides the SEOZoom v2 API client: request construction,
//! the shared HTTP transport, upstream error translation, and rendering of the
//! usage-metadata envelope.

pub mod seozoom;

pub use seozoom::{
    ApiRequest, DomainKeywordType, Resource, SeoZoomClient, SeoZoomConfig, format_envelope, translate_error,
};
