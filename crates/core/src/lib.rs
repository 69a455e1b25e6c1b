//! Core types and shared functionality for the SEOZoom MCP server.
//!
//! This crate provides:
//! - The unified error taxonomy (configuration, validation, transport)
//! - Country database codes and their validation
//! - Layered configuration loading

pub mod config;
pub mod database;
pub mod error;

pub use config::{AppConfig, ConfigError};
pub use database::Database;
pub use error::Error;
