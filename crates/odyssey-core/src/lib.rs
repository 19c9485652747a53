//! Shared domain types and configuration for the location detail page.

mod app_config;
mod config;
pub mod location;
mod source;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use location::{
    coalesce_rating, ActivityPayload, LocationId, LocationPayload, ReviewPayload, StatValue,
    StatsPayload,
};
pub use source::LocationSource;

use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("location id must be non-empty")]
    EmptyLocationId,
}
