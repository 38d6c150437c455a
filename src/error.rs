//! Failure kinds surfaced while mounting the page features.
//!
//! None of these are fatal to the page: the entry point logs the error for
//! the feature that failed and carries on mounting the rest.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("element `{0}` not found")]
    MissingElement(String),

    #[error("2d drawing context unavailable")]
    NoDrawingContext,

    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("typing cycler needs at least one role")]
    NoRoles,

    #[error("host call failed: {0}")]
    Host(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
