use thiserror::Error;

/// Errors from a movie catalog provider.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog not configured: {0}")]
    NotConfigured(String),

    #[error("invalid API key")]
    InvalidKey,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The provider answered but reported no matching movies.
    #[error("no matching movies")]
    NotFound,

    #[error("parse error: {0}")]
    Parse(String),
}
