use thiserror::Error;

/// Errors from the core layer.
#[derive(Debug, Error)]
pub enum PopcornError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    /// The provider's free-text runtime carried no leading numeric token.
    #[error("unparsable runtime: {0:?}")]
    InvalidRuntime(String),
}
