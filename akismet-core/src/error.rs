use thiserror::Error;

/// Errors raised before a request ever reaches the network.
///
/// Transport failures are deliberately absent: they are reported through
/// [`crate::Verdict::Unreachable`] on an otherwise successful call.
#[derive(Debug, Error)]
pub enum AkismetError {
    /// Blank API key, or blank/missing blog URL.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The comment cannot be turned into a request body.
    #[error("invalid comment: {0}")]
    Validation(String),

    #[error("comment JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AkismetError>;
