//! Loader error types.

use thiserror::Error;
use vitrine_catalog::NotFound;
use vitrine_manifest::ValidationError;

/// Result type for loader contract operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// A third-party manifest could not be fetched or accepted.
///
/// Always recoverable: the session keeps serving the catalog it already
/// published, so first-party navigation works even while a third-party
/// source is broken.
#[derive(Debug, Error)]
pub enum ExternalManifestError {
    /// The HTTP request failed, at transport level or with an error status.
    #[error("manifest fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The response body is not JSON at all.
    #[error("manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The body parsed, but does not have the manifest shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The response body exceeds the configured size cap.
    #[error("manifest is {size} bytes, the limit is {limit}")]
    TooLarge { size: usize, limit: usize },
}

/// Errors surfaced through the loader contracts.
///
/// "Nothing matched this identifier" and "the third-party source is broken"
/// are different user-facing conditions and are never collapsed into one
/// generic failure.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("third-party manifest rejected: {0}")]
    External(#[from] ExternalManifestError),
}

impl LoadError {
    /// True when this is an absent identifier rather than a broken source.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_))
    }
}
