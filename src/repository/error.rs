//! Failures reported by a [`Repository`](super::Repository).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error code the store attaches to a product delete vetoed by referencing sales.
pub const PRODUCT_HAS_SALES: &str = "PRODUCT_HAS_SALES";

/// JSON error body returned by the backend: `{"error": "...", "code": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A request the store understood and refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} ({status})", .body.error)]
pub struct ApiError {
    pub status: u16,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: u16, error: impl Into<String>, code: Option<&str>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: error.into(),
                code: code.map(str::to_string),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Rejected(#[from] ApiError),

    /// The store could not be reached or answered with something unreadable.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl RepositoryError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        RepositoryError::Transport(err.to_string())
    }

    /// True only for the structured referential-integrity signal: status 400 with code
    /// `PRODUCT_HAS_SALES`. The message text is never consulted.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            RepositoryError::Rejected(ApiError { status: 400, body })
                if body.code.as_deref() == Some(PRODUCT_HAS_SALES)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::Rejected(ApiError { status: 404, .. }))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RepositoryError::Rejected(api) => Some(api.status),
            RepositoryError::Transport(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_needs_status_and_code() {
        let conflict =
            RepositoryError::from(ApiError::new(400, "has sales", Some(PRODUCT_HAS_SALES)));
        assert!(conflict.is_conflict());

        let wrong_status =
            RepositoryError::from(ApiError::new(409, "has sales", Some(PRODUCT_HAS_SALES)));
        assert!(!wrong_status.is_conflict());

        let no_code = RepositoryError::from(ApiError::new(
            400,
            "This product has existing sales and cant be removed",
            None,
        ));
        assert!(!no_code.is_conflict());

        assert!(!RepositoryError::Transport("timed out".into()).is_conflict());
    }

    #[test]
    fn not_found_is_any_404() {
        let missing = ApiError::new(404, "Product not found", None);
        assert!(RepositoryError::from(missing).is_not_found());
        assert!(!RepositoryError::Transport("404".into()).is_not_found());
    }

    #[test]
    fn error_body_tolerates_missing_code() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "Sale not found"}"#).unwrap();
        assert_eq!(body.code, None);
        assert_eq!(
            ApiError { status: 404, body }.to_string(),
            "Sale not found (404)"
        );
    }
}
