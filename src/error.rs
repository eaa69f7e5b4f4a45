//! Error types for the storefront profile crate.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by default-flag operations on an item collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The referenced id is not in the collection
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The operation needs at least one item
    #[error("Collection is empty")]
    EmptyCollection,
}

/// Errors that can occur when talking to the profile/update service.
#[derive(Error, Debug)]
pub enum ProfileApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Country table file could not be read or parsed
    #[error("Failed to load country table from {path}: {reason}")]
    CountryTable { path: String, reason: String },
}

/// Errors surfaced to form handlers by the service layer.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ProfileApiError),
}

/// Convenience type alias for Results with CollectionError
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Convenience type alias for Results with ProfileApiError
pub type ProfileApiResult<T> = Result<T, ProfileApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ProfileError
pub type ProfileResult<T> = Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationReason;

    #[test]
    fn test_error_display() {
        let err = CollectionError::NotFound("addr_9".to_string());
        assert_eq!(err.to_string(), "Item not found: addr_9");

        let err = CollectionError::EmptyCollection;
        assert_eq!(err.to_string(), "Collection is empty");

        let err = ConfigError::MissingVar("PROFILE_API_TOKEN".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: PROFILE_API_TOKEN"
        );

        let err = ProfileApiError::Unauthorized;
        assert_eq!(err.to_string(), "Authentication failed");
    }

    #[test]
    fn test_api_error_variants() {
        let err = ProfileApiError::ApiError {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("Bad gateway"));
    }

    #[test]
    fn test_profile_error_is_transparent() {
        let err: ProfileError = CollectionError::NotFound("pm_1".to_string()).into();
        assert_eq!(err.to_string(), "Item not found: pm_1");

        let err: ProfileError = ValidationError::new(ValidationReason::Empty, "").into();
        assert!(matches!(err, ProfileError::Validation(_)));
    }
}
