//! Error handling for the content subgraph
//!
//! A single error hierarchy built with thiserror. Every variant maps to one
//! of the GraphQL error codes reported in `extensions.code`. The matching
//! HTTP status class decides how loudly the error is logged.

use async_graphql::ErrorExtensions;
use axum::http::StatusCode;
use thiserror::Error;

/// Postgres SQLSTATE for `unique_violation`
const UNIQUE_VIOLATION: &str = "23505";

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ========== Request Errors ==========
    /// Input failed validation
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Required input was absent or blank
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// No acting identity on a mutating operation
    #[error("authentication required")]
    Unauthorized,

    // ========== Resource Errors ==========
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Concurrent write collided with a uniqueness constraint
    #[error("{resource_type} was modified concurrently: {id}")]
    Conflict {
        resource_type: &'static str,
        id: String,
    },

    // ========== Infrastructure Errors ==========
    #[error("database error: {0}")]
    Database(sqlx::Error),

    #[error("configuration error: {0}")]
    Configuration(String),

    /// Catch-all for unexpected failures
    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Error code reported to GraphQL clients in `extensions.code`
    pub fn graphql_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) | Self::MissingField(_) => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) => {
                "INTERNAL_SERVER_ERROR"
            }
        }
    }

    /// Create a not found error for a specific resource
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Create a conflict error for a specific resource
    pub fn conflict(resource_type: &'static str, id: impl ToString) -> Self {
        Self::Conflict {
            resource_type,
            id: id.to_string(),
        }
    }

    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Message safe to show to a client; internal details stay in the logs
    pub fn public_message(&self) -> String {
        if self.is_internal() {
            "An unexpected error occurred".to_string()
        } else {
            self.to_string()
        }
    }

    /// Log the error with a severity matching its status
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                code = self.graphql_code(),
                status = status.as_u16(),
                "Server error occurred"
            );
        } else if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(
                error = %self,
                code = self.graphql_code(),
                "Unauthenticated mutation rejected"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.graphql_code(),
                status = status.as_u16(),
                "Client error"
            );
        }
    }

    /// Convert into a GraphQL error carrying `extensions.code`
    pub fn into_graphql_error(self) -> async_graphql::Error {
        self.log();
        let code = self.graphql_code();
        async_graphql::Error::new(self.public_message()).extend_with(|_, e| e.set("code", code))
    }
}

/// Adapter for `map_err` in resolvers
pub fn to_graphql_error(error: ApiError) -> async_graphql::Error {
    error.into_graphql_error()
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

// ========== Conversion Implementations ==========

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return Self::conflict(
                    "record",
                    db_err.constraint().unwrap_or("unique constraint"),
                );
            }
        }

        if matches!(err, sqlx::Error::RowNotFound) {
            return Self::not_found("record", "unknown");
        }

        Self::Database(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        // Recognized kinds propagate unchanged
        match err.downcast::<ApiError>() {
            Ok(api_err) => api_err,
            Err(err) => Self::Internal(err.to_string()),
        }
    }
}

impl From<content_shared_config::ConfigError> for ApiError {
    fn from(err: content_shared_config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
