//! Request-path error taxonomy and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

/// Errors surfaced while serving a page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Failed to read {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Database unavailable at {}: {source}", path.display())]
    DatabaseUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database query failed: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Request task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::CategoryNotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Filesystem { .. } | AppError::Database(_) | AppError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::CategoryNotFound(_) => "category_not_found",
            AppError::Filesystem { .. } => "filesystem_error",
            AppError::DatabaseUnavailable { .. } => "database_unavailable",
            AppError::Database(_) => "database_error",
            AppError::Task(_) => "internal_error",
        }
    }

    /// Message shown to the client. Infrastructure details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::NotFound(_) | AppError::CategoryNotFound(_) => self.to_string(),
            AppError::DatabaseUnavailable { .. } => "The weapon database is unavailable".to_string(),
            _ => "Something went wrong while loading this page".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(code = self.code(), error = %self, "request failed");
        }
        let title = if status == StatusCode::NOT_FOUND { "NOT FOUND" } else { "ERROR" };
        let body = json!({
            "title": title,
            "error": {
                "code": self.code(),
                "message": self.public_message(),
            }
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::CategoryNotFound("magic".into()).status(),
            StatusCode::NOT_FOUND
        );
        let unavailable = AppError::DatabaseUnavailable {
            path: PathBuf::from("weapons.db"),
            source: rusqlite::Error::InvalidQuery,
        };
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(unavailable.code(), "database_unavailable");
        assert_eq!(
            AppError::Database(rusqlite::Error::InvalidQuery).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_errors_hide_details() {
        let err = AppError::DatabaseUnavailable {
            path: PathBuf::from("/secret/weapons.db"),
            source: rusqlite::Error::InvalidQuery,
        };
        assert!(!err.public_message().contains("/secret"));
    }
}
