//! Error Types
//!
//! Layered error types with HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use super::html::escape_html;

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Constraint violated: {0}")]
    Constraint(String),
}

impl RepositoryError {
    /// Classify a statement failure, separating foreign key violations
    /// from other database errors.
    #[must_use]
    pub fn from_statement(err: sqlx::Error) -> Self {
        match err.as_database_error() {
            Some(db_err) if db_err.is_foreign_key_violation() => {
                Self::Constraint(db_err.message().to_string())
            }
            _ => Self::Database(err),
        }
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{resource} with id {id} not found")]
    NotFound { resource: String, id: String },

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }

    /// Messages suitable for showing next to a form or list
    #[must_use]
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            Self::Validation(messages) => messages.clone(),
            Self::Repository(_) => vec!["An unexpected error occurred".to_string()],
            other => vec![other.to_string()],
        }
    }
}

/// View rendering failures
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("View '{view}' is missing '{key}'")]
    MissingValue { view: String, key: String },
}

/// Errors surfaced by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Machine-readable code shown on the error page
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::UseCase(uc_error) => uc_error.error_code(),
            ApiError::InvalidId(_) => "INVALID_ID",
            ApiError::Render(_) | ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::UseCase(uc_error) => {
                let message = uc_error.user_messages().join("; ");
                (uc_error.status_code(), message)
            }
            ApiError::InvalidId(raw) => (
                StatusCode::BAD_REQUEST,
                format!("'{raw}' is not a valid record id"),
            ),
            ApiError::Render(_) | ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let body = format!(
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{code} {reason}</title></head>\
             <body><h1>{code} {reason}</h1><p class=\"error\" data-code=\"{error_code}\">{message}</p>\
             <p><a href=\"/\">Back to dashboard</a></p></body></html>\n",
            code = status.as_u16(),
            error_code = self.error_code(),
            reason = status.canonical_reason().unwrap_or("Error"),
            message = escape_html(&message),
        );

        (status, Html(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for UseCaseError {
    fn from(err: validator::ValidationErrors) -> Self {
        UseCaseError::Validation(validation_messages(&err))
    }
}

/// Flatten field errors into `field: message` strings, sorted by field name
#[must_use]
pub fn validation_messages(err: &validator::ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = err.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                format!(
                    "{}: {}",
                    field,
                    e.message.as_ref().map_or("invalid", |m| m.as_ref())
                )
            })
        })
        .collect()
}
