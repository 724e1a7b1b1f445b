//! Page Handlers
//!
//! One module per area of the site. Each exposes a `router()` merged by
//! the web module.

pub mod appointments;
pub mod dashboard;
pub mod doctors;
pub mod patients;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde_json::Value;

use super::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

/// Render `view` with `context` and wrap it in an HTML response
fn render(state: &AppState, status: StatusCode, view: &str, context: &Value) -> Result<Response, ApiError> {
    let page = state.views.render(view, context)?;
    Ok((status, Html(page)).into_response())
}

/// Messages to show next to a rejected form.
///
/// Anything other than a validation failure is passed back as an error.
fn form_errors(err: UseCaseError) -> Result<Vec<String>, ApiError> {
    match err {
        UseCaseError::Validation(messages) => Ok(messages),
        other => Err(other.into()),
    }
}

/// Whether the failure should be shown on the list page rather than an error page
fn shown_on_list(err: &UseCaseError) -> bool {
    matches!(err, UseCaseError::NotFound { .. } | UseCaseError::Conflict(_))
}
