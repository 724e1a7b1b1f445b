//! Dashboard Handler

use axum::{extract::State, http::StatusCode, response::Response, routing::get, Router};
use serde_json::json;

use super::render;
use crate::infrastructure::driving_adapters::web::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET / - Landing page with record counts
#[axum::debug_handler]
async fn index(State(state): State<AppState>) -> Result<Response, ApiError> {
    let counts = state.get_dashboard_counts_use_case.execute().await?;

    render(
        &state,
        StatusCode::OK,
        "index",
        &json!({
            "counts": {
                "patients": counts.patients,
                "doctors": counts.doctors,
                "appointments": counts.appointments,
            }
        }),
    )
}
