//! Doctor Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde_json::json;

use super::{form_errors, render, shown_on_list};
use crate::domain::models::doctor::DoctorId;
use crate::infrastructure::driving_adapters::web::dto::{DoctorForm, DoctorView, ListQuery, Notice};
use crate::infrastructure::driving_adapters::web::AppState;
use crate::shared::errors::ApiError;

const LIST_PATH: &str = "/doctors";

/// Create the router for doctor pages
pub fn router() -> Router<AppState> {
    Router::new()
        .route(LIST_PATH, get(list_doctors))
        .route("/add_doctor", get(add_doctor_form).post(add_doctor))
        .route("/delete_doctor/{id}", get(delete_doctor_link).post(delete_doctor))
}

async fn list_page(
    state: &AppState,
    status: StatusCode,
    notice: Option<String>,
    errors: Vec<String>,
) -> Result<Response, ApiError> {
    let doctors = state.list_doctors_use_case.execute().await?;
    let rows: Vec<DoctorView> = doctors.iter().map(DoctorView::from).collect();

    render(
        state,
        status,
        "doctors",
        &json!({ "doctors": rows, "notice": notice, "errors": errors }),
    )
}

/// GET /doctors
#[axum::debug_handler]
async fn list_doctors(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    list_page(&state, StatusCode::OK, query.notice_message("Doctor"), Vec::new()).await
}

/// GET /add_doctor
#[axum::debug_handler]
async fn add_doctor_form(State(state): State<AppState>) -> Result<Response, ApiError> {
    render(
        &state,
        StatusCode::OK,
        "add_doctor",
        &json!({ "form": DoctorForm::default(), "errors": [] }),
    )
}

/// POST /add_doctor
///
/// * 303 See Other - Doctor created
/// * 400 Bad Request - Form re-rendered with the validation messages
#[axum::debug_handler]
async fn add_doctor(
    State(state): State<AppState>,
    Form(form): Form<DoctorForm>,
) -> Result<Response, ApiError> {
    let result = match form.to_data() {
        Ok(data) => state.create_doctor_use_case.execute(data).await.map(|_| ()),
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => Ok(Notice::Added.redirect_to(LIST_PATH).into_response()),
        Err(err) => {
            let errors = form_errors(err)?;
            render(
                &state,
                StatusCode::BAD_REQUEST,
                "add_doctor",
                &json!({ "form": form, "errors": errors }),
            )
        }
    }
}

/// GET /delete_doctor/{id}
#[axum::debug_handler]
async fn delete_doctor_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    tracing::warn!(doctor_id = %id, "Doctor deleted through a GET request");
    remove_doctor(&state, &id).await
}

/// POST /delete_doctor/{id}
///
/// * 303 See Other - Doctor deleted
/// * 404 Not Found - Doctor list with an error
/// * 409 Conflict - Doctor still has appointments
#[axum::debug_handler]
async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    remove_doctor(&state, &id).await
}

async fn remove_doctor(state: &AppState, id: &str) -> Result<Response, ApiError> {
    let doctor_id = DoctorId::try_from(id).map_err(|_| ApiError::InvalidId(id.to_string()))?;

    match state.delete_doctor_use_case.execute(doctor_id).await {
        Ok(()) => Ok(Notice::Deleted.redirect_to(LIST_PATH).into_response()),
        Err(err) if shown_on_list(&err) => {
            list_page(state, err.status_code(), None, err.user_messages()).await
        }
        Err(err) => Err(err.into()),
    }
}
