//! Patient Handlers
//!
//! List, add, edit and delete pages for patients. Successful writes
//! redirect to the list with a notice.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde_json::json;

use super::{form_errors, render, shown_on_list};
use crate::domain::models::patient::PatientId;
use crate::infrastructure::driving_adapters::web::dto::{ListQuery, Notice, PatientForm, PatientView};
use crate::infrastructure::driving_adapters::web::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

const LIST_PATH: &str = "/patients";

/// Create the router for patient pages
pub fn router() -> Router<AppState> {
    Router::new()
        .route(LIST_PATH, get(list_patients))
        .route("/add_patient", get(add_patient_form).post(add_patient))
        .route("/edit_patient/{id}", get(edit_patient_form).post(edit_patient))
        .route("/delete_patient/{id}", get(delete_patient_link).post(delete_patient))
}

/// Render the list page with a notice or errors
async fn list_page(
    state: &AppState,
    status: StatusCode,
    notice: Option<String>,
    errors: Vec<String>,
) -> Result<Response, ApiError> {
    let patients = state.list_patients_use_case.execute().await?;
    let rows: Vec<PatientView> = patients.iter().map(PatientView::from).collect();

    render(
        state,
        status,
        "patients",
        &json!({ "patients": rows, "notice": notice, "errors": errors }),
    )
}

/// Show NotFound and Conflict on the list page; anything else is an error page
async fn list_with_error(state: &AppState, err: UseCaseError) -> Result<Response, ApiError> {
    if shown_on_list(&err) {
        list_page(state, err.status_code(), None, err.user_messages()).await
    } else {
        Err(err.into())
    }
}

/// GET /patients
#[axum::debug_handler]
async fn list_patients(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    list_page(&state, StatusCode::OK, query.notice_message("Patient"), Vec::new()).await
}

/// GET /add_patient
#[axum::debug_handler]
async fn add_patient_form(State(state): State<AppState>) -> Result<Response, ApiError> {
    render(
        &state,
        StatusCode::OK,
        "add_patient",
        &json!({ "form": PatientForm::default(), "errors": [] }),
    )
}

/// POST /add_patient
///
/// * 303 See Other - Patient created
/// * 400 Bad Request - Form re-rendered with the validation messages
#[axum::debug_handler]
async fn add_patient(
    State(state): State<AppState>,
    Form(form): Form<PatientForm>,
) -> Result<Response, ApiError> {
    let result = match form.to_data() {
        Ok(data) => state.create_patient_use_case.execute(data).await.map(|_| ()),
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => Ok(Notice::Added.redirect_to(LIST_PATH).into_response()),
        Err(err) => {
            let errors = form_errors(err)?;
            render(
                &state,
                StatusCode::BAD_REQUEST,
                "add_patient",
                &json!({ "form": form, "errors": errors }),
            )
        }
    }
}

/// GET /edit_patient/{id} - Form pre-filled with the current record
#[axum::debug_handler]
async fn edit_patient_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let patient_id = PatientId::try_from(id.as_str()).map_err(|_| ApiError::InvalidId(id.clone()))?;

    match state.get_patient_by_id_use_case.execute(patient_id).await {
        Ok(patient) => render(
            &state,
            StatusCode::OK,
            "edit_patient",
            &json!({ "id": patient_id.value(), "form": PatientForm::from(&patient), "errors": [] }),
        ),
        Err(err) => list_with_error(&state, err).await,
    }
}

/// POST /edit_patient/{id}
///
/// * 303 See Other - Patient updated
/// * 400 Bad Request - Form re-rendered with the validation messages
/// * 404 Not Found - Patient list with an error
#[axum::debug_handler]
async fn edit_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<PatientForm>,
) -> Result<Response, ApiError> {
    let patient_id = PatientId::try_from(id.as_str()).map_err(|_| ApiError::InvalidId(id.clone()))?;

    // An unknown record takes precedence over form problems
    if let Err(err) = state.get_patient_by_id_use_case.execute(patient_id).await {
        return list_with_error(&state, err).await;
    }

    let data = match form.to_data() {
        Ok(data) => data,
        Err(err) => {
            let errors = form_errors(err)?;
            return render(
                &state,
                StatusCode::BAD_REQUEST,
                "edit_patient",
                &json!({ "id": patient_id.value(), "form": form, "errors": errors }),
            );
        }
    };

    match state.update_patient_use_case.execute(patient_id, data).await {
        Ok(_) => Ok(Notice::Updated.redirect_to(LIST_PATH).into_response()),
        Err(err) => list_with_error(&state, err).await,
    }
}

/// GET /delete_patient/{id} - Kept for plain links; the list page posts instead
#[axum::debug_handler]
async fn delete_patient_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    tracing::warn!(patient_id = %id, "Patient deleted through a GET request");
    remove_patient(&state, &id).await
}

/// POST /delete_patient/{id}
///
/// * 303 See Other - Patient deleted
/// * 404 Not Found - Patient list with an error
/// * 409 Conflict - Patient still has appointments
#[axum::debug_handler]
async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    remove_patient(&state, &id).await
}

async fn remove_patient(state: &AppState, id: &str) -> Result<Response, ApiError> {
    let patient_id = PatientId::try_from(id).map_err(|_| ApiError::InvalidId(id.to_string()))?;

    match state.delete_patient_use_case.execute(patient_id).await {
        Ok(()) => Ok(Notice::Deleted.redirect_to(LIST_PATH).into_response()),
        Err(err) => list_with_error(state, err).await,
    }
}
