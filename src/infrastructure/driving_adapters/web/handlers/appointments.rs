//! Appointment Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde_json::json;

use super::{form_errors, render, shown_on_list};
use crate::domain::models::appointment::AppointmentId;
use crate::infrastructure::driving_adapters::web::dto::{
    AppointmentForm, AppointmentView, ListQuery, Notice, OptionView,
};
use crate::infrastructure::driving_adapters::web::AppState;
use crate::shared::errors::ApiError;

const LIST_PATH: &str = "/appointments";

/// Create the router for appointment pages
pub fn router() -> Router<AppState> {
    Router::new()
        .route(LIST_PATH, get(list_appointments))
        .route("/add_appointment", get(add_appointment_form).post(add_appointment))
        .route(
            "/delete_appointment/{id}",
            get(delete_appointment_link).post(delete_appointment),
        )
}

async fn list_page(
    state: &AppState,
    status: StatusCode,
    notice: Option<String>,
    errors: Vec<String>,
) -> Result<Response, ApiError> {
    let appointments = state.list_appointments_use_case.execute().await?;
    let rows: Vec<AppointmentView> = appointments.iter().map(AppointmentView::from).collect();

    render(
        state,
        status,
        "appointments",
        &json!({ "appointments": rows, "notice": notice, "errors": errors }),
    )
}

/// Booking form with the current patients and doctors to choose from
async fn booking_page(
    state: &AppState,
    status: StatusCode,
    form: &AppointmentForm,
    errors: Vec<String>,
) -> Result<Response, ApiError> {
    let patients = state.list_patients_use_case.execute().await?;
    let doctors = state.list_doctors_use_case.execute().await?;
    let patient_options: Vec<OptionView> = patients.iter().map(OptionView::from).collect();
    let doctor_options: Vec<OptionView> = doctors.iter().map(OptionView::from).collect();

    render(
        state,
        status,
        "add_appointment",
        &json!({
            "patients": patient_options,
            "doctors": doctor_options,
            "form": form,
            "errors": errors,
        }),
    )
}

/// GET /appointments - Newest first, with patient and doctor names
#[axum::debug_handler]
async fn list_appointments(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    list_page(&state, StatusCode::OK, query.notice_message("Appointment"), Vec::new()).await
}

/// GET /add_appointment
#[axum::debug_handler]
async fn add_appointment_form(State(state): State<AppState>) -> Result<Response, ApiError> {
    booking_page(&state, StatusCode::OK, &AppointmentForm::default(), Vec::new()).await
}

/// POST /add_appointment
///
/// * 303 See Other - Appointment booked
/// * 400 Bad Request - Form re-rendered; includes unknown patient or doctor
#[axum::debug_handler]
async fn add_appointment(
    State(state): State<AppState>,
    Form(form): Form<AppointmentForm>,
) -> Result<Response, ApiError> {
    let result = match form.to_data() {
        Ok(data) => state.create_appointment_use_case.execute(data).await.map(|_| ()),
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => Ok(Notice::Booked.redirect_to(LIST_PATH).into_response()),
        Err(err) => {
            let errors = form_errors(err)?;
            booking_page(&state, StatusCode::BAD_REQUEST, &form, errors).await
        }
    }
}

/// GET /delete_appointment/{id}
#[axum::debug_handler]
async fn delete_appointment_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    tracing::warn!(appointment_id = %id, "Appointment deleted through a GET request");
    remove_appointment(&state, &id).await
}

/// POST /delete_appointment/{id}
///
/// * 303 See Other - Appointment deleted
/// * 404 Not Found - Appointment list with an error
#[axum::debug_handler]
async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    remove_appointment(&state, &id).await
}

async fn remove_appointment(state: &AppState, id: &str) -> Result<Response, ApiError> {
    let appointment_id = AppointmentId::try_from(id).map_err(|_| ApiError::InvalidId(id.to_string()))?;

    match state.delete_appointment_use_case.execute(appointment_id).await {
        Ok(()) => Ok(Notice::Deleted.redirect_to(LIST_PATH).into_response()),
        Err(err) if shown_on_list(&err) => {
            list_page(state, err.status_code(), None, err.user_messages()).await
        }
        Err(err) => Err(err.into()),
    }
}
