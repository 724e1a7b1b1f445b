//! Web Module
//!
//! Contains page handlers, form DTOs, and middleware for the front office site.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    CreateAppointmentUseCase, CreateDoctorUseCase, CreatePatientUseCase, DeleteAppointmentUseCase,
    DeleteDoctorUseCase, DeletePatientUseCase, GetDashboardCountsUseCase, GetPatientByIdUseCase,
    ListAppointmentsUseCase, ListDoctorsUseCase, ListPatientsUseCase, UpdatePatientUseCase,
};
use crate::domain::gateways::{
    AppointmentRepository, DoctorRepository, PatientRepository, ViewRenderer,
};
use crate::infrastructure::driven_adapters::{
    SqliteAppointmentRepository, SqliteDoctorRepository, SqlitePatientRepository,
    StorageGateway,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub views: Arc<dyn ViewRenderer>,
    pub get_dashboard_counts_use_case: Arc<GetDashboardCountsUseCase>,
    pub list_patients_use_case: Arc<ListPatientsUseCase>,
    pub get_patient_by_id_use_case: Arc<GetPatientByIdUseCase>,
    pub create_patient_use_case: Arc<CreatePatientUseCase>,
    pub update_patient_use_case: Arc<UpdatePatientUseCase>,
    pub delete_patient_use_case: Arc<DeletePatientUseCase>,
    pub list_doctors_use_case: Arc<ListDoctorsUseCase>,
    pub create_doctor_use_case: Arc<CreateDoctorUseCase>,
    pub delete_doctor_use_case: Arc<DeleteDoctorUseCase>,
    pub list_appointments_use_case: Arc<ListAppointmentsUseCase>,
    pub create_appointment_use_case: Arc<CreateAppointmentUseCase>,
    pub delete_appointment_use_case: Arc<DeleteAppointmentUseCase>,
}

impl AppState {
    /// Wire the SQLite repositories and every use case around one storage gateway
    #[must_use]
    pub fn new(storage: &StorageGateway, views: Arc<dyn ViewRenderer>) -> Self {
        let patients: Arc<dyn PatientRepository> =
            Arc::new(SqlitePatientRepository::new(storage.clone()));
        let doctors: Arc<dyn DoctorRepository> =
            Arc::new(SqliteDoctorRepository::new(storage.clone()));
        let appointments: Arc<dyn AppointmentRepository> =
            Arc::new(SqliteAppointmentRepository::new(storage.clone()));

        Self {
            views,
            get_dashboard_counts_use_case: Arc::new(GetDashboardCountsUseCase::new(
                patients.clone(),
                doctors.clone(),
                appointments.clone(),
            )),
            list_patients_use_case: Arc::new(ListPatientsUseCase::new(patients.clone())),
            get_patient_by_id_use_case: Arc::new(GetPatientByIdUseCase::new(patients.clone())),
            create_patient_use_case: Arc::new(CreatePatientUseCase::new(patients.clone())),
            update_patient_use_case: Arc::new(UpdatePatientUseCase::new(patients.clone())),
            delete_patient_use_case: Arc::new(DeletePatientUseCase::new(
                patients.clone(),
                appointments.clone(),
            )),
            list_doctors_use_case: Arc::new(ListDoctorsUseCase::new(doctors.clone())),
            create_doctor_use_case: Arc::new(CreateDoctorUseCase::new(doctors.clone())),
            delete_doctor_use_case: Arc::new(DeleteDoctorUseCase::new(
                doctors.clone(),
                appointments.clone(),
            )),
            list_appointments_use_case: Arc::new(ListAppointmentsUseCase::new(appointments.clone())),
            create_appointment_use_case: Arc::new(CreateAppointmentUseCase::new(
                appointments.clone(),
                patients,
                doctors,
            )),
            delete_appointment_use_case: Arc::new(DeleteAppointmentUseCase::new(appointments)),
        }
    }
}

/// Build the full site router with request ids and HTTP tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::dashboard::router())
        .merge(handlers::patients::router())
        .merge(handlers::doctors::router())
        .merge(handlers::appointments::router())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .with_state(state)
}
