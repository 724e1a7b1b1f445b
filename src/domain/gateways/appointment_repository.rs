//! Appointment Repository Gateway

use async_trait::async_trait;

use crate::domain::models::appointment::{
    Appointment, AppointmentId, AppointmentSummary, CreateAppointmentData,
};
use crate::domain::models::doctor::DoctorId;
use crate::domain::models::patient::PatientId;
use crate::shared::errors::RepositoryError;

/// Repository trait for Appointment persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// All appointments with current patient and doctor names, latest date first
    async fn find_all_with_names(&self) -> Result<Vec<AppointmentSummary>, RepositoryError>;

    /// Insert a new appointment, returning it with its assigned ID
    async fn create(&self, data: &CreateAppointmentData) -> Result<Appointment, RepositoryError>;

    /// Delete an appointment, returning whether a row was removed
    async fn delete(&self, id: AppointmentId) -> Result<bool, RepositoryError>;

    /// Count all appointments
    async fn count(&self) -> Result<i64, RepositoryError>;

    /// Count appointments referencing a patient
    async fn count_for_patient(&self, patient_id: PatientId) -> Result<i64, RepositoryError>;

    /// Count appointments referencing a doctor
    async fn count_for_doctor(&self, doctor_id: DoctorId) -> Result<i64, RepositoryError>;
}
