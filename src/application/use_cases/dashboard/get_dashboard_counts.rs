//! Get Dashboard Counts Use Case

use std::sync::Arc;

use crate::domain::gateways::{AppointmentRepository, DoctorRepository, PatientRepository};
use crate::domain::models::dashboard::DashboardCounts;
use crate::shared::errors::UseCaseError;

/// Use case for the front page totals
pub struct GetDashboardCountsUseCase {
    patient_repository: Arc<dyn PatientRepository>,
    doctor_repository: Arc<dyn DoctorRepository>,
    appointment_repository: Arc<dyn AppointmentRepository>,
}

impl GetDashboardCountsUseCase {
    /// Create a new GetDashboardCountsUseCase
    #[must_use]
    pub fn new(
        patient_repository: Arc<dyn PatientRepository>,
        doctor_repository: Arc<dyn DoctorRepository>,
        appointment_repository: Arc<dyn AppointmentRepository>,
    ) -> Self {
        Self {
            patient_repository,
            doctor_repository,
            appointment_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<DashboardCounts, UseCaseError> {
        let counts = DashboardCounts {
            patients: self.patient_repository.count().await?,
            doctors: self.doctor_repository.count().await?,
            appointments: self.appointment_repository.count().await?,
        };

        tracing::debug!(
            patients = counts.patients,
            doctors = counts.doctors,
            appointments = counts.appointments,
            "Dashboard counts"
        );
        Ok(counts)
    }
}
