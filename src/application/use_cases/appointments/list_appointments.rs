//! List Appointments Use Case
//!
//! Retrieves all appointments with patient and doctor names, latest date first.

use std::sync::Arc;

use crate::domain::gateways::AppointmentRepository;
use crate::domain::models::appointment::AppointmentSummary;
use crate::shared::errors::UseCaseError;

/// Use case for listing appointments
pub struct ListAppointmentsUseCase {
    appointment_repository: Arc<dyn AppointmentRepository>,
}

impl ListAppointmentsUseCase {
    /// Create a new ListAppointmentsUseCase
    #[must_use]
    pub fn new(appointment_repository: Arc<dyn AppointmentRepository>) -> Self {
        Self {
            appointment_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<AppointmentSummary>, UseCaseError> {
        tracing::debug!("Listing appointments");

        let appointments = self.appointment_repository.find_all_with_names().await?;

        let dangling = appointments
            .iter()
            .filter(|a| a.patient_name.is_none() || a.doctor_name.is_none())
            .count();
        if dangling > 0 {
            tracing::warn!(dangling, "Appointments reference missing patients or doctors");
        }

        tracing::debug!(count = appointments.len(), "Found appointments");
        Ok(appointments)
    }
}
