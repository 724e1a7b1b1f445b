//! Delete Patient Use Case
//!
//! Hard deletes a patient. Patients that still have appointments are kept.

use std::sync::Arc;

use crate::domain::gateways::{AppointmentRepository, PatientRepository};
use crate::domain::models::patient::PatientId;
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for deleting a patient
pub struct DeletePatientUseCase {
    patient_repository: Arc<dyn PatientRepository>,
    appointment_repository: Arc<dyn AppointmentRepository>,
}

impl DeletePatientUseCase {
    /// Create a new DeletePatientUseCase
    #[must_use]
    pub fn new(
        patient_repository: Arc<dyn PatientRepository>,
        appointment_repository: Arc<dyn AppointmentRepository>,
    ) -> Self {
        Self {
            patient_repository,
            appointment_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if appointments still reference the patient.
    /// Returns `UseCaseError::NotFound` if the patient doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: PatientId) -> Result<(), UseCaseError> {
        tracing::info!(patient_id = %id, "Deleting patient");

        let booked = self.appointment_repository.count_for_patient(id).await?;
        if booked > 0 {
            tracing::warn!(patient_id = %id, appointments = booked, "Patient still has appointments");
            return Err(still_booked(id, booked));
        }

        let deleted = match self.patient_repository.delete(id).await {
            Ok(deleted) => deleted,
            Err(RepositoryError::Constraint(detail)) => {
                tracing::warn!(patient_id = %id, %detail, "Patient delete blocked by foreign key");
                return Err(still_booked(id, 1));
            }
            Err(e) => return Err(e.into()),
        };

        if !deleted {
            tracing::warn!(patient_id = %id, "Patient not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Patient".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(patient_id = %id, "Patient deleted successfully");
        Ok(())
    }
}

fn still_booked(id: PatientId, booked: i64) -> UseCaseError {
    UseCaseError::Conflict(format!(
        "Patient {id} has {booked} appointment(s); delete them first"
    ))
}
