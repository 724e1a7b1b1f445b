//! Update Patient Use Case
//!
//! Replaces every editable field of an existing patient.

use std::sync::Arc;

use crate::domain::gateways::PatientRepository;
use crate::domain::models::patient::{Patient, PatientData, PatientId};
use crate::shared::errors::UseCaseError;

/// Use case for editing a patient in place
pub struct UpdatePatientUseCase {
    patient_repository: Arc<dyn PatientRepository>,
}

impl UpdatePatientUseCase {
    /// Create a new UpdatePatientUseCase
    #[must_use]
    pub fn new(patient_repository: Arc<dyn PatientRepository>) -> Self {
        Self { patient_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the patient doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: PatientId, data: PatientData) -> Result<Patient, UseCaseError> {
        tracing::info!(patient_id = %id, "Updating patient");

        let not_found = || UseCaseError::NotFound {
            resource: "Patient".to_string(),
            id: id.to_string(),
        };

        let Some(existing) = self.patient_repository.find_by_id(id).await? else {
            tracing::warn!(patient_id = %id, "Patient not found for update");
            return Err(not_found());
        };

        // The row can vanish between the read and the write
        let updated = self
            .patient_repository
            .update(&existing.with_updates(data))
            .await?
            .ok_or_else(not_found)?;

        tracing::info!(patient_id = %id, "Patient updated successfully");
        Ok(updated)
    }
}
