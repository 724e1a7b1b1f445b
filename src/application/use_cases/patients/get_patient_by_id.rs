//! Get Patient By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::PatientRepository;
use crate::domain::models::patient::{Patient, PatientId};
use crate::shared::errors::UseCaseError;

/// Use case for fetching one patient, e.g. to pre-fill the edit form
pub struct GetPatientByIdUseCase {
    patient_repository: Arc<dyn PatientRepository>,
}

impl GetPatientByIdUseCase {
    /// Create a new GetPatientByIdUseCase
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
    pub async fn execute(&self, id: PatientId) -> Result<Patient, UseCaseError> {
        tracing::debug!(patient_id = %id, "Getting patient by ID");

        self.patient_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(patient_id = %id, "Patient not found");
                UseCaseError::NotFound {
                    resource: "Patient".to_string(),
                    id: id.to_string(),
                }
            })
    }
}
