//! Create Patient Use Case
//!
//! Registers a new patient.

use std::sync::Arc;

use crate::domain::gateways::PatientRepository;
use crate::domain::models::patient::{Patient, PatientData};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new patient
pub struct CreatePatientUseCase {
    patient_repository: Arc<dyn PatientRepository>,
}

impl CreatePatientUseCase {
    /// Create a new CreatePatientUseCase
    #[must_use]
    pub fn new(patient_repository: Arc<dyn PatientRepository>) -> Self {
        Self { patient_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: PatientData) -> Result<Patient, UseCaseError> {
        tracing::info!(name = %data.name, "Creating new patient");

        let created = self.patient_repository.create(&data).await?;

        tracing::info!(patient_id = %created.id(), "Patient created successfully");
        Ok(created)
    }
}
