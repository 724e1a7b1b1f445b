//! Create Doctor Use Case

use std::sync::Arc;

use crate::domain::gateways::DoctorRepository;
use crate::domain::models::doctor::{CreateDoctorData, Doctor};
use crate::shared::errors::UseCaseError;

/// Use case for registering a new doctor
pub struct CreateDoctorUseCase {
    doctor_repository: Arc<dyn DoctorRepository>,
}

impl CreateDoctorUseCase {
    /// Create a new CreateDoctorUseCase
    #[must_use]
    pub fn new(doctor_repository: Arc<dyn DoctorRepository>) -> Self {
        Self { doctor_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateDoctorData) -> Result<Doctor, UseCaseError> {
        tracing::info!(name = %data.name, specialty = %data.specialty, "Creating new doctor");

        let created = self.doctor_repository.create(&data).await?;

        tracing::info!(doctor_id = %created.id(), "Doctor created successfully");
        Ok(created)
    }
}
