//! List Doctors Use Case

use std::sync::Arc;

use crate::domain::gateways::DoctorRepository;
use crate::domain::models::doctor::Doctor;
use crate::shared::errors::UseCaseError;

/// Use case for listing doctors, newest first
pub struct ListDoctorsUseCase {
    doctor_repository: Arc<dyn DoctorRepository>,
}

impl ListDoctorsUseCase {
    /// Create a new ListDoctorsUseCase
    #[must_use]
    pub fn new(doctor_repository: Arc<dyn DoctorRepository>) -> Self {
        Self { doctor_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Doctor>, UseCaseError> {
        tracing::debug!("Listing doctors");

        let doctors = self.doctor_repository.find_all().await?;

        tracing::debug!(count = doctors.len(), "Found doctors");
        Ok(doctors)
    }
}
