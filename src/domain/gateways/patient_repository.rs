//! Patient Repository Gateway
//!
//! Abstract trait defining the contract for patient persistence operations.

use async_trait::async_trait;

use crate::domain::models::patient::{Patient, PatientData, PatientId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Patient persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Find all patients, newest first
    async fn find_all(&self) -> Result<Vec<Patient>, RepositoryError>;

    /// Find a patient by its ID
    async fn find_by_id(&self, id: PatientId) -> Result<Option<Patient>, RepositoryError>;

    /// Insert a new patient, returning it with its assigned ID
    async fn create(&self, data: &PatientData) -> Result<Patient, RepositoryError>;

    /// Replace all fields of an existing patient; `None` if the ID is unknown
    async fn update(&self, patient: &Patient) -> Result<Option<Patient>, RepositoryError>;

    /// Delete a patient, returning whether a row was removed
    async fn delete(&self, id: PatientId) -> Result<bool, RepositoryError>;

    /// Count all patients
    async fn count(&self) -> Result<i64, RepositoryError>;
}
