//! Doctor Repository Gateway

use async_trait::async_trait;

use crate::domain::models::doctor::{CreateDoctorData, Doctor, DoctorId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Doctor persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// Find all doctors, newest first
    async fn find_all(&self) -> Result<Vec<Doctor>, RepositoryError>;

    /// Find a doctor by its ID
    async fn find_by_id(&self, id: DoctorId) -> Result<Option<Doctor>, RepositoryError>;

    /// Insert a new doctor, returning it with its assigned ID
    async fn create(&self, data: &CreateDoctorData) -> Result<Doctor, RepositoryError>;

    /// Delete a doctor, returning whether a row was removed
    async fn delete(&self, id: DoctorId) -> Result<bool, RepositoryError>;

    /// Count all doctors
    async fn count(&self) -> Result<i64, RepositoryError>;
}
