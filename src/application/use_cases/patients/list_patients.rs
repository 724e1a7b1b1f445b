//! List Patients Use Case
//!
//! Retrieves all patients, newest first.

use std::sync::Arc;

use crate::domain::gateways::PatientRepository;
use crate::domain::models::patient::Patient;
use crate::shared::errors::UseCaseError;

/// Use case for listing patients
pub struct ListPatientsUseCase {
    patient_repository: Arc<dyn PatientRepository>,
}

impl ListPatientsUseCase {
    /// Create a new ListPatientsUseCase
    #[must_use]
    pub fn new(patient_repository: Arc<dyn PatientRepository>) -> Self {
        Self { patient_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Patient>, UseCaseError> {
        tracing::debug!("Listing patients");

        let patients = self.patient_repository.find_all().await?;

        tracing::debug!(count = patients.len(), "Found patients");
        Ok(patients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::patient_repository::MockPatientRepository;
    use crate::domain::models::patient::{PatientData, PatientId};
    use crate::shared::errors::RepositoryError;

    fn patient(id: i64, name: &str) -> Patient {
        Patient::restore(
            PatientId::new(id),
            PatientData {
                name: name.to_string(),
                date_of_birth: "1990-01-01".to_string(),
                gender: "F".to_string(),
                contact_info: "555-1000".to_string(),
                address: "1 Main St".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn should_return_patients_in_repository_order() {
        let mut repo = MockPatientRepository::new();
        repo.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![patient(2, "Bea"), patient(1, "Alice")]));

        let use_case = ListPatientsUseCase::new(Arc::new(repo));
        let patients = use_case.execute().await.unwrap();

        assert_eq!(patients.len(), 2);
        assert_eq!(patients[0].name(), "Bea");
        assert_eq!(patients[1].name(), "Alice");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_patients() {
        let mut repo = MockPatientRepository::new();
        repo.expect_find_all().returning(|| Ok(vec![]));

        let use_case = ListPatientsUseCase::new(Arc::new(repo));
        let patients = use_case.execute().await.unwrap();

        assert!(patients.is_empty());
    }

    #[tokio::test]
    async fn should_propagate_repository_errors() {
        let mut repo = MockPatientRepository::new();
        repo.expect_find_all()
            .returning(|| Err(RepositoryError::Database(sqlx::Error::PoolTimedOut)));

        let use_case = ListPatientsUseCase::new(Arc::new(repo));
        let result = use_case.execute().await;

        assert!(matches!(result, Err(UseCaseError::Repository(_))));
    }
}
