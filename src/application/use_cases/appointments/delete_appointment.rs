//! Delete Appointment Use Case

use std::sync::Arc;

use crate::domain::gateways::AppointmentRepository;
use crate::domain::models::appointment::AppointmentId;
use crate::shared::errors::UseCaseError;

/// Use case for cancelling (hard deleting) an appointment
pub struct DeleteAppointmentUseCase {
    appointment_repository: Arc<dyn AppointmentRepository>,
}

impl DeleteAppointmentUseCase {
    /// Create a new DeleteAppointmentUseCase
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
    /// Returns `UseCaseError::NotFound` if the appointment doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: AppointmentId) -> Result<(), UseCaseError> {
        tracing::info!(appointment_id = %id, "Deleting appointment");

        let deleted = self.appointment_repository.delete(id).await?;

        if !deleted {
            tracing::warn!(appointment_id = %id, "Appointment not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Appointment".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(appointment_id = %id, "Appointment deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::appointment_repository::MockAppointmentRepository;

    #[tokio::test]
    async fn should_delete_appointment_when_found() {
        let mut repo = MockAppointmentRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(true));

        let use_case = DeleteAppointmentUseCase::new(Arc::new(repo));

        assert!(use_case.execute(AppointmentId::new(1)).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_appointment_does_not_exist() {
        let mut repo = MockAppointmentRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let use_case = DeleteAppointmentUseCase::new(Arc::new(repo));
        let result = use_case.execute(AppointmentId::new(1)).await;

        assert!(matches!(result, Err(UseCaseError::NotFound { .. })));
    }
}
