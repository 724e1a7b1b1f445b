//! Delete Doctor Use Case
//!
//! Hard deletes a doctor. Doctors that still have appointments are kept.

use std::sync::Arc;

use crate::domain::gateways::{AppointmentRepository, DoctorRepository};
use crate::domain::models::doctor::DoctorId;
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for deleting a doctor
pub struct DeleteDoctorUseCase {
    doctor_repository: Arc<dyn DoctorRepository>,
    appointment_repository: Arc<dyn AppointmentRepository>,
}

impl DeleteDoctorUseCase {
    /// Create a new DeleteDoctorUseCase
    #[must_use]
    pub fn new(
        doctor_repository: Arc<dyn DoctorRepository>,
        appointment_repository: Arc<dyn AppointmentRepository>,
    ) -> Self {
        Self {
            doctor_repository,
            appointment_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if appointments still reference the doctor.
    /// Returns `UseCaseError::NotFound` if the doctor doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: DoctorId) -> Result<(), UseCaseError> {
        tracing::info!(doctor_id = %id, "Deleting doctor");

        let booked = self.appointment_repository.count_for_doctor(id).await?;
        if booked > 0 {
            tracing::warn!(doctor_id = %id, appointments = booked, "Doctor still has appointments");
            return Err(still_booked(id, booked));
        }

        let deleted = match self.doctor_repository.delete(id).await {
            Ok(deleted) => deleted,
            Err(RepositoryError::Constraint(detail)) => {
                tracing::warn!(doctor_id = %id, %detail, "Doctor delete blocked by foreign key");
                return Err(still_booked(id, 1));
            }
            Err(e) => return Err(e.into()),
        };

        if !deleted {
            tracing::warn!(doctor_id = %id, "Doctor not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Doctor".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(doctor_id = %id, "Doctor deleted successfully");
        Ok(())
    }
}

fn still_booked(id: DoctorId, booked: i64) -> UseCaseError {
    UseCaseError::Conflict(format!(
        "Doctor {id} has {booked} appointment(s); delete them first"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::appointment_repository::MockAppointmentRepository;
    use crate::domain::gateways::doctor_repository::MockDoctorRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn should_delete_unreferenced_doctor() {
        let mut appointments = MockAppointmentRepository::new();
        appointments
            .expect_count_for_doctor()
            .with(eq(DoctorId::new(3)))
            .returning(|_| Ok(0));
        let mut doctors = MockDoctorRepository::new();
        doctors
            .expect_delete()
            .with(eq(DoctorId::new(3)))
            .times(1)
            .returning(|_| Ok(true));

        let use_case = DeleteDoctorUseCase::new(Arc::new(doctors), Arc::new(appointments));

        assert!(use_case.execute(DoctorId::new(3)).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_doctor_does_not_exist() {
        let mut appointments = MockAppointmentRepository::new();
        appointments.expect_count_for_doctor().returning(|_| Ok(0));
        let mut doctors = MockDoctorRepository::new();
        doctors.expect_delete().returning(|_| Ok(false));

        let use_case = DeleteDoctorUseCase::new(Arc::new(doctors), Arc::new(appointments));
        let result = use_case.execute(DoctorId::new(3)).await;

        assert!(matches!(result, Err(UseCaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn should_refuse_when_doctor_has_appointments() {
        let mut appointments = MockAppointmentRepository::new();
        appointments.expect_count_for_doctor().returning(|_| Ok(1));
        let mut doctors = MockDoctorRepository::new();
        doctors.expect_delete().never();

        let use_case = DeleteDoctorUseCase::new(Arc::new(doctors), Arc::new(appointments));
        let result = use_case.execute(DoctorId::new(3)).await;

        assert!(matches!(result, Err(UseCaseError::Conflict(_))));
    }
}
