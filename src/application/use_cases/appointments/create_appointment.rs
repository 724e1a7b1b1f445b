//! Create Appointment Use Case
//!
//! Books an appointment between an existing patient and an existing doctor.

use std::sync::Arc;

use crate::domain::gateways::{AppointmentRepository, DoctorRepository, PatientRepository};
use crate::domain::models::appointment::{Appointment, CreateAppointmentData};
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for booking an appointment
pub struct CreateAppointmentUseCase {
    appointment_repository: Arc<dyn AppointmentRepository>,
    patient_repository: Arc<dyn PatientRepository>,
    doctor_repository: Arc<dyn DoctorRepository>,
}

impl CreateAppointmentUseCase {
    /// Create a new CreateAppointmentUseCase
    #[must_use]
    pub fn new(
        appointment_repository: Arc<dyn AppointmentRepository>,
        patient_repository: Arc<dyn PatientRepository>,
        doctor_repository: Arc<dyn DoctorRepository>,
    ) -> Self {
        Self {
            appointment_repository,
            patient_repository,
            doctor_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the patient or doctor doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateAppointmentData) -> Result<Appointment, UseCaseError> {
        tracing::info!(
            patient_id = %data.patient_id,
            doctor_id = %data.doctor_id,
            appointment_date = %data.appointment_date,
            "Booking appointment"
        );

        // Independent reads; the foreign keys catch anything deleted in between
        let mut problems = Vec::new();
        if self.patient_repository.find_by_id(data.patient_id).await?.is_none() {
            problems.push(format!("patient_id: patient {} does not exist", data.patient_id));
        }
        if self.doctor_repository.find_by_id(data.doctor_id).await?.is_none() {
            problems.push(format!("doctor_id: doctor {} does not exist", data.doctor_id));
        }
        if !problems.is_empty() {
            tracing::warn!(?problems, "Appointment references unknown records");
            return Err(UseCaseError::Validation(problems));
        }

        let created = match self.appointment_repository.create(&data).await {
            Ok(created) => created,
            Err(RepositoryError::Constraint(detail)) => {
                tracing::warn!(%detail, "Appointment insert blocked by foreign key");
                return Err(UseCaseError::Validation(vec![
                    "The selected patient or doctor no longer exists".to_string(),
                ]));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(appointment_id = %created.id(), "Appointment booked successfully");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::appointment_repository::MockAppointmentRepository;
    use crate::domain::gateways::doctor_repository::MockDoctorRepository;
    use crate::domain::gateways::patient_repository::MockPatientRepository;
    use crate::domain::models::appointment::AppointmentId;
    use crate::domain::models::doctor::{CreateDoctorData, Doctor, DoctorId};
    use crate::domain::models::patient::{Patient, PatientData, PatientId};

    fn booking() -> CreateAppointmentData {
        CreateAppointmentData {
            patient_id: PatientId::new(1),
            doctor_id: DoctorId::new(2),
            appointment_date: "2024-06-01".to_string(),
            notes: "checkup".to_string(),
            status: "scheduled".to_string(),
        }
    }

    fn patients(exists: bool) -> MockPatientRepository {
        let mut repo = MockPatientRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok(exists.then(|| {
                Patient::restore(
                    id,
                    PatientData {
                        name: "Alice".to_string(),
                        date_of_birth: "1990-01-01".to_string(),
                        gender: "F".to_string(),
                        contact_info: "555-1000".to_string(),
                        address: "1 Main St".to_string(),
                    },
                )
            }))
        });
        repo
    }

    fn doctors(exists: bool) -> MockDoctorRepository {
        let mut repo = MockDoctorRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok(exists.then(|| {
                Doctor::restore(
                    id,
                    CreateDoctorData {
                        name: "Dr. Bob".to_string(),
                        specialty: "Cardiology".to_string(),
                        contact_info: "555-2000".to_string(),
                        email: "bob@x.com".to_string(),
                    },
                )
            }))
        });
        repo
    }

    #[tokio::test]
    async fn should_book_appointment_when_references_exist() {
        let mut appointments = MockAppointmentRepository::new();
        appointments
            .expect_create()
            .withf(|data| data.status == "scheduled")
            .times(1)
            .returning(|data| Ok(Appointment::restore(AppointmentId::new(11), data.clone())));

        let use_case = CreateAppointmentUseCase::new(
            Arc::new(appointments),
            Arc::new(patients(true)),
            Arc::new(doctors(true)),
        );
        let appointment = use_case.execute(booking()).await.unwrap();

        assert_eq!(appointment.id(), AppointmentId::new(11));
        assert_eq!(appointment.patient_id(), PatientId::new(1));
        assert_eq!(appointment.doctor_id(), DoctorId::new(2));
    }

    #[tokio::test]
    async fn should_reject_unknown_patient_and_doctor() {
        let mut appointments = MockAppointmentRepository::new();
        appointments.expect_create().never();

        let use_case = CreateAppointmentUseCase::new(
            Arc::new(appointments),
            Arc::new(patients(false)),
            Arc::new(doctors(false)),
        );
        let result = use_case.execute(booking()).await;

        match result {
            Err(UseCaseError::Validation(messages)) => {
                assert_eq!(messages.len(), 2);
                assert!(messages[0].starts_with("patient_id"));
                assert!(messages[1].starts_with("doctor_id"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_report_foreign_key_race_as_validation_error() {
        let mut appointments = MockAppointmentRepository::new();
        appointments
            .expect_create()
            .returning(|_| Err(RepositoryError::Constraint("FOREIGN KEY constraint failed".to_string())));

        let use_case = CreateAppointmentUseCase::new(
            Arc::new(appointments),
            Arc::new(patients(true)),
            Arc::new(doctors(true)),
        );
        let result = use_case.execute(booking()).await;

        assert!(matches!(result, Err(UseCaseError::Validation(_))));
    }
}
