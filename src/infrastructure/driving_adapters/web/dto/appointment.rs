//! Appointment DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{validate_appointment_date, validate_not_blank, validate_record_id};
use crate::domain::models::appointment::{AppointmentSummary, CreateAppointmentData};
use crate::domain::models::doctor::{Doctor, DoctorId};
use crate::domain::models::patient::{Patient, PatientId};
use crate::shared::errors::UseCaseError;

/// Submitted booking form.
///
/// `notes` must be present but may be empty; status is stored as typed.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct AppointmentForm {
    #[validate(required(message = "is required"))]
    #[validate(custom(function = "validate_record_id"))]
    pub patient_id: Option<String>,

    #[validate(required(message = "is required"))]
    #[validate(custom(function = "validate_record_id"))]
    pub doctor_id: Option<String>,

    #[validate(required(message = "is required"))]
    #[validate(custom(function = "validate_appointment_date"))]
    pub appointment_date: Option<String>,

    #[validate(required(message = "is required"))]
    pub notes: Option<String>,

    #[validate(required(message = "is required"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub status: Option<String>,
}

fn record_id(field: &str, raw: Option<&str>) -> Result<i64, UseCaseError> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .ok_or_else(|| UseCaseError::Validation(vec![format!("{field}: must select an existing record")]))
}

impl AppointmentForm {
    /// Validate the submission and convert it into domain data
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` listing every failing field.
    pub fn to_data(&self) -> Result<CreateAppointmentData, UseCaseError> {
        self.validate()?;

        Ok(CreateAppointmentData {
            patient_id: PatientId::new(record_id("patient_id", self.patient_id.as_deref())?),
            doctor_id: DoctorId::new(record_id("doctor_id", self.doctor_id.as_deref())?),
            appointment_date: self.appointment_date.clone().unwrap_or_default(),
            notes: self.notes.clone().unwrap_or_default(),
            status: self.status.clone().unwrap_or_default(),
        })
    }
}

/// Appointment row for the list view
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentView {
    pub id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub doctor_id: i64,
    pub doctor_name: String,
    pub appointment_date: String,
    pub notes: String,
    pub status: String,
}

impl From<&AppointmentSummary> for AppointmentView {
    fn from(summary: &AppointmentSummary) -> Self {
        Self {
            id: summary.id.value(),
            patient_id: summary.patient_id.value(),
            patient_name: summary
                .patient_name
                .clone()
                .unwrap_or_else(|| format!("Unknown patient (#{})", summary.patient_id)),
            doctor_id: summary.doctor_id.value(),
            doctor_name: summary
                .doctor_name
                .clone()
                .unwrap_or_else(|| format!("Unknown doctor (#{})", summary.doctor_id)),
            appointment_date: summary.appointment_date.clone(),
            notes: summary.notes.clone(),
            status: summary.status.clone(),
        }
    }
}

/// Selectable patient or doctor on the booking form
#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub id: i64,
    pub name: String,
}

impl From<&Patient> for OptionView {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id().value(),
            name: patient.name().to_string(),
        }
    }
}

impl From<&Doctor> for OptionView {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id().value(),
            name: doctor.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::appointment::AppointmentId;

    fn checkup() -> AppointmentForm {
        AppointmentForm {
            patient_id: Some("1".to_string()),
            doctor_id: Some("2".to_string()),
            appointment_date: Some("2024-06-01".to_string()),
            notes: Some("checkup".to_string()),
            status: Some("scheduled".to_string()),
        }
    }

    #[test]
    fn test_valid_form_converts() {
        let data = checkup().to_data().unwrap();

        assert_eq!(data.patient_id, PatientId::new(1));
        assert_eq!(data.doctor_id, DoctorId::new(2));
        assert_eq!(data.appointment_date, "2024-06-01");
        assert_eq!(data.status, "scheduled");
    }

    #[test]
    fn test_empty_notes_are_allowed_but_missing_notes_are_not() {
        let empty = AppointmentForm {
            notes: Some(String::new()),
            ..checkup()
        };
        assert!(empty.to_data().is_ok());

        let missing = AppointmentForm {
            notes: None,
            ..checkup()
        };
        assert!(missing.to_data().is_err());
    }

    #[test]
    fn test_status_is_free_form() {
        let form = AppointmentForm {
            status: Some("waiting for lab results".to_string()),
            ..checkup()
        };
        assert_eq!(form.to_data().unwrap().status, "waiting for lab results");
    }

    #[test]
    fn test_bad_ids_and_date_are_rejected() {
        let form = AppointmentForm {
            patient_id: Some("abc".to_string()),
            appointment_date: Some("01/06/2024".to_string()),
            ..checkup()
        };

        match form.to_data() {
            Err(UseCaseError::Validation(messages)) => {
                assert_eq!(messages.len(), 2);
                assert!(messages[0].starts_with("appointment_date:"));
                assert!(messages[1].starts_with("patient_id:"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_dangling_names_are_labelled() {
        let view = AppointmentView::from(&AppointmentSummary {
            id: AppointmentId::new(1),
            patient_id: PatientId::new(7),
            patient_name: None,
            doctor_id: DoctorId::new(2),
            doctor_name: Some("Dr. Bob".to_string()),
            appointment_date: "2024-06-01".to_string(),
            notes: String::new(),
            status: "scheduled".to_string(),
        });

        assert_eq!(view.patient_name, "Unknown patient (#7)");
        assert_eq!(view.doctor_name, "Dr. Bob");
    }
}
