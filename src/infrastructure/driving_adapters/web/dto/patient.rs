//! Patient DTOs
//!
//! Form submissions and list rows for the patient pages.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::validate_not_blank;
use crate::domain::models::patient::{Patient, PatientData};
use crate::shared::errors::UseCaseError;

/// Submitted patient form (add and edit share the same fields).
///
/// Fields are optional so that a missing field becomes a validation
/// message instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct PatientForm {
    #[validate(required(message = "is required"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(required(message = "is required"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub dob: Option<String>,

    #[validate(required(message = "is required"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub gender: Option<String>,

    #[validate(required(message = "is required"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub contact: Option<String>,

    #[validate(required(message = "is required"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub address: Option<String>,
}

impl PatientForm {
    /// Validate the submission and convert it into domain data
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` listing every failing field.
    pub fn to_data(&self) -> Result<PatientData, UseCaseError> {
        self.validate()?;

        Ok(PatientData {
            name: self.name.clone().unwrap_or_default(),
            date_of_birth: self.dob.clone().unwrap_or_default(),
            gender: self.gender.clone().unwrap_or_default(),
            contact_info: self.contact.clone().unwrap_or_default(),
            address: self.address.clone().unwrap_or_default(),
        })
    }
}

impl From<&Patient> for PatientForm {
    fn from(patient: &Patient) -> Self {
        Self {
            name: Some(patient.name().to_string()),
            dob: Some(patient.date_of_birth().to_string()),
            gender: Some(patient.gender().to_string()),
            contact: Some(patient.contact_info().to_string()),
            address: Some(patient.address().to_string()),
        }
    }
}

/// Patient row for the list view
#[derive(Debug, Clone, Serialize)]
pub struct PatientView {
    pub id: i64,
    pub name: String,
    pub dob: String,
    pub gender: String,
    pub contact: String,
    pub address: String,
}

impl From<&Patient> for PatientView {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id().value(),
            name: patient.name().to_string(),
            dob: patient.date_of_birth().to_string(),
            gender: patient.gender().to_string(),
            contact: patient.contact_info().to_string(),
            address: patient.address().to_string(),
        }
    }
}
