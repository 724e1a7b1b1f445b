//! Doctor DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::validate_not_blank;
use crate::domain::models::doctor::{CreateDoctorData, Doctor};
use crate::shared::errors::UseCaseError;

/// Submitted add-doctor form
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct DoctorForm {
    #[validate(required(message = "is required"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(required(message = "is required"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub specialty: Option<String>,

    #[validate(required(message = "is required"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub contact: Option<String>,

    #[validate(required(message = "is required"))]
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
}

impl DoctorForm {
    /// Validate the submission and convert it into domain data
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` listing every failing field.
    pub fn to_data(&self) -> Result<CreateDoctorData, UseCaseError> {
        self.validate()?;

        Ok(CreateDoctorData {
            name: self.name.clone().unwrap_or_default(),
            specialty: self.specialty.clone().unwrap_or_default(),
            contact_info: self.contact.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
        })
    }
}

/// Doctor row for the list view
#[derive(Debug, Clone, Serialize)]
pub struct DoctorView {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub contact: String,
    pub email: String,
}

impl From<&Doctor> for DoctorView {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id().value(),
            name: doctor.name().to_string(),
            specialty: doctor.specialty().to_string(),
            contact: doctor.contact_info().to_string(),
            email: doctor.email().to_string(),
        }
    }
}
