//! Custom field validators shared by the form DTOs

use validator::ValidationError;

use crate::domain::models::appointment::is_valid_appointment_date;

/// Rejects empty and whitespace-only values
pub(super) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Accepts positive integer record ids
pub(super) fn validate_record_id(value: &str) -> Result<(), ValidationError> {
    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(()),
        _ => {
            let mut error = ValidationError::new("record_id");
            error.message = Some("must select an existing record".into());
            Err(error)
        }
    }
}

/// Accepts `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM[:SS]`
pub(super) fn validate_appointment_date(value: &str) -> Result<(), ValidationError> {
    if is_valid_appointment_date(value) {
        Ok(())
    } else {
        let mut error = ValidationError::new("appointment_date");
        error.message = Some("must be a date (YYYY-MM-DD) or date and time (YYYY-MM-DDTHH:MM)".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Alice").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_validate_record_id() {
        assert!(validate_record_id("1").is_ok());
        assert!(validate_record_id(" 42 ").is_ok());
        assert!(validate_record_id("0").is_err());
        assert!(validate_record_id("-3").is_err());
        assert!(validate_record_id("abc").is_err());
        assert!(validate_record_id("").is_err());
    }

    #[test]
    fn test_validate_appointment_date() {
        assert!(validate_appointment_date("2024-06-01").is_ok());
        assert!(validate_appointment_date("2024-06-01T10:00").is_ok());
        assert!(validate_appointment_date("June 1st").is_err());
    }
}
