//! Appointment Domain Model
//!
//! An appointment links one patient to one doctor at a date. Status is
//! free-form text with no enforced state machine.

use chrono::{NaiveDate, NaiveDateTime};

use super::doctor::DoctorId;
use super::patient::PatientId;

/// Date-only form as submitted by `<input type="date">`
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted date-time forms, with and without seconds
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Newtype wrapper for the store-assigned Appointment ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppointmentId(i64);

impl AppointmentId {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for AppointmentId {
    type Error = std::num::ParseIntError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(value.trim().parse()?))
    }
}

/// Check an appointment date against the accepted formats.
///
/// Accepts `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM[:SS]`, zero-padded and with
/// nothing around them. The value must format back to itself, so stored
/// dates sort lexically in chronological order, which the listing relies on.
#[must_use]
pub fn is_valid_appointment_date(value: &str) -> bool {
    let date_only = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .is_ok_and(|date| date.format(DATE_FORMAT).to_string() == value);

    date_only
        || DATE_TIME_FORMATS.iter().any(|format| {
            NaiveDateTime::parse_from_str(value, format)
                .is_ok_and(|date_time| date_time.format(format).to_string() == value)
        })
}

/// Data required to book a new Appointment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAppointmentData {
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub appointment_date: String,
    pub notes: String,
    pub status: String,
}

/// Appointment domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    id: AppointmentId,
    patient_id: PatientId,
    doctor_id: DoctorId,
    appointment_date: String,
    notes: String,
    status: String,
}

impl Appointment {
    /// Restore an Appointment from persisted data
    #[must_use]
    pub fn restore(id: AppointmentId, data: CreateAppointmentData) -> Self {
        Self {
            id,
            patient_id: data.patient_id,
            doctor_id: data.doctor_id,
            appointment_date: data.appointment_date,
            notes: data.notes,
            status: data.status,
        }
    }

    #[must_use]
    pub fn id(&self) -> AppointmentId {
        self.id
    }

    #[must_use]
    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    #[must_use]
    pub fn doctor_id(&self) -> DoctorId {
        self.doctor_id
    }

    #[must_use]
    pub fn appointment_date(&self) -> &str {
        &self.appointment_date
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}

/// Appointment joined with the current names of its patient and doctor.
///
/// A name is `None` when the referenced row no longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentSummary {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub patient_name: Option<String>,
    pub doctor_id: DoctorId,
    pub doctor_name: Option<String>,
    pub appointment_date: String,
    pub notes: String,
    pub status: String,
}
