//! Domain Models
//!
//! Pure domain entities and value objects representing front office records.

pub mod appointment;
pub mod dashboard;
pub mod doctor;
pub mod patient;

pub use appointment::{Appointment, AppointmentId, AppointmentSummary, CreateAppointmentData};
pub use dashboard::DashboardCounts;
pub use doctor::{CreateDoctorData, Doctor, DoctorId};
pub use patient::{Patient, PatientData, PatientId};
