//! Domain Layer
//!
//! Contains the domain models and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{AppointmentRepository, DoctorRepository, PatientRepository, ViewRenderer};
pub use models::{
    Appointment, AppointmentId, AppointmentSummary, CreateAppointmentData, CreateDoctorData,
    DashboardCounts, Doctor, DoctorId, Patient, PatientData, PatientId,
};
