//! Data Transfer Objects
//!
//! Form submissions, list rows and notices for the web pages.

pub mod appointment;
pub mod doctor;
pub mod notice;
pub mod patient;
mod validation;

pub use appointment::{AppointmentForm, AppointmentView, OptionView};
pub use doctor::{DoctorForm, DoctorView};
pub use notice::{ListQuery, Notice};
pub use patient::{PatientForm, PatientView};
