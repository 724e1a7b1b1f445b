//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - SQLite repositories and the storage gateway
//! - Configuration
//! - HTML view rendering

pub mod appointment_repository;
pub mod config;
pub mod database;
pub mod doctor_repository;
pub mod patient_repository;
pub mod views;

pub use appointment_repository::SqliteAppointmentRepository;
pub use config::AppConfig;
pub use database::StorageGateway;
pub use doctor_repository::SqliteDoctorRepository;
pub use patient_repository::SqlitePatientRepository;
pub use views::HtmlViewRenderer;
