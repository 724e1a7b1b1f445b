//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod appointment_repository;
pub mod doctor_repository;
pub mod patient_repository;
pub mod view_renderer;

pub use appointment_repository::AppointmentRepository;
pub use doctor_repository::DoctorRepository;
pub use patient_repository::PatientRepository;
pub use view_renderer::ViewRenderer;
