//! Use Cases
//!
//! Application-specific rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod appointments;
pub mod dashboard;
pub mod doctors;
pub mod patients;

pub use appointments::{CreateAppointmentUseCase, DeleteAppointmentUseCase, ListAppointmentsUseCase};
pub use dashboard::GetDashboardCountsUseCase;
pub use doctors::{CreateDoctorUseCase, DeleteDoctorUseCase, ListDoctorsUseCase};
pub use patients::{
    CreatePatientUseCase, DeletePatientUseCase, GetPatientByIdUseCase, ListPatientsUseCase,
    UpdatePatientUseCase,
};
