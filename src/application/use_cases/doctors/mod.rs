//! Doctor Use Cases

mod create_doctor;
mod delete_doctor;
mod list_doctors;

pub use create_doctor::CreateDoctorUseCase;
pub use delete_doctor::DeleteDoctorUseCase;
pub use list_doctors::ListDoctorsUseCase;
