//! Appointment Use Cases

mod create_appointment;
mod delete_appointment;
mod list_appointments;

pub use create_appointment::CreateAppointmentUseCase;
pub use delete_appointment::DeleteAppointmentUseCase;
pub use list_appointments::ListAppointmentsUseCase;
