//! Appointment Repository Adapters

mod sqlite;

pub use sqlite::SqliteAppointmentRepository;
