//! Doctor Repository Adapters

mod sqlite;

pub use sqlite::SqliteDoctorRepository;
