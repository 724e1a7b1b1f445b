//! Patient Repository Adapters

mod sqlite;

pub use sqlite::SqlitePatientRepository;
