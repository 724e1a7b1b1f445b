//! Patient Use Cases

mod create_patient;
mod delete_patient;
mod get_patient_by_id;
mod list_patients;
mod update_patient;

pub use create_patient::CreatePatientUseCase;
pub use delete_patient::DeletePatientUseCase;
pub use get_patient_by_id::GetPatientByIdUseCase;
pub use list_patients::ListPatientsUseCase;
pub use update_patient::UpdatePatientUseCase;
