//! SQLite Appointment Repository Implementation
//!
//! Listings LEFT JOIN the patient and doctor tables so that a dangling
//! reference surfaces as a missing name rather than a missing row.

use async_trait::async_trait;

use crate::domain::gateways::AppointmentRepository;
use crate::domain::models::appointment::{
    Appointment, AppointmentId, AppointmentSummary, CreateAppointmentData,
};
use crate::domain::models::doctor::DoctorId;
use crate::domain::models::patient::PatientId;
use crate::infrastructure::driven_adapters::database::StorageGateway;
use crate::shared::errors::RepositoryError;

/// Database row representation for the Appointments table
#[derive(Debug, sqlx::FromRow)]
struct AppointmentRow {
    id: i64,
    patient_id: i64,
    doctor_id: i64,
    appointment_date: String,
    notes: String,
    status: String,
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Appointment::restore(
            AppointmentId::new(row.id),
            CreateAppointmentData {
                patient_id: PatientId::new(row.patient_id),
                doctor_id: DoctorId::new(row.doctor_id),
                appointment_date: row.appointment_date,
                notes: row.notes,
                status: row.status,
            },
        )
    }
}

/// Appointment row joined with patient and doctor names
#[derive(Debug, sqlx::FromRow)]
struct AppointmentSummaryRow {
    id: i64,
    patient_id: i64,
    patient_name: Option<String>,
    doctor_id: i64,
    doctor_name: Option<String>,
    appointment_date: String,
    notes: String,
    status: String,
}

impl From<AppointmentSummaryRow> for AppointmentSummary {
    fn from(row: AppointmentSummaryRow) -> Self {
        Self {
            id: AppointmentId::new(row.id),
            patient_id: PatientId::new(row.patient_id),
            patient_name: row.patient_name,
            doctor_id: DoctorId::new(row.doctor_id),
            doctor_name: row.doctor_name,
            appointment_date: row.appointment_date,
            notes: row.notes,
            status: row.status,
        }
    }
}

/// SQLite implementation of AppointmentRepository
pub struct SqliteAppointmentRepository {
    gateway: StorageGateway,
}

impl SqliteAppointmentRepository {
    /// Create a new SqliteAppointmentRepository
    #[must_use]
    pub fn new(gateway: StorageGateway) -> Self {
        Self { gateway }
    }

    async fn count_where(&self, sql: &str, id: i64) -> Result<i64, RepositoryError> {
        let mut conn = self.gateway.acquire().await?;

        let count = sqlx::query_scalar::<_, i64>(sql)
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl AppointmentRepository for SqliteAppointmentRepository {
    async fn find_all_with_names(&self) -> Result<Vec<AppointmentSummary>, RepositoryError> {
        let mut conn = self.gateway.acquire().await?;

        let rows = sqlx::query_as::<_, AppointmentSummaryRow>(
            r#"
            SELECT a.AppointmentID AS id,
                   a.PatientID AS patient_id, p.Name AS patient_name,
                   a.DoctorID AS doctor_id, d.Name AS doctor_name,
                   a.AppointmentDate AS appointment_date,
                   a.Notes AS notes, a.Status AS status
            FROM Appointments a
            LEFT JOIN Patients p ON p.PatientID = a.PatientID
            LEFT JOIN Doctors d ON d.DoctorID = a.DoctorID
            ORDER BY a.AppointmentDate DESC, a.AppointmentID DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(AppointmentSummary::from).collect())
    }

    async fn create(&self, data: &CreateAppointmentData) -> Result<Appointment, RepositoryError> {
        let mut tx = self.gateway.begin().await?;

        let row = sqlx::query_as::<_, AppointmentRow>(
            r#"
            INSERT INTO Appointments (PatientID, DoctorID, AppointmentDate, Notes, Status)
            VALUES (?, ?, ?, ?, ?)
            RETURNING AppointmentID AS id, PatientID AS patient_id, DoctorID AS doctor_id,
                      AppointmentDate AS appointment_date, Notes AS notes, Status AS status
            "#,
        )
        .bind(data.patient_id.value())
        .bind(data.doctor_id.value())
        .bind(&data.appointment_date)
        .bind(&data.notes)
        .bind(&data.status)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from_statement)?;

        tx.commit().await?;
        Ok(row.into())
    }

    async fn delete(&self, id: AppointmentId) -> Result<bool, RepositoryError> {
        let mut tx = self.gateway.begin().await?;

        let result = sqlx::query("DELETE FROM Appointments WHERE AppointmentID = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from_statement)?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.gateway.acquire().await?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Appointments")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }

    async fn count_for_patient(&self, patient_id: PatientId) -> Result<i64, RepositoryError> {
        self.count_where(
            "SELECT COUNT(*) FROM Appointments WHERE PatientID = ?",
            patient_id.value(),
        )
        .await
    }

    async fn count_for_doctor(&self, doctor_id: DoctorId) -> Result<i64, RepositoryError> {
        self.count_where(
            "SELECT COUNT(*) FROM Appointments WHERE DoctorID = ?",
            doctor_id.value(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::driven_adapters::config::DatabaseConfig;

    async fn seeded() -> (StorageGateway, SqliteAppointmentRepository) {
        let gateway = StorageGateway::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        })
        .await
        .unwrap();
        gateway.initialize().await.unwrap();

        let mut conn = gateway.acquire().await.unwrap();
        sqlx::query(
            "INSERT INTO Patients (Name, DOB, Gender, ContactInfo, Address) VALUES ('Alice', '1990-01-01', 'F', '555-1000', '1 Main St')",
        )
        .execute(&mut *conn)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO Doctors (Name, Specialty, ContactInfo, Email) VALUES ('Dr. Bob', 'Cardiology', '555-2000', 'bob@x.com')",
        )
        .execute(&mut *conn)
        .await
        .unwrap();
        drop(conn);

        let repo = SqliteAppointmentRepository::new(gateway.clone());
        (gateway, repo)
    }

    fn booking(date: &str) -> CreateAppointmentData {
        CreateAppointmentData {
            patient_id: PatientId::new(1),
            doctor_id: DoctorId::new(1),
            appointment_date: date.to_string(),
            notes: "checkup".to_string(),
            status: "scheduled".to_string(),
        }
    }

    #[tokio::test]
    async fn test_listing_joins_names_and_orders_by_date() {
        let (_gateway, repo) = seeded().await;
        repo.create(&booking("2024-05-01")).await.unwrap();
        repo.create(&booking("2024-06-01")).await.unwrap();

        let listed = repo.find_all_with_names().await.unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].appointment_date, "2024-06-01");
        assert_eq!(listed[1].appointment_date, "2024-05-01");
        assert_eq!(listed[0].patient_name.as_deref(), Some("Alice"));
        assert_eq!(listed[0].doctor_name.as_deref(), Some("Dr. Bob"));
    }

    #[tokio::test]
    async fn test_dangling_reference_lists_without_name() {
        let (gateway, repo) = seeded().await;
        repo.create(&booking("2024-06-01")).await.unwrap();

        let mut conn = gateway.acquire().await.unwrap();
        sqlx::query("PRAGMA foreign_keys = OFF")
            .execute(&mut *conn)
            .await
            .unwrap();
        sqlx::query("DELETE FROM Patients")
            .execute(&mut *conn)
            .await
            .unwrap();
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&mut *conn)
            .await
            .unwrap();
        drop(conn);

        let listed = repo.find_all_with_names().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert!(listed[0].patient_name.is_none());
        assert_eq!(listed[0].doctor_name.as_deref(), Some("Dr. Bob"));
    }

    #[tokio::test]
    async fn test_counts_by_reference() {
        let (_gateway, repo) = seeded().await;
        repo.create(&booking("2024-06-01")).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(repo.count_for_patient(PatientId::new(1)).await.unwrap(), 1);
        assert_eq!(repo.count_for_doctor(DoctorId::new(1)).await.unwrap(), 1);
        assert_eq!(repo.count_for_doctor(DoctorId::new(2)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_references_are_constraint_errors() {
        let (_gateway, repo) = seeded().await;
        let mut data = booking("2024-06-01");
        data.patient_id = PatientId::new(99);

        let err = repo.create(&data).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Constraint(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
