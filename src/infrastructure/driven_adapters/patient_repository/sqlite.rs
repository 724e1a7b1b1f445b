//! SQLite Patient Repository Implementation
//!
//! Implements the PatientRepository trait using SQLx for SQLite.

use async_trait::async_trait;

use crate::domain::gateways::PatientRepository;
use crate::domain::models::patient::{Patient, PatientData, PatientId};
use crate::infrastructure::driven_adapters::database::StorageGateway;
use crate::shared::errors::RepositoryError;

/// Database row representation for the Patients table
#[derive(Debug, sqlx::FromRow)]
struct PatientRow {
    id: i64,
    name: String,
    date_of_birth: String,
    gender: String,
    contact_info: String,
    address: String,
}

impl From<PatientRow> for Patient {
    fn from(row: PatientRow) -> Self {
        Patient::restore(
            PatientId::new(row.id),
            PatientData {
                name: row.name,
                date_of_birth: row.date_of_birth,
                gender: row.gender,
                contact_info: row.contact_info,
                address: row.address,
            },
        )
    }
}

/// SQLite implementation of PatientRepository
pub struct SqlitePatientRepository {
    gateway: StorageGateway,
}

impl SqlitePatientRepository {
    /// Create a new SqlitePatientRepository
    #[must_use]
    pub fn new(gateway: StorageGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl PatientRepository for SqlitePatientRepository {
    async fn find_all(&self) -> Result<Vec<Patient>, RepositoryError> {
        let mut conn = self.gateway.acquire().await?;

        let rows = sqlx::query_as::<_, PatientRow>(
            r#"
            SELECT PatientID AS id, Name AS name, DOB AS date_of_birth,
                   Gender AS gender, ContactInfo AS contact_info, Address AS address
            FROM Patients
            ORDER BY PatientID DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(Patient::from).collect())
    }

    async fn find_by_id(&self, id: PatientId) -> Result<Option<Patient>, RepositoryError> {
        let mut conn = self.gateway.acquire().await?;

        let row = sqlx::query_as::<_, PatientRow>(
            r#"
            SELECT PatientID AS id, Name AS name, DOB AS date_of_birth,
                   Gender AS gender, ContactInfo AS contact_info, Address AS address
            FROM Patients
            WHERE PatientID = ?
            "#,
        )
        .bind(id.value())
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(Patient::from))
    }

    async fn create(&self, data: &PatientData) -> Result<Patient, RepositoryError> {
        let mut tx = self.gateway.begin().await?;

        let row = sqlx::query_as::<_, PatientRow>(
            r#"
            INSERT INTO Patients (Name, DOB, Gender, ContactInfo, Address)
            VALUES (?, ?, ?, ?, ?)
            RETURNING PatientID AS id, Name AS name, DOB AS date_of_birth,
                      Gender AS gender, ContactInfo AS contact_info, Address AS address
            "#,
        )
        .bind(&data.name)
        .bind(&data.date_of_birth)
        .bind(&data.gender)
        .bind(&data.contact_info)
        .bind(&data.address)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from_statement)?;

        tx.commit().await?;
        Ok(row.into())
    }

    async fn update(&self, patient: &Patient) -> Result<Option<Patient>, RepositoryError> {
        let mut tx = self.gateway.begin().await?;

        let row = sqlx::query_as::<_, PatientRow>(
            r#"
            UPDATE Patients
            SET Name = ?, DOB = ?, Gender = ?, ContactInfo = ?, Address = ?
            WHERE PatientID = ?
            RETURNING PatientID AS id, Name AS name, DOB AS date_of_birth,
                      Gender AS gender, ContactInfo AS contact_info, Address AS address
            "#,
        )
        .bind(patient.name())
        .bind(patient.date_of_birth())
        .bind(patient.gender())
        .bind(patient.contact_info())
        .bind(patient.address())
        .bind(patient.id().value())
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from_statement)?;

        tx.commit().await?;
        Ok(row.map(Patient::from))
    }

    async fn delete(&self, id: PatientId) -> Result<bool, RepositoryError> {
        let mut tx = self.gateway.begin().await?;

        let result = sqlx::query("DELETE FROM Patients WHERE PatientID = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from_statement)?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.gateway.acquire().await?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Patients")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }
}
