//! SQLite Doctor Repository Implementation

use async_trait::async_trait;

use crate::domain::gateways::DoctorRepository;
use crate::domain::models::doctor::{CreateDoctorData, Doctor, DoctorId};
use crate::infrastructure::driven_adapters::database::StorageGateway;
use crate::shared::errors::RepositoryError;

/// Database row representation for the Doctors table
#[derive(Debug, sqlx::FromRow)]
struct DoctorRow {
    id: i64,
    name: String,
    specialty: String,
    contact_info: String,
    email: String,
}

impl From<DoctorRow> for Doctor {
    fn from(row: DoctorRow) -> Self {
        Doctor::restore(
            DoctorId::new(row.id),
            CreateDoctorData {
                name: row.name,
                specialty: row.specialty,
                contact_info: row.contact_info,
                email: row.email,
            },
        )
    }
}

/// SQLite implementation of DoctorRepository
pub struct SqliteDoctorRepository {
    gateway: StorageGateway,
}

impl SqliteDoctorRepository {
    /// Create a new SqliteDoctorRepository
    #[must_use]
    pub fn new(gateway: StorageGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl DoctorRepository for SqliteDoctorRepository {
    async fn find_all(&self) -> Result<Vec<Doctor>, RepositoryError> {
        let mut conn = self.gateway.acquire().await?;

        let rows = sqlx::query_as::<_, DoctorRow>(
            r#"
            SELECT DoctorID AS id, Name AS name, Specialty AS specialty,
                   ContactInfo AS contact_info, Email AS email
            FROM Doctors
            ORDER BY DoctorID DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(Doctor::from).collect())
    }

    async fn find_by_id(&self, id: DoctorId) -> Result<Option<Doctor>, RepositoryError> {
        let mut conn = self.gateway.acquire().await?;

        let row = sqlx::query_as::<_, DoctorRow>(
            r#"
            SELECT DoctorID AS id, Name AS name, Specialty AS specialty,
                   ContactInfo AS contact_info, Email AS email
            FROM Doctors
            WHERE DoctorID = ?
            "#,
        )
        .bind(id.value())
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(Doctor::from))
    }

    async fn create(&self, data: &CreateDoctorData) -> Result<Doctor, RepositoryError> {
        let mut tx = self.gateway.begin().await?;

        let row = sqlx::query_as::<_, DoctorRow>(
            r#"
            INSERT INTO Doctors (Name, Specialty, ContactInfo, Email)
            VALUES (?, ?, ?, ?)
            RETURNING DoctorID AS id, Name AS name, Specialty AS specialty,
                      ContactInfo AS contact_info, Email AS email
            "#,
        )
        .bind(&data.name)
        .bind(&data.specialty)
        .bind(&data.contact_info)
        .bind(&data.email)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from_statement)?;

        tx.commit().await?;
        Ok(row.into())
    }

    async fn delete(&self, id: DoctorId) -> Result<bool, RepositoryError> {
        let mut tx = self.gateway.begin().await?;

        let result = sqlx::query("DELETE FROM Doctors WHERE DoctorID = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from_statement)?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.gateway.acquire().await?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Doctors")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }
}
