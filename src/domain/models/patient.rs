//! Patient Domain Model
//!
//! Represents a patient registered with the front office.

/// Newtype wrapper for the store-assigned Patient ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatientId(i64);

impl PatientId {
    /// Wrap an existing store identity
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying integer
    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for PatientId {
    type Error = std::num::ParseIntError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(value.trim().parse()?))
    }
}

/// Patient fields supplied by staff, used for both creation and full edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientData {
    pub name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub contact_info: String,
    pub address: String,
}

/// Patient domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    id: PatientId,
    name: String,
    date_of_birth: String,
    gender: String,
    contact_info: String,
    address: String,
}

impl Patient {
    /// Restore a Patient from persisted data
    #[must_use]
    pub fn restore(id: PatientId, data: PatientData) -> Self {
        Self {
            id,
            name: data.name,
            date_of_birth: data.date_of_birth,
            gender: data.gender,
            contact_info: data.contact_info,
            address: data.address,
        }
    }

    /// Replace every editable field, keeping the identity
    #[must_use]
    pub fn with_updates(self, data: PatientData) -> Self {
        Self::restore(self.id, data)
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> PatientId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    #[must_use]
    pub fn gender(&self) -> &str {
        &self.gender
    }

    #[must_use]
    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}
