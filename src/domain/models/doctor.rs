//! Doctor Domain Model

/// Newtype wrapper for the store-assigned Doctor ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DoctorId(i64);

impl DoctorId {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DoctorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for DoctorId {
    type Error = std::num::ParseIntError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(value.trim().parse()?))
    }
}

/// Data required to register a new Doctor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDoctorData {
    pub name: String,
    pub specialty: String,
    pub contact_info: String,
    pub email: String,
}

/// Doctor domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    id: DoctorId,
    name: String,
    specialty: String,
    contact_info: String,
    email: String,
}

impl Doctor {
    /// Restore a Doctor from persisted data
    #[must_use]
    pub fn restore(id: DoctorId, data: CreateDoctorData) -> Self {
        Self {
            id,
            name: data.name,
            specialty: data.specialty,
            contact_info: data.contact_info,
            email: data.email,
        }
    }

    #[must_use]
    pub fn id(&self) -> DoctorId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    #[must_use]
    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
