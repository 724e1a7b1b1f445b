//! Confirmation notices carried on the post-write redirect

use axum::response::Redirect;
use serde::Deserialize;

/// Outcome of a successful write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Added,
    Updated,
    Deleted,
    Booked,
}

impl Notice {
    /// Query parameter value
    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::Booked => "booked",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "added" => Some(Self::Added),
            "updated" => Some(Self::Updated),
            "deleted" => Some(Self::Deleted),
            "booked" => Some(Self::Booked),
            _ => None,
        }
    }

    /// User-facing message, e.g. "Patient added successfully!"
    #[must_use]
    pub fn message(self, resource: &str) -> String {
        format!("{resource} {} successfully!", self.as_param())
    }

    /// Redirect to a list page carrying this notice
    #[must_use]
    pub fn redirect_to(self, path: &str) -> Redirect {
        Redirect::to(&format!("{path}?notice={}", self.as_param()))
    }
}

/// Query string accepted by the list pages
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub notice: Option<String>,
}

impl ListQuery {
    /// Message for a recognised notice; unknown values are ignored
    #[must_use]
    pub fn notice_message(&self, resource: &str) -> Option<String> {
        self.notice
            .as_deref()
            .and_then(Notice::parse)
            .map(|notice| notice.message(resource))
    }
}
