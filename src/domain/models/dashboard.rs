//! Dashboard Model

/// Row totals shown on the front page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub patients: i64,
    pub doctors: i64,
    pub appointments: i64,
}
