//! Dashboard Use Cases

mod get_dashboard_counts;

pub use get_dashboard_counts::GetDashboardCountsUseCase;
