// Request-level façade over the cleaned dataset
pub mod dashboard_service;

pub use dashboard_service::{DashboardService, DashboardView};
