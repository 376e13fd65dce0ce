//! Dashboard views
//!
//! Structured views that join computed values for display or JSON output.

pub mod budget_status;
pub mod dashboard;

pub use budget_status::{BudgetStatusReport, BudgetStatusRow};
pub use dashboard::DashboardReport;
