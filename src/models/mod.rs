//! Core data models for the obra dashboard
//!
//! Plain, immutable-by-convention records: per-project totals, budget lines,
//! raw movements, and the derived values computed from them.

pub mod budget;
pub mod movement;
pub mod project;
pub mod summary;

pub use budget::{BudgetLine, BudgetStatus, StatusTag, Tone};
pub use movement::{Movement, MovementKind};
pub use project::ProjectFinancials;
pub use summary::{FleetSummary, ProjectRow};
