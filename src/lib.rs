//! Obra Dashboard - financial summary and budget status for construction projects
//!
//! This library turns per-project financial records (expenses, apportioned
//! contributions, investment returns) into dashboard totals, and classifies
//! each project's budget against its planned cost.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (projects, budget lines, movements)
//! - `services`: Pure computation (balance, classification, aggregation)
//! - `ingest`: Decoding and validation of API snapshots
//! - `display`: Formatting and table rendering
//! - `reports`: Views joining computed values for output
//! - `cli`: Command handlers for the `obra` binary
//!
//! # Example
//!
//! ```
//! use obra_dashboard::models::ProjectFinancials;
//! use obra_dashboard::services::aggregate;
//!
//! let projects = vec![
//!     ProjectFinancials::with_totals("A", 1000.0, 1200.0, 50.0),
//!     ProjectFinancials::with_totals("B", 500.0, 400.0, 0.0),
//! ];
//! assert_eq!(aggregate(&projects).final_balance, 150.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ingest;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{DashboardError, DashboardResult};
