//! CLI command handlers
//!
//! Bridges clap argument parsing with ingestion, services and reports. The
//! handlers own all session state (which snapshot, which filter) and pass it
//! into the services as plain parameters.

pub mod budget;
pub mod dashboard;
pub mod movements;

use serde::Serialize;

use crate::config::{ObraPaths, Settings};
use crate::error::DashboardResult;

pub use budget::{handle_budget_command, BudgetArgs};
pub use dashboard::{handle_dashboard_command, handle_rollup_command, DashboardArgs, RollupArgs};
pub use movements::{handle_movements_command, MovementsArgs};

/// Resolved paths and settings for one invocation
#[derive(Debug, Clone)]
pub struct CliContext {
    pub paths: ObraPaths,
    pub settings: Settings,
}

impl CliContext {
    pub fn new(paths: ObraPaths, settings: Settings) -> Self {
        Self { paths, settings }
    }
}

/// Print a value as pretty JSON
pub(crate) fn print_json<T: Serialize>(value: &T) -> DashboardResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
