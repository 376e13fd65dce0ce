//! Display formatting for terminal output
//!
//! Presentation only: formats amounts, percentages and dates, and renders
//! structured rows as tables. Computation lives in `services`.

pub mod format;
pub mod tables;

pub use format::{
    balance_tone, format_date, format_money, format_optional_money,
    format_percentage, paint, MoneyFormat,
};
pub use tables::{format_budget_table, format_movement_table, format_project_table};
