//! Computation layer for the obra dashboard
//!
//! Every function here is pure: inputs are borrowed snapshots, outputs are new
//! values, and nothing is remembered between calls.
//!
//! - `balance`: the balance formula
//! - `classifier`: budget status classification
//! - `aggregator`: fleet-wide totals
//! - `movements`: roll-up and filtering of raw movements
//! - `reconcile`: joins budget lines with project totals

pub mod aggregator;
pub mod balance;
pub mod classifier;
pub mod movements;
pub mod reconcile;

pub use aggregator::{aggregate, project_rows};
pub use balance::compute_balance;
pub use classifier::{classify, classify_line};
pub use movements::{
    competencias, filter_movements, final_balance_mismatches, reported_final_balances, rollup,
    FinalBalanceMismatch, MovementFilter,
};
pub use reconcile::reconcile;
