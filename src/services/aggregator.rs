//! Fleet summary aggregation
//!
//! Sums per-project totals into a [`FleetSummary`]. The final balance is the
//! sum of each project's own balance, so the fleet figure always agrees with
//! the rows it was built from.

use crate::models::{FleetSummary, ProjectFinancials, ProjectRow};

/// Sum values in a canonical order
///
/// Floating-point addition is not associative, so summing in input order
/// would let the result depend on how the snapshot happened to be sorted.
/// Sorting by `total_cmp` first makes the result bit-identical for any
/// permutation of the same values. NaN and infinities propagate.
pub(crate) fn ordered_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut values: Vec<f64> = values.into_iter().collect();
    values.sort_by(|a, b| a.total_cmp(b));
    values.into_iter().fold(0.0, |acc, v| acc + v)
}

/// Aggregate a snapshot of projects into fleet totals
///
/// An empty slice yields an all-zero summary.
pub fn aggregate(projects: &[ProjectFinancials]) -> FleetSummary {
    FleetSummary {
        total_expenses: ordered_sum(projects.iter().map(|p| p.total_expenses)),
        total_apportioned_contributions: ordered_sum(
            projects.iter().map(|p| p.apportioned_contributions),
        ),
        total_investment_returns: ordered_sum(projects.iter().map(|p| p.investment_returns)),
        final_balance: ordered_sum(projects.iter().map(ProjectFinancials::balance)),
        project_count: projects.len(),
    }
}

/// Each project's raw fields alongside its derived balance, in input order
pub fn project_rows(projects: &[ProjectFinancials]) -> Vec<ProjectRow> {
    projects.iter().map(ProjectRow::from).collect()
}
