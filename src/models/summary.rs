//! Fleet-wide summary values

use serde::Serialize;
use std::fmt;

use super::project::ProjectFinancials;

/// Totals across every project in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FleetSummary {
    pub total_expenses: f64,
    pub total_apportioned_contributions: f64,
    pub total_investment_returns: f64,
    /// Sum of the per-project balances
    pub final_balance: f64,
    pub project_count: usize,
}

impl fmt::Display for FleetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expenses: {:.2} | Contributions: {:.2} | Returns: {:.2} | Balance: {:.2}",
            self.total_expenses,
            self.total_apportioned_contributions,
            self.total_investment_returns,
            self.final_balance
        )
    }
}

/// A project's raw totals alongside its derived balance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRow {
    #[serde(flatten)]
    pub project: ProjectFinancials,
    pub balance: f64,
}

impl From<&ProjectFinancials> for ProjectRow {
    fn from(project: &ProjectFinancials) -> Self {
        Self {
            project: project.clone(),
            balance: project.balance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let summary = FleetSummary {
            total_expenses: 1500.0,
            total_apportioned_contributions: 1600.0,
            total_investment_returns: 50.0,
            final_balance: 150.0,
            project_count: 2,
        };
        assert_eq!(
            summary.to_string(),
            "Expenses: 1500.00 | Contributions: 1600.00 | Returns: 50.00 | Balance: 150.00"
        );
    }

    #[test]
    fn test_row_carries_balance() {
        let project = ProjectFinancials::with_totals("B", 500.0, 400.0, 0.0);
        let row = ProjectRow::from(&project);
        assert_eq!(row.balance, -100.0);
        assert_eq!(row.project, project);
    }
}
