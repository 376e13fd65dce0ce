//! Budget reconciliation
//!
//! The budget endpoint only knows planned costs. Realized cost is filled in
//! from the matching project's total expenses.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{BudgetLine, ProjectFinancials};
use crate::services::aggregator::ordered_sum;

/// Fill missing realized costs (and names) from project totals
///
/// Lines that already carry a realized cost are returned unchanged. A code
/// that appears in several project rows (same code, different names) uses the
/// sum of their expenses. Lines without a matching project keep `None`.
pub fn reconcile(lines: &[BudgetLine], projects: &[ProjectFinancials]) -> Vec<BudgetLine> {
    let mut by_code: HashMap<&str, Vec<&ProjectFinancials>> = HashMap::new();
    for project in projects {
        by_code
            .entry(project.project_code.as_str())
            .or_default()
            .push(project);
    }

    lines
        .iter()
        .map(|line| {
            let mut line = line.clone();
            let Some(matches) = by_code.get(line.project_code.as_str()) else {
                debug!(project = %line.project_code, "no project totals for budget line");
                return line;
            };

            if line.realized_cost.is_none() {
                line.realized_cost = Some(ordered_sum(matches.iter().map(|p| p.total_expenses)));
            }
            if line.project_name.is_none() {
                line.project_name = matches.iter().find_map(|p| p.project_name.clone());
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_realized_cost() {
        let lines = vec![BudgetLine::new("A", Some(1200.0), None)];
        let projects = vec![ProjectFinancials::with_totals("A", 1000.0, 0.0, 0.0).named("Alpha")];

        let reconciled = reconcile(&lines, &projects);
        assert_eq!(reconciled[0].realized_cost, Some(1000.0));
        assert_eq!(reconciled[0].project_name.as_deref(), Some("Alpha"));
        assert_eq!(lines[0].realized_cost, None);
    }

    #[test]
    fn test_keeps_existing_values() {
        let lines = vec![BudgetLine::new("A", Some(1200.0), Some(10.0)).named("Obra A")];
        let projects = vec![ProjectFinancials::with_totals("A", 1000.0, 0.0, 0.0).named("Alpha")];

        let reconciled = reconcile(&lines, &projects);
        assert_eq!(reconciled[0].realized_cost, Some(10.0));
        assert_eq!(reconciled[0].project_name.as_deref(), Some("Obra A"));
    }

    #[test]
    fn test_unmatched_line() {
        let lines = vec![BudgetLine::new("X", Some(50.0), None)];
        let reconciled = reconcile(&lines, &[]);
        assert_eq!(reconciled, lines);
    }

    #[test]
    fn test_duplicate_codes_are_summed() {
        let lines = vec![BudgetLine::new("A", None, None)];
        let projects = vec![
            ProjectFinancials::with_totals("A", 300.0, 0.0, 0.0),
            ProjectFinancials::with_totals("A", 200.0, 0.0, 0.0).named("Alpha"),
        ];
        let reconciled = reconcile(&lines, &projects);
        assert_eq!(reconciled[0].realized_cost, Some(500.0));
        assert_eq!(reconciled[0].project_name.as_deref(), Some("Alpha"));
    }
}
