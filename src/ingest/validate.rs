//! Validation boundary
//!
//! Records are checked here, before they reach the computation layer, so
//! the services can assume well-formed input.

use serde::Serialize;
use tracing::warn;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{BudgetLine, FleetSummary, Movement, ProjectFinancials};

use super::payload::ReportedTotals;

/// Largest difference between server and local totals that counts as equal
pub const TOTALS_TOLERANCE: f64 = 0.005;

fn require_code(code: &str, what: &str) -> DashboardResult<()> {
    if code.trim().is_empty() {
        return Err(DashboardError::Validation(format!(
            "{} record has an empty project code",
            what
        )));
    }
    Ok(())
}

fn require_finite(value: f64, field: &str, code: &str) -> DashboardResult<()> {
    if !value.is_finite() {
        return Err(DashboardError::Validation(format!(
            "{} for project '{}' is not a finite number",
            field, code
        )));
    }
    Ok(())
}

pub fn validate_project(project: &ProjectFinancials) -> DashboardResult<()> {
    require_code(&project.project_code, "Project")?;
    let code = &project.project_code;
    require_finite(project.total_expenses, "despesas_totais", code)?;
    require_finite(project.apportioned_contributions, "aportes_rateados", code)?;
    require_finite(project.investment_returns, "rentabilidade", code)?;
    Ok(())
}

pub fn validate_budget_line(line: &BudgetLine) -> DashboardResult<()> {
    require_code(&line.project_code, "Budget")?;
    if let Some(planned) = line.planned_cost {
        require_finite(planned, "custo_previsto", &line.project_code)?;
    }
    if let Some(realized) = line.realized_cost {
        require_finite(realized, "custo_realizado", &line.project_code)?;
    }
    Ok(())
}

pub fn validate_movement(movement: &Movement) -> DashboardResult<()> {
    require_code(&movement.project_code, "Movement")?;
    require_finite(movement.amount, "valor", &movement.project_code)?;
    Ok(())
}

/// Validate every record, stopping at the first failure
pub fn validate_all<T, F>(records: &[T], check: F) -> DashboardResult<()>
where
    F: Fn(&T) -> DashboardResult<()>,
{
    records.iter().try_for_each(check)
}

/// A server-reported total that disagrees with the local aggregate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsMismatch {
    pub field: &'static str,
    pub reported: f64,
    pub computed: f64,
}

/// Compare server totals with locally aggregated ones
///
/// `null` server totals count as zero. Each mismatch is logged; the local
/// summary is always the one displayed.
pub fn cross_check_totals(reported: &ReportedTotals, computed: &FleetSummary) -> Vec<TotalsMismatch> {
    let pairs = [
        ("despesas_totais", reported.total_expenses, computed.total_expenses),
        (
            "aportes_rateados",
            reported.total_apportioned_contributions,
            computed.total_apportioned_contributions,
        ),
        (
            "rentabilidade",
            reported.total_investment_returns,
            computed.total_investment_returns,
        ),
    ];

    pairs
        .into_iter()
        .filter_map(|(field, reported, computed)| {
            let reported = reported.unwrap_or(0.0);
            let matches = (reported - computed).abs() <= TOTALS_TOLERANCE;
            if matches {
                None
            } else {
                warn!(field, reported, computed, "server total differs from local aggregate");
                Some(TotalsMismatch {
                    field,
                    reported,
                    computed,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovementKind;
    use crate::services::aggregate;

    #[test]
    fn test_valid_project() {
        let project = ProjectFinancials::with_totals("A", 1.0, 2.0, -3.0);
        assert!(validate_project(&project).is_ok());
    }

    #[test]
    fn test_empty_code_rejected() {
        let project = ProjectFinancials::with_totals("  ", 1.0, 2.0, 3.0);
        let err = validate_project(&project).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("empty project code"));
    }

    #[test]
    fn test_non_finite_rejected() {
        let project = ProjectFinancials::with_totals("A", f64::NAN, 2.0, 3.0);
        assert!(validate_project(&project).is_err());

        let line = BudgetLine::new("A", Some(f64::INFINITY), None);
        assert!(validate_budget_line(&line).is_err());

        let movement = Movement::new("2025-01", "A", MovementKind::Expense, f64::NAN);
        assert!(validate_movement(&movement).is_err());
    }

    #[test]
    fn test_absent_budget_values_are_valid() {
        assert!(validate_budget_line(&BudgetLine::new("A", None, None)).is_ok());
    }

    #[test]
    fn test_validate_all_stops_on_first_error() {
        let projects = vec![
            ProjectFinancials::with_totals("A", 1.0, 1.0, 1.0),
            ProjectFinancials::with_totals("", 1.0, 1.0, 1.0),
        ];
        assert!(validate_all(&projects, validate_project).is_err());
        assert!(validate_all(&projects[..1], validate_project).is_ok());
    }

    #[test]
    fn test_cross_check_totals() {
        let projects = vec![ProjectFinancials::with_totals("A", 100.0, 80.0, 5.0)];
        let computed = aggregate(&projects);

        let reported = ReportedTotals {
            total_expenses: Some(100.001),
            total_apportioned_contributions: Some(80.0),
            total_investment_returns: Some(7.0),
        };
        let mismatches = cross_check_totals(&reported, &computed);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].field, "rentabilidade");
        assert_eq!(mismatches[0].computed, 5.0);
    }

    #[test]
    fn test_null_totals_match_empty_fleet() {
        let computed = aggregate(&[]);
        assert!(cross_check_totals(&ReportedTotals::default(), &computed).is_empty());
    }
}
