//! Movement roll-up and filtering
//!
//! Turns raw movements into per-project totals and provides the period/project
//! filter used by the movements listing.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Movement, MovementKind, ProjectFinancials};
use crate::services::aggregator::ordered_sum;

/// Filter for the movements listing; `None` or empty strings match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementFilter {
    pub competencia: Option<String>,
    pub project_code: Option<String>,
}

impl MovementFilter {
    pub fn new(competencia: Option<String>, project_code: Option<String>) -> Self {
        Self {
            competencia,
            project_code,
        }
    }

    pub fn matches(&self, movement: &Movement) -> bool {
        field_matches(&self.competencia, &movement.competencia)
            && field_matches(&self.project_code, &movement.project_code)
    }

    pub fn is_empty(&self) -> bool {
        active(&self.competencia).is_none() && active(&self.project_code).is_none()
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn field_matches(wanted: &Option<String>, actual: &str) -> bool {
    active(wanted).map_or(true, |w| w == actual)
}

/// Matching movements, newest period first, then by project code
pub fn filter_movements(movements: &[Movement], filter: &MovementFilter) -> Vec<Movement> {
    let mut selected: Vec<Movement> = movements
        .iter()
        .filter(|m| filter.matches(m))
        .cloned()
        .collect();
    selected.sort_by(|a, b| {
        b.competencia
            .cmp(&a.competencia)
            .then_with(|| a.project_code.cmp(&b.project_code))
    });
    selected
}

/// Distinct reporting periods, newest first
pub fn competencias(movements: &[Movement]) -> Vec<String> {
    let periods: BTreeSet<&str> = movements.iter().map(|m| m.competencia.as_str()).collect();
    periods.into_iter().rev().map(str::to_string).collect()
}

#[derive(Default)]
struct Buckets {
    expenses: Vec<f64>,
    contributions: Vec<f64>,
    returns: Vec<f64>,
}

/// Roll movements up into per-project totals
///
/// Groups by project code and name. Only expense, apportioned contribution
/// and investment return movements are summed. Result is ordered by total
/// expenses, largest first, with ties broken by project code.
pub fn rollup(movements: &[Movement]) -> Vec<ProjectFinancials> {
    let mut groups: BTreeMap<(&str, Option<&str>), Buckets> = BTreeMap::new();

    for movement in movements {
        let key = (movement.project_code.as_str(), movement.project_name.as_deref());
        let buckets = groups.entry(key).or_default();
        match movement.kind {
            MovementKind::Expense => buckets.expenses.push(movement.amount),
            MovementKind::ApportionedContribution => buckets.contributions.push(movement.amount),
            MovementKind::InvestmentReturn => buckets.returns.push(movement.amount),
            MovementKind::ReportedFinalBalance | MovementKind::Other(_) => {}
        }
    }

    let mut projects: Vec<ProjectFinancials> = groups
        .into_iter()
        .map(|((code, name), buckets)| ProjectFinancials {
            project_code: code.to_string(),
            project_name: name.map(str::to_string),
            total_expenses: ordered_sum(buckets.expenses),
            apportioned_contributions: ordered_sum(buckets.contributions),
            investment_returns: ordered_sum(buckets.returns),
        })
        .collect();

    projects.sort_by(|a, b| {
        b.total_expenses
            .total_cmp(&a.total_expenses)
            .then_with(|| a.project_code.cmp(&b.project_code))
    });
    projects
}

/// Per-project sum of `Saldo_Final` movements, for cross-checking only
pub fn reported_final_balances(movements: &[Movement]) -> BTreeMap<String, f64> {
    let mut per_project: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for movement in movements
        .iter()
        .filter(|m| m.kind == MovementKind::ReportedFinalBalance)
    {
        per_project
            .entry(movement.project_code.clone())
            .or_default()
            .push(movement.amount);
    }
    per_project
        .into_iter()
        .map(|(code, amounts)| (code, ordered_sum(amounts)))
        .collect()
}

/// A project code whose reported `Saldo_Final` disagrees with its computed balance
#[derive(Debug, Clone, PartialEq)]
pub struct FinalBalanceMismatch {
    pub project_code: String,
    pub reported: f64,
    pub computed: f64,
}

/// Compare reported final balances against rolled-up projects, per project code
///
/// A code that appears under several names is compared against the sum of
/// all its rows. Codes with no `Saldo_Final` movement are skipped.
pub fn final_balance_mismatches(
    movements: &[Movement],
    projects: &[ProjectFinancials],
    tolerance: f64,
) -> Vec<FinalBalanceMismatch> {
    let mut computed: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for project in projects {
        computed
            .entry(project.project_code.as_str())
            .or_default()
            .push(project.balance());
    }

    reported_final_balances(movements)
        .into_iter()
        .filter_map(|(code, reported)| {
            let balances = computed.remove(code.as_str())?;
            let total = ordered_sum(balances);
            if (reported - total).abs() > tolerance {
                Some(FinalBalanceMismatch {
                    project_code: code,
                    reported,
                    computed: total,
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::aggregator::aggregate;

    fn sample() -> Vec<Movement> {
        vec![
            Movement::new("2025-01", "A", MovementKind::Expense, 600.0).named("Alpha"),
            Movement::new("2025-02", "A", MovementKind::Expense, 400.0).named("Alpha"),
            Movement::new("2025-02", "A", MovementKind::ApportionedContribution, 1200.0)
                .named("Alpha"),
            Movement::new("2025-02", "A", MovementKind::InvestmentReturn, 50.0).named("Alpha"),
            Movement::new("2025-02", "A", MovementKind::ReportedFinalBalance, 999.0)
                .named("Alpha"),
            Movement::new("2025-01", "B", MovementKind::Expense, 500.0).named("Beta"),
            Movement::new("2025-01", "B", MovementKind::ApportionedContribution, 400.0)
                .named("Beta"),
            Movement::new("2025-01", "B", MovementKind::Other("Aporte".into()), 77.0)
                .named("Beta"),
        ]
    }

    #[test]
    fn test_rollup_totals() {
        let projects = rollup(&sample());
        assert_eq!(projects.len(), 2);

        assert_eq!(projects[0].project_code, "A");
        assert_eq!(projects[0].project_name.as_deref(), Some("Alpha"));
        assert_eq!(projects[0].total_expenses, 1000.0);
        assert_eq!(projects[0].apportioned_contributions, 1200.0);
        assert_eq!(projects[0].investment_returns, 50.0);
        assert_eq!(projects[0].balance(), 250.0);

        assert_eq!(projects[1].project_code, "B");
        assert_eq!(projects[1].balance(), -100.0);

        assert_eq!(aggregate(&projects).final_balance, 150.0);
    }

    #[test]
    fn test_rollup_ordering_ties() {
        let movements = vec![
            Movement::new("2025-01", "Z", MovementKind::Expense, 10.0),
            Movement::new("2025-01", "M", MovementKind::Expense, 10.0),
            Movement::new("2025-01", "Q", MovementKind::Expense, 30.0),
        ];
        let codes: Vec<String> = rollup(&movements)
            .into_iter()
            .map(|p| p.project_code)
            .collect();
        assert_eq!(codes, vec!["Q", "M", "Z"]);
    }

    #[test]
    fn test_rollup_empty() {
        assert!(rollup(&[]).is_empty());
    }

    #[test]
    fn test_filter_by_period_and_project() {
        let movements = sample();

        let filter = MovementFilter::new(Some("2025-01".into()), None);
        let selected = filter_movements(&movements, &filter);
        assert_eq!(selected.len(), 4);
        assert!(selected.iter().all(|m| m.competencia == "2025-01"));
        assert_eq!(selected[0].project_code, "A");

        let filter = MovementFilter::new(Some("2025-02".into()), Some("A".into()));
        assert_eq!(filter_movements(&movements, &filter).len(), 4);

        let filter = MovementFilter::new(None, Some("nope".into()));
        assert!(filter_movements(&movements, &filter).is_empty());
    }

    #[test]
    fn test_empty_filter_orders_all() {
        let filter = MovementFilter::new(Some(String::new()), None);
        assert!(filter.is_empty());

        let selected = filter_movements(&sample(), &filter);
        assert_eq!(selected.len(), 8);
        assert_eq!(selected[0].competencia, "2025-02");
        assert_eq!(selected.last().unwrap().project_code, "B");
    }

    #[test]
    fn test_competencias_newest_first() {
        assert_eq!(competencias(&sample()), vec!["2025-02", "2025-01"]);
    }

    #[test]
    fn test_reported_final_balances() {
        let reported = reported_final_balances(&sample());
        assert_eq!(reported.len(), 1);
        assert_eq!(reported["A"], 999.0);
    }

    #[test]
    fn test_final_balance_mismatches() {
        let movements = sample();
        let mismatches = final_balance_mismatches(&movements, &rollup(&movements), 0.005);
        assert_eq!(
            mismatches,
            vec![FinalBalanceMismatch {
                project_code: "A".into(),
                reported: 999.0,
                computed: 250.0,
            }]
        );
    }

    #[test]
    fn test_final_balance_split_across_names() {
        let movements = vec![
            Movement::new("2025-01", "A", MovementKind::ApportionedContribution, 300.0)
                .named("Alpha"),
            Movement::new("2025-02", "A", MovementKind::ApportionedContribution, 200.0)
                .named("Alpha II"),
            Movement::new("2025-02", "A", MovementKind::Expense, 100.0).named("Alpha II"),
            Movement::new("2025-02", "A", MovementKind::ReportedFinalBalance, 400.0),
        ];
        let projects = rollup(&movements);
        assert_eq!(projects.len(), 2);

        assert!(final_balance_mismatches(&movements, &projects, 0.005).is_empty());
    }
}
