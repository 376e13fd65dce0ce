//! Per-project financial totals
//!
//! One record per construction project ("obra") for a reporting period, as
//! already aggregated by the data source.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::services::balance::compute_balance;

/// Financial totals for a single project
///
/// All three amounts are totals for the reporting period; nothing here is
/// recomputed from finer-grained movements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFinancials {
    /// Unique project code
    #[serde(rename = "codigo_obra")]
    pub project_code: String,

    /// Display name, if the source has one
    #[serde(rename = "obra_nome", default)]
    pub project_name: Option<String>,

    /// Total expenses
    #[serde(rename = "despesas_totais")]
    pub total_expenses: f64,

    /// Capital contributions apportioned to this project
    #[serde(rename = "aportes_rateados")]
    pub apportioned_contributions: f64,

    /// Returns on invested balances
    #[serde(rename = "rentabilidade")]
    pub investment_returns: f64,
}

impl ProjectFinancials {
    /// Create a record with its three totals
    pub fn with_totals(
        project_code: impl Into<String>,
        total_expenses: f64,
        apportioned_contributions: f64,
        investment_returns: f64,
    ) -> Self {
        Self {
            project_code: project_code.into(),
            project_name: None,
            total_expenses,
            apportioned_contributions,
            investment_returns,
        }
    }

    /// Builder-style setter for the display name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Net position: contributions + returns - expenses
    ///
    /// Recomputed on every call.
    pub fn balance(&self) -> f64 {
        compute_balance(
            self.apportioned_contributions,
            self.investment_returns,
            self.total_expenses,
        )
    }

    /// The name to show, or "-" when the source has none
    pub fn display_name(&self) -> &str {
        self.project_name.as_deref().unwrap_or("-")
    }

    /// Check whether the project is running a deficit
    pub fn is_negative(&self) -> bool {
        self.balance() < 0.0
    }
}

impl fmt::Display for ProjectFinancials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.project_code, self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_is_derived() {
        let mut project = ProjectFinancials::with_totals("A", 1000.0, 1200.0, 50.0);
        assert_eq!(project.balance(), 250.0);

        project.total_expenses = 1300.0;
        assert_eq!(project.balance(), -50.0);
        assert!(project.is_negative());
    }

    #[test]
    fn test_display_name() {
        let project = ProjectFinancials::with_totals("OB-7", 0.0, 0.0, 0.0);
        assert_eq!(project.display_name(), "-");
        assert_eq!(project.to_string(), "OB-7 (-)");

        let project = project.named("Residencial Riviera");
        assert_eq!(project.display_name(), "Residencial Riviera");
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "codigo_obra": "OB-1",
            "obra_nome": null,
            "despesas_totais": 500.0,
            "aportes_rateados": 400.0,
            "rentabilidade": 0.0,
            "saldo_final": 12.0
        }"#;
        let project: ProjectFinancials = serde_json::from_str(json).unwrap();
        assert_eq!(project.project_code, "OB-1");
        assert_eq!(project.project_name, None);
        assert_eq!(project.balance(), -100.0);
    }
}
