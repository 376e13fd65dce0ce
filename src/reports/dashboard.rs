//! Dashboard view
//!
//! Fleet summary cards plus the per-project table, built from one snapshot.

use serde::Serialize;

use crate::config::Settings;
use crate::display::{balance_tone, format_money, format_project_table, paint};
use crate::ingest::TotalsMismatch;
use crate::models::{FleetSummary, ProjectFinancials, ProjectRow};
use crate::services::{aggregate, project_rows};

/// Everything the dashboard screen shows
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub summary: FleetSummary,
    pub projects: Vec<ProjectRow>,
    /// Server totals that disagreed with the local aggregate
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mismatches: Vec<TotalsMismatch>,
}

impl DashboardReport {
    pub fn build(projects: &[ProjectFinancials]) -> Self {
        Self {
            summary: aggregate(projects),
            projects: project_rows(projects),
            mismatches: Vec::new(),
        }
    }

    pub fn with_mismatches(mut self, mismatches: Vec<TotalsMismatch>) -> Self {
        self.mismatches = mismatches;
        self
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let money = settings.money_format();
        let summary = &self.summary;
        let mut output = String::new();

        output.push_str("Dashboard de Obras\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        let cards = [
            ("Despesas totais", summary.total_expenses),
            ("Aportes rateados", summary.total_apportioned_contributions),
            ("Rentabilidade", summary.total_investment_returns),
        ];
        for (title, value) in cards {
            output.push_str(&format!("{:<20} {:>22}\n", title, format_money(value, &money)));
        }

        let balance = format!("{:>22}", format_money(summary.final_balance, &money));
        output.push_str(&format!(
            "{:<20} {}\n\n",
            "Saldo final",
            paint(&balance, balance_tone(summary.final_balance), settings.color_output)
        ));

        output.push_str(&format_project_table(&self.projects, &money));
        output.push('\n');

        if self.projects.iter().any(|row| row.project.is_negative()) {
            output.push_str("* = saldo negativo\n");
        }

        for note in &self.mismatches {
            output.push_str(&format!(
                "Aviso: total '{}' informado pelo servidor ({}) difere do calculado ({})\n",
                note.field,
                format_money(note.reported, &money),
                format_money(note.computed, &money)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_settings() -> Settings {
        Settings {
            color_output: false,
            ..Settings::default()
        }
    }

    #[test]
    fn test_build() {
        let projects = vec![
            ProjectFinancials::with_totals("A", 1000.0, 1200.0, 50.0),
            ProjectFinancials::with_totals("B", 500.0, 400.0, 0.0),
        ];
        let report = DashboardReport::build(&projects);
        assert_eq!(report.summary.final_balance, 150.0);
        assert_eq!(report.projects.len(), 2);
        assert_eq!(report.projects[1].balance, -100.0);
    }

    #[test]
    fn test_format_terminal() {
        let projects = vec![ProjectFinancials::with_totals("A", 1500.0, 1000.0, 0.0)];
        let output = DashboardReport::build(&projects).format_terminal(&plain_settings());

        assert!(output.contains("Saldo final"));
        assert!(output.contains("-R$ 500,00"));
        assert!(output.contains("* = saldo negativo"));
        assert!(!output.contains("\x1b["));
    }

    #[test]
    fn test_json_shape() {
        let projects = vec![ProjectFinancials::with_totals("A", 10.0, 30.0, 5.0).named("Alpha")];
        let value = serde_json::to_value(DashboardReport::build(&projects)).unwrap();

        assert_eq!(value["summary"]["final_balance"], 25.0);
        assert_eq!(value["projects"][0]["codigo_obra"], "A");
        assert_eq!(value["projects"][0]["balance"], 25.0);
        assert!(value.get("mismatches").is_none());
    }

    #[test]
    fn test_mismatch_notes() {
        let report = DashboardReport::build(&[]).with_mismatches(vec![TotalsMismatch {
            field: "despesas_totais",
            reported: 10.0,
            computed: 0.0,
        }]);
        let output = report.format_terminal(&plain_settings());
        assert!(output.contains("despesas_totais"));
        assert!(output.contains("Nenhuma obra encontrada."));

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["mismatches"][0]["field"], "despesas_totais");
        assert_eq!(value["mismatches"][0]["reported"], 10.0);
        assert_eq!(value["mismatches"][0]["computed"], 0.0);
    }
}
