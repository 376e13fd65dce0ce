//! Budget status view
//!
//! Classifies every budget line and tallies the results by status.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::Settings;
use crate::display::{format_budget_table, paint};
use crate::models::{BudgetLine, BudgetStatus, StatusTag};
use crate::services::classify_line;

/// A budget line with its derived status
#[derive(Debug, Clone, Serialize)]
pub struct BudgetStatusRow {
    #[serde(flatten)]
    pub line: BudgetLine,
    pub status: BudgetStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetStatusReport {
    pub rows: Vec<BudgetStatusRow>,
    /// Number of lines per status, every tag present
    pub counts: BTreeMap<StatusTag, usize>,
}

impl BudgetStatusReport {
    pub fn build(lines: &[BudgetLine]) -> Self {
        let rows: Vec<BudgetStatusRow> = lines
            .iter()
            .map(|line| BudgetStatusRow {
                line: line.clone(),
                status: classify_line(line),
            })
            .collect();

        let mut counts: BTreeMap<StatusTag, usize> =
            StatusTag::ALL.iter().map(|tag| (*tag, 0)).collect();
        for row in &rows {
            *counts.entry(row.status.label).or_insert(0) += 1;
        }

        Self { rows, counts }
    }

    pub fn format_terminal(&self, settings: &Settings) -> String {
        let pairs: Vec<(BudgetLine, BudgetStatus)> = self
            .rows
            .iter()
            .map(|row| (row.line.clone(), row.status))
            .collect();

        let mut output = String::new();
        output.push_str("Orçamento Previsto x Realizado\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format_budget_table(&pairs, &settings.money_format()));
        output.push('\n');

        let tally: Vec<String> = self
            .counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(tag, count)| {
                let entry = format!("{}: {}", tag.label(), count);
                paint(&entry, tag.tone(), settings.color_output)
            })
            .collect();
        if !tally.is_empty() {
            output.push_str(&tally.join(" | "));
            output.push('\n');
        }

        output
    }
}
