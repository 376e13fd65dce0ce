//! Budget lines and their derived status
//!
//! A budget line pairs a project's planned cost with what has actually been
//! spent. Its status is always derived, never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Planned vs. realized cost for one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    #[serde(rename = "codigo_obra")]
    pub project_code: String,

    #[serde(rename = "obra_nome", default)]
    pub project_name: Option<String>,

    /// Budgeted ceiling; `None` means no budget has been set
    #[serde(rename = "custo_previsto", default)]
    pub planned_cost: Option<f64>,

    /// Actual spend; `None` counts as zero in arithmetic
    #[serde(rename = "custo_realizado", default)]
    pub realized_cost: Option<f64>,
}

impl BudgetLine {
    pub fn new(
        project_code: impl Into<String>,
        planned_cost: Option<f64>,
        realized_cost: Option<f64>,
    ) -> Self {
        Self {
            project_code: project_code.into(),
            project_name: None,
            planned_cost,
            realized_cost,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.project_name.as_deref().unwrap_or("-")
    }
}

/// Closed set of budget status categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusTag {
    /// No usable baseline yet
    InProgress,
    /// Realized exceeds planned
    OverBudget,
    /// Within 10% of the planned ceiling
    NearLimit,
    /// Comfortably within plan
    OnBudget,
}

/// Colour hint for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
}

impl StatusTag {
    pub const ALL: [StatusTag; 4] = [
        StatusTag::InProgress,
        StatusTag::OverBudget,
        StatusTag::NearLimit,
        StatusTag::OnBudget,
    ];

    /// Label shown on the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            StatusTag::InProgress => "Em andamento",
            StatusTag::OverBudget => "Acima do orçado",
            StatusTag::NearLimit => "Próximo ao limite",
            StatusTag::OnBudget => "Dentro do orçado",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            StatusTag::InProgress | StatusTag::NearLimit => Tone::Warning,
            StatusTag::OverBudget => Tone::Danger,
            StatusTag::OnBudget => Tone::Success,
        }
    }
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Derived variance figures for a budget line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetStatus {
    /// realized - planned (absent values count as zero)
    pub deviation: f64,
    /// realized as a percentage of planned; 0 when there is no usable plan
    pub completion_ratio: f64,
    pub label: StatusTag,
}
