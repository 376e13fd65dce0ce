//! Budget status classification
//!
//! Maps a planned/realized cost pair to a deviation, a completion ratio and
//! one of four [`StatusTag`]s:
//!
//! | Condition                         | Tag           |
//! |-----------------------------------|---------------|
//! | no planned cost (absent or zero)  | `IN_PROGRESS` |
//! | ratio > 100                       | `OVER_BUDGET` |
//! | 90 < ratio <= 100                 | `NEAR_LIMIT`  |
//! | ratio <= 90                       | `ON_BUDGET`   |

use crate::models::{BudgetLine, BudgetStatus, StatusTag};

/// Ratios above this are at least `NEAR_LIMIT`
pub const NEAR_LIMIT_THRESHOLD: f64 = 90.0;

/// Ratios above this are `OVER_BUDGET`
pub const OVER_BUDGET_THRESHOLD: f64 = 100.0;

/// Realized cost as a percentage of planned cost
///
/// Returns 0 when the planned cost is absent or zero. Absent realized cost
/// counts as zero.
pub fn completion_ratio(planned_cost: Option<f64>, realized_cost: Option<f64>) -> f64 {
    match planned_cost {
        // Divide first: realized == planned gives exactly 1.0, so exactly 100.
        Some(planned) if planned != 0.0 => realized_cost.unwrap_or(0.0) / planned * 100.0,
        _ => 0.0,
    }
}

/// `realized - planned`, with absent values counted as zero
pub fn deviation(planned_cost: Option<f64>, realized_cost: Option<f64>) -> f64 {
    realized_cost.unwrap_or(0.0) - planned_cost.unwrap_or(0.0)
}

/// Band a completion ratio into a status tag
///
/// A NaN ratio cannot be placed in any band and is reported as `IN_PROGRESS`.
pub fn label_for_ratio(ratio: f64) -> StatusTag {
    if ratio.is_nan() {
        StatusTag::InProgress
    } else if ratio > OVER_BUDGET_THRESHOLD {
        StatusTag::OverBudget
    } else if ratio > NEAR_LIMIT_THRESHOLD {
        StatusTag::NearLimit
    } else {
        StatusTag::OnBudget
    }
}

/// Classify a planned/realized pair
pub fn classify(planned_cost: Option<f64>, realized_cost: Option<f64>) -> BudgetStatus {
    let deviation = deviation(planned_cost, realized_cost);
    let completion_ratio = completion_ratio(planned_cost, realized_cost);

    let label = match planned_cost {
        Some(planned) if planned != 0.0 => label_for_ratio(completion_ratio),
        _ => StatusTag::InProgress,
    };

    BudgetStatus {
        deviation,
        completion_ratio,
        label,
    }
}

/// Classify a budget line
pub fn classify_line(line: &BudgetLine) -> BudgetStatus {
    classify(line.planned_cost, line.realized_cost)
}
