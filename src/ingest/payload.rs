//! API payload decoding
//!
//! The dashboard API wraps data in a status envelope:
//!
//! ```json
//! {"status": "success", "resumo": {"obras": [...], "totais": {...}}}
//! {"status": "success", "count": 3, "data": [...]}
//! {"status": "error", "message": "..."}
//! ```
//!
//! A bare JSON array of records is accepted as well.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{BudgetLine, Movement, ProjectFinancials};

/// Totals as reported by the server, used only for cross-checking
///
/// The server computes these with SQL `SUM`, which yields `null` over an
/// empty table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportedTotals {
    #[serde(rename = "despesas_totais", default)]
    pub total_expenses: Option<f64>,
    #[serde(rename = "aportes_rateados", default)]
    pub total_apportioned_contributions: Option<f64>,
    #[serde(rename = "rentabilidade", default)]
    pub total_investment_returns: Option<f64>,
}

/// Decoded summary endpoint payload
#[derive(Debug, Clone, PartialEq)]
pub struct SummarySnapshot {
    pub projects: Vec<ProjectFinancials>,
    pub reported: Option<ReportedTotals>,
}

#[derive(Deserialize)]
struct SummaryBody {
    obras: Vec<ProjectFinancials>,
    #[serde(default)]
    totais: Option<ReportedTotals>,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Strip the status envelope, returning the value under `key`
///
/// A `count` field, when present, is returned alongside.
fn unwrap_envelope(value: Value, key: &str) -> DashboardResult<(Value, Option<u64>)> {
    match value {
        Value::Array(_) => Ok((value, None)),
        Value::Object(mut map) => {
            if map.get("status").and_then(Value::as_str) == Some("error") {
                let message = map
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string();
                return Err(DashboardError::Api(message));
            }
            let count = map.get("count").and_then(Value::as_u64);
            let body = map.remove(key).ok_or_else(|| {
                DashboardError::Validation(format!("payload has no '{}' field", key))
            })?;
            Ok((body, count))
        }
        other => Err(DashboardError::Validation(format!(
            "expected an object or array, found {}",
            json_kind(&other)
        ))),
    }
}

fn parse_value(json: &str, what: &str) -> DashboardResult<Value> {
    serde_json::from_str(json)
        .map_err(|e| DashboardError::Json(format!("Failed to parse {} payload: {}", what, e)))
}

fn decode<T: serde::de::DeserializeOwned>(value: Value, what: &str) -> DashboardResult<T> {
    serde_json::from_value(value)
        .map_err(|e| DashboardError::Json(format!("Invalid {} record: {}", what, e)))
}

fn check_count(count: Option<u64>, actual: usize, what: &str) {
    if let Some(count) = count {
        if count != actual as u64 {
            warn!(what, reported = count, actual, "record count does not match payload");
        }
    }
}

/// Decode a summary (`/resumo`) payload
pub fn parse_summary(json: &str) -> DashboardResult<SummarySnapshot> {
    let (body, _) = unwrap_envelope(parse_value(json, "summary")?, "resumo")?;

    if body.is_array() {
        return Ok(SummarySnapshot {
            projects: decode(body, "project")?,
            reported: None,
        });
    }

    let body: SummaryBody = decode(body, "summary")?;
    Ok(SummarySnapshot {
        projects: body.obras,
        reported: body.totais,
    })
}

/// Decode a movements (`/movimentos`) payload
pub fn parse_movements(json: &str) -> DashboardResult<Vec<Movement>> {
    let (body, count) = unwrap_envelope(parse_value(json, "movements")?, "data")?;
    let movements: Vec<Movement> = decode(body, "movement")?;
    check_count(count, movements.len(), "movements");
    Ok(movements)
}

/// Decode a budget (`/orcamento`) payload
pub fn parse_budget(json: &str) -> DashboardResult<Vec<BudgetLine>> {
    let (body, count) = unwrap_envelope(parse_value(json, "budget")?, "data")?;
    let lines: Vec<BudgetLine> = decode(body, "budget")?;
    check_count(count, lines.len(), "budget lines");
    Ok(lines)
}
