//! Raw financial movements
//!
//! Movements are the individual entries extracted from uploaded statements.
//! Project totals are sums of movements grouped by kind.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a movement, keyed by the source's `tipo` column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MovementKind {
    /// `Despesa`
    Expense,
    /// `Aporte_Rateado`
    ApportionedContribution,
    /// `Rentabilidade`
    InvestmentReturn,
    /// `Saldo_Final`; informational, never summed into balances
    ReportedFinalBalance,
    /// Any other tag the extractor produced
    Other(String),
}

impl MovementKind {
    pub fn as_str(&self) -> &str {
        match self {
            MovementKind::Expense => "Despesa",
            MovementKind::ApportionedContribution => "Aporte_Rateado",
            MovementKind::InvestmentReturn => "Rentabilidade",
            MovementKind::ReportedFinalBalance => "Saldo_Final",
            MovementKind::Other(tag) => tag,
        }
    }

    /// Whether this kind contributes to project totals
    pub fn is_summed(&self) -> bool {
        matches!(
            self,
            MovementKind::Expense
                | MovementKind::ApportionedContribution
                | MovementKind::InvestmentReturn
        )
    }
}

impl From<String> for MovementKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Despesa" => MovementKind::Expense,
            "Aporte_Rateado" => MovementKind::ApportionedContribution,
            "Rentabilidade" => MovementKind::InvestmentReturn,
            "Saldo_Final" => MovementKind::ReportedFinalBalance,
            _ => MovementKind::Other(tag),
        }
    }
}

impl From<MovementKind> for String {
    fn from(kind: MovementKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single movement row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    #[serde(default)]
    pub id: Option<i64>,

    /// Reporting period label (e.g. "2025-03")
    pub competencia: String,

    #[serde(rename = "codigo_obra")]
    pub project_code: String,

    #[serde(rename = "obra_nome", default)]
    pub project_name: Option<String>,

    #[serde(rename = "tipo")]
    pub kind: MovementKind,

    #[serde(rename = "valor")]
    pub amount: f64,

    /// Where the figure was read from
    #[serde(rename = "fonte", default)]
    pub source: Option<String>,

    #[serde(rename = "data_insercao", default, with = "sqlite_timestamp")]
    pub inserted_at: Option<NaiveDateTime>,
}

impl Movement {
    pub fn new(
        competencia: impl Into<String>,
        project_code: impl Into<String>,
        kind: MovementKind,
        amount: f64,
    ) -> Self {
        Self {
            id: None,
            competencia: competencia.into(),
            project_code: project_code.into(),
            project_name: None,
            kind,
            amount,
            source: None,
            inserted_at: None,
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

/// SQLite `CURRENT_TIMESTAMP` text (`YYYY-MM-DD HH:MM:SS`), also accepting
/// the ISO `T` separator.
mod sqlite_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => NaiveDateTime::parse_from_str(&s, FORMAT)
                .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f"))
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
