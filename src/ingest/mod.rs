//! Ingestion of API snapshots
//!
//! Snapshot files hold the JSON bodies the dashboard API returns. Loading one
//! decodes the payload and validates every record; the result is plain data
//! for the services layer.

pub mod payload;
pub mod validate;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{DashboardError, DashboardResult};
use crate::models::{BudgetLine, Movement};

pub use payload::{parse_budget, parse_movements, parse_summary, ReportedTotals, SummarySnapshot};
pub use validate::{cross_check_totals, TotalsMismatch, TOTALS_TOLERANCE};

/// Read a snapshot file, returning an error if it doesn't exist
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> DashboardResult<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DashboardError::snapshot_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| DashboardError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut contents = String::new();
    BufReader::new(file)
        .read_to_string(&mut contents)
        .map_err(|e| DashboardError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    debug!(path = %path.display(), bytes = contents.len(), "read snapshot");
    Ok(contents)
}

/// Load and validate a summary snapshot
pub fn load_summary<P: AsRef<Path>>(path: P) -> DashboardResult<SummarySnapshot> {
    let snapshot = parse_summary(&read_snapshot(&path)?)?;
    validate::validate_all(&snapshot.projects, validate::validate_project)?;
    info!(projects = snapshot.projects.len(), "loaded summary snapshot");
    Ok(snapshot)
}

/// Load and validate a movements snapshot
pub fn load_movements<P: AsRef<Path>>(path: P) -> DashboardResult<Vec<Movement>> {
    let movements = parse_movements(&read_snapshot(&path)?)?;
    validate::validate_all(&movements, validate::validate_movement)?;
    info!(movements = movements.len(), "loaded movements snapshot");
    Ok(movements)
}

/// Load and validate a budget snapshot
pub fn load_budget<P: AsRef<Path>>(path: P) -> DashboardResult<Vec<BudgetLine>> {
    let lines = parse_budget(&read_snapshot(&path)?)?;
    validate::validate_all(&lines, validate::validate_budget_line)?;
    info!(lines = lines.len(), "loaded budget snapshot");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_summary(temp_dir.path().join("nope.json")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_summary_validates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("resumo.json");
        std::fs::write(
            &path,
            r#"[{"codigo_obra": "", "despesas_totais": 1.0, "aportes_rateados": 1.0, "rentabilidade": 1.0}]"#,
        )
        .unwrap();

        let err = load_summary(&path).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_load_budget() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("orcamento.json");
        std::fs::write(
            &path,
            r#"{"status": "success", "data": [{"codigo_obra": "A", "custo_previsto": 10.0}]}"#,
        )
        .unwrap();

        let lines = load_budget(&path).unwrap();
        assert_eq!(lines.len(), 1);
    }
}
