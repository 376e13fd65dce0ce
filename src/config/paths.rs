//! Path management for the obra dashboard
//!
//! ## Path Resolution Order
//!
//! 1. `OBRA_DASHBOARD_DIR` environment variable (if set)
//! 2. The platform config directory for `obra-dashboard`
//!    (`~/.config/obra-dashboard` on Linux, `%APPDATA%\obra-dashboard` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DashboardError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "OBRA_DASHBOARD_DIR";

/// Manages all paths used by the dashboard
#[derive(Debug, Clone)]
pub struct ObraPaths {
    base_dir: PathBuf,
}

impl ObraPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, DashboardError> {
        let base_dir = if let Ok(custom) = std::env::var(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ObraPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default directory for saved API snapshots
    pub fn snapshot_dir(&self) -> PathBuf {
        self.base_dir.join("snapshots")
    }

    /// Resolve a snapshot argument: absolute or existing paths are used as-is,
    /// bare names are looked up in the snapshot directory.
    pub fn resolve_snapshot(&self, name: &str) -> PathBuf {
        let direct = PathBuf::from(name);
        if direct.is_absolute() || direct.exists() {
            direct
        } else {
            self.snapshot_dir().join(name)
        }
    }

    /// Ensure the base and snapshot directories exist
    pub fn ensure_directories(&self) -> Result<(), DashboardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DashboardError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.snapshot_dir()).map_err(|e| {
            DashboardError::Io(format!("Failed to create snapshot directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if settings have been written (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, DashboardError> {
    ProjectDirs::from("", "", "obra-dashboard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DashboardError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ObraPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.snapshot_dir(), temp_dir.path().join("snapshots"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DIR_ENV_VAR, custom_path);
        let paths = ObraPaths::new().unwrap();
        env::remove_var(DIR_ENV_VAR);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ObraPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.snapshot_dir().exists());
    }

    #[test]
    fn test_resolve_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ObraPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.resolve_snapshot("resumo.json"),
            temp_dir.path().join("snapshots").join("resumo.json")
        );

        let existing = temp_dir.path().join("here.json");
        std::fs::write(&existing, "[]").unwrap();
        let existing_str = existing.to_str().unwrap();
        assert_eq!(paths.resolve_snapshot(existing_str), existing);
    }
}
