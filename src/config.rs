use crate::path;
use std::env;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_MODULES_DIR: &str = "/node_modules";
pub const DEFAULT_ENTRY_POINT: &str = "./src/index.tsx";

const MODULES_DIR_ENV: &str = "FSTREE_MODULES_DIR";
const ENTRY_POINT_ENV: &str = "FSTREE_ENTRY_POINT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Where package scaffolds are placed and which entry point their manifest names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub modules_dir: String,
    pub entry_point: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            modules_dir: DEFAULT_MODULES_DIR.to_string(),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Reads `FSTREE_MODULES_DIR` and `FSTREE_ENTRY_POINT`, falling back to the defaults for
    /// anything unset or blank.
    pub fn from_env() -> Self {
        let modules_dir = env::var(MODULES_DIR_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODULES_DIR.to_string());

        let entry_point = env::var(ENTRY_POINT_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENTRY_POINT.to_string());

        Self {
            modules_dir,
            entry_point,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.modules_dir.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Modules directory must not be empty".to_string(),
            ));
        }
        if !path::is_absolute(&self.modules_dir) {
            return Err(ConfigError::ValidationFailed(format!(
                "Modules directory must be absolute: {}",
                self.modules_dir
            )));
        }
        if self.entry_point.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Entry point must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Directory a package named `name` is scaffolded into.
    pub fn package_dir(&self, name: &str) -> String {
        path::resolve(&self.modules_dir, name)
    }
}

impl fmt::Display for ScaffoldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scaffold Configuration:")?;
        writeln!(f, "  Modules Dir: {}", self.modules_dir)?;
        writeln!(f, "  Entry Point: {}", self.entry_point)?;
        Ok(())
    }
}
