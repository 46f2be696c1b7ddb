//! Loading and validating `DashboardConfig` documents.

use std::path::Path;

use tracing::{debug, info};

use medresearch_contracts::error::{DashError, DashResult};

use crate::settings::DashboardConfig;

impl DashboardConfig {
    /// Parse `s` as TOML and validate it.
    ///
    /// Returns `DashError::ConfigError` if the TOML is malformed, contains
    /// unknown keys, or holds out-of-range values.
    pub fn from_toml_str(s: &str) -> DashResult<Self> {
        let config: DashboardConfig = toml::from_str(s).map_err(|e| DashError::ConfigError {
            reason: format!("failed to parse dashboard TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as dashboard configuration.
    pub fn from_file(path: &Path) -> DashResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| DashError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> DashResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("no config file given; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> DashResult<()> {
        if self.alerts.specialties.is_empty() {
            return Err(DashError::ConfigError {
                reason: "alerts.specialties must list at least one specialty".to_string(),
            });
        }
        if let Some(blank) = self.alerts.specialties.iter().position(|s| s.trim().is_empty()) {
            return Err(DashError::ConfigError {
                reason: format!("alerts.specialties[{}] is blank", blank),
            });
        }
        if self.ui.poll_ms == 0 {
            return Err(DashError::ConfigError {
                reason: "ui.poll_ms must be greater than zero".to_string(),
            });
        }
        if let Some(user) = &self.session.demo_user {
            if user.id.trim().is_empty() {
                return Err(DashError::ConfigError {
                    reason: "session.demo_user.id must not be blank".to_string(),
                });
            }
        }
        Ok(())
    }
}
