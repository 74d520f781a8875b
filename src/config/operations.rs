//! Config loading and validation.

use super::model::ProjectConfig;
use crate::context::ProjectContext;
use crate::error::{CraftError, Result};
use std::collections::HashSet;
use std::path::Path;

impl ProjectConfig {
    /// Load the configuration of the project at `ctx`.
    ///
    /// # Returns
    ///
    /// * `Ok(ProjectConfig)` - Successfully loaded and validated config
    /// * `Err(CraftError::NotAProjectRoot)` - `config/application.yaml` is missing
    /// * `Err(CraftError::UserError)` - The file exists but is unreadable or invalid
    pub fn load_project(ctx: &ProjectContext) -> Result<Self> {
        ctx.ensure_project_root()?;
        let config = Self::load(ctx.config_path())?;
        tracing::debug!(
            root = %ctx.root.display(),
            providers = config.providers.len(),
            resolution = ?config.resolution,
            "loaded project configuration"
        );
        Ok(config)
    }

    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CraftError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            CraftError::UserError(format!("{} (in '{}')", e, path.display()))
        })
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ProjectConfig = serde_yaml::from_str(yaml)
            .map_err(|e| CraftError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `providers` entries must be non-empty and unique
    ///
    /// `name` is optional here; only deploy needs it (see [`Self::deploy_name`]).
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for provider in &self.providers {
            if provider.trim().is_empty() {
                return Err(CraftError::UserError(
                    "config validation failed: providers entries must be non-empty".to_string(),
                ));
            }
            if !seen.insert(provider.as_str()) {
                return Err(CraftError::UserError(format!(
                    "config validation failed: provider '{}' is listed more than once",
                    provider
                )));
            }
        }

        Ok(())
    }

    /// Application name as used for the deployment target.
    pub fn deploy_name(&self) -> Result<String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CraftError::UserError(
                "config 'name' must be set to deploy the application".to_string(),
            ));
        }
        Ok(name.to_lowercase())
    }
}
