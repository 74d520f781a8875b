//! Project context resolution for craft.
//!
//! A `ProjectContext` pins every path craft touches to one explicit project
//! root. The root comes from `--project-root` or the process working
//! directory; nothing here mutates global process state.

use crate::error::{CraftError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration directory relative to the project root.
pub const CONFIG_DIR: &str = "config";

/// Application configuration file inside [`CONFIG_DIR`].
pub const APPLICATION_CONFIG_FILE: &str = "application.yaml";

/// Directory holding project provider manifests.
pub const PROVIDERS_DIR: &str = "providers";

/// Directory holding third-party extension packages.
pub const EXTENSIONS_DIR: &str = "extensions";

/// Resolved paths for a host project.
///
/// All paths are absolute when the root is absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    /// The project root directory.
    pub root: PathBuf,
}

impl ProjectContext {
    /// Resolve the context from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            CraftError::UserError(format!("failed to get current working directory: {}", e))
        })?;
        Ok(Self::at(cwd))
    }

    /// Resolve the context from an explicit root, falling back to the
    /// working directory when none is given.
    pub fn resolve_with(root: Option<&Path>) -> Result<Self> {
        match root {
            Some(root) => Ok(Self::at(root)),
            None => Self::resolve(),
        }
    }

    /// Build a context rooted at `root`.
    pub fn at<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path to `config/application.yaml`.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_DIR).join(APPLICATION_CONFIG_FILE)
    }

    /// Whether the root looks like a project (its configuration exists).
    pub fn is_project_root(&self) -> bool {
        self.config_path().is_file()
    }

    /// Fail with `NotAProjectRoot` unless the configuration file exists.
    pub fn ensure_project_root(&self) -> Result<()> {
        if self.is_project_root() {
            Ok(())
        } else {
            Err(CraftError::NotAProjectRoot {
                config_path: self.config_path(),
            })
        }
    }

    /// Directory holding `providers/<id>.yaml` manifests.
    pub fn providers_dir(&self) -> PathBuf {
        self.root.join(PROVIDERS_DIR)
    }

    /// Path of the manifest for a project provider.
    pub fn provider_manifest_path(&self, provider: &str) -> PathBuf {
        self.providers_dir().join(format!("{}.yaml", provider))
    }

    /// Directory holding extension packages.
    pub fn extensions_dir(&self) -> PathBuf {
        self.root.join(EXTENSIONS_DIR)
    }

    /// Templates directory (`resources/templates`).
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("resources").join("templates")
    }

    /// Controllers directory (`app/http/controllers`).
    pub fn controllers_dir(&self) -> PathBuf {
        self.root.join("app").join("http").join("controllers")
    }

    /// Models directory (`app`).
    pub fn models_dir(&self) -> PathBuf {
        self.root.join("app")
    }

    /// Web routes file (`routes/web.py`).
    pub fn web_routes_path(&self) -> PathBuf {
        self.root.join("routes").join("web.py")
    }
}
