//! Third-party extensions and the registry that holds them.

use super::handler::Handler;
use super::manifest::CommandManifest;
use super::request::CommandRequest;
use crate::context::ProjectContext;
use crate::error::{CraftError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A third-party package that can supply handlers.
pub trait Extension {
    /// Locate the handler for `request`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(handler))` - The package exposes the requested handler
    /// * `Ok(None)` - The module exists but has no such handler
    /// * `Err(_)` - The module could not be loaded
    fn locate(&self, request: &CommandRequest) -> Result<Option<Handler>>;
}

/// An extension package on disk: `extensions/<package>/commands/<module>.yaml`.
#[derive(Debug, Clone)]
pub struct ManifestExtension {
    package: String,
    commands_dir: PathBuf,
    project_root: PathBuf,
}

impl ManifestExtension {
    pub fn new(package: impl Into<String>, package_dir: &Path, project_root: &Path) -> Self {
        Self {
            package: package.into(),
            commands_dir: package_dir.join("commands"),
            project_root: project_root.to_path_buf(),
        }
    }

    /// Path of the manifest for `module`.
    pub fn module_path(&self, module: &str) -> PathBuf {
        self.commands_dir.join(format!("{}.yaml", module))
    }
}

impl Extension for ManifestExtension {
    fn locate(&self, request: &CommandRequest) -> Result<Option<Handler>> {
        let convention = request.convention_path();
        let manifest_path = self.module_path(&convention.module);

        if !manifest_path.is_file() {
            return Err(CraftError::UserError(format!(
                "No module named '{}'",
                convention.module_path()
            )));
        }

        let mut table = CommandManifest::load(&manifest_path)?.into_table(&self.project_root)?;
        tracing::debug!(
            package = %self.package,
            module = %convention.module_path(),
            handlers = table.len(),
            "loaded extension module"
        );
        Ok(table.take(&convention.attribute))
    }
}

/// Extensions keyed by package name.
#[derive(Default)]
pub struct ExtensionRegistry {
    extensions: BTreeMap<String, Box<dyn Extension>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `extension` as the package `package`.
    pub fn register<E>(&mut self, package: impl Into<String>, extension: E) -> &mut Self
    where
        E: Extension + 'static,
    {
        self.extensions.insert(package.into(), Box::new(extension));
        self
    }

    /// Register every package directory under the project's `extensions/`.
    ///
    /// A package is a directory containing a `commands/` directory. Packages
    /// already registered keep their existing entry.
    pub fn discover(&mut self, ctx: &ProjectContext) -> Result<usize> {
        let dir = ctx.extensions_dir();
        if !dir.is_dir() {
            return Ok(0);
        }

        let entries = std::fs::read_dir(&dir).map_err(|e| {
            CraftError::UserError(format!(
                "failed to read extensions directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let mut found = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.join("commands").is_dir() {
                continue;
            }
            let Some(package) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if self.extensions.contains_key(package) {
                continue;
            }
            tracing::debug!(package, "discovered extension package");
            self.register(package, ManifestExtension::new(package, &path, &ctx.root));
            found += 1;
        }

        Ok(found)
    }

    pub fn get(&self, package: &str) -> Option<&dyn Extension> {
        self.extensions.get(package).map(Box::as_ref)
    }

    /// Registered package names in sorted order.
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.extensions.keys().map(String::as_str)
    }
}
