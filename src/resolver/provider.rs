//! Providers and the catalog that loads them by identifier.

use super::handler::CommandTable;
use super::manifest::CommandManifest;
use crate::context::ProjectContext;
use crate::error::{CraftError, Result};
use std::collections::BTreeMap;

/// Builds the command table of a compiled-in provider.
pub type ProviderFactory = Box<dyn Fn() -> CommandTable>;

/// A loaded provider: an identifier and the commands it exposes.
#[derive(Debug)]
pub struct Provider {
    pub id: String,
    pub commands: CommandTable,
}

impl Provider {
    pub fn new(id: impl Into<String>, commands: CommandTable) -> Self {
        Self {
            id: id.into(),
            commands,
        }
    }
}

/// Locates providers by identifier.
///
/// Compiled-in providers are checked first; otherwise the identifier names
/// a manifest at `providers/<id>.yaml` under the project root. Each call to
/// [`ProviderCatalog::load`] builds a fresh provider.
pub struct ProviderCatalog {
    ctx: ProjectContext,
    builtins: BTreeMap<String, ProviderFactory>,
}

impl ProviderCatalog {
    pub fn new(ctx: ProjectContext) -> Self {
        Self {
            ctx,
            builtins: BTreeMap::new(),
        }
    }

    /// Register a compiled-in provider.
    pub fn register<F>(&mut self, id: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> CommandTable + 'static,
    {
        self.builtins.insert(id.into(), Box::new(factory));
        self
    }

    /// Identifiers of the compiled-in providers.
    pub fn builtin_ids(&self) -> impl Iterator<Item = &str> {
        self.builtins.keys().map(String::as_str)
    }

    /// Load the provider named `id`.
    ///
    /// # Returns
    ///
    /// * `Ok(Provider)` - A compiled-in provider or a parsed project manifest
    /// * `Err(CraftError::ProviderLookupFailure)` - Unknown identifier, or a
    ///   manifest that cannot be read or parsed
    pub fn load(&self, id: &str) -> Result<Provider> {
        if let Some(factory) = self.builtins.get(id) {
            return Ok(Provider::new(id, factory()));
        }

        if id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(lookup_failure(
                id,
                "provider identifiers must not contain path separators or start with '.'"
                    .to_string(),
            ));
        }

        let manifest_path = self.ctx.provider_manifest_path(id);
        if !manifest_path.is_file() {
            return Err(lookup_failure(
                id,
                format!(
                    "no built-in provider with this name and no manifest at '{}'",
                    manifest_path.display()
                ),
            ));
        }

        let commands = CommandManifest::load(&manifest_path)
            .and_then(|manifest| manifest.into_table(&self.ctx.root))
            .map_err(|e| lookup_failure(id, e.to_string()))?;
        if commands.is_empty() {
            tracing::warn!(
                provider = id,
                path = %manifest_path.display(),
                "provider manifest declares no commands"
            );
        }

        Ok(Provider::new(id, commands))
    }
}

fn lookup_failure(provider: &str, reason: String) -> CraftError {
    CraftError::ProviderLookupFailure {
        provider: provider.to_string(),
        reason,
    }
}
