//! The two-phase resolver.

use super::extension::ExtensionRegistry;
use super::handler::Handler;
use super::provider::ProviderCatalog;
use super::request::{CommandRequest, ConventionPath};
use crate::config::ResolutionOrder;
use crate::error::{CraftError, Result};
use colored::Colorize;
use serde::Serialize;
use std::fmt;

/// Which phase located a handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Found in the command table of the named provider.
    Provider { id: String },
    /// Found in an extension package by convention.
    Extension { path: ConventionPath },
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Provider { id } => write!(f, "provider {}", id),
            Phase::Extension { path } => write!(f, "extension {}", path),
        }
    }
}

/// Result of resolving a request, before anything runs.
#[derive(Debug)]
pub enum Resolution {
    Found { phase: Phase, handler: Handler },
    /// Nothing matched. `reason` explains a failed extension lookup.
    NotFound { reason: Option<String> },
}

/// Result of [`Resolver::resolve_and_run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Executed(Phase),
    NotFound,
}

/// Resolves requests against an ordered provider list and an extension
/// registry.
pub struct Resolver<'a> {
    providers: &'a [String],
    catalog: &'a ProviderCatalog,
    extensions: &'a ExtensionRegistry,
    order: ResolutionOrder,
}

impl<'a> Resolver<'a> {
    pub fn new(
        providers: &'a [String],
        catalog: &'a ProviderCatalog,
        extensions: &'a ExtensionRegistry,
        order: ResolutionOrder,
    ) -> Self {
        Self {
            providers,
            catalog,
            extensions,
            order,
        }
    }

    /// Locate the handler for `request` without running it.
    ///
    /// Provider lookup failures abort resolution. Extension lookup failures
    /// become `Resolution::NotFound` with a reason.
    pub fn resolve(&self, request: &CommandRequest) -> Result<Resolution> {
        if let Some((id, handler)) = self.scan_providers(request)? {
            return Ok(Resolution::Found {
                phase: Phase::Provider { id },
                handler,
            });
        }

        if !self.order.allows_fallback() {
            tracing::debug!(
                command = %request.command,
                "no provider matched; extension fallback disabled by legacy resolution order"
            );
            return Ok(Resolution::NotFound { reason: None });
        }

        Ok(self.fallback(request))
    }

    /// Resolve `request`, announce and run the handler.
    ///
    /// # Returns
    ///
    /// * `Ok(Outcome::Executed)` - A handler ran successfully
    /// * `Ok(Outcome::NotFound)` - Nothing matched; any extension load
    ///   problem has been reported
    /// * `Err(CraftError::ProviderLookupFailure)` - A configured provider is broken
    /// * `Err(CraftError::ActionFailure)` - The handler ran and failed
    pub fn resolve_and_run(&self, request: &CommandRequest) -> Result<Outcome> {
        match self.resolve(request)? {
            Resolution::Found { phase, handler } => {
                println!("{}", "Executing Command ...".green());
                tracing::debug!(%phase, handler = handler.description(), "invoking handler");
                handler
                    .invoke()
                    .map_err(|e| CraftError::ActionFailure {
                        command: request.command.clone(),
                        phase: phase.to_string(),
                        message: e.to_string(),
                    })?;
                Ok(Outcome::Executed(phase))
            }
            Resolution::NotFound { reason } => {
                if let Some(reason) = reason {
                    println!("{}", reason);
                }
                Ok(Outcome::NotFound)
            }
        }
    }

    /// First provider, in list order, exposing `request.command`.
    fn scan_providers(&self, request: &CommandRequest) -> Result<Option<(String, Handler)>> {
        for id in self.providers {
            let mut provider = self.catalog.load(id)?;
            if let Some(handler) = provider.commands.take(&request.command) {
                tracing::debug!(provider = %id, command = %request.command, "provider match");
                return Ok(Some((provider.id, handler)));
            }
            tracing::debug!(provider = %id, command = %request.command, "provider does not expose command");
        }
        Ok(None)
    }

    /// Single convention lookup in the extension named by the command token.
    fn fallback(&self, request: &CommandRequest) -> Resolution {
        let path = request.convention_path();
        tracing::debug!(%path, "trying extension fallback");

        let Some(extension) = self.extensions.get(&path.package) else {
            return Resolution::NotFound {
                reason: Some(format!("No module named '{}'", path.module_path())),
            };
        };

        match extension.locate(request) {
            Ok(Some(handler)) => Resolution::Found {
                phase: Phase::Extension { path },
                handler,
            },
            Ok(None) => Resolution::NotFound {
                reason: Some(format!(
                    "module '{}' has no attribute '{}'",
                    path.module_path(),
                    path.attribute
                )),
            },
            Err(e) => {
                tracing::warn!(%path, error = %e, "extension lookup failed");
                Resolution::NotFound {
                    reason: Some(e.to_string()),
                }
            }
        }
    }
}
