//! Command resolution for craft.
//!
//! Turns a `(command, submodule, function)` request into a handler and runs
//! it. Resolution is two-phase:
//!
//! 1. **Provider scan**: providers from `config/application.yaml` are loaded in
//!    order and the first one whose command table contains `command` wins.
//! 2. **Extension fallback**: when no provider matched, the extension package
//!    named `command` is asked to locate a handler using the convention path
//!    derived from the request (see [`ConventionPath`]).
//!
//! If neither phase finds a handler the outcome is [`Outcome::NotFound`].

mod engine;
mod extension;
mod handler;
mod manifest;
mod provider;
mod request;

#[cfg(test)]
mod tests;

pub use engine::{Outcome, Phase, Resolution, Resolver};
pub use extension::{Extension, ExtensionRegistry, ManifestExtension};
pub use handler::{CommandTable, Handler};
pub use manifest::{CommandLine, CommandManifest};
pub use provider::{Provider, ProviderCatalog, ProviderFactory};
pub use request::{CommandRequest, ConventionPath};
