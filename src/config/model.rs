//! ProjectConfig struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a host project.
///
/// This struct represents the contents of `config/application.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectConfig {
    // =========================================================================
    // Application settings
    // =========================================================================
    /// Application name. Deploy uses its lowercase form as the app name.
    pub name: String,

    // =========================================================================
    // Resolution settings
    // =========================================================================
    /// Provider identifiers, in search priority order.
    pub providers: Vec<String>,

    /// How the resolver orders the provider scan and the extension fallback.
    pub resolution: ResolutionOrder,

    // =========================================================================
    // Collaborator settings
    // =========================================================================
    pub server: ServerConfig,

    pub install: InstallConfig,

    pub database: DatabaseConfig,
}
