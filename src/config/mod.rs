//! Project configuration for craft.
//!
//! This module defines the `ProjectConfig` struct that represents
//! `config/application.yaml` in a host project. It supports forward-compatible
//! YAML parsing (unknown fields are ignored), sensible defaults for optional
//! fields, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::ProjectConfig;
pub use types::{DatabaseConfig, InstallConfig, ResolutionOrder, ServerConfig};
