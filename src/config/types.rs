//! Config section types, enums, and serde default functions.

use serde::{Deserialize, Serialize};

/// Order in which the resolver consults providers and extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionOrder {
    /// Scan providers; fall back to extensions only when no provider matched.
    #[default]
    Strict,
    /// Never enter the extension fallback; only providers can match.
    Legacy,
}

impl ResolutionOrder {
    /// Whether the extension phase may run after the provider scan found
    /// nothing.
    pub fn allows_fallback(self) -> bool {
        match self {
            Self::Strict => true,
            Self::Legacy => false,
        }
    }
}

/// Settings for `craft serve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Command line that starts the application server.
    pub command: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            command: default_server_command(),
        }
    }
}

/// Settings for `craft install`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Command line that installs project dependencies.
    pub command: String,

    /// Environment template copied to `.env` when `.env` is missing.
    pub env_example: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            command: default_install_command(),
            env_example: default_env_example(),
        }
    }
}

/// Settings for the database migration tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Migration tool executable.
    pub tool: String,

    /// Database config file handed to the tool (`-c`).
    pub config: String,

    /// Migrations directory handed to the tool (`-p`).
    pub migrations: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            tool: default_migration_tool(),
            config: default_database_config(),
            migrations: default_migrations_dir(),
        }
    }
}

pub fn default_server_command() -> String {
    "gunicorn -w 2 wsgi:application".to_string()
}
pub fn default_install_command() -> String {
    "pip3 install -r requirements.txt".to_string()
}
pub fn default_env_example() -> String {
    ".env-example".to_string()
}
pub fn default_migration_tool() -> String {
    "orator".to_string()
}
pub fn default_database_config() -> String {
    "config/database.py".to_string()
}
pub fn default_migrations_dir() -> String {
    "databases/migrations".to_string()
}
