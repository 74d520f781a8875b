//! Error types for the craft CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for craft operations.
///
/// Each variant maps to a specific exit code (see [`exit_codes`]).
#[derive(Error, Debug)]
pub enum CraftError {
    /// No project configuration was found under the given root.
    #[error(
        "This command must be run inside your project root directory.\n\
         Expected configuration at: {}",
        .config_path.display()
    )]
    NotAProjectRoot { config_path: PathBuf },

    /// A provider named in the project configuration could not be loaded.
    #[error("provider '{provider}' could not be loaded: {reason}")]
    ProviderLookupFailure { provider: String, reason: String },

    /// Nothing handles the requested command.
    #[error("Command not found.")]
    CommandNotFound { command: String },

    /// A resolved action ran and failed.
    #[error("command '{command}' (located by {phase}) failed: {message}")]
    ActionFailure {
        command: String,
        phase: String,
        message: String,
    },

    /// User provided invalid arguments or the project is in an invalid state.
    #[error("{0}")]
    UserError(String),
}

impl CraftError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CraftError::NotAProjectRoot { .. } => exit_codes::NOT_A_PROJECT_ROOT,
            CraftError::ProviderLookupFailure { .. } => exit_codes::PROVIDER_FAILURE,
            CraftError::CommandNotFound { .. } => exit_codes::COMMAND_NOT_FOUND,
            CraftError::ActionFailure { .. } => exit_codes::ACTION_FAILURE,
            CraftError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for craft operations.
pub type Result<T> = std::result::Result<T, CraftError>;
