//! Exit code constants for the craft CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, collaborator failure)
//! - 2: Not inside a project root
//! - 3: Command not found by any provider or extension
//! - 4: A configured provider could not be located or loaded
//! - 5: A resolved action failed while running

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or a scaffolding failure.
pub const USER_ERROR: i32 = 1;

/// The working directory is not a project root (no `config/application.yaml`).
pub const NOT_A_PROJECT_ROOT: i32 = 2;

/// Neither the provider scan nor the extension fallback found the command.
pub const COMMAND_NOT_FOUND: i32 = 3;

/// A provider listed in the project configuration could not be loaded.
pub const PROVIDER_FAILURE: i32 = 4;

/// The resolved action ran and reported failure.
pub const ACTION_FAILURE: i32 = 5;
