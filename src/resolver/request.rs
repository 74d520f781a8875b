//! Command requests and the extension naming convention.

use crate::error::{CraftError, Result};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Tokens end up in lookup keys and file names, so they are kept to a
/// conservative identifier alphabet (`:` allows `migrate:rollback`).
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_:\-]*$").expect("Invalid command token regex")
});

/// A user request: one command token plus optional refinements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandRequest {
    pub command: String,
    pub submodule: Option<String>,
    pub function: Option<String>,
}

impl CommandRequest {
    /// Build a validated request.
    ///
    /// `function` requires `submodule`; every token must be a plain identifier.
    pub fn new(
        command: impl Into<String>,
        submodule: Option<String>,
        function: Option<String>,
    ) -> Result<Self> {
        let command = command.into();
        validate_token("command", &command)?;
        if let Some(submodule) = &submodule {
            validate_token("submodule", submodule)?;
        }
        if let Some(function) = &function {
            validate_token("function", function)?;
            if submodule.is_none() {
                return Err(CraftError::UserError(format!(
                    "function '{}' was given without a submodule",
                    function
                )));
            }
        }

        Ok(Self {
            command,
            submodule,
            function,
        })
    }

    /// Request for a bare command with no refinements.
    pub fn command(command: impl Into<String>) -> Result<Self> {
        Self::new(command, None, None)
    }

    /// The convention path the extension fallback uses for this request.
    pub fn convention_path(&self) -> ConventionPath {
        ConventionPath::for_request(self)
    }
}

fn validate_token(kind: &str, token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(CraftError::UserError(format!("{} must not be empty", kind)));
    }
    if !TOKEN_REGEX.is_match(token) {
        return Err(CraftError::UserError(format!(
            "invalid {} '{}': use letters, digits, '_', '-' or ':' (starting with a letter or '_')",
            kind, token
        )));
    }
    Ok(())
}

/// Where an extension package is expected to expose a handler.
///
/// | submodule | function | module                         | attribute   |
/// |-----------|----------|--------------------------------|-------------|
/// | -         | -        | `<command>.commands.<command>`   | `<command>`   |
/// | `s`       | -        | `<command>.commands.<s>`         | `<s>`         |
/// | `s`       | `f`      | `<command>.commands.<s>`         | `<f>`         |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConventionPath {
    /// Extension package name (the command token).
    pub package: String,
    /// Module name inside the package's `commands` namespace.
    pub module: String,
    /// Handler name inside the module.
    pub attribute: String,
}

impl ConventionPath {
    /// Select the naming rule from which refinement tokens are present.
    pub fn for_request(request: &CommandRequest) -> Self {
        let package = request.command.clone();
        let (module, attribute) = match (&request.submodule, &request.function) {
            (Some(submodule), Some(function)) => (submodule.clone(), function.clone()),
            (Some(submodule), None) => (submodule.clone(), submodule.clone()),
            // A function without a submodule is rejected by `CommandRequest::new`.
            (None, _) => (request.command.clone(), request.command.clone()),
        };

        Self {
            package,
            module,
            attribute,
        }
    }

    /// Dotted module path, e.g. `myext.commands.sub1`.
    pub fn module_path(&self) -> String {
        format!("{}.commands.{}", self.package, self.module)
    }
}

impl fmt::Display for ConventionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module_path(), self.attribute)
    }
}
