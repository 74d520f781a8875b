//! YAML command manifests.
//!
//! Project providers (`providers/<id>.yaml`) and extension modules
//! (`extensions/<package>/commands/<module>.yaml`) share one format: a map
//! from handler name to the command line it runs.
//!
//! ```yaml
//! build: npm run build
//! lint: [cargo, clippy, --all-targets]
//! ```

use super::handler::{CommandTable, Handler};
use crate::error::{CraftError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// A command line, either as one shell-quoted string or as an argv list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CommandLine {
    Line(String),
    Argv(Vec<String>),
}

impl CommandLine {
    /// Split into argv.
    pub fn to_argv(&self) -> Result<Vec<String>> {
        let argv = match self {
            CommandLine::Line(line) => shell_words::split(line).map_err(|e| {
                CraftError::UserError(format!(
                    "failed to parse command line '{}': {}\n\
                     Fix: check for unmatched quotes or invalid escape sequences.",
                    line, e
                ))
            })?,
            CommandLine::Argv(argv) => argv.clone(),
        };

        if argv.is_empty() {
            return Err(CraftError::UserError("command line is empty".to_string()));
        }
        Ok(argv)
    }
}

/// Parsed contents of a manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CommandManifest {
    pub commands: BTreeMap<String, CommandLine>,
}

impl CommandManifest {
    /// Read and parse a manifest file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CraftError::UserError(format!("failed to read '{}': {}", path.display(), e))
        })?;

        Self::from_yaml(&content)
            .map_err(|e| CraftError::UserError(format!("{} (in '{}')", e, path.display())))
    }

    /// Parse a manifest from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| CraftError::UserError(format!("failed to parse command manifest: {}", e)))
    }

    /// Bind every entry to a process handler run from `cwd`.
    ///
    /// Command lines are checked here so a broken entry fails the load, not
    /// the invocation.
    pub fn into_table(self, cwd: &Path) -> Result<CommandTable> {
        let mut table = CommandTable::new();
        for (name, line) in self.commands {
            let argv = line
                .to_argv()
                .map_err(|e| CraftError::UserError(format!("entry '{}': {}", name, e)))?;
            table.register(name, Handler::process(argv, cwd));
        }
        Ok(table)
    }
}
