//! External tool runner for craft.
//!
//! Scaffolding collaborators shell out to dependency installers, the app
//! server, the migration tool, git and the deployment CLI. All of those calls
//! go through this module so failures read the same way.

use crate::error::{CraftError, Result};
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Captured output of a finished tool.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
    /// Whether the process exited with status 0.
    pub success: bool,
}

impl ToolOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            success: output.status.success(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }
}

/// Run `program` with captured output, regardless of its exit status.
///
/// Only a failure to start the process is an error.
pub fn run_captured<P, S>(cwd: P, program: &str, args: &[S]) -> Result<ToolOutput>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let cwd = cwd.as_ref();
    tracing::debug!(program, cwd = %cwd.display(), "running tool (captured)");

    let output = Command::new(program)
        .current_dir(cwd)
        .args(args.iter().map(AsRef::as_ref))
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(program, e))?;

    Ok(ToolOutput::from_output(&output))
}

/// Run `argv` with inherited stdio, failing on a non-zero exit.
pub fn run_inherited<P, S>(cwd: P, argv: &[S]) -> Result<()>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let cwd = cwd.as_ref();
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| CraftError::UserError("command line is empty".to_string()))?;
    let program = program.as_ref();
    tracing::debug!(program, cwd = %cwd.display(), "running tool");

    let status = Command::new(program)
        .current_dir(cwd)
        .args(args.iter().map(AsRef::as_ref))
        .status()
        .map_err(|e| spawn_error(program, e))?;

    if status.success() {
        Ok(())
    } else {
        Err(CraftError::UserError(format!(
            "'{}' exited with {}",
            program,
            status
                .code()
                .map(|c| format!("status {}", c))
                .unwrap_or_else(|| "a signal".to_string())
        )))
    }
}

/// Run a shell-quoted command line with inherited stdio.
pub fn run_command_line<P: AsRef<Path>>(cwd: P, line: &str) -> Result<()> {
    let argv = shell_words::split(line).map_err(|e| {
        CraftError::UserError(format!("failed to parse command line '{}': {}", line, e))
    })?;
    run_inherited(cwd, argv.as_slice())
}

fn spawn_error(program: &str, e: std::io::Error) -> CraftError {
    CraftError::UserError(format!(
        "failed to execute '{}': {}\n\
         Fix: ensure the command is installed and in PATH.",
        program, e
    ))
}
