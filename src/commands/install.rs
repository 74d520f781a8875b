//! `craft install` and `craft serve`.

use crate::config::ProjectConfig;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::fs::{WriteOutcome, copy_if_missing};
use crate::process;
use colored::Colorize;

/// Install dependencies, then create `.env` from the example file if missing.
pub fn cmd_install(ctx: &ProjectContext, config: &ProjectConfig) -> Result<()> {
    process::run_command_line(&ctx.root, &config.install.command)?;
    ensure_env_file(ctx, config)?;
    Ok(())
}

/// Copy the environment template to `.env` when `.env` does not exist.
///
/// Returns whether `.env` was created.
pub fn ensure_env_file(ctx: &ProjectContext, config: &ProjectConfig) -> Result<bool> {
    let example = ctx.root.join(&config.install.env_example);
    let env = ctx.root.join(".env");

    if env.exists() {
        return Ok(false);
    }
    if !example.is_file() {
        tracing::warn!(path = %example.display(), "no environment template to copy");
        return Ok(false);
    }

    let created = copy_if_missing(&example, &env)? == WriteOutcome::Created;
    if created {
        println!("{}", "Created .env from the example file".green());
    }
    Ok(created)
}

/// Start the application server; blocks until it exits.
pub fn cmd_serve(ctx: &ProjectContext, config: &ProjectConfig) -> Result<()> {
    process::run_command_line(&ctx.root, &config.server.command)
}
