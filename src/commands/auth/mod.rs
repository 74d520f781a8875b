//! `craft auth`: scaffold login, registration and a signed-in home page.
//!
//! # What `craft auth` does
//!
//! 1. Appends the auth routes to `routes/web.py` (once)
//! 2. Writes `LoginController`, `RegisterController` and `HomeController`
//! 3. Writes the templates under `resources/templates/auth/`
//!
//! Existing files are left untouched, so running it twice is harmless.

mod snippets;

#[cfg(test)]
mod tests;

use crate::context::ProjectContext;
use crate::error::{CraftError, Result};
use crate::fs::{WriteOutcome, append_to_file, create_new_file};
use colored::Colorize;
use snippets::*;

/// Summary of what `craft auth` changed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AuthScaffold {
    pub routes_added: bool,
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}

/// Files written by `craft auth` and their contents.
fn scaffold_files(ctx: &ProjectContext) -> Vec<(std::path::PathBuf, &'static str)> {
    let controllers = ctx.controllers_dir();
    let templates = ctx.templates_dir().join("auth");
    vec![
        (controllers.join("LoginController.py"), LOGIN_CONTROLLER),
        (controllers.join("RegisterController.py"), REGISTER_CONTROLLER),
        (controllers.join("HomeController.py"), HOME_CONTROLLER),
        (templates.join("base.html"), BASE_TEMPLATE),
        (templates.join("login.html"), LOGIN_TEMPLATE),
        (templates.join("register.html"), REGISTER_TEMPLATE),
        (templates.join("home.html"), HOME_TEMPLATE),
    ]
}

pub fn cmd_auth(ctx: &ProjectContext) -> Result<AuthScaffold> {
    let mut summary = AuthScaffold {
        routes_added: add_routes(ctx)?,
        ..AuthScaffold::default()
    };

    for (path, content) in scaffold_files(ctx) {
        let display = path
            .strip_prefix(&ctx.root)
            .unwrap_or(&path)
            .display()
            .to_string();
        match create_new_file(&path, content)? {
            WriteOutcome::Created => summary.created.push(display),
            WriteOutcome::AlreadyExists => summary.skipped.push(display),
        }
    }

    for file in &summary.created {
        println!("  {} {}", "created".green(), file);
    }
    for file in &summary.skipped {
        println!("  {} {}", "exists ".bright_magenta(), file);
    }
    println!("{}", "Authentication scaffolded.".green());

    Ok(summary)
}

/// Append the auth routes unless they are already present.
fn add_routes(ctx: &ProjectContext) -> Result<bool> {
    let routes = ctx.web_routes_path();
    if !routes.is_file() {
        return Err(CraftError::UserError(format!(
            "routes file not found: {}\n\
             Run `craft auth` from the root of a project created with `craft new`.",
            routes.display()
        )));
    }

    let existing = std::fs::read_to_string(&routes).map_err(|e| {
        CraftError::UserError(format!("failed to read '{}': {}", routes.display(), e))
    })?;
    if existing.contains(AUTH_ROUTES_MARKER) {
        return Ok(false);
    }

    append_to_file(&routes, AUTH_ROUTES)?;
    Ok(true)
}
