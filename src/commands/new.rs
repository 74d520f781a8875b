//! `craft new`: create a project from the starter template.

use crate::error::{CraftError, Result};
use crate::fs::ensure_single_component;
use crate::process;
use colored::Colorize;
use std::path::Path;

/// Starter template cloned when `--template` is not given.
pub const DEFAULT_STARTER_URL: &str = "https://github.com/josephmancuso/masonite-starter.git";

/// Create `<parent>/<project>` from the starter template at `template`.
///
/// Refuses to touch an existing directory. The template's git history is
/// dropped so the new project starts clean.
pub fn cmd_new(parent: &Path, project: &str, template: Option<&str>) -> Result<()> {
    ensure_single_component("project name", project)?;

    let target = parent.join(project);
    if target.exists() {
        return Err(CraftError::UserError(format!(
            "Directory '{}' already exists. Please choose another project name",
            project
        )));
    }

    println!("{}", "Crafting Application ...".green());
    let template = template.unwrap_or(DEFAULT_STARTER_URL);
    process::run_inherited(parent, &["git", "clone", "--depth", "1", template, project])
        .map_err(|e| CraftError::UserError(format!("Could not create application: {}", e)))?;

    let git_dir = target.join(".git");
    if git_dir.exists() {
        std::fs::remove_dir_all(&git_dir).map_err(|e| {
            CraftError::UserError(format!(
                "failed to remove template history '{}': {}",
                git_dir.display(),
                e
            ))
        })?;
    }

    println!(
        "{}",
        "\nApplication Created Successfully!\n\n\
         Now just cd into your project and run\n\n    $ craft install\n\n\
         to install the project dependencies.\n\nCreate Something Amazing!"
            .green()
    );
    Ok(())
}
