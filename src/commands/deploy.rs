//! `craft deploy`: push the application to its deployment remote.

use crate::config::ProjectConfig;
use crate::context::ProjectContext;
use crate::error::{CraftError, Result};
use crate::process;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Deployment CLI executable.
const DEPLOY_TOOL: &str = "heroku";

/// Git remote the deployment CLI manages.
const DEPLOY_REMOTE: &str = "heroku";

/// Which branch gets deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployTarget {
    /// The remote's master branch (no flags).
    Master,
    /// The local master branch (`--local`).
    Local,
    /// The currently checked-out branch (`--current`).
    Current,
}

impl DeployTarget {
    pub fn from_flags(local: bool, current: bool) -> Self {
        if local {
            Self::Local
        } else if current {
            Self::Current
        } else {
            Self::Master
        }
    }

    fn refspec(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Local => "master:master",
            Self::Current => "HEAD:master",
        }
    }
}

/// `git push` arguments for `target`.
pub fn push_args(target: DeployTarget) -> Vec<String> {
    vec![
        "git".to_string(),
        "push".to_string(),
        DEPLOY_REMOTE.to_string(),
        target.refspec().to_string(),
    ]
}

/// Deploy, asking on stdin before creating a missing app.
pub fn cmd_deploy(ctx: &ProjectContext, config: &ProjectConfig, target: DeployTarget) -> Result<()> {
    let stdin = io::stdin();
    deploy_with_input(ctx, config, target, &mut stdin.lock())
}

fn deploy_with_input<R: BufRead>(
    ctx: &ProjectContext,
    config: &ProjectConfig,
    target: DeployTarget,
    input: &mut R,
) -> Result<()> {
    let app = config.deploy_name()?;
    let remote = process::run_captured(&ctx.root, DEPLOY_TOOL, &["git:remote", "-a", app.as_str()])?;

    if remote.is_empty() {
        let create = confirm(
            input,
            "App doesn't exist for this account. Would you like to craft one?",
        )?;
        if !create {
            println!("{}", "Deploy cancelled.".bright_magenta());
            return Ok(());
        }
        process::run_inherited(&ctx.root, &[DEPLOY_TOOL, "create", app.as_str()])?;
    }

    let argv = push_args(target);
    process::run_inherited(&ctx.root, argv.as_slice())
}

/// Ask a yes/no question; any answer containing `y` counts as yes.
pub fn confirm<R: BufRead>(input: &mut R, question: &str) -> Result<bool> {
    print!("\n{} \n\n[y/n] > ", question.green());
    io::stdout()
        .flush()
        .map_err(|e| CraftError::UserError(format!("failed to write prompt: {}", e)))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| CraftError::UserError(format!("failed to read answer: {}", e)))?;

    Ok(answer.to_lowercase().contains('y'))
}
