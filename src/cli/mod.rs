//! CLI argument parsing for craft.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Craft: command dispatcher and scaffolding helper for web application projects.
///
/// `craft run <command>` looks the command up in the providers listed in
/// `config/application.yaml`, then in extension packages under `extensions/`.
/// The remaining subcommands scaffold files or drive external tools.
#[derive(Parser, Debug)]
#[command(name = "craft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root to operate on (defaults to the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for craft.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a command exposed by a provider or an extension package.
    ///
    /// Providers are scanned in configuration order; the first one exposing
    /// COMMAND runs. Otherwise the extension package COMMAND is asked for
    /// `commands/<SUBMODULE or COMMAND>` and handler FUNCTION (or the module name).
    Run(RunArgs),

    /// Show which provider or extension would handle a command, without running it.
    Which(WhichArgs),

    /// Install project dependencies and create `.env` from the example file.
    Install,

    /// Run the application server.
    Serve,

    /// Create a view template.
    View(NameArgs),

    /// Create a controller.
    Controller(NameArgs),

    /// Create a model.
    Model(NameArgs),

    /// Run all outstanding migrations.
    Migrate,

    /// Roll back the last migration operation.
    #[command(name = "migrate:rollback")]
    MigrateRollback,

    /// Roll back all migrations.
    #[command(name = "migrate:reset")]
    MigrateReset,

    /// Roll back all migrations and migrate again.
    #[command(name = "migrate:refresh")]
    MigrateRefresh,

    /// Create a migration file.
    Migration(MigrationArgs),

    /// Deploy the application.
    ///
    /// With no flags, deploys the remote master branch. Creates the
    /// deployment app first (after confirmation) if it does not exist.
    Deploy(DeployArgs),

    /// Scaffold an authentication system (routes, controllers and templates).
    Auth,

    /// Create a new project from the starter template.
    New(NewArgs),
}

/// Arguments for the `run` command.
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Command name.
    pub command: String,

    /// Extension submodule.
    pub submodule: Option<String>,

    /// Handler inside the submodule.
    pub function: Option<String>,
}

/// Arguments for the `which` command.
#[derive(Parser, Debug, Clone)]
pub struct WhichArgs {
    #[command(flatten)]
    pub request: RunArgs,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// A single name argument (`view`, `controller`, `model`).
#[derive(Parser, Debug, Clone)]
pub struct NameArgs {
    pub name: String,
}

/// Arguments for the `migration` command.
#[derive(Parser, Debug, Clone)]
pub struct MigrationArgs {
    /// Migration name.
    pub name: String,

    /// Table the migration alters.
    #[arg(long)]
    pub table: Option<String>,

    /// Table the migration creates (takes precedence over --table).
    #[arg(long)]
    pub create: Option<String>,
}

/// Arguments for the `deploy` command.
#[derive(Parser, Debug, Clone)]
pub struct DeployArgs {
    /// Deploy the local master branch.
    #[arg(long, conflicts_with = "current")]
    pub local: bool,

    /// Deploy the current branch.
    #[arg(long)]
    pub current: bool,
}

/// Arguments for the `new` command.
#[derive(Parser, Debug, Clone)]
pub struct NewArgs {
    /// Directory name of the new project.
    pub project: String,

    /// Git URL of the starter template.
    #[arg(long, value_name = "URL")]
    pub template: Option<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
