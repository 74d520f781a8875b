//! Command implementations for craft.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. `run` and `which` go through the resolver; the rest are
//! scaffolding collaborators that also back the built-in providers.

pub mod auth;
pub mod deploy;
pub mod generate;
pub mod install;
pub mod migrate;
pub mod new;
pub mod providers;
pub mod run;

use crate::cli::{Command, DeployArgs, MigrationArgs};
use crate::config::ProjectConfig;
use crate::context::ProjectContext;
use crate::error::Result;
use deploy::DeployTarget;
use migrate::MigrateAction;

/// Dispatch a command to its implementation.
///
/// `ctx` is the project root the command operates on. Everything except
/// `new` requires it to contain `config/application.yaml`.
pub fn dispatch(ctx: ProjectContext, command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run::cmd_run(ctx, &args),
        Command::Which(args) => run::cmd_which(ctx, &args),
        Command::Install => with_config(&ctx, install::cmd_install),
        Command::Serve => with_config(&ctx, install::cmd_serve),
        Command::View(args) => {
            ctx.ensure_project_root()?;
            generate::cmd_view(&ctx, &args.name).map(|_| ())
        }
        Command::Controller(args) => {
            ctx.ensure_project_root()?;
            generate::cmd_controller(&ctx, &args.name).map(|_| ())
        }
        Command::Model(args) => {
            ctx.ensure_project_root()?;
            generate::cmd_model(&ctx, &args.name).map(|_| ())
        }
        Command::Migrate => migrate_with(&ctx, MigrateAction::Migrate),
        Command::MigrateRollback => migrate_with(&ctx, MigrateAction::Rollback),
        Command::MigrateReset => migrate_with(&ctx, MigrateAction::Reset),
        Command::MigrateRefresh => migrate_with(&ctx, MigrateAction::Refresh),
        Command::Migration(args) => cmd_migration(&ctx, &args),
        Command::Deploy(args) => cmd_deploy(&ctx, &args),
        Command::Auth => {
            ctx.ensure_project_root()?;
            auth::cmd_auth(&ctx).map(|_| ())
        }
        Command::New(args) => new::cmd_new(&ctx.root, &args.project, args.template.as_deref()),
    }
}

/// Load the project configuration and run `f` with it.
fn with_config<F>(ctx: &ProjectContext, f: F) -> Result<()>
where
    F: FnOnce(&ProjectContext, &ProjectConfig) -> Result<()>,
{
    let config = ProjectConfig::load_project(ctx)?;
    f(ctx, &config)
}

fn migrate_with(ctx: &ProjectContext, action: MigrateAction) -> Result<()> {
    with_config(ctx, |ctx, config| migrate::cmd_migrate(ctx, config, action))
}

fn cmd_migration(ctx: &ProjectContext, args: &MigrationArgs) -> Result<()> {
    with_config(ctx, |ctx, config| {
        migrate::cmd_migration(
            ctx,
            config,
            &args.name,
            args.table.as_deref(),
            args.create.as_deref(),
        )
    })
}

fn cmd_deploy(ctx: &ProjectContext, args: &DeployArgs) -> Result<()> {
    let target = DeployTarget::from_flags(args.local, args.current);
    with_config(ctx, |ctx, config| deploy::cmd_deploy(ctx, config, target))
}
