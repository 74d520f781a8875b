//! `craft run` and `craft which`.
//!
//! Both load the project configuration, assemble the provider catalog and
//! the extension registry, and hand the request to the resolver. `run`
//! invokes the located handler; `which` only reports it.

use super::providers::register_builtin_providers;
use crate::cli::{RunArgs, WhichArgs};
use crate::config::ProjectConfig;
use crate::context::ProjectContext;
use crate::error::{CraftError, Result};
use crate::resolver::{
    CommandRequest, ExtensionRegistry, Outcome, Phase, ProviderCatalog, Resolution, Resolver,
};
use colored::Colorize;
use serde::Serialize;

/// Everything a resolver needs for one project.
pub struct Dispatcher {
    pub config: ProjectConfig,
    pub catalog: ProviderCatalog,
    pub extensions: ExtensionRegistry,
}

impl Dispatcher {
    /// Load configuration, built-in providers and on-disk extensions.
    ///
    /// Fails with `NotAProjectRoot` before looking at anything else.
    pub fn load(ctx: ProjectContext) -> Result<Self> {
        let config = ProjectConfig::load_project(&ctx)?;

        let mut catalog = ProviderCatalog::new(ctx.clone());
        register_builtin_providers(&mut catalog, &ctx, &config);

        let mut extensions = ExtensionRegistry::new();
        extensions.discover(&ctx)?;
        tracing::debug!(
            builtins = ?catalog.builtin_ids().collect::<Vec<_>>(),
            extensions = ?extensions.packages().collect::<Vec<_>>(),
            "dispatcher ready"
        );

        Ok(Self {
            config,
            catalog,
            extensions,
        })
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(
            &self.config.providers,
            &self.catalog,
            &self.extensions,
            self.config.resolution,
        )
    }
}

fn request_from(args: &RunArgs) -> Result<CommandRequest> {
    CommandRequest::new(
        args.command.clone(),
        args.submodule.clone(),
        args.function.clone(),
    )
}

/// Resolve and run a command.
pub fn cmd_run(ctx: ProjectContext, args: &RunArgs) -> Result<()> {
    let dispatcher = Dispatcher::load(ctx)?;
    let request = request_from(args)?;

    match dispatcher.resolver().resolve_and_run(&request)? {
        Outcome::Executed(phase) => {
            tracing::debug!(%phase, command = %request.command, "command executed");
            Ok(())
        }
        Outcome::NotFound => Err(CraftError::CommandNotFound {
            command: request.command,
        }),
    }
}

/// Resolution report printed by `craft which`.
#[derive(Debug, Serialize)]
pub struct WhichReport {
    pub request: CommandRequest,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub located_by: Option<Phase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Build the report for `request` without running anything.
pub fn which(dispatcher: &Dispatcher, request: CommandRequest) -> Result<WhichReport> {
    let report = match dispatcher.resolver().resolve(&request)? {
        Resolution::Found { phase, handler } => WhichReport {
            request,
            found: true,
            located_by: Some(phase),
            handler: Some(handler.description().to_string()),
            reason: None,
        },
        Resolution::NotFound { reason } => WhichReport {
            request,
            found: false,
            located_by: None,
            handler: None,
            reason,
        },
    };
    Ok(report)
}

/// Report which provider or extension would handle a command.
pub fn cmd_which(ctx: ProjectContext, args: &WhichArgs) -> Result<()> {
    let dispatcher = Dispatcher::load(ctx)?;
    let request = request_from(&args.request)?;
    let report = which(&dispatcher, request)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            CraftError::UserError(format!("failed to serialize report: {}", e))
        })?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    if report.found {
        Ok(())
    } else {
        Err(CraftError::CommandNotFound {
            command: report.request.command,
        })
    }
}

fn print_report(report: &WhichReport) {
    match (&report.located_by, &report.handler) {
        (Some(phase), Some(handler)) => {
            println!("{} {}", report.request.command.bold(), format!("-> {}", phase).green());
            println!("  runs: {}", handler);
        }
        _ => {
            println!("{} {}", report.request.command.bold(), "-> not found".bright_magenta());
            if let Some(reason) = &report.reason {
                println!("  {}", reason);
            }
        }
    }
}
