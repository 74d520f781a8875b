//! Providers compiled into craft.
//!
//! Projects list these identifiers in `config/application.yaml` to make the
//! scaffolding commands reachable through `craft run`:
//!
//! ```yaml
//! providers:
//!   - craft.providers.app
//!   - craft.providers.database
//! ```

use super::{auth, install, migrate};
use crate::config::ProjectConfig;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::resolver::{CommandTable, Handler, ProviderCatalog};
use migrate::MigrateAction;

/// Application commands: `install`, `serve`, `auth`.
pub const APP_PROVIDER: &str = "craft.providers.app";

/// Database commands: `migrate` and its rollback/reset/refresh variants.
pub const DATABASE_PROVIDER: &str = "craft.providers.database";

/// Register the compiled-in providers, bound to one project.
pub fn register_builtin_providers(
    catalog: &mut ProviderCatalog,
    ctx: &ProjectContext,
    config: &ProjectConfig,
) {
    let (app_ctx, app_config) = (ctx.clone(), config.clone());
    catalog.register(APP_PROVIDER, move || app_commands(&app_ctx, &app_config));

    let (db_ctx, db_config) = (ctx.clone(), config.clone());
    catalog.register(DATABASE_PROVIDER, move || {
        database_commands(&db_ctx, &db_config)
    });
}

fn app_commands(ctx: &ProjectContext, config: &ProjectConfig) -> CommandTable {
    CommandTable::new()
        .with(
            "install",
            bound("install project dependencies", ctx, config, install::cmd_install),
        )
        .with(
            "serve",
            bound("run the application server", ctx, config, install::cmd_serve),
        )
        .with(
            "auth",
            bound("scaffold authentication", ctx, config, |ctx, _| {
                auth::cmd_auth(ctx).map(|_| ())
            }),
        )
}

fn database_commands(ctx: &ProjectContext, config: &ProjectConfig) -> CommandTable {
    let mut table = CommandTable::new();
    for action in MigrateAction::all() {
        let description = format!("{} {}", config.database.tool, action.verb());
        table.register(
            action.verb(),
            bound(&description, ctx, config, move |ctx, config| {
                migrate::cmd_migrate(ctx, config, action)
            }),
        );
    }
    table
}

/// Bind a collaborator to the project so it can run with no arguments.
fn bound<F>(description: &str, ctx: &ProjectContext, config: &ProjectConfig, run: F) -> Handler
where
    F: Fn(&ProjectContext, &ProjectConfig) -> Result<()> + 'static,
{
    let (ctx, config) = (ctx.clone(), config.clone());
    Handler::new(description, move || run(&ctx, &config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_test_project, write_file};

    fn catalog_for(ctx: &ProjectContext) -> ProviderCatalog {
        let config = ProjectConfig::load_project(ctx).unwrap();
        let mut catalog = ProviderCatalog::new(ctx.clone());
        register_builtin_providers(&mut catalog, ctx, &config);
        catalog
    }

    #[test]
    fn test_builtin_ids() {
        let project = create_test_project(&[]);
        let catalog = catalog_for(&ProjectContext::at(project.path()));
        assert_eq!(
            catalog.builtin_ids().collect::<Vec<_>>(),
            vec![APP_PROVIDER, DATABASE_PROVIDER]
        );
    }

    #[test]
    fn test_app_provider_commands() {
        let project = create_test_project(&[]);
        let catalog = catalog_for(&ProjectContext::at(project.path()));

        let provider = catalog.load(APP_PROVIDER).unwrap();
        assert_eq!(
            provider.commands.names().collect::<Vec<_>>(),
            vec!["auth", "install", "serve"]
        );
    }

    #[test]
    fn test_database_provider_commands() {
        let project = create_test_project(&[]);
        let catalog = catalog_for(&ProjectContext::at(project.path()));

        let provider = catalog.load(DATABASE_PROVIDER).unwrap();
        assert!(provider.commands.contains("migrate"));
        assert!(provider.commands.contains("migrate:rollback"));
        assert_eq!(
            provider.commands.get("migrate:reset").unwrap().description(),
            "orator migrate:reset"
        );
    }

    #[test]
    fn test_bound_handler_runs_against_project() {
        let project = create_test_project(&[]);
        write_file(project.path(), "routes/web.py", "ROUTES = []\n");
        let catalog = catalog_for(&ProjectContext::at(project.path()));

        let provider = catalog.load(APP_PROVIDER).unwrap();
        provider.commands.get("auth").unwrap().invoke().unwrap();

        assert!(
            project
                .path()
                .join("app/http/controllers/LoginController.py")
                .is_file()
        );
    }
}
