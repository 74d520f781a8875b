//! Database migration commands.
//!
//! Thin wrappers around the configured migration tool; craft only builds
//! the argument list.

use crate::config::{DatabaseConfig, ProjectConfig};
use crate::context::ProjectContext;
use crate::error::Result;
use crate::process;

/// Migration tool verbs craft exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Migrate,
    Rollback,
    Reset,
    Refresh,
}

impl MigrateAction {
    pub fn verb(self) -> &'static str {
        match self {
            Self::Migrate => "migrate",
            Self::Rollback => "migrate:rollback",
            Self::Reset => "migrate:reset",
            Self::Refresh => "migrate:refresh",
        }
    }

    pub fn all() -> [Self; 4] {
        [Self::Migrate, Self::Rollback, Self::Reset, Self::Refresh]
    }
}

/// Arguments for a migrate verb: `<verb> -c <config> -p <migrations> -f`.
pub fn migrate_args(db: &DatabaseConfig, action: MigrateAction) -> Vec<String> {
    vec![
        db.tool.clone(),
        action.verb().to_string(),
        "-c".to_string(),
        db.config.clone(),
        "-p".to_string(),
        db.migrations.clone(),
        "-f".to_string(),
    ]
}

/// Arguments for `make:migration`.
///
/// `create` wins over `table`, matching `--table <create> --create`.
pub fn make_migration_args(
    db: &DatabaseConfig,
    name: &str,
    table: Option<&str>,
    create: Option<&str>,
) -> Vec<String> {
    let mut args = vec![
        db.tool.clone(),
        "make:migration".to_string(),
        name.to_string(),
        "-p".to_string(),
        db.migrations.clone(),
    ];

    if let Some(create) = create {
        args.extend(["--table".to_string(), create.to_string(), "--create".to_string()]);
    } else if let Some(table) = table {
        args.extend(["--table".to_string(), table.to_string()]);
    }

    args
}

pub fn cmd_migrate(ctx: &ProjectContext, config: &ProjectConfig, action: MigrateAction) -> Result<()> {
    let argv = migrate_args(&config.database, action);
    process::run_inherited(&ctx.root, argv.as_slice())
}

pub fn cmd_migration(
    ctx: &ProjectContext,
    config: &ProjectConfig,
    name: &str,
    table: Option<&str>,
    create: Option<&str>,
) -> Result<()> {
    let argv = make_migration_args(&config.database, name, table, create);
    process::run_inherited(&ctx.root, argv.as_slice())
}
