//! Tests for the two-phase resolution protocol.

use super::*;
use crate::config::ResolutionOrder;
use crate::context::ProjectContext;
use crate::error::CraftError;
use crate::test_support::{create_test_project, write_extension_module, write_provider_manifest};
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

fn recording(log: &Log, label: &str) -> Handler {
    let log = Rc::clone(log);
    let label = label.to_string();
    Handler::new(label.clone(), move || {
        log.borrow_mut().push(label.clone());
        Ok(())
    })
}

/// Catalog with compiled-in providers; each entry lists the commands it exposes.
/// Every `load` of a provider is recorded as `load:<id>`.
fn catalog_with(log: &Log, providers: &[(&str, &[&str])]) -> ProviderCatalog {
    let mut catalog = ProviderCatalog::new(ProjectContext::at("/nonexistent"));
    for (id, commands) in providers {
        let log = Rc::clone(log);
        let id = id.to_string();
        let commands: Vec<String> = commands.iter().map(|c| c.to_string()).collect();
        catalog.register(id.clone(), move || {
            log.borrow_mut().push(format!("load:{}", id));
            let mut table = CommandTable::new();
            for command in &commands {
                table.register(command.clone(), recording(&log, &format!("{}.{}", id, command)));
            }
            table
        });
    }
    catalog
}

/// In-memory extension recording every `locate` call.
struct StaticExtension {
    log: Log,
    modules: Vec<(&'static str, &'static str)>,
    broken: bool,
}

impl Extension for StaticExtension {
    fn locate(&self, request: &CommandRequest) -> crate::error::Result<Option<Handler>> {
        let path = request.convention_path();
        self.log.borrow_mut().push(format!("locate:{}", path));
        if self.broken {
            return Err(CraftError::UserError(format!(
                "No module named '{}'",
                path.module_path()
            )));
        }
        let exposed = self
            .modules
            .iter()
            .any(|(module, attribute)| *module == path.module && *attribute == path.attribute);
        Ok(exposed.then(|| recording(&self.log, &path.to_string())))
    }
}

fn extensions_with(log: &Log, package: &str, modules: Vec<(&'static str, &'static str)>) -> ExtensionRegistry {
    let mut registry = ExtensionRegistry::new();
    registry.register(
        package,
        StaticExtension {
            log: Rc::clone(log),
            modules,
            broken: false,
        },
    );
    registry
}

fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

// ============================================================================
// Provider phase
// ============================================================================

#[test]
fn test_first_exposing_provider_runs() {
    let log = Log::default();
    let catalog = catalog_with(&log, &[("A", &[]), ("B", &["build"])]);
    let extensions = ExtensionRegistry::new();
    let providers = ids(&["A", "B"]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    let outcome = resolver
        .resolve_and_run(&CommandRequest::command("build").unwrap())
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Executed(Phase::Provider { id: "B".to_string() })
    );
    assert_eq!(entries(&log), vec!["load:A", "load:B", "B.build"]);
}

#[test]
fn test_scan_stops_at_first_match() {
    let log = Log::default();
    let catalog = catalog_with(
        &log,
        &[("A", &["build"]), ("B", &["build"]), ("C", &["build"])],
    );
    let extensions = ExtensionRegistry::new();
    let providers = ids(&["B", "A", "C"]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    resolver
        .resolve_and_run(&CommandRequest::command("build").unwrap())
        .unwrap();

    // Order comes from the provider list, not registration order.
    assert_eq!(entries(&log), vec!["load:B", "B.build"]);
}

#[test]
fn test_provider_match_skips_extensions() {
    let log = Log::default();
    let catalog = catalog_with(&log, &[("A", &["myext"])]);
    let extensions = extensions_with(&log, "myext", vec![("myext", "myext")]);
    let providers = ids(&["A"]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    resolver
        .resolve_and_run(&CommandRequest::command("myext").unwrap())
        .unwrap();

    assert_eq!(entries(&log), vec!["load:A", "A.myext"]);
}

#[test]
fn test_unknown_provider_is_surfaced() {
    let log = Log::default();
    let catalog = catalog_with(&log, &[("A", &[])]);
    let extensions = extensions_with(&log, "build", vec![("build", "build")]);
    let providers = ids(&["A", "missing.provider"]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    let err = resolver
        .resolve_and_run(&CommandRequest::command("build").unwrap())
        .unwrap_err();

    assert!(matches!(
        err,
        CraftError::ProviderLookupFailure { ref provider, .. } if provider == "missing.provider"
    ));
    // The fallback is never consulted once the provider list is broken.
    assert_eq!(entries(&log), vec!["load:A"]);
}

#[test]
fn test_broken_provider_after_match_is_not_loaded() {
    let log = Log::default();
    let catalog = catalog_with(&log, &[("A", &["build"])]);
    let extensions = ExtensionRegistry::new();
    let providers = ids(&["A", "missing.provider"]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    let outcome = resolver
        .resolve_and_run(&CommandRequest::command("build").unwrap())
        .unwrap();
    assert!(matches!(outcome, Outcome::Executed(_)));
}

#[test]
fn test_action_failure_reports_phase() {
    let mut catalog = ProviderCatalog::new(ProjectContext::at("/nonexistent"));
    catalog.register("A", || {
        CommandTable::new().with(
            "build",
            Handler::new("fails", || Err(CraftError::UserError("exit status 2".into()))),
        )
    });
    let extensions = ExtensionRegistry::new();
    let providers = ids(&["A"]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    let err = resolver
        .resolve_and_run(&CommandRequest::command("build").unwrap())
        .unwrap_err();

    match err {
        CraftError::ActionFailure {
            command,
            phase,
            message,
        } => {
            assert_eq!(command, "build");
            assert_eq!(phase, "provider A");
            assert_eq!(message, "exit status 2");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Extension phase
// ============================================================================

#[test]
fn test_fallback_bare_command() {
    let log = Log::default();
    let catalog = catalog_with(&log, &[("A", &[])]);
    let extensions = extensions_with(&log, "myext", vec![("myext", "myext")]);
    let providers = ids(&["A"]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    let outcome = resolver
        .resolve_and_run(&CommandRequest::command("myext").unwrap())
        .unwrap();

    match outcome {
        Outcome::Executed(Phase::Extension { path }) => {
            assert_eq!(path.module_path(), "myext.commands.myext");
            assert_eq!(path.attribute, "myext");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(
        entries(&log),
        vec![
            "load:A",
            "locate:myext.commands.myext:myext",
            "myext.commands.myext:myext"
        ]
    );
}

#[test]
fn test_fallback_submodule() {
    let log = Log::default();
    let catalog = catalog_with(&log, &[]);
    let extensions = extensions_with(&log, "myext", vec![("sub1", "sub1")]);
    let providers = ids(&[]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    let request = CommandRequest::new("myext", Some("sub1".into()), None).unwrap();
    resolver.resolve_and_run(&request).unwrap();

    assert_eq!(
        entries(&log),
        vec!["locate:myext.commands.sub1:sub1", "myext.commands.sub1:sub1"]
    );
}

#[test]
fn test_fallback_submodule_and_function() {
    let log = Log::default();
    let catalog = catalog_with(&log, &[]);
    let extensions = extensions_with(&log, "myext", vec![("sub1", "run")]);
    let providers = ids(&[]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    let request = CommandRequest::new("myext", Some("sub1".into()), Some("run".into())).unwrap();
    resolver.resolve_and_run(&request).unwrap();

    assert_eq!(
        entries(&log),
        vec!["locate:myext.commands.sub1:run", "myext.commands.sub1:run"]
    );
}

#[test]
fn test_fallback_is_attempted_exactly_once() {
    let log = Log::default();
    let catalog = catalog_with(&log, &[("A", &[]), ("B", &[])]);
    let extensions = extensions_with(&log, "myext", vec![]);
    let providers = ids(&["A", "B"]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    let outcome = resolver
        .resolve_and_run(&CommandRequest::command("myext").unwrap())
        .unwrap();

    assert_eq!(outcome, Outcome::NotFound);
    let locates = entries(&log)
        .into_iter()
        .filter(|e| e.starts_with("locate:"))
        .count();
    assert_eq!(locates, 1);
}

#[test]
fn test_broken_extension_ends_in_not_found() {
    let log = Log::default();
    let catalog = catalog_with(&log, &[("A", &[])]);
    let mut extensions = ExtensionRegistry::new();
    extensions.register(
        "myext",
        StaticExtension {
            log: Rc::clone(&log),
            modules: vec![],
            broken: true,
        },
    );
    let providers = ids(&["A"]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    let request = CommandRequest::command("myext").unwrap();
    match resolver.resolve(&request).unwrap() {
        Resolution::NotFound { reason } => {
            assert!(reason.unwrap().contains("myext.commands.myext"));
        }
        other => panic!("unexpected resolution: {other:?}"),
    }
    assert_eq!(resolver.resolve_and_run(&request).unwrap(), Outcome::NotFound);
}

#[test]
fn test_unregistered_package_is_not_found() {
    let log = Log::default();
    let catalog = catalog_with(&log, &[]);
    let extensions = ExtensionRegistry::new();
    let providers = ids(&[]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    match resolver.resolve(&CommandRequest::command("ghost").unwrap()).unwrap() {
        Resolution::NotFound { reason } => {
            assert_eq!(reason.as_deref(), Some("No module named 'ghost.commands.ghost'"));
        }
        other => panic!("unexpected resolution: {other:?}"),
    }
}

// ============================================================================
// Resolution order policy
// ============================================================================

#[test]
fn test_legacy_order_skips_fallback_with_providers() {
    let log = Log::default();
    let catalog = catalog_with(&log, &[("A", &[])]);
    let extensions = extensions_with(&log, "myext", vec![("myext", "myext")]);
    let providers = ids(&["A"]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Legacy);

    let outcome = resolver
        .resolve_and_run(&CommandRequest::command("myext").unwrap())
        .unwrap();

    assert_eq!(outcome, Outcome::NotFound);
    assert_eq!(entries(&log), vec!["load:A"]);
}

#[test]
fn test_legacy_order_skips_fallback_without_providers() {
    let log = Log::default();
    let catalog = catalog_with(&log, &[]);
    let extensions = extensions_with(&log, "myext", vec![("myext", "myext")]);
    let providers = ids(&[]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Legacy);

    let outcome = resolver
        .resolve_and_run(&CommandRequest::command("myext").unwrap())
        .unwrap();

    assert_eq!(outcome, Outcome::NotFound);
    assert!(entries(&log).iter().all(|e| !e.starts_with("locate:")));
}

// ============================================================================
// On-disk providers and extensions
// ============================================================================

#[test]
fn test_manifest_provider_and_extension_resolution() {
    let project = create_test_project(&["app.tools"]);
    write_provider_manifest(project.path(), "app.tools", "build: make build\n");
    write_extension_module(project.path(), "myext", "sub1", "run: make run\n");

    let ctx = ProjectContext::at(project.path());
    let catalog = ProviderCatalog::new(ctx.clone());
    let mut extensions = ExtensionRegistry::new();
    extensions.discover(&ctx).unwrap();
    let providers = ids(&["app.tools"]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    match resolver.resolve(&CommandRequest::command("build").unwrap()).unwrap() {
        Resolution::Found { phase, handler } => {
            assert_eq!(phase.to_string(), "provider app.tools");
            assert_eq!(handler.description(), "make build");
        }
        other => panic!("unexpected resolution: {other:?}"),
    }

    let request = CommandRequest::new("myext", Some("sub1".into()), Some("run".into())).unwrap();
    match resolver.resolve(&request).unwrap() {
        Resolution::Found { phase, handler } => {
            assert_eq!(phase.to_string(), "extension myext.commands.sub1:run");
            assert_eq!(handler.description(), "make run");
        }
        other => panic!("unexpected resolution: {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_manifest_handler_runs_in_project_root() {
    let project = create_test_project(&["app.tools"]);
    write_provider_manifest(project.path(), "app.tools", "touch: [touch, marker.txt]\n");

    let catalog = ProviderCatalog::new(ProjectContext::at(project.path()));
    let extensions = ExtensionRegistry::new();
    let providers = ids(&["app.tools"]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    resolver
        .resolve_and_run(&CommandRequest::command("touch").unwrap())
        .unwrap();
    assert!(project.path().join("marker.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_manifest_handler_non_zero_exit_is_action_failure() {
    let project = create_test_project(&["app.tools"]);
    write_provider_manifest(project.path(), "app.tools", "fail: \"false\"\n");

    let catalog = ProviderCatalog::new(ProjectContext::at(project.path()));
    let extensions = ExtensionRegistry::new();
    let providers = ids(&["app.tools"]);
    let resolver = Resolver::new(&providers, &catalog, &extensions, ResolutionOrder::Strict);

    let err = resolver
        .resolve_and_run(&CommandRequest::command("fail").unwrap())
        .unwrap_err();
    assert!(matches!(err, CraftError::ActionFailure { .. }));
}
