//! Tests for the auth scaffolder.

use super::*;
use crate::test_support::{create_test_project, write_file};

#[test]
fn test_auth_writes_routes_controllers_and_templates() {
    let project = create_test_project(&[]);
    write_file(project.path(), "routes/web.py", "ROUTES = []\n");
    let ctx = ProjectContext::at(project.path());

    let summary = cmd_auth(&ctx).unwrap();

    assert!(summary.routes_added);
    assert_eq!(summary.created.len(), 7);
    assert!(summary.skipped.is_empty());

    let routes = std::fs::read_to_string(project.path().join("routes/web.py")).unwrap();
    assert!(routes.starts_with("ROUTES = []\n"));
    assert!(routes.contains("Get().route('/login', 'LoginController@show'),"));
    assert!(project
        .path()
        .join("app/http/controllers/LoginController.py")
        .is_file());
    assert!(project
        .path()
        .join("resources/templates/auth/register.html")
        .is_file());
}

#[test]
fn test_auth_is_idempotent() {
    let project = create_test_project(&[]);
    write_file(project.path(), "routes/web.py", "ROUTES = []\n");
    let ctx = ProjectContext::at(project.path());

    cmd_auth(&ctx).unwrap();
    let second = cmd_auth(&ctx).unwrap();

    assert!(!second.routes_added);
    assert!(second.created.is_empty());
    assert_eq!(second.skipped.len(), 7);

    let routes = std::fs::read_to_string(project.path().join("routes/web.py")).unwrap();
    assert_eq!(routes.matches(AUTH_ROUTES_MARKER).count(), 1);
}

#[test]
fn test_controllers_import_what_they_call() {
    for snippet in [LOGIN_CONTROLLER, REGISTER_CONTROLLER, HOME_CONTROLLER] {
        if snippet.contains("view(") {
            assert!(snippet.contains("from masonite.view import view\n"));
        }
        assert!(snippet.contains("from masonite.auth import Auth\n"));
        assert!(snippet.contains("from masonite.request import Request\n"));
    }
}

#[test]
fn test_auth_keeps_existing_controller() {
    let project = create_test_project(&[]);
    write_file(project.path(), "routes/web.py", "ROUTES = []\n");
    write_file(project.path(), "app/http/controllers/HomeController.py", "custom\n");
    let ctx = ProjectContext::at(project.path());

    let summary = cmd_auth(&ctx).unwrap();

    assert_eq!(summary.skipped, vec!["app/http/controllers/HomeController.py"]);
    assert_eq!(
        std::fs::read_to_string(project.path().join("app/http/controllers/HomeController.py"))
            .unwrap(),
        "custom\n"
    );
}

#[test]
fn test_auth_requires_routes_file() {
    let project = create_test_project(&[]);
    let ctx = ProjectContext::at(project.path());

    let err = cmd_auth(&ctx).unwrap_err();
    assert!(err.to_string().contains("routes file not found"));
}
