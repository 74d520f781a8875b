use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Create a project root whose configuration lists `providers` in order.
pub(crate) fn create_test_project(providers: &[&str]) -> TempDir {
    create_test_project_with(providers, "")
}

/// Like [`create_test_project`], appending raw YAML to the configuration.
pub(crate) fn create_test_project_with(providers: &[&str], extra_yaml: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    let mut yaml = String::from("name: Blog\n");
    if providers.is_empty() {
        yaml.push_str("providers: []\n");
    } else {
        yaml.push_str("providers:\n");
        for provider in providers {
            yaml.push_str(&format!("  - {}\n", provider));
        }
    }
    yaml.push_str(extra_yaml);

    write_file(path, "config/application.yaml", &yaml);
    temp_dir
}

/// Write a project provider manifest (`providers/<id>.yaml`).
pub(crate) fn write_provider_manifest(root: &Path, provider: &str, yaml: &str) {
    write_file(root, &format!("providers/{}.yaml", provider), yaml);
}

/// Write an extension module manifest (`extensions/<package>/commands/<module>.yaml`).
pub(crate) fn write_extension_module(root: &Path, package: &str, module: &str, yaml: &str) {
    write_file(
        root,
        &format!("extensions/{}/commands/{}.yaml", package, module),
        yaml,
    );
}

pub(crate) fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}
