//! Filesystem helpers for scaffolding.
//!
//! Generated files are never overwritten: [`create_new_file`] reports an
//! existing file instead of replacing it.

use crate::error::{CraftError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Component, Path};

/// Result of [`create_new_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    AlreadyExists,
}

/// Create `path` with `content` unless it already exists.
///
/// Parent directories are created as needed.
pub fn create_new_file<P: AsRef<Path>>(path: P, content: &str) -> Result<WriteOutcome> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(WriteOutcome::AlreadyExists),
        Err(e) => {
            return Err(CraftError::UserError(format!(
                "failed to create '{}': {}",
                path.display(),
                e
            )));
        }
    };

    file.write_all(content.as_bytes()).map_err(|e| {
        CraftError::UserError(format!("failed to write '{}': {}", path.display(), e))
    })?;

    Ok(WriteOutcome::Created)
}

/// Append `content` to `path`, creating the file if needed.
pub fn append_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            CraftError::UserError(format!("failed to open '{}': {}", path.display(), e))
        })?;

    file.write_all(content.as_bytes()).map_err(|e| {
        CraftError::UserError(format!("failed to append to '{}': {}", path.display(), e))
    })
}

/// Copy `from` to `to` unless `to` exists.
pub fn copy_if_missing<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<WriteOutcome> {
    let (from, to) = (from.as_ref(), to.as_ref());
    if to.exists() {
        return Ok(WriteOutcome::AlreadyExists);
    }

    fs::copy(from, to).map_err(|e| {
        CraftError::UserError(format!(
            "failed to copy '{}' to '{}': {}",
            from.display(),
            to.display(),
            e
        ))
    })?;
    Ok(WriteOutcome::Created)
}

/// Require `name` to be a single plain path component.
///
/// Names from the command line are joined onto project directories, so
/// separators, `.`, `..` and absolute paths are refused.
pub fn ensure_single_component(kind: &str, name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if single && !name.contains(['/', '\\']) {
        Ok(())
    } else {
        Err(CraftError::UserError(format!(
            "invalid {} '{}': use a single file or directory name",
            kind, name
        )))
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            CraftError::UserError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}
