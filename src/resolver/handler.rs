//! Handlers and the command tables that hold them.

use crate::error::Result;
use crate::process;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// A zero-argument action, bound at resolution time.
///
/// Everything the action needs is captured when it is built; invoking it
/// takes no parameters.
pub struct Handler {
    description: String,
    run: Box<dyn Fn() -> Result<()>>,
}

impl Handler {
    /// Wrap a closure as a handler.
    pub fn new<F>(description: impl Into<String>, run: F) -> Self
    where
        F: Fn() -> Result<()> + 'static,
    {
        Self {
            description: description.into(),
            run: Box::new(run),
        }
    }

    /// A handler that runs `argv` as a process in `cwd`, inheriting stdio.
    pub fn process(argv: Vec<String>, cwd: &Path) -> Self {
        let description = shell_words::join(&argv);
        let cwd: PathBuf = cwd.to_path_buf();
        Self::new(description, move || process::run_inherited(&cwd, argv.as_slice()))
    }

    /// Human-readable summary of what the handler does.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the action.
    pub fn invoke(&self) -> Result<()> {
        (self.run)()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Named handlers exposed by a provider or an extension module.
#[derive(Debug, Default)]
pub struct CommandTable {
    handlers: BTreeMap<String, Handler>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, handler: Handler) -> &mut Self {
        self.handlers.insert(name.into(), handler);
        self
    }

    /// Builder form of [`CommandTable::register`].
    pub fn with(mut self, name: impl Into<String>, handler: Handler) -> Self {
        self.register(name, handler);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.handlers.get(name)
    }

    /// Remove and return the handler registered under `name`.
    pub fn take(&mut self, name: &str) -> Option<Handler> {
        self.handlers.remove(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
