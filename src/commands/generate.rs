//! `craft view`, `craft controller` and `craft model`.
//!
//! Each generator writes one stub file and never overwrites an existing one.

use crate::context::ProjectContext;
use crate::error::Result;
use crate::fs::{WriteOutcome, create_new_file, ensure_single_component};
use colored::Colorize;
use std::path::PathBuf;

/// Create `resources/templates/<name>.html`.
pub fn cmd_view(ctx: &ProjectContext, name: &str) -> Result<WriteOutcome> {
    ensure_single_component("view name", name)?;
    let path = ctx.templates_dir().join(format!("{}.html", name));
    let outcome = create_new_file(&path, "")?;
    report(outcome, &format!("{} View Created Successfully!", name), &format!("{} View Exists!", name));
    Ok(outcome)
}

/// Create `app/http/controllers/<name>.py`.
pub fn cmd_controller(ctx: &ProjectContext, name: &str) -> Result<WriteOutcome> {
    ensure_single_component("controller name", name)?;
    let path = controller_path(ctx, name);
    let outcome = create_new_file(&path, &controller_stub(name))?;
    report(
        outcome,
        &format!("{} Created Successfully!", name),
        &format!("{} Controller Exists!", name),
    );
    Ok(outcome)
}

/// Create `app/<name>.py`.
pub fn cmd_model(ctx: &ProjectContext, name: &str) -> Result<WriteOutcome> {
    ensure_single_component("model name", name)?;
    let path = ctx.models_dir().join(format!("{}.py", name));
    let outcome = create_new_file(&path, &model_stub(name))?;
    report(outcome, "Model Created Successfully!", "Model Already Exists!");
    Ok(outcome)
}

fn controller_path(ctx: &ProjectContext, name: &str) -> PathBuf {
    ctx.controllers_dir().join(format!("{}.py", name))
}

fn report(outcome: WriteOutcome, created: &str, exists: &str) {
    match outcome {
        WriteOutcome::Created => println!("{}", created.green()),
        WriteOutcome::AlreadyExists => println!("{}", exists.bright_magenta()),
    }
}

fn controller_stub(name: &str) -> String {
    format!(
        "''' A Module Description '''\n\
         from masonite.view import view\n\
         \n\
         class {name}(object):\n\
         \x20   ''' Class Docstring Description '''\n\
         \n\
         \x20   def __init__(self):\n\
         \x20       pass\n"
    )
}

fn model_stub(name: &str) -> String {
    format!(
        "''' A {name} Database Model '''\n\
         from orator import DatabaseManager, Model\n\
         from config.database import Model\n\
         \n\
         class {name}(Model):\n\
         \x20   pass\n"
    )
}
