pub mod config;
pub mod registry;
pub mod resolve;

pub use config::{Configuration, load_config};
pub use registry::TaskRegistry;
pub use resolve::{MissingDepPolicy, resolve};

use serde::Deserialize;

use crate::error::{BolideError, Result};

/// A declared unit of work: a script, a shell command, or a named
/// group of dependencies.
#[derive(Debug, Deserialize, Clone)]
pub struct Task {
    #[serde(default)]
    pub alias: String,
    pub entry: Option<String>,
    pub command: Option<String>,
    #[serde(default)]
    pub sequential: Vec<String>,
    #[serde(default)]
    pub parallel: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind<'a> {
    /// Runs a script file through the configured interpreter.
    Entry(&'a str),
    /// Runs a shell command line verbatim.
    Command(&'a str),
    /// Names a set of dependencies and nothing else.
    Group,
}

/// Classify a task by which of `entry`/`command` it declares.
///
/// Runs fresh on every run; tasks are immutable after registration, so
/// this is equivalent to caching but keeps the engine stateless.
pub fn classify(task: &Task) -> Result<TaskKind<'_>> {
    match (task.entry.as_deref(), task.command.as_deref()) {
        (Some(_), Some(_)) => Err(BolideError::Config(format!(
            "task '{}' declares both entry and command",
            task.alias
        ))),
        (Some(entry), None) => Ok(TaskKind::Entry(entry)),
        (None, Some(command)) => Ok(TaskKind::Command(command)),
        (None, None) => Ok(TaskKind::Group),
    }
}
