use std::collections::HashMap;

use super::Task;
use crate::error::{BolideError, Result};

/// The set of declared tasks, keyed by alias.
///
/// Populated once while the config file is loaded, read-only for the
/// rest of the process.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: HashMap<String, Task>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert a task under its alias. Re-registering an
    /// alias replaces the previous definition entirely.
    pub fn register(&mut self, task: Task) -> Result<()> {
        validate(&task)?;
        self.tasks.insert(task.alias.clone(), task);
        Ok(())
    }

    pub fn lookup(&self, alias: &str) -> Option<&Task> {
        self.tasks.get(alias)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn validate(task: &Task) -> Result<()> {
    if task.alias.is_empty() {
        return Err(BolideError::Config(
            "task alias must be a non-empty string".to_string(),
        ));
    }

    if task.entry.as_deref() == Some("") {
        return Err(BolideError::Config(format!(
            "task '{}' has an empty entry path",
            task.alias
        )));
    }

    if task.command.as_deref() == Some("") {
        return Err(BolideError::Config(format!(
            "task '{}' has an empty command line",
            task.alias
        )));
    }

    if task.entry.is_some() && task.command.is_some() {
        return Err(BolideError::Config(format!(
            "task '{}' declares both entry and command",
            task.alias
        )));
    }

    if !task.sequential.is_empty() && !task.parallel.is_empty() {
        return Err(BolideError::Config(format!(
            "task '{}' declares both sequential and parallel dependencies",
            task.alias
        )));
    }

    for dependency in task.sequential.iter().chain(task.parallel.iter()) {
        if dependency.is_empty() {
            return Err(BolideError::Config(format!(
                "task '{}' has an empty dependency alias",
                task.alias
            )));
        }
    }

    let is_group = task.entry.is_none() && task.command.is_none();
    if is_group && task.sequential.is_empty() && task.parallel.is_empty() {
        return Err(BolideError::Config(format!(
            "task group '{}' must declare at least one dependency list",
            task.alias
        )));
    }

    Ok(())
}
