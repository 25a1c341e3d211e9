use super::{Task, TaskRegistry};
use crate::error::{BolideError, Result};

/// What to do when a dependency alias has no registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingDepPolicy {
    /// Drop the alias from the result and print a warning.
    Skip,
    /// Fail the run on the first unknown alias.
    Fail,
}

/// Map an ordered list of alias references onto registry entries,
/// preserving the caller's order.
pub fn resolve(
    registry: &TaskRegistry,
    aliases: &[String],
    policy: MissingDepPolicy,
) -> Result<Vec<Task>> {
    let mut resolved = Vec::with_capacity(aliases.len());

    for alias in aliases {
        match registry.lookup(alias) {
            Some(task) => resolved.push(task.clone()),
            None => match policy {
                MissingDepPolicy::Fail => {
                    return Err(BolideError::Dependency(format!(
                        "dependency '{}' is not a registered task",
                        alias
                    )));
                }
                MissingDepPolicy::Skip => {
                    eprintln!(
                        "Warning: dependency '{}' is not a registered task, skipping",
                        alias
                    );
                }
            },
        }
    }

    Ok(resolved)
}
