#![allow(dead_code)]

use std::path::Path;

use bolide::event::{EventReceiver, RunEvent};
use bolide::execution::Executor;
use bolide::task::Task;

pub fn entry_task(alias: &str, entry: &str) -> Task {
    Task {
        alias: alias.to_string(),
        entry: Some(entry.to_string()),
        command: None,
        sequential: Vec::new(),
        parallel: Vec::new(),
    }
}

pub fn command_task(alias: &str, command: &str) -> Task {
    Task {
        alias: alias.to_string(),
        entry: None,
        command: Some(command.to_string()),
        sequential: Vec::new(),
        parallel: Vec::new(),
    }
}

pub fn sequential_group(alias: &str, dependencies: &[&str]) -> Task {
    Task {
        alias: alias.to_string(),
        entry: None,
        command: None,
        sequential: dependencies.iter().map(|dep| dep.to_string()).collect(),
        parallel: Vec::new(),
    }
}

pub fn parallel_group(alias: &str, dependencies: &[&str]) -> Task {
    Task {
        alias: alias.to_string(),
        entry: None,
        command: None,
        sequential: Vec::new(),
        parallel: dependencies.iter().map(|dep| dep.to_string()).collect(),
    }
}

/// An executor that treats entry scripts as shell scripts, so tests
/// don't depend on a JavaScript runtime being installed.
pub fn sh_executor() -> Executor {
    Executor::new("sh".to_string(), None, false)
}

/// Drain the event channel until every sender clone has been dropped.
pub async fn collect_events(mut rx: EventReceiver) -> Vec<RunEvent> {
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

pub fn finished_aliases(events: &[RunEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            RunEvent::FinishTask { alias, .. } => Some(alias.clone()),
            _ => None,
        })
        .collect()
}

pub fn errored_aliases(events: &[RunEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            RunEvent::TaskError { alias } => Some(alias.clone()),
            _ => None,
        })
        .collect()
}

pub fn write_script(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(|line| line.to_string())
        .collect()
}
