use std::process::Stdio;
use std::time::Instant;

use tokio::process::Command;

use crate::{
    error::{BolideError, Result},
    event::{EventSender, RunEvent},
    task::{Task, TaskKind, classify},
};

/// Spawns one OS process per task and reports the outcome on the
/// event channel.
#[derive(Debug, Clone)]
pub struct Executor {
    interpreter: String,
    env: Option<String>,
    strict: bool,
}

impl Executor {
    pub fn new(interpreter: String, env: Option<String>, strict: bool) -> Self {
        Self {
            interpreter,
            env,
            strict,
        }
    }

    /// Run a single task to completion.
    ///
    /// `Ok(true)` means the process exited successfully and a
    /// `FinishTask` event was emitted. `Ok(false)` means it failed and
    /// the failure was reported as `TaskError`; strict mode turns that
    /// case into an error instead.
    pub async fn run(&self, task: &Task, events: &EventSender) -> Result<bool> {
        let mut cmd = match classify(task)? {
            TaskKind::Entry(entry) => {
                let mut cmd = Command::new(&self.interpreter);
                cmd.arg(entry);
                cmd
            }
            TaskKind::Command(command) => shell_command(command),
            TaskKind::Group => {
                eprintln!(
                    "Warning: task group '{}' cannot run as a dependency, skipping",
                    task.alias
                );
                return Ok(true);
            }
        };

        if let Some(name) = &self.env {
            cmd.env(name, name);
        }

        cmd.stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::null());

        let start = Instant::now();

        let output = match cmd.output().await {
            Ok(output) => output,
            Err(e) => {
                eprintln!("Error: task '{}' failed to start: {}", task.alias, e);
                return self.report_failure(task, events);
            }
        };

        if output.status.success() {
            let duration = start.elapsed();
            let _ = events.send(RunEvent::FinishTask {
                alias: task.alias.clone(),
                duration,
            });
            print_captured(&output.stdout);
            print_captured(&output.stderr);
            Ok(true)
        } else {
            eprintln!(
                "Error: task '{}' exited with {}",
                task.alias, output.status
            );
            eprint_captured(&output.stderr);
            self.report_failure(task, events)
        }
    }

    fn report_failure(&self, task: &Task, events: &EventSender) -> Result<bool> {
        let _ = events.send(RunEvent::TaskError {
            alias: task.alias.clone(),
        });

        if self.strict {
            Err(BolideError::Process(format!(
                "task '{}' failed",
                task.alias
            )))
        } else {
            Ok(false)
        }
    }
}

fn shell_command(command: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

fn print_captured(bytes: &[u8]) {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();
    if !text.is_empty() {
        println!("{}", text);
    }
}

fn eprint_captured(bytes: &[u8]) {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();
    if !text.is_empty() {
        eprintln!("{}", text);
    }
}
