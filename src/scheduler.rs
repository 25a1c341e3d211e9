use crate::{
    error::{BolideError, Result},
    event::{EventSender, RunEvent},
    execution::Executor,
    task::{MissingDepPolicy, Task, TaskKind, TaskRegistry, classify, resolve},
};

/// Drives one run request: classifies the target task, resolves its
/// dependencies, and executes the resolved set sequentially or
/// concurrently.
pub struct Scheduler<'a> {
    registry: &'a TaskRegistry,
    executor: Executor,
    events: EventSender,
    missing_deps: MissingDepPolicy,
}

impl<'a> Scheduler<'a> {
    pub fn new(
        registry: &'a TaskRegistry,
        executor: Executor,
        events: EventSender,
        missing_deps: MissingDepPolicy,
    ) -> Self {
        Self {
            registry,
            executor,
            events,
            missing_deps,
        }
    }

    /// Entry point for one run request.
    ///
    /// An alias with no registry entry emits `TaskNotFound` and
    /// terminates the run; the CLI layer decides whether that exits
    /// the process.
    pub async fn run(&self, alias: &str, depend: bool) -> Result<()> {
        let Some(task) = self.registry.lookup(alias) else {
            let _ = self.events.send(RunEvent::TaskNotFound {
                alias: alias.to_string(),
            });
            return Ok(());
        };

        match classify(task)? {
            TaskKind::Entry(_) | TaskKind::Command(_) => self.run_executable(task, depend).await,
            TaskKind::Group => self.run_group(task).await,
        }
    }

    async fn run_executable(&self, task: &Task, depend: bool) -> Result<()> {
        if !depend {
            // declared dependencies are ignored without the flag
            self.executor.run(task, &self.events).await?;
            return Ok(());
        }

        if !task.parallel.is_empty() {
            return Err(BolideError::Config(format!(
                "task '{}': the depend flag only supports sequential dependency chains",
                task.alias
            )));
        }

        if task.sequential.is_empty() {
            self.executor.run(task, &self.events).await?;
            return Ok(());
        }

        let mut queue = resolve(self.registry, &task.sequential, self.missing_deps)?;
        queue.push(task.clone());
        self.run_sequential(queue).await
    }

    async fn run_group(&self, task: &Task) -> Result<()> {
        if !task.sequential.is_empty() {
            let queue = resolve(self.registry, &task.sequential, self.missing_deps)?;
            self.run_sequential(queue).await
        } else if !task.parallel.is_empty() {
            let tasks = resolve(self.registry, &task.parallel, self.missing_deps)?;
            self.run_parallel(tasks);
            Ok(())
        } else {
            Ok(())
        }
    }

    /// Ordered work queue: each task runs to completion before the
    /// next is dequeued. A failed task ends the chain without running
    /// the remainder.
    async fn run_sequential(&self, queue: Vec<Task>) -> Result<()> {
        for task in queue {
            if !self.executor.run(&task, &self.events).await? {
                break;
            }
        }
        Ok(())
    }

    /// Fire-and-forget: every task is spawned without waiting for any
    /// other, and nothing joins on their completion. The run counts as
    /// initiated once all spawns are issued. Each spawned task holds a
    /// clone of the event sender, so the channel stays open until the
    /// last one has reported.
    fn run_parallel(&self, tasks: Vec<Task>) {
        for task in tasks {
            let executor = self.executor.clone();
            let events = self.events.clone();
            tokio::spawn(async move {
                let _ = executor.run(&task, &events).await;
            });
        }
    }
}
