pub mod cli;
pub mod error;
pub mod event;
pub mod execution;
pub mod scheduler;
pub mod task;

use std::time::Duration;

use cli::Cli;
use error::Result;
use event::RunEvent;
use execution::Executor;
use scheduler::Scheduler;
use task::{MissingDepPolicy, load_config};

/// High-level entry point used by `main.rs`.
///
/// Loads the config file, runs the requested task, then drains the
/// event channel until every spawned task has reported. Returns the
/// exit code the process should end with.
pub async fn run(args: Cli) -> Result<i32> {
    let config = load_config(&args.file)?;
    let strict = args.strict || config.strict;
    let missing_deps = if strict {
        MissingDepPolicy::Fail
    } else {
        MissingDepPolicy::Skip
    };

    let (events_tx, mut events_rx) = event::channel();
    let executor = Executor::new(config.interpreter, args.env, strict);
    let scheduler = Scheduler::new(&config.registry, executor, events_tx, missing_deps);

    scheduler.run(&args.task, args.depend).await?;

    // The scheduler owns the original sender; dropping it leaves only
    // the clones held by still-running parallel tasks, so the drain
    // below ends exactly when the last of them reports.
    drop(scheduler);

    let mut exit_code = 0;
    while let Some(event) = events_rx.recv().await {
        match event {
            RunEvent::FinishTask { alias, duration } => {
                println!("Finished task '{}' in {}", alias, format_elapsed(duration));
            }
            RunEvent::TaskNotFound { alias } => {
                eprintln!("Task '{}' not found", alias);
                exit_code = 1;
            }
            RunEvent::TaskError { alias } => {
                eprintln!("Error in task '{}'", alias);
                exit_code = 1;
            }
        }
    }

    Ok(exit_code)
}

fn format_elapsed(duration: Duration) -> String {
    // drop sub-millisecond noise
    let truncated = Duration::from_millis(duration.as_millis() as u64);
    humantime::format_duration(truncated).to_string()
}
