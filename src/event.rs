use std::time::Duration;

use tokio::sync::mpsc;

/// Notification surface for run outcomes, consumed by the CLI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// A spawned process exited successfully.
    FinishTask { alias: String, duration: Duration },
    /// The requested top-level alias has no registry entry.
    TaskNotFound { alias: String },
    /// A spawned process failed to start or exited nonzero.
    TaskError { alias: String },
}

pub type EventSender = mpsc::UnboundedSender<RunEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<RunEvent>;

/// The channel closes once every sender clone has been dropped.
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
