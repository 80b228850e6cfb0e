use crate::{AttemptId, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Authenticate, then post the topics for generation.
    Submit {
        attempt: AttemptId,
        topics: Vec<String>,
    },
    /// Begin polling the task status on the fixed interval.
    StartPolling { attempt: AttemptId, task_id: TaskId },
    /// Release the active poll handle, if any.
    StopPolling,
}
