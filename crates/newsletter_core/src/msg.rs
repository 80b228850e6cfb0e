use crate::{AttemptId, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked the card's open button.
    OpenDialogClicked,
    /// The dialog asked to be shown or hidden (e.g. dismissed with Esc).
    DialogOpenChanged(bool),
    /// User edited the topic input field.
    InputChanged(String),
    /// User clicked Add for the current input.
    AddTopicClicked,
    /// User removed a topic chip.
    RemoveTopicClicked(String),
    /// User clicked Send.
    SubmitClicked,
    /// User clicked Cancel while a submission was in progress.
    CancelClicked,
    /// Authentication or generation failed for an attempt.
    SubmissionFailed { attempt: AttemptId },
    /// Backend accepted the topics and started a task.
    TaskAccepted { attempt: AttemptId, task_id: TaskId },
    /// A status poll answered with the given backend status.
    TaskStatusReported { attempt: AttemptId, status: String },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
