use std::fmt;

use crate::topics::TopicList;
use crate::view_model::{PrimaryAction, Toast, WidgetViewModel};

/// Identifies one submit and everything it triggers.
pub type AttemptId = u64;

/// Backend-assigned handle for an asynchronous newsletter job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of a submission as shown inside the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Completed,
    Error,
}

/// Lifecycle of a submission as shown in the bottom toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendingStatus {
    #[default]
    Idle,
    Sending,
    Completed,
    Failed,
}

/// Backend status value that ends polling.
pub const TASK_COMPLETED: &str = "completed";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetState {
    dialog_open: bool,
    input: String,
    topics: TopicList,
    status: SubmissionStatus,
    sending: SendingStatus,
    task_id: Option<TaskId>,
    next_attempt: AttemptId,
    in_flight: Option<AttemptId>,
    polling: bool,
    dirty: bool,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> WidgetViewModel {
        let primary_action = if self.status == SubmissionStatus::Loading {
            PrimaryAction::Cancel
        } else {
            PrimaryAction::Submit
        };
        WidgetViewModel {
            dialog_open: self.dialog_open,
            input: self.input.clone(),
            topics: self.topics.to_vec(),
            status: self.status,
            sending: self.sending,
            primary_action,
            show_success: self.status == SubmissionStatus::Completed,
            toast: Toast::for_status(self.sending),
            task_id: self.task_id.clone(),
            polling: self.polling,
            dirty: self.dirty,
        }
    }

    pub fn topics(&self) -> &TopicList {
        &self.topics
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn sending(&self) -> SendingStatus {
        self.sending
    }

    pub fn task_id(&self) -> Option<&TaskId> {
        self.task_id.as_ref()
    }

    pub fn is_polling(&self) -> bool {
        self.polling
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_dialog_open(&mut self, open: bool) {
        if self.dialog_open != open {
            self.dialog_open = open;
            self.dirty = true;
        }
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.dirty = true;
        }
    }

    /// Moves the input field into the topic list; the field is cleared only on success.
    pub(crate) fn commit_input(&mut self) -> bool {
        if !self.topics.add(&self.input) {
            return false;
        }
        self.input.clear();
        self.dirty = true;
        true
    }

    pub(crate) fn remove_topic(&mut self, topic: &str) -> bool {
        let removed = self.topics.remove(topic);
        self.dirty |= removed;
        removed
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Loading || self.sending == SendingStatus::Sending
    }

    pub(crate) fn begin_attempt(&mut self) -> AttemptId {
        self.next_attempt += 1;
        let attempt = self.next_attempt;
        self.in_flight = Some(attempt);
        self.polling = false;
        self.set_statuses(SubmissionStatus::Loading, SendingStatus::Sending);
        attempt
    }

    /// True when `attempt` is the submission the widget is still waiting on.
    pub(crate) fn is_current(&self, attempt: AttemptId) -> bool {
        self.in_flight == Some(attempt)
    }

    pub(crate) fn accept_task(&mut self, task_id: TaskId) {
        self.task_id = Some(task_id);
        self.polling = true;
        self.dialog_open = false;
        self.dirty = true;
    }

    pub(crate) fn fail_attempt(&mut self) {
        self.in_flight = None;
        self.polling = false;
        self.set_statuses(SubmissionStatus::Error, SendingStatus::Failed);
    }

    pub(crate) fn complete_attempt(&mut self) {
        self.in_flight = None;
        self.polling = false;
        self.set_statuses(SubmissionStatus::Completed, SendingStatus::Completed);
    }

    /// Drops the current attempt; the task identifier is kept.
    pub(crate) fn cancel_attempt(&mut self) {
        self.in_flight = None;
        self.polling = false;
        self.set_statuses(SubmissionStatus::Idle, SendingStatus::Idle);
    }

    fn set_statuses(&mut self, status: SubmissionStatus, sending: SendingStatus) {
        self.status = status;
        self.sending = sending;
        self.dirty = true;
    }
}
