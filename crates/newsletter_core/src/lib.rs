//! Newsletter core: pure subscription state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod topics;
mod update;
pub mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AttemptId, SendingStatus, SubmissionStatus, TaskId, WidgetState, TASK_COMPLETED,
};
pub use topics::TopicList;
pub use update::update;
pub use view_model::{PrimaryAction, Toast, WidgetViewModel};
