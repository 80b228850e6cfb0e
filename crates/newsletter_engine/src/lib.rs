//! Newsletter engine: HTTP calls, submission workflow and task polling.
mod api;
mod config;
mod engine;
mod poll;
mod types;
mod workflow;

pub use api::{encode_credential, NewsletterApi, ReqwestApi};
pub use config::{ApiConfig, EngineConfig, DEFAULT_POLL_INTERVAL};
pub use engine::{EngineError, EngineHandle};
pub use poll::{spawn_poller, PollHandle};
pub use types::{ApiError, AttemptId, ChannelEventSink, EngineEvent, EventSink, FailureKind};
pub use workflow::{authenticate, submit_topics};
