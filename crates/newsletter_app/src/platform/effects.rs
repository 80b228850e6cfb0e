use std::sync::{mpsc, Arc};

use newsletter_core::{Effect, Msg, TaskId};
use newsletter_engine::{EngineConfig, EngineError, EngineEvent, EngineHandle, EventSink};
use newsletter_logging::{nl_info, nl_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, msg_tx: mpsc::Sender<Msg>) -> Result<Self, EngineError> {
        let sink = Arc::new(MsgSink { msg_tx });
        let engine = EngineHandle::spawn(config, sink)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit { attempt, topics } => {
                    nl_info!("Submit attempt={} topics={:?}", attempt, topics);
                    self.engine.submit(attempt, topics);
                }
                Effect::StartPolling { attempt, task_id } => {
                    self.engine.start_polling(attempt, task_id.as_str());
                }
                Effect::StopPolling => self.engine.stop_polling(),
            }
        }
    }
}

/// Forwards engine results into the UI message queue.
struct MsgSink {
    msg_tx: mpsc::Sender<Msg>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        if let Some(msg) = map_event(event) {
            let _ = self.msg_tx.send(msg);
        }
    }
}

fn map_event(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::SubmissionFailed { attempt, error } => {
            nl_warn!("Submission attempt {} failed: {}", attempt, error);
            Some(Msg::SubmissionFailed { attempt })
        }
        EngineEvent::TaskAccepted { attempt, task_id } => Some(Msg::TaskAccepted {
            attempt,
            task_id: TaskId::new(task_id),
        }),
        EngineEvent::TaskStatus {
            attempt, status, ..
        } => Some(Msg::TaskStatusReported { attempt, status }),
        // Poll failures are transient and never reach the widget.
        EngineEvent::PollFailed { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::map_event;
    use newsletter_core::{Msg, TaskId};
    use newsletter_engine::{ApiError, EngineEvent, FailureKind};

    #[test]
    fn accepted_task_maps_to_msg() {
        let msg = map_event(EngineEvent::TaskAccepted {
            attempt: 3,
            task_id: "t1".to_string(),
        });
        assert_eq!(
            msg,
            Some(Msg::TaskAccepted {
                attempt: 3,
                task_id: TaskId::new("t1"),
            })
        );
    }

    #[test]
    fn status_maps_to_report() {
        let msg = map_event(EngineEvent::TaskStatus {
            attempt: 1,
            task_id: "t1".to_string(),
            status: "completed".to_string(),
        });
        assert_eq!(
            msg,
            Some(Msg::TaskStatusReported {
                attempt: 1,
                status: "completed".to_string(),
            })
        );
    }

    fn network_error() -> ApiError {
        ApiError {
            kind: FailureKind::Network,
            message: "connection refused".to_string(),
        }
    }

    #[test]
    fn submission_failure_keeps_only_attempt() {
        let msg = map_event(EngineEvent::SubmissionFailed {
            attempt: 2,
            error: network_error(),
        });
        assert_eq!(msg, Some(Msg::SubmissionFailed { attempt: 2 }));
    }

    #[test]
    fn poll_failure_is_dropped() {
        let msg = map_event(EngineEvent::PollFailed {
            attempt: 1,
            task_id: "t1".to_string(),
            error: network_error(),
        });
        assert_eq!(msg, None);
    }
}
