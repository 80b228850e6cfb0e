use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use newsletter_logging::{nl_debug, nl_info};
use thiserror::Error;
use tokio::runtime::Runtime;

use crate::poll::{spawn_poller, PollHandle};
use crate::workflow::submit_topics;
use crate::{ApiError, AttemptId, EngineConfig, EngineEvent, EventSink, NewsletterApi, ReqwestApi};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] ApiError),
}

enum EngineCommand {
    Submit {
        attempt: AttemptId,
        topics: Vec<String>,
    },
    StartPolling {
        attempt: AttemptId,
        task_id: String,
    },
    StopPolling,
}

/// Front end of the engine thread. Commands are processed in order; results
/// arrive through the [`EventSink`] given at construction.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn spawn(config: EngineConfig, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        nl_info!("Starting engine with {:?}", config);
        let api = Arc::new(ReqwestApi::new(config.api)?);
        Self::with_api(api, config.poll_interval, sink)
    }

    /// Like [`EngineHandle::spawn`] but with a caller-supplied backend.
    pub fn with_api(
        api: Arc<dyn NewsletterApi>,
        poll_interval: Duration,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("newsletter-io")
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::Builder::new()
            .name("newsletter-engine".to_string())
            .spawn(move || run_commands(runtime, api, poll_interval, sink, cmd_rx))?;

        Ok(Self { cmd_tx })
    }

    pub fn submit(&self, attempt: AttemptId, topics: Vec<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Submit { attempt, topics });
    }

    pub fn start_polling(&self, attempt: AttemptId, task_id: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::StartPolling {
            attempt,
            task_id: task_id.into(),
        });
    }

    pub fn stop_polling(&self) {
        let _ = self.cmd_tx.send(EngineCommand::StopPolling);
    }
}

fn run_commands(
    runtime: Runtime,
    api: Arc<dyn NewsletterApi>,
    poll_interval: Duration,
    sink: Arc<dyn EventSink>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
) {
    let mut active_poll: Option<PollHandle> = None;

    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Submit { attempt, topics } => {
                let api = api.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    let event = match submit_topics(api.as_ref(), &topics).await {
                        Ok(task_id) => EngineEvent::TaskAccepted { attempt, task_id },
                        Err(error) => EngineEvent::SubmissionFailed { attempt, error },
                    };
                    sink.emit(event);
                });
            }
            EngineCommand::StartPolling { attempt, task_id } => {
                if let Some(mut previous) = active_poll.take() {
                    previous.release();
                }
                active_poll = Some(spawn_poller(
                    runtime.handle(),
                    api.clone(),
                    attempt,
                    task_id,
                    poll_interval,
                    sink.clone(),
                ));
            }
            EngineCommand::StopPolling => match active_poll.take() {
                Some(mut handle) => {
                    handle.release();
                }
                None => nl_debug!("Stop requested with no active poll"),
            },
        }
    }

    drop(active_poll);
    runtime.shutdown_timeout(Duration::from_secs(1));
    nl_debug!("Engine thread stopped");
}
