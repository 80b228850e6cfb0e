use std::sync::Arc;
use std::time::Duration;

use newsletter_logging::{nl_debug, nl_info, nl_warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::{AttemptId, EngineEvent, EventSink, NewsletterApi};

/// The only backend status value the poller acts on.
const COMPLETED_STATUS: &str = "completed";

/// Owned handle to a repeating task-status poll.
///
/// Releasing stops scheduling of future polls. A request already in flight
/// is allowed to finish but its result is discarded. Release happens at most
/// once; dropping the handle releases it.
pub struct PollHandle {
    attempt: AttemptId,
    task_id: String,
    cancel: Option<CancellationToken>,
    join: JoinHandle<()>,
}

impl PollHandle {
    /// Cancels the poll. Returns `true` only for the call that released it.
    pub fn release(&mut self) -> bool {
        match self.cancel.take() {
            Some(token) => {
                token.cancel();
                nl_debug!(
                    "Released poll for task {} (attempt {})",
                    self.task_id,
                    self.attempt
                );
                true
            }
            None => false,
        }
    }

    pub fn is_released(&self) -> bool {
        self.cancel.is_none()
    }

    /// True once the poll loop has exited, by completion or release.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Starts polling `task_id` every `period`, first query one period from now.
///
/// Each answer is emitted as [`EngineEvent::TaskStatus`]; the loop ends by
/// itself after reporting `"completed"`. Failed polls are emitted as
/// [`EngineEvent::PollFailed`] and polling continues.
pub fn spawn_poller(
    runtime: &Handle,
    api: Arc<dyn NewsletterApi>,
    attempt: AttemptId,
    task_id: String,
    period: Duration,
    sink: Arc<dyn EventSink>,
) -> PollHandle {
    let cancel = CancellationToken::new();
    let join = runtime.spawn(poll_loop(
        api,
        attempt,
        task_id.clone(),
        period,
        sink,
        cancel.clone(),
    ));
    nl_info!("Polling task {} every {:?}", task_id, period);
    PollHandle {
        attempt,
        task_id,
        cancel: Some(cancel),
        join,
    }
}

async fn poll_loop(
    api: Arc<dyn NewsletterApi>,
    attempt: AttemptId,
    task_id: String,
    period: Duration,
    sink: Arc<dyn EventSink>,
    cancel: CancellationToken,
) {
    // `interval_at` panics on a zero period.
    let period = period.max(Duration::from_millis(1));
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let result = api.task_status(&task_id).await;
        if cancel.is_cancelled() {
            nl_debug!("Discarding poll result for released task {}", task_id);
            break;
        }

        match result {
            Ok(status) => {
                nl_debug!("Check task data task_id={} status={:?}", task_id, status);
                let completed = status == COMPLETED_STATUS;
                sink.emit(EngineEvent::TaskStatus {
                    attempt,
                    task_id: task_id.clone(),
                    status,
                });
                if completed {
                    nl_info!("Task {} completed", task_id);
                    break;
                }
            }
            Err(error) => {
                nl_warn!("Poll for task {} failed, retrying next tick: {}", task_id, error);
                sink.emit(EngineEvent::PollFailed {
                    attempt,
                    task_id: task_id.clone(),
                    error,
                });
            }
        }
    }
}
