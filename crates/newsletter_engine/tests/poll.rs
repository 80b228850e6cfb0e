use std::sync::{Arc, Mutex};
use std::time::Duration;

use newsletter_engine::{
    spawn_poller, ApiConfig, EngineEvent, EventSink, FailureKind, NewsletterApi, ReqwestApi,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::runtime::Handle;
use tokio::time::sleep;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct TestSink {
    events: Mutex<Vec<EngineEvent>>,
}

impl TestSink {
    fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl EventSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn api_for(server: &MockServer) -> Arc<dyn NewsletterApi> {
    Arc::new(ReqwestApi::new(ApiConfig::new(server.uri())).expect("client"))
}

async fn mount_status(server: &MockServer, status: &str, times: Option<u64>) {
    let mock = Mock::given(method("GET"))
        .and(path("/tasks/t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": status })));
    let mock = match times {
        Some(n) => mock.up_to_n_times(n),
        None => mock,
    };
    mock.mount(server).await;
}

async fn status_requests(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == "/tasks/t1")
        .count()
}

fn statuses(events: &[EngineEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            EngineEvent::TaskStatus { status, .. } => Some(status.clone()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn first_poll_waits_one_full_period() {
    let server = MockServer::start().await;
    mount_status(&server, "processing", None).await;
    let sink = Arc::new(TestSink::default());

    let mut handle = spawn_poller(
        &Handle::current(),
        api_for(&server),
        1,
        "t1".to_string(),
        Duration::from_millis(300),
        sink.clone(),
    );

    sleep(Duration::from_millis(150)).await;
    assert_eq!(status_requests(&server).await, 0);

    sleep(Duration::from_millis(300)).await;
    assert_eq!(status_requests(&server).await, 1);
    assert!(handle.release());
}

#[tokio::test]
async fn polling_stops_after_completed() {
    let server = MockServer::start().await;
    mount_status(&server, "processing", Some(2)).await;
    mount_status(&server, "completed", None).await;
    let sink = Arc::new(TestSink::default());

    let handle = spawn_poller(
        &Handle::current(),
        api_for(&server),
        4,
        "t1".to_string(),
        Duration::from_millis(50),
        sink.clone(),
    );

    sleep(Duration::from_millis(500)).await;
    assert_eq!(status_requests(&server).await, 3);
    assert!(handle.is_finished());

    let events = sink.take();
    assert_eq!(statuses(&events), vec!["processing", "processing", "completed"]);
    assert!(events.iter().all(|event| matches!(
        event,
        EngineEvent::TaskStatus { attempt: 4, task_id, .. } if task_id == "t1"
    )));

    sleep(Duration::from_millis(200)).await;
    assert_eq!(status_requests(&server).await, 3);
}

#[tokio::test]
async fn release_stops_future_polls_exactly_once() {
    let server = MockServer::start().await;
    mount_status(&server, "processing", None).await;
    let sink = Arc::new(TestSink::default());

    let mut handle = spawn_poller(
        &Handle::current(),
        api_for(&server),
        1,
        "t1".to_string(),
        Duration::from_millis(50),
        sink.clone(),
    );

    sleep(Duration::from_millis(180)).await;
    assert!(handle.release());
    assert!(!handle.release());
    assert!(handle.is_released());

    sleep(Duration::from_millis(30)).await;
    let seen = status_requests(&server).await;
    assert!(seen >= 2, "expected at least two polls, saw {seen}");

    sleep(Duration::from_millis(250)).await;
    assert_eq!(status_requests(&server).await, seen);
    assert!(handle.is_finished());
}

#[tokio::test]
async fn dropping_handle_releases_poll() {
    let server = MockServer::start().await;
    mount_status(&server, "processing", None).await;
    let sink = Arc::new(TestSink::default());

    let handle = spawn_poller(
        &Handle::current(),
        api_for(&server),
        1,
        "t1".to_string(),
        Duration::from_millis(50),
        sink.clone(),
    );
    drop(handle);

    sleep(Duration::from_millis(200)).await;
    assert_eq!(status_requests(&server).await, 0);
    assert!(sink.take().is_empty());
}

#[tokio::test]
async fn failed_poll_is_transient() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/t1"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_status(&server, "completed", None).await;
    let sink = Arc::new(TestSink::default());

    let handle = spawn_poller(
        &Handle::current(),
        api_for(&server),
        1,
        "t1".to_string(),
        Duration::from_millis(50),
        sink.clone(),
    );

    sleep(Duration::from_millis(400)).await;
    assert!(handle.is_finished());

    let events = sink.take();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[0],
        EngineEvent::PollFailed { error, .. } if error.kind == FailureKind::HttpStatus(502)
    ));
    assert_eq!(statuses(&events), vec!["completed"]);
}
