use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use httpmock::prelude::*;
use offdict_config::Config;
use offdict_core::{SelectionError, SelectionSource};
use tokio::io::BufReader;
use tokio::time::{sleep, timeout};

use crate::controller::AppController;
use crate::state::AppState;

/// Plays back a list of selections, then keeps returning the last one
struct ScriptedSelection(Mutex<VecDeque<&'static str>>);

impl ScriptedSelection {
    fn new(script: &[&'static str]) -> Self {
        Self(Mutex::new(script.iter().copied().collect()))
    }
}

impl SelectionSource for ScriptedSelection {
    fn current_selection(&self) -> Result<String, SelectionError> {
        let mut script = self.0.lock().unwrap();
        let text = if script.len() > 1 {
            script.pop_front()
        } else {
            script.front().copied()
        };
        Ok(text.unwrap_or_default().to_string())
    }
}

fn state_for(server: &MockServer) -> Arc<AppState> {
    let mut config = Config::default();
    config.lookup.host = server.host();
    config.lookup.port = server.port();
    config.selection.poll_interval_ms = 1;
    Arc::new(AppState::new(config))
}

async fn recorded_lookups(state: &AppState) -> u64 {
    let status = state.status.lookups.read().await;
    status.completed + status.failed
}

async fn wait_for_lookups(state: &AppState, count: u64) {
    timeout(Duration::from_secs(5), async {
        while recorded_lookups(state).await < count {
            sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("lookups recorded");
}

#[tokio::test]
async fn test_watch_looks_up_each_distinct_selection_once() {
    let server = MockServer::start_async().await;
    let alpha = server
        .mock_async(|when, then| {
            when.method(GET).path("/set/alpha");
            then.status(200);
        })
        .await;
    let beta = server
        .mock_async(|when, then| {
            when.method(GET).path("/set/beta");
            then.status(200);
        })
        .await;

    let state = state_for(&server);
    let controller = AppController::new(state.clone());
    let source = ScriptedSelection::new(&["alpha", "alpha", "  ", "io::Error", "beta"]);
    let tasks = controller.spawn_watch(source).await.unwrap();

    wait_for_lookups(&state, 2).await;
    // let a few more polls see the unchanged selection
    sleep(Duration::from_millis(50)).await;

    controller.shutdown();
    timeout(
        Duration::from_secs(2),
        controller.run(tasks, std::future::pending()),
    )
    .await
    .expect("watch stops on shutdown");

    assert_eq!(alpha.hits_async().await, 1);
    assert_eq!(beta.hits_async().await, 1);
    assert_eq!(recorded_lookups(&state).await, 2);
}

#[tokio::test]
async fn test_watch_looks_up_the_text_it_saw() {
    let server = MockServer::start_async().await;
    let first = server
        .mock_async(|when, then| {
            when.method(GET).path("/set/a");
            then.status(200);
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(GET).path("/set/b");
            then.status(200);
        })
        .await;

    let state = state_for(&server);
    let controller = AppController::new(state.clone());
    // the selection changes right after the first read
    let tasks = controller
        .spawn_watch(ScriptedSelection::new(&["a", "b"]))
        .await
        .unwrap();

    wait_for_lookups(&state, 2).await;
    sleep(Duration::from_millis(50)).await;
    controller.shutdown();
    controller.run(tasks, std::future::pending()).await;

    assert_eq!(first.hits_async().await, 1);
    assert_eq!(second.hits_async().await, 1);
}

#[tokio::test]
async fn test_release_watch_reads_selection_on_release() {
    let server = MockServer::start_async().await;
    let picked = server
        .mock_async(|when, then| {
            when.method(GET).path("/set/picked");
            then.status(200);
        })
        .await;
    let typed = server
        .mock_async(|when, then| {
            when.method(GET).path("/set/hello%20there");
            then.status(200);
        })
        .await;

    let state = state_for(&server);
    let controller = AppController::new(state.clone());
    let input = BufReader::new(&b"!release\nhello there\n"[..]);
    let tasks = controller
        .spawn_release_watch(ScriptedSelection::new(&["picked"]), input)
        .await
        .unwrap();

    // input EOF drains the pipeline, including in-flight lookups
    timeout(
        Duration::from_secs(5),
        controller.run(tasks, std::future::pending()),
    )
    .await
    .expect("release watch stops once input is exhausted");

    picked.assert_async().await;
    typed.assert_async().await;
    assert_eq!(recorded_lookups(&state).await, 2);
}
