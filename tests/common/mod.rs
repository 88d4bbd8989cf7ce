#![allow(dead_code)]

// In-process sign-in endpoint used by the integration tests.
//
// The server runs on its own thread with a dedicated tokio runtime so the
// blocking reqwest client under test never runs inside an async context.

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockServer {
    base: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    /// Answer every sign-in with `status`.
    pub fn start(status: u16) -> Self {
        Self::spawn(status, None)
    }

    /// Answer after `delay`, for exercising client timeouts.
    pub fn start_slow(delay: Duration) -> Self {
        Self::spawn(200, Some(delay))
    }

    fn spawn(status: u16, delay: Option<Duration>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        listener.set_nonblocking(true).expect("nonblocking listener");
        let addr = listener.local_addr().expect("local addr");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).expect("valid status"),
            delay,
            requests: requests.clone(),
        };

        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("mock runtime");
            rt.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("tokio listener");
                let app = Router::new()
                    .route("/signin", post(record))
                    .with_state(state);
                axum::serve(listener, app).await.expect("mock server");
            });
        });

        MockServer {
            base: format!("http://{addr}"),
            requests,
        }
    }

    pub fn signin_url(&self) -> String {
        format!("{}/signin", self.base)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

async fn record(State(state): State<MockState>, headers: HeaderMap, body: Bytes) -> StatusCode {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state
        .requests
        .lock()
        .expect("requests lock")
        .push(RecordedRequest { content_type, body });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }
    state.status
}

/// A URL nothing is listening on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/signin")
}
