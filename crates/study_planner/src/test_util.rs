//! Fake upstream server for tests.

use axum::body::Bytes;
use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// A request received by the fake upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path_and_query: String,
    pub body: Value,
}

struct UpstreamState {
    status: StatusCode,
    reply: Value,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Handle to a running fake upstream.
pub struct FakeUpstream {
    pub base_url: String,
    state: Arc<UpstreamState>,
}

impl FakeUpstream {
    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.requests.lock().unwrap().last().cloned()
    }
}

async fn record(
    State(state): State<Arc<UpstreamState>>,
    OriginalUri(uri): OriginalUri,
    body: Bytes,
) -> impl IntoResponse {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.requests.lock().unwrap().push(RecordedRequest {
        path_and_query,
        body,
    });
    (state.status, Json(state.reply.clone()))
}

/// Starts a server on a random local port that answers every request with
/// `status` and `reply`.
pub async fn spawn_upstream(status: StatusCode, reply: Value) -> FakeUpstream {
    let state = Arc::new(UpstreamState {
        status,
        reply,
        requests: Mutex::new(Vec::new()),
    });
    let app = Router::new().fallback(record).with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeUpstream {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// A base URL on which nothing is listening.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// A `generateContent` response whose first part is `text`.
pub fn model_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}
