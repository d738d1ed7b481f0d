//! Loopback axum server answering every request with one canned response.

use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::IntoResponse;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tokio::sync::Mutex;

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: Arc<str>,
    requests: Arc<Mutex<Vec<String>>>,
}

async fn answer(State(canned): State<Canned>, method: Method, uri: Uri) -> impl IntoResponse {
    canned.requests.lock().await.push(format!("{method} {uri}"));
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body.to_string(),
    )
}

/// HTTP server for exercising the Google adapters offline.
///
/// The server runs on its own Tokio runtime and stops when dropped.
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    _runtime: Runtime,
}

impl StubServer {
    /// Start serving `body` with `status` on an ephemeral port.
    pub fn start(status: u16, body: impl Into<String>) -> Self {
        let runtime = Runtime::new().expect("stub server runtime");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let canned = Canned {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: Arc::from(body.into()),
            requests: Arc::clone(&requests),
        };
        let app = Router::new().fallback(answer).with_state(canned);
        let listener = runtime
            .block_on(TcpListener::bind("127.0.0.1:0"))
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");
        runtime.spawn(async move { axum::serve(listener, app).await });
        Self {
            base_url: format!("http://{addr}"),
            requests,
            _runtime: runtime,
        }
    }

    /// Base URL to hand to the provider configuration.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests received so far, e.g. `GET /geocode/json?...`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.blocking_lock().clone()
    }
}

/// A base URL on which nothing is listening.
pub fn unreachable_base_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("reserve port");
    let addr = listener.local_addr().expect("reserved address");
    drop(listener);
    format!("http://{addr}")
}
