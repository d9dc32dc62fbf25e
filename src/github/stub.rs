// Loopback HTTP stub for client tests.
// Serves canned responses by path and records the head of every request.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header::CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;

/// A canned response for one request path.
#[derive(Debug, Clone)]
pub struct StubRoute {
    pub path: String,
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    /// Hold the response back this long before answering.
    pub delay: Option<Duration>,
}

impl StubRoute {
    pub fn json(path: &str, status: u16, body: &str) -> Self {
        Self {
            path: path.to_string(),
            status,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
            delay: None,
        }
    }

    pub fn bytes(path: &str, content_type: &'static str, body: &[u8]) -> Self {
        Self {
            path: path.to_string(),
            status: 200,
            content_type,
            body: body.to_vec(),
            delay: None,
        }
    }

    /// A route that accepts the request and does not answer for a minute.
    pub fn stalled(path: &str) -> Self {
        Self {
            delay: Some(Duration::from_secs(60)),
            ..Self::json(path, 200, "{}")
        }
    }
}

struct StubState {
    routes: Vec<StubRoute>,
    requests: Mutex<Vec<String>>,
}

pub struct StubServer {
    addr: SocketAddr,
    state: Arc<StubState>,
}

impl StubServer {
    pub async fn start(routes: Vec<StubRoute>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::new(StubState {
            routes,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(respond)
            .with_state(Arc::clone(&state));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app.into_make_service()).await;
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request heads received so far, in arrival order.
    /// Each is the request line followed by one `name: value` line per header.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Request paths received so far, in arrival order.
    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|raw| raw.split_whitespace().nth(1).map(str::to_string))
            .collect()
    }
}

async fn respond(State(state): State<Arc<StubState>>, request: Request) -> Response {
    let mut head = format!(
        "{} {} {:?}\r\n",
        request.method(),
        request.uri(),
        request.version()
    );
    for (name, value) in request.headers() {
        head.push_str(&format!(
            "{}: {}\r\n",
            name,
            String::from_utf8_lossy(value.as_bytes())
        ));
    }
    state.requests.lock().unwrap().push(head);

    let path = request.uri().path();
    let Some(route) = state.routes.iter().find(|r| r.path == path) else {
        return (
            StatusCode::NOT_FOUND,
            [(CONTENT_TYPE, "application/json")],
            r#"{"message": "Not Found"}"#,
        )
            .into_response();
    };

    if let Some(delay) = route.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(route.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(CONTENT_TYPE, route.content_type)], route.body.clone()).into_response()
}
