//! Shared fixtures for the HTTP API tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower::ServiceExt;

use catfact_relay::{create_router, AppConfig, AppState, FactPayload, FactSource, UpstreamError};

pub const FALLBACK: &str = "Cats are amazing creatures! (Cat Facts API temporarily unavailable)";

/// Always returns the same fact.
pub struct FixedFact(pub &'static str);

#[async_trait]
impl FactSource for FixedFact {
    async fn fetch_fact(&self, _deadline: Duration) -> Result<FactPayload, UpstreamError> {
        Ok(FactPayload {
            fact: self.0.to_string(),
        })
    }
}

/// Always fails with the error produced by the closure.
pub struct FailingFact(pub fn() -> UpstreamError);

#[async_trait]
impl FactSource for FailingFact {
    async fn fetch_fact(&self, _deadline: Duration) -> Result<FactPayload, UpstreamError> {
        Err((self.0)())
    }
}

/// Upstream latency simulated by [`CountingFact`]
pub const COUNTING_DELAY: Duration = Duration::from_millis(100);

/// Returns a different numbered fact on every call, after [`COUNTING_DELAY`].
#[derive(Default)]
pub struct CountingFact {
    calls: AtomicUsize,
}

#[async_trait]
impl FactSource for CountingFact {
    async fn fetch_fact(&self, _deadline: Duration) -> Result<FactPayload, UpstreamError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(COUNTING_DELAY).await;
        Ok(FactPayload {
            fact: format!("Cat fact #{n}"),
        })
    }
}

pub fn config_with_user() -> AppConfig {
    AppConfig::parse(
        r#"
        [user]
        email = "grace@example.com"
        name = "Grace Hopper"
        stack = "Rust/Axum"
        "#,
    )
    .unwrap()
}

pub fn router_with(source: Arc<dyn FactSource>) -> Router {
    create_router(AppState::new(config_with_user(), source))
}

pub async fn get_path(app: Router, path: &str) -> Response {
    app.oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn assert_json_200(response: &Response) {
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.contains("application/json"),
        "unexpected content-type {content_type:?}"
    );
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn is_iso_millis(ts: &str) -> bool {
    const PATTERN: &[u8] = b"dddd-dd-ddTdd:dd:dd.dddZ";
    ts.len() == PATTERN.len()
        && ts.bytes().zip(PATTERN).all(|(c, &p)| match p {
            b'd' => c.is_ascii_digit(),
            _ => c == p,
        })
}

/// Check the envelope has exactly the expected keys and returns its fact.
pub fn assert_envelope_shape(body: &serde_json::Value) -> String {
    let object = body.as_object().expect("envelope is an object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["fact", "status", "timestamp", "user"]);

    let user = body["user"].as_object().expect("user is an object");
    let mut user_keys: Vec<&str> = user.keys().map(String::as_str).collect();
    user_keys.sort_unstable();
    assert_eq!(user_keys, ["email", "name", "stack"]);

    assert_eq!(body["status"], "success");
    let timestamp = body["timestamp"].as_str().expect("timestamp is a string");
    assert!(is_iso_millis(timestamp), "bad timestamp {timestamp:?}");

    body["fact"].as_str().expect("fact is a string").to_string()
}

/// Serve a stand-in upstream on an ephemeral port.
pub async fn spawn_upstream(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub fn slow_upstream(delay: Duration) -> Router {
    Router::new().route(
        "/fact",
        get(move || async move {
            tokio::time::sleep(delay).await;
            r#"{"fact":"late"}"#
        }),
    )
}
