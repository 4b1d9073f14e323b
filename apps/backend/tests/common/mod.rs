//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - A mock upstream dictionary served on an ephemeral port
//! - TestContext wiring the backend router to that upstream

pub mod fixtures;

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use opendict_backend::config::Config;
use opendict_backend::AppState;

/// Test context holding the backend router.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context whose upstream is a freshly spawned mock dictionary.
    pub async fn new() -> Self {
        let upstream = spawn_mock_upstream().await;
        Self::with_upstream(&format!("http://{}/api/words", upstream))
    }

    /// Create a context pointing at an arbitrary upstream base URL.
    pub fn with_upstream(base: &str) -> Self {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            rae_api_base: base.to_string(),
            upstream_timeout: Duration::from_secs(5),
        };
        let state = AppState::from_config(&config).expect("Failed to build app state");

        Self {
            app: opendict_backend::app(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

/// Serve the mock upstream and return its address.
pub async fn spawn_mock_upstream() -> SocketAddr {
    let app = Router::new().route("/api/words/:word", get(mock_word));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock upstream");
    let addr = listener.local_addr().expect("mock upstream address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock upstream crashed");
    });

    addr
}

/// An address nothing is listening on.
pub async fn closed_address() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    listener.local_addr().expect("probe address")
}

async fn mock_word(Path(word): Path<String>) -> Response {
    match word.as_str() {
        "mantenimiento" => (StatusCode::SERVICE_UNAVAILABLE, "upstream down for maintenance")
            .into_response(),
        "roto" => (StatusCode::OK, "this is not json").into_response(),
        "inexistente" => (StatusCode::NOT_FOUND, r#"{"ok":false}"#).into_response(),
        "sinpalabra" => Json(fixtures::response_without_word()).into_response(),
        other => Json(fixtures::word_response(other)).into_response(),
    }
}
