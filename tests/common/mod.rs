//! Common test utilities: an in-process stand-in for the notification service
#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, post};
use axum::{Json, Router};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// What the fake service answers with
#[derive(Debug, Clone)]
pub enum FakeReply {
    Json(StatusCode, Value),
    Text(StatusCode, String),
}

impl FakeReply {
    pub fn ok(body: Value) -> Self {
        FakeReply::Json(StatusCode::OK, body)
    }
}

/// A request as seen by the fake service
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
pub struct FakeService {
    pub base_url: String,
    reply: Arc<Mutex<FakeReply>>,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl FakeService {
    /// Start serving `/energizame/agregar` (POST) and `/energizame/eliminar` (DELETE)
    pub async fn start(reply: FakeReply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let service = Self {
            base_url: format!("http://{address}"),
            reply: Arc::new(Mutex::new(reply)),
            received: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route("/energizame/agregar", post(record))
            .route("/energizame/eliminar", delete(record))
            .with_state(service.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        service
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }

    pub fn set_reply(&self, reply: FakeReply) {
        *self.reply.lock().unwrap() = reply;
    }
}

async fn record(
    State(service): State<FakeService>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    service.received.lock().unwrap().push(ReceivedRequest {
        method,
        path: uri.path().to_string(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    let reply = service.reply.lock().unwrap().clone();
    match reply {
        FakeReply::Json(status, body) => (status, Json(body)).into_response(),
        FakeReply::Text(status, text) => (status, text).into_response(),
    }
}

/// A local URL nothing is listening on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
