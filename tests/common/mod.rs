#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use move_arbiter::{ArbiterConfig, MoveArbitrator};
use reqwest::Client;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Build a reqwest client for tests.
pub fn client() -> Client {
    Client::new()
}

/// Build a URL for an endpoint on a spawned app.
pub fn url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}

/// Canned behaviour for the stub completion endpoint.
pub enum StubReply {
    /// 200 with `choices[0].message.content` set to this text
    Content(&'static str),
    /// Bare status code, empty body
    Status(u16),
    /// 200 with this raw body
    Raw(&'static str),
    /// Sleep, then answer like `Content`
    Delayed(Duration, &'static str),
}

pub struct StubLlm {
    pub base_url: String,
    /// Each entry: {"auth": <Authorization header>, "body": <request JSON>}
    pub requests: Arc<Mutex<Vec<Value>>>,
}

impl StubLlm {
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Value {
        self.requests.lock().unwrap().last().cloned().unwrap_or(Value::Null)
    }

    /// Arbitrator config pointed at this stub.
    pub fn config(&self) -> ArbiterConfig {
        ArbiterConfig {
            api_key: Some("test-key".to_string()),
            base_url: self.base_url.clone(),
            model: "stub-model".to_string(),
            ..ArbiterConfig::default()
        }
    }
}

/// Serve an OpenAI-style `/v1/chat/completions` on an ephemeral port.
pub async fn spawn_stub_llm(reply: StubReply) -> StubLlm {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();
    let reply = Arc::new(reply);

    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let recorded = recorded.clone();
            let reply = reply.clone();
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                recorded
                    .lock()
                    .unwrap()
                    .push(json!({ "auth": auth, "body": body }));

                match &*reply {
                    StubReply::Content(text) => completion(text),
                    StubReply::Status(code) => StatusCode::from_u16(*code).unwrap().into_response(),
                    StubReply::Raw(raw) => (StatusCode::OK, *raw).into_response(),
                    StubReply::Delayed(delay, text) => {
                        tokio::time::sleep(*delay).await;
                        completion(text)
                    }
                }
            }
        }),
    );

    let base = serve(app).await;
    StubLlm {
        base_url: format!("{base}/v1"),
        requests,
    }
}

fn completion(text: &str) -> Response {
    Json(json!({
        "id": "chatcmpl-test",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": text }, "finish_reason": "stop" }
        ]
    }))
    .into_response()
}

/// Start the move service around `arbiter` and return its base URL.
pub async fn spawn_app(arbiter: MoveArbitrator) -> String {
    serve(server::routes::router(Arc::new(arbiter))).await
}

/// Start the move service with no API key configured.
pub async fn spawn_keyless_app() -> String {
    let arbiter = MoveArbitrator::from_config(&ArbiterConfig::default()).unwrap();
    spawn_app(arbiter).await
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// An address nothing is listening on.
pub async fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1")
}
