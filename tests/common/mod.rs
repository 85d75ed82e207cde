//! 测试通用工具
//!
//! 提供一个基于 axum 的 Firestore 桩服务，记录收到的请求并返回预设响应。

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;

static INIT: Once = Once::new();

/// 初始化测试环境
pub fn setup() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// 桩服务收到的一次请求
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub has_authorization: bool,
}

/// 桩服务状态
pub struct StubState {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubState {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond(
    State(stub): State<Arc<StubState>>,
    method: axum::http::Method,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    stub.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        has_authorization: headers.contains_key(header::AUTHORIZATION),
    });

    if let Some(delay) = stub.delay {
        tokio::time::sleep(delay).await;
    }

    (
        stub.status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.body.clone(),
    )
}

/// 启动桩服务，返回根地址和共享状态
pub async fn spawn_stub(status: StatusCode, body: &str) -> (String, Arc<StubState>) {
    spawn_stub_with_delay(status, body, None).await
}

pub async fn spawn_stub_with_delay(
    status: StatusCode,
    body: &str,
    delay: Option<Duration>,
) -> (String, Arc<StubState>) {
    let state = Arc::new(StubState {
        status,
        body: body.to_string(),
        delay,
        requests: Mutex::new(Vec::new()),
    });
    let app = Router::new().fallback(respond).with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

/// 一个没有服务监听的地址，连接会被拒绝
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// 单个商品的响应体
pub const WIDGET_BODY: &str = r#"{"documents":[{"fields":{"name":{"stringValue":"Widget"},"price":{"doubleValue":9.99},"isFeatured":{"booleanValue":true}}}]}"#;

/// 缺少 isFeatured 的响应体
pub const NO_FEATURED_BODY: &str =
    r#"{"documents":[{"fields":{"name":{"stringValue":"Gadget"},"price":{"doubleValue":4.5}}}]}"#;

/// 含非有限 double 的响应体，`price` 与无关字段 `rating` 均为 "NaN"
pub const NAN_DOUBLE_BODY: &str = r#"{"documents":[{"fields":{"name":{"stringValue":"Widget"},"price":{"doubleValue":"NaN"},"rating":{"doubleValue":"NaN"},"isFeatured":{"booleanValue":true}}}]}"#;
