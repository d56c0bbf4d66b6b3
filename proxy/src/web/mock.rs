//! Stand-in for the upstream inventory API, served on a random local port

use axum::{
    Json, Router,
    extract::{Path, RawQuery, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const GOOD_TOKEN: &str = "Bearer good-token";
pub const MAINTENANCE_TOKEN: &str = "Bearer maintenance-token";
pub const FORBIDDEN_TOKEN: &str = "Bearer forbidden-token";

// Raw bodies keep their odd spacing so byte-for-byte relay can be checked
pub const LOGIN_BODY: &str =
    r#"{"token":"tok-123", "expiresAt":"2099-01-01T00:00:00Z", "attachmentToken":"att-456"}"#;
pub const ITEMS_BODY: &str = r#"{"items": [{"id":"item-1","name":"Cordless Drill","quantity":1,"purchasePrice":129.99,"createdAt":"2025-01-01T00:00:00Z","updatedAt":"2025-01-01T00:00:00Z"}], "page":1, "pageSize":50, "total":1}"#;
pub const ITEM_BODY: &str = r#"{"id":"item-1", "name":"Cordless Drill", "quantity":1, "purchasePrice":129.99, "manufacturer":"Makita", "createdAt":"2025-01-01T00:00:00Z", "updatedAt":"2025-01-01T00:00:00Z"}"#;
pub const LOCATIONS_BODY: &str = r#"[{"id":"loc-1","name":"Garage","itemCount":4,"createdAt":"2025-01-01T00:00:00Z","updatedAt":"2025-01-01T00:00:00Z"}]"#;

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

type Requests = Arc<Mutex<Vec<RecordedRequest>>>;

pub struct MockUpstream {
    pub url: String,
    requests: Requests,
}

impl MockUpstream {
    pub async fn start() -> Self {
        let requests: Requests = Arc::new(Mutex::new(Vec::new()));

        let api = Router::new()
            .route("/users/login", post(login))
            .route("/items", get(items))
            .route("/items/{id}", get(item))
            .route("/locations", get(locations))
            .with_state(requests.clone());
        let app = Router::new().nest("/api/v1", api);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/api/v1", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

fn record(
    requests: &Requests,
    path: String,
    query: Option<String>,
    headers: &HeaderMap,
    body: Option<Value>,
) -> Option<String> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    requests.lock().unwrap().push(RecordedRequest {
        path,
        query,
        authorization: authorization.clone(),
        body,
    });

    authorization
}

fn raw_json(status: StatusCode, body: &'static str) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Unauthorized" })),
    )
        .into_response()
}

async fn login(
    State(requests): State<Requests>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(
        &requests,
        "/users/login".to_string(),
        None,
        &headers,
        Some(body.clone()),
    );

    match (body["username"].as_str(), body["password"].as_str()) {
        (Some("jane@example.com"), Some("secret")) => raw_json(StatusCode::OK, LOGIN_BODY),
        (Some("broken@example.com"), _) => (StatusCode::BAD_GATEWAY, "Bad Gateway").into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid username or password" })),
        )
            .into_response(),
    }
}

async fn items(
    State(requests): State<Requests>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let auth = record(&requests, "/items".to_string(), query, &headers, None);
    match auth.as_deref() {
        Some(GOOD_TOKEN) => raw_json(StatusCode::OK, ITEMS_BODY),
        _ => unauthorized(),
    }
}

async fn item(
    State(requests): State<Requests>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let auth = record(&requests, format!("/items/{}", id), None, &headers, None);
    if auth.as_deref() != Some(GOOD_TOKEN) {
        return unauthorized();
    }

    match id.as_str() {
        "item-1" => raw_json(StatusCode::OK, ITEM_BODY),
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))).into_response(),
        "garbled" => (StatusCode::OK, "<html>oops</html>").into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Item not found" })),
        )
            .into_response(),
    }
}

async fn locations(State(requests): State<Requests>, headers: HeaderMap) -> Response {
    let auth = record(&requests, "/locations".to_string(), None, &headers, None);
    match auth.as_deref() {
        Some(GOOD_TOKEN) => raw_json(StatusCode::OK, LOCATIONS_BODY),
        Some(MAINTENANCE_TOKEN) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "maintenance" })),
        )
            .into_response(),
        Some(FORBIDDEN_TOKEN) => (
            StatusCode::FORBIDDEN,
            Json(json!({ "message": "Forbidden location" })),
        )
            .into_response(),
        _ => unauthorized(),
    }
}
