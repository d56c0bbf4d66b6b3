//! Local stand-in serving both the proxy and the upstream paths

use axum::{
    Json, Router,
    extract::{Path, RawQuery, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use crate::route::Route;

pub const TOKEN: &str = "Bearer tok-123";

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

type Requests = Arc<Mutex<Vec<RecordedRequest>>>;

pub struct MockApi {
    addr: String,
    requests: Requests,
}

impl MockApi {
    pub async fn start() -> Self {
        let requests: Requests = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/items", get(items))
            .route("/api/items/{id}", get(item))
            .route("/api/locations", get(locations))
            .route("/api/v1/users/login", post(login))
            .route("/api/v1/items", get(items))
            .route("/api/v1/items/{id}", get(item))
            .route("/api/v1/locations", get(locations))
            .with_state(requests.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr: format!("http://{}", addr),
            requests,
        }
    }

    pub fn proxy_route(&self) -> Route {
        Route::proxy(self.addr.clone())
    }

    pub fn direct_route(&self) -> Route {
        Route::direct(format!("{}/api/v1", self.addr))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

fn record(requests: &Requests, uri: &Uri, headers: &HeaderMap) -> bool {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let authorized = authorization.as_deref() == Some(TOKEN);

    requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(|q| q.to_string()),
        authorization,
    });

    authorized
}

fn reject(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

fn item_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Cordless Drill",
        "description": "18V drill",
        "quantity": 1,
        "purchasePrice": 129.99,
        "labels": [],
        "location": null,
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z",
    })
}

async fn login(
    State(requests): State<Requests>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(&requests, &uri, &headers);

    match (body["username"].as_str(), body["password"].as_str()) {
        (Some("jane@example.com"), Some("secret")) => Json(json!({
            "token": "tok-123",
            "expiresAt": "2099-01-01T00:00:00Z",
            "attachmentToken": "att-456",
        }))
        .into_response(),
        (Some("locked@example.com"), _) => reject(
            StatusCode::FORBIDDEN,
            json!({ "error": "Account locked", "message": "Forbidden" }),
        ),
        (Some("bare@example.com"), _) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => reject(
            StatusCode::UNAUTHORIZED,
            json!({ "message": "Invalid username or password" }),
        ),
    }
}

async fn items(
    State(requests): State<Requests>,
    uri: Uri,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    if !record(&requests, &uri, &headers) {
        return reject(StatusCode::UNAUTHORIZED, json!({ "error": "Unauthorized" }));
    }

    let mut page = 1;
    let mut page_size = 50;
    for pair in query.unwrap_or_default().split('&') {
        match pair.split_once('=') {
            Some(("page", v)) => page = v.parse().unwrap_or(page),
            Some(("pageSize", v)) => page_size = v.parse().unwrap_or(page_size),
            _ => {}
        }
    }

    Json(json!({
        "items": [item_json("item-1")],
        "page": page,
        "pageSize": page_size,
        "total": 1,
    }))
    .into_response()
}

async fn item(
    State(requests): State<Requests>,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !record(&requests, &uri, &headers) {
        return reject(StatusCode::UNAUTHORIZED, json!({ "error": "Unauthorized" }));
    }

    match id.as_str() {
        "item-1" => {
            let mut detail = item_json(&id);
            detail["manufacturer"] = json!("Makita");
            detail["attachments"] = json!([]);
            Json(detail).into_response()
        }
        _ => reject(StatusCode::NOT_FOUND, json!({ "error": "Item not found" })),
    }
}

async fn locations(State(requests): State<Requests>, uri: Uri, headers: HeaderMap) -> Response {
    if !record(&requests, &uri, &headers) {
        return reject(StatusCode::UNAUTHORIZED, json!({ "error": "Unauthorized" }));
    }

    Json(json!([
        {
            "id": "loc-1",
            "name": "Garage",
            "itemCount": 4,
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z",
        },
        {
            "id": "loc-2",
            "name": "Kitchen",
            "description": "Counter and pantry",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z",
        }
    ]))
    .into_response()
}
