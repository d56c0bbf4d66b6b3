use axum::extract::DefaultBodyLimit;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use tracing::{error, warn};

use crate::error::ErrorInfo;
use crate::state::AppState;
use dto::error::ErrorBody;

use super::handler::{
    get_item_handler, health_live_handler, list_items_handler, list_locations_handler,
    login_handler, not_found_handler,
};
use super::middleware::require_token_middleware;

// Login payloads are tiny
const BODY_LIMIT: usize = 64 * 1024;

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(all_routes(state))
        .layer(middleware::map_response(response_mapper))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}

pub fn all_routes(state: AppState) -> Router {
    Router::new()
        .merge(public_routes(state.clone()))
        .merge(private_routes(state.clone()))
        .fallback(not_found_handler)
        .with_state(state)
}

fn public_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/health/liveness", get(health_live_handler))
        .route("/api/auth/login", post(login_handler))
        .with_state(state)
}

fn private_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/items", get(list_items_handler))
        .route("/api/items/{item_id}", get(get_item_handler))
        .route("/api/locations", get(list_locations_handler))
        .route_layer(middleware::from_fn(require_token_middleware))
        .with_state(state)
}

async fn response_mapper(res: Response) -> Response {
    let Some(e) = res.extensions().get::<ErrorInfo>() else {
        if res.status() == StatusCode::METHOD_NOT_ALLOWED {
            return method_not_allowed(res);
        }
        return res;
    };

    if e.status_code.is_server_error() {
        error!("{}", e.message);
        if let Some(detail) = &e.detail {
            error!("{}", detail);
        }
        if let Some(bt) = &e.backtrace {
            error!("{}", bt);
        }
    } else if e.status_code.is_client_error() {
        warn!("{}: {}", e.status_code, e.message);
    }

    (e.status_code, Json(ErrorBody::new(e.message.clone()))).into_response()
}

// Router-generated 405s carry an empty body
fn method_not_allowed(res: Response) -> Response {
    let allow = res.headers().get(header::ALLOW).cloned();
    let mut mapped = (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::new("Method Not Allowed")),
    )
        .into_response();

    if let Some(allow) = allow {
        mapped.headers_mut().insert(header::ALLOW, allow);
    }
    mapped
}
