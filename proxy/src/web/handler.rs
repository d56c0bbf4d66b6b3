use axum::{
    Extension,
    body::Bytes,
    extract::{Json, Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use snafu::ResultExt;

use crate::{
    error::{RequestJsonSnafu, Result},
    health::check_liveness,
    services::{
        auth::forward_login,
        items::{get_item, list_items},
        locations::list_locations,
    },
    state::AppState,
};
use dto::error::ErrorBody;

use super::{middleware::AuthHeader, params::ItemParams, response::JsonResponse};

pub async fn login_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<JsonResponse> {
    // Parsed regardless of the declared content type
    let credentials = serde_json::from_slice::<Value>(&body).context(RequestJsonSnafu {
        msg: "Invalid credentials payload",
    })?;

    let body = forward_login(&state, &credentials).await?;
    Ok(JsonResponse::new(body))
}

pub async fn list_items_handler(
    State(state): State<AppState>,
    Extension(AuthHeader(auth)): Extension<AuthHeader>,
    RawQuery(query): RawQuery,
) -> Result<JsonResponse> {
    let body = list_items(&state, &auth, query.as_deref()).await?;
    Ok(JsonResponse::new(body))
}

pub async fn get_item_handler(
    State(state): State<AppState>,
    Extension(AuthHeader(auth)): Extension<AuthHeader>,
    Path(params): Path<ItemParams>,
) -> Result<JsonResponse> {
    let body = get_item(&state, &auth, &params.item_id).await?;
    Ok(JsonResponse::new(body))
}

pub async fn list_locations_handler(
    State(state): State<AppState>,
    Extension(AuthHeader(auth)): Extension<AuthHeader>,
) -> Result<JsonResponse> {
    let body = list_locations(&state, &auth).await?;
    Ok(JsonResponse::new(body))
}

pub async fn health_live_handler() -> Result<JsonResponse> {
    let health = check_liveness().await?;
    JsonResponse::from_value(&health)
}

pub async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not Found")))
}
