use axum::body::Bytes;
use reqwest::header::HeaderValue;
use snafu::ResultExt;
use tracing::warn;
use urlencoding::encode;

use crate::Result;
use crate::error::ResponseJsonSnafu;
use crate::state::AppState;

use super::{Resource, get_protected, handle_response_error, read_json_body};

/// Lists items, passing the caller's query string through as-is
pub async fn list_items(state: &AppState, auth: &HeaderValue, query: Option<&str>) -> Result<Bytes> {
    let url = match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{}/items?{}", &state.config.api_url, q),
        None => format!("{}/items", &state.config.api_url),
    };

    let response = get_protected(state, url, auth, Resource::Items).await?;
    if !response.status().is_success() {
        return Err(handle_response_error(response, Resource::Items).await);
    }

    read_json_body(response, Resource::Items).await
}

/// Gets a single item, substituting a fallback record when the upstream
/// rejects the lookup and one exists for this id
pub async fn get_item(state: &AppState, auth: &HeaderValue, item_id: &str) -> Result<Bytes> {
    let url = format!("{}/items/{}", &state.config.api_url, encode(item_id));

    let response = get_protected(state, url, auth, Resource::Item).await?;
    if !response.status().is_success() {
        if let Some(record) = state.fallback.item_detail(item_id) {
            warn!(
                "Upstream failed for item {} with status {}, serving fallback record",
                item_id,
                response.status()
            );
            let body = serde_json::to_vec(&record).context(ResponseJsonSnafu {
                msg: Resource::Item.unavailable_msg(),
            })?;
            return Ok(Bytes::from(body));
        }

        return Err(handle_response_error(response, Resource::Item).await);
    }

    read_json_body(response, Resource::Item).await
}
