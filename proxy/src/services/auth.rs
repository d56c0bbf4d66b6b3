use axum::body::Bytes;
use reqwest::header::ACCEPT;
use serde_json::Value;
use snafu::ResultExt;
use tracing::info;

use crate::Result;
use crate::error::HttpClientSnafu;
use crate::state::AppState;

use super::{Resource, handle_response_error, read_json_body};

/// Forwards a login submission unchanged and relays the token bundle
pub async fn forward_login(state: &AppState, credentials: &Value) -> Result<Bytes> {
    let url = format!("{}/users/login", &state.config.api_url);
    info!("Forwarding login request");

    let response = state
        .http
        .post(url)
        .header(ACCEPT, "application/json")
        .json(credentials)
        .send()
        .await
        .context(HttpClientSnafu {
            msg: Resource::Login.unavailable_msg(),
        })?;

    if !response.status().is_success() {
        return Err(handle_response_error(response, Resource::Login).await);
    }

    read_json_body(response, Resource::Login).await
}
