use axum::body::Bytes;
use reqwest::header::HeaderValue;

use crate::Result;
use crate::state::AppState;

use super::{Resource, get_protected, handle_response_error, read_json_body};

pub async fn list_locations(state: &AppState, auth: &HeaderValue) -> Result<Bytes> {
    let url = format!("{}/locations", &state.config.api_url);

    let response = get_protected(state, url, auth, Resource::Locations).await?;
    if !response.status().is_success() {
        return Err(handle_response_error(response, Resource::Locations).await);
    }

    read_json_body(response, Resource::Locations).await
}
