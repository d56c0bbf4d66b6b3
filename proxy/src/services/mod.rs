use axum::body::Bytes;
use reqwest::{
    Response,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue},
};
use serde::de::IgnoredAny;
use serde_json::Value;
use snafu::ResultExt;
use std::fmt;
use tracing::warn;

use crate::error::{HttpClientSnafu, HttpResponseParseSnafu, ResponseJsonSnafu, UpstreamSnafu};
use crate::state::AppState;
use crate::{Error, Result};

pub mod auth;
pub mod items;
pub mod locations;

/// Upstream resources reachable through the proxy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Login,
    Items,
    Item,
    Locations,
}

impl Resource {
    /// Used when the upstream rejects the call without a message
    pub fn rejected_msg(&self) -> &'static str {
        match self {
            Resource::Login => "Login failed",
            Resource::Items => "Failed to fetch items",
            Resource::Item => "Failed to fetch item",
            Resource::Locations => "Failed to fetch locations",
        }
    }

    /// Used when the upstream cannot be reached or its body cannot be read
    pub fn unavailable_msg(&self) -> &'static str {
        match self {
            Resource::Login => "Unable to connect to the authentication server",
            Resource::Items => "Unable to fetch items",
            Resource::Item => "Unable to fetch item",
            Resource::Locations => "Unable to fetch locations",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Resource::Login => "login",
            Resource::Items => "items",
            Resource::Item => "item",
            Resource::Locations => "locations",
        };
        write!(f, "{}", name)
    }
}

/// Sends a bearer-authorized GET, forwarding the caller's header untouched
pub async fn get_protected(
    state: &AppState,
    url: String,
    auth: &HeaderValue,
    resource: Resource,
) -> Result<Response> {
    state
        .http
        .get(url)
        .header(AUTHORIZATION, auth.clone())
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
        .context(HttpClientSnafu {
            msg: resource.unavailable_msg(),
        })
}

/// Reads a successful body, which must be valid JSON, without reshaping it
pub async fn read_json_body(response: Response, resource: Resource) -> Result<Bytes> {
    let body = response.bytes().await.context(HttpResponseParseSnafu {
        msg: resource.unavailable_msg(),
    })?;

    serde_json::from_slice::<IgnoredAny>(&body).context(ResponseJsonSnafu {
        msg: resource.unavailable_msg(),
    })?;

    Ok(body)
}

pub async fn handle_response_error(response: Response, resource: Resource) -> Error {
    let status = response.status();
    warn!("Upstream rejected {} request with status {}", resource, status);

    let body = match response.bytes().await.context(HttpResponseParseSnafu {
        msg: resource.unavailable_msg(),
    }) {
        Ok(body) => body,
        Err(e) => return e,
    };

    let data = match serde_json::from_slice::<Value>(&body).context(ResponseJsonSnafu {
        msg: resource.unavailable_msg(),
    }) {
        Ok(data) => data,
        Err(e) => return e,
    };

    let msg = upstream_message(&data).unwrap_or(resource.rejected_msg());
    UpstreamSnafu { status, msg }.build()
}

fn upstream_message(data: &Value) -> Option<&str> {
    data.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
}
