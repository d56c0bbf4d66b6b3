use reqwest::{Client, Response, StatusCode, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::Value;
use snafu::{OptionExt, ResultExt};
use tracing::{info, warn};
use validator::Validate;

use crate::error::{
    FetchSnafu, HttpClientSnafu, HttpResponseParseSnafu, LoginRejectedSnafu, NoTokenSnafu,
    ValidationSnafu,
};
use crate::route::Route;
use crate::session::Session;
use crate::{Error, Result};
use dto::auth::{LoginRequest, LoginResponse};
use dto::inventory::{InventoryResponse, ItemDetail};
use dto::location::LocationItem;
use dto::validators::flatten_errors;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 50;

const CONNECT_MSG: &str =
    "Unable to connect to the server. Please check your network connection or try again later.";

/// Normalizes a stored token into an Authorization header value
pub fn bearer_value(token: &str) -> String {
    if token.starts_with("Bearer ") {
        token.to_string()
    } else {
        format!("Bearer {}", token)
    }
}

/// Typed access to the inventory API for the signed-in user
#[derive(Clone)]
pub struct InventoryClient {
    http: Client,
    route: Route,
    session: Session,
}

impl InventoryClient {
    pub fn new(route: Route, session: Session) -> Self {
        Self::with_http(Client::new(), route, session)
    }

    pub fn with_http(http: Client, route: Route, session: Session) -> Self {
        Self {
            http,
            route,
            session,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn fetch_items(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<InventoryResponse> {
        let url = self.route.items_url(
            page.unwrap_or(DEFAULT_PAGE),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        );
        self.get_json(url, "items").await
    }

    pub async fn fetch_item(&self, id: &str) -> Result<ItemDetail> {
        let url = self.route.item_url(id);
        self.get_json(url, "item").await
    }

    pub async fn fetch_locations(&self) -> Result<Vec<LocationItem>> {
        let url = self.route.locations_url();
        self.get_json(url, "locations").await
    }

    /// Exchanges credentials for a token bundle. Does not touch the session.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        if let Err(errors) = credentials.validate() {
            return ValidationSnafu {
                msg: flatten_errors(&errors),
            }
            .fail();
        }

        let response = self
            .http
            .post(self.route.login_url())
            .json(credentials)
            .send()
            .await
            .context(HttpClientSnafu { msg: CONNECT_MSG })?;

        if !response.status().is_success() {
            return Err(login_error(response).await);
        }

        let res = response
            .json::<LoginResponse>()
            .await
            .context(HttpResponseParseSnafu {
                msg: "Unable to parse login response.",
            })?;

        info!("Login succeeded");
        Ok(res)
    }

    pub fn logout(&self) {
        self.session.clear();
        info!("Logged out");
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String, resource: &str) -> Result<T> {
        // Read before every call, never cached
        let token = self.session.token().context(NoTokenSnafu)?;

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, bearer_value(&token))
            .send()
            .await
            .context(HttpClientSnafu {
                msg: format!("Unable to fetch {}. Try again later.", resource),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Fetching {} failed with status {}", resource, status);
            return FetchSnafu {
                resource,
                status: status.as_u16(),
                status_text: status_text(status),
            }
            .fail();
        }

        response.json::<T>().await.context(HttpResponseParseSnafu {
            msg: format!("Unable to parse {}.", resource),
        })
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(|r| r.to_string())
        .unwrap_or_else(|| status.as_str().to_string())
}

async fn login_error(response: Response) -> Error {
    let status = response.status();
    warn!("Login rejected with status {}", status);

    let body = response.json::<Value>().await.ok();
    let msg = body
        .as_ref()
        .and_then(|b| field_message(b, "error").or_else(|| field_message(b, "message")))
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("HTTP {}: Invalid credentials", status.as_u16()));

    LoginRejectedSnafu {
        status: status.as_u16(),
        msg,
    }
    .build()
}

fn field_message<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
}
