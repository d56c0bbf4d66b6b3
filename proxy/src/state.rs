use axum::extract::FromRef;
use reqwest::Client;
use snafu::ResultExt;
use std::sync::Arc;

use crate::{
    Result,
    config::Config,
    error::HttpClientSnafu,
    fallback::{FallbackProvider, create_fallback},
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: Client,
    pub fallback: Arc<dyn FallbackProvider>,
}

pub fn create_app_state(config: Config) -> Result<AppState> {
    let http = Client::builder().build().context(HttpClientSnafu {
        msg: "Unable to create HTTP client",
    })?;
    let fallback = create_fallback(config.fallback);

    Ok(AppState {
        config: Arc::new(config),
        http,
        fallback,
    })
}

#[cfg(test)]
pub fn create_test_app_state(api_url: &str, fallback: Arc<dyn FallbackProvider>) -> AppState {
    let config = Config {
        port: 43700,
        api_url: api_url.to_string(),
        fallback: true,
    };

    AppState {
        config: Arc::new(config),
        http: Client::new(),
        fallback,
    }
}
