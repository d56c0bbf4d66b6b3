use axum::{
    body::Body,
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::{Result, error::NoAuthTokenSnafu};

/// Caller's Authorization header, forwarded upstream untouched
#[derive(Clone, Debug)]
pub struct AuthHeader(pub HeaderValue);

pub async fn require_token_middleware(mut request: Request, next: Next) -> Result<Response<Body>> {
    let auth = request
        .headers()
        .get(header::AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .cloned();

    let Some(auth) = auth else {
        warn!("Rejected {} without authorization header", request.uri().path());
        return NoAuthTokenSnafu.fail();
    };

    // Forward to the handler passing the header
    request.extensions_mut().insert(AuthHeader(auth));
    Ok(next.run(request).await)
}
