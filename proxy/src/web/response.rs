use axum::{
    body::{Body, Bytes},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use snafu::ResultExt;

use crate::Result;
use crate::error::ResponseJsonSnafu;

/// A JSON body that is written out as-is
pub struct JsonResponse {
    status: StatusCode,
    body: Bytes,
}

impl JsonResponse {
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    pub fn with_status(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn from_value<T: Serialize>(value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value).context(ResponseJsonSnafu {
            msg: "Unable to serialize response",
        })?;
        Ok(Self::new(body))
    }
}

impl IntoResponse for JsonResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Body::from(self.body),
        )
            .into_response()
    }
}
