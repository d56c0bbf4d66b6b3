use axum::http::StatusCode;
use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use snafu::{Backtrace, ErrorCompat, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Error reading config file: {}", source))]
    ConfigFile {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Error parsing config file: {}", source))]
    ConfigParse {
        source: toml::de::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Config error: {}", msg))]
    Config { msg: String },

    #[snafu(display("Unable to bind to {}: {}", addr, source))]
    Bind {
        addr: String,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Server error: {}", source))]
    Serve {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("No authorization token provided"))]
    NoAuthToken,

    /// Inbound body is not JSON, whatever its content type
    #[snafu(display("{}", msg))]
    RequestJson {
        msg: String,
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// Upstream answered with a non-2xx status
    #[snafu(display("{}", msg))]
    Upstream { status: StatusCode, msg: String },

    // Transport errors only display the fixed message, the source goes to logs
    #[snafu(display("{}", msg))]
    HttpClient {
        msg: String,
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("{}", msg))]
    HttpResponseParse {
        msg: String,
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("{}", msg))]
    ResponseJson {
        msg: String,
        source: serde_json::Error,
        backtrace: Backtrace,
    },
}

/// Allow Error to be converted to StatusCode
impl From<&Error> for StatusCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::NoAuthToken => StatusCode::UNAUTHORIZED,
            Error::RequestJson { .. } => StatusCode::BAD_REQUEST,
            Error::Upstream { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Rendered into a JSON body by the response mapper in web::routes
impl IntoResponse for Error {
    fn into_response(self) -> Response<Body> {
        let info = ErrorInfo::from(&self);

        let mut res = Response::builder()
            .status(info.status_code)
            .body(Body::empty())
            .unwrap_or_default();

        res.extensions_mut().insert(info);
        res
    }
}

#[derive(Clone, Debug)]
pub struct ErrorInfo {
    pub status_code: StatusCode,
    pub message: String,
    pub detail: Option<String>,
    pub backtrace: Option<String>,
}

impl From<&Error> for ErrorInfo {
    fn from(e: &Error) -> Self {
        let detail = std::error::Error::source(e).map(|s| format!("{}", s));
        let backtrace = ErrorCompat::backtrace(e).map(|bt| format!("{}", bt));

        Self {
            status_code: e.into(),
            message: e.to_string(),
            detail,
            backtrace,
        }
    }
}
