use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("No authentication token found"))]
    NoToken,

    #[snafu(display("{}", msg))]
    Validation { msg: String },

    #[snafu(display("{}", msg))]
    HttpClient { msg: String, source: reqwest::Error },

    #[snafu(display("{}", msg))]
    HttpResponseParse { msg: String, source: reqwest::Error },

    #[snafu(display("Failed to fetch {}: {}", resource, status_text))]
    Fetch {
        resource: String,
        status: u16,
        status_text: String,
    },

    #[snafu(display("{}", msg))]
    LoginRejected { status: u16, msg: String },
}
