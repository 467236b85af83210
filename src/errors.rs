use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used by every library operation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing environment variable {0}. Set it or add it to your .env file")]
    MissingCredential(&'static str),

    #[error("Authentication failed with status {status}: {body}")]
    AuthFailed { status: StatusCode, body: String },

    #[error("Access token was rejected by the Spotify API")]
    Unauthorized,

    #[error("No artist found for \"{0}\"")]
    ArtistNotFound(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Spotify API responded with status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_decode() {
            Error::MalformedResponse(err.to_string())
        } else {
            Error::Network(err)
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}
