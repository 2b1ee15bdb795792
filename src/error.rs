use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure of the remote breach-range lookup or of scanning its body.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("range request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("range request timed out")]
    Timeout,

    #[error("range API returned {0}")]
    Status(reqwest::StatusCode),

    #[error("unparsable count in range line: {line}")]
    MalformedCount { line: String },
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Timeout
        } else if let Some(status) = err.status() {
            LookupError::Status(status)
        } else {
            LookupError::Request(err)
        }
    }
}

/// Failures that escape the check handler and become a 500.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("strength estimator failed: {0}")]
    Estimator(#[from] tokio::task::JoinError),
}

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl IntoResponse for CheckError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "password check aborted");
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
    }
}
