use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Failed to serialize response: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to parse response: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error("Unknown method identifier: {0}")]
    UnknownMethod(String),
    #[error("Unknown response status: {0}")]
    UnknownStatus(String),
    #[error("Invalid decimal integer: {0:?}")]
    InvalidDecimal(String),
    #[error("Missing field: {0}")]
    MissingField(&'static str),
}

impl From<&ProtocolError> for StatusCode {
    fn from(error: &ProtocolError) -> Self {
        match error {
            ProtocolError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Everything else comes from decoding a payload some peer produced.
            ProtocolError::Deserialize(_)
            | ProtocolError::UnknownMethod(_)
            | ProtocolError::UnknownStatus(_)
            | ProtocolError::InvalidDecimal(_)
            | ProtocolError::MissingField(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProtocolError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "failed to produce response payload");
        (StatusCode::from(&self), self.to_string()).into_response()
    }
}
