use crate::types::{Envelope, ProtocolError, Response as WireResponse};
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

// Protocol errors are `"error"` envelopes and still go out as 200.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedResponse(pub Vec<u8>);

impl EncodedResponse {
    pub fn from_envelope<E: Envelope>(envelope: &E) -> Result<Self, ProtocolError> {
        envelope.to_bytes().map(Self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for EncodedResponse {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&WireResponse> for EncodedResponse {
    type Error = ProtocolError;

    fn try_from(response: &WireResponse) -> Result<Self, Self::Error> {
        response.to_bytes().map(Self)
    }
}

impl IntoResponse for EncodedResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            self.0,
        )
            .into_response()
    }
}
