//! Client-side parsing of SuperPeer response payloads.

use crate::types::{Method, ProtocolError, Response};
use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};

/// Parses one response payload.
///
/// A `method` key selects the typed response; without one, `status` picks
/// between the generic ok and error acknowledgements.
pub fn decode(payload: &[u8]) -> Result<Response, ProtocolError> {
    let value: Value = serde_json::from_slice(payload).map_err(ProtocolError::Deserialize)?;
    let Value::Object(object) = value else {
        return Err(ProtocolError::Deserialize(serde_json::Error::custom(
            "response is not a JSON object",
        )));
    };

    let response = match object.get("method") {
        Some(method) => {
            let method = match method {
                Value::String(method) => method.parse::<Method>()?,
                other => return Err(ProtocolError::UnknownMethod(other.to_string())),
            };
            // Method-carrying responses are only ever sent with status "ok".
            let status = status_of(&object)?;
            if status != "ok" {
                return Err(ProtocolError::UnknownStatus(status.to_owned()));
            }
            match method {
                Method::GetAll => Response::GetAll(from_object(object)?),
                Method::OpenClientToSp => Response::OpenClientToSp(from_object(object)?),
                Method::BalanceMsgSig => Response::BalanceMsgSig(from_object(object)?),
            }
        }
        None => match status_of(&object)? {
            "ok" => Response::Ok(from_object(object)?),
            "error" => Response::Error(from_object(object)?),
            other => return Err(ProtocolError::UnknownStatus(other.to_owned())),
        },
    };

    tracing::trace!(method = ?response.method(), status = ?response.status(), "decoded response");
    Ok(response)
}

fn status_of(object: &Map<String, Value>) -> Result<&str, ProtocolError> {
    object
        .get("status")
        .and_then(Value::as_str)
        .ok_or(ProtocolError::MissingField("status"))
}

fn from_object<T: DeserializeOwned>(object: Map<String, Value>) -> Result<T, ProtocolError> {
    serde_json::from_value(Value::Object(object)).map_err(ProtocolError::Deserialize)
}
