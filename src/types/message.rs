use crate::{
    types::{ChannelLeg, ChannelSnapshot, Method, PaymentChannel, ProtocolError},
    utils::serde_decimal,
};
use ethers::types::U256;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

impl Status {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Envelope: Serialize {
    const KIND: &'static str;

    fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let bytes = serde_json::to_vec(self).map_err(ProtocolError::Serialize)?;
        tracing::trace!(kind = Self::KIND, len = bytes.len(), "encoded response");
        Ok(bytes)
    }
}

// `method` and `status` are fixed per envelope type; these reject anything else.
fn fixed<'de, D, T>(deserializer: D, expected: T) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + PartialEq + fmt::Display,
{
    let value = T::deserialize(deserializer)?;
    if value == expected {
        Ok(value)
    } else {
        Err(de::Error::custom(format!("expected {}, found {}", expected, value)))
    }
}

fn status_ok<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Status, D::Error> {
    fixed(deserializer, Status::Ok)
}

fn status_error<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Status, D::Error> {
    fixed(deserializer, Status::Error)
}

fn method_get_all<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Method, D::Error> {
    fixed(deserializer, Method::GetAll)
}

fn method_open_client_to_sp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Method, D::Error> {
    fixed(deserializer, Method::OpenClientToSp)
}

fn method_balance_msg_sig<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Method, D::Error> {
    fixed(deserializer, Method::BalanceMsgSig)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OkResponse {
    #[serde(deserialize_with = "status_ok")]
    status: Status,
    pub res_method: String,
}

impl OkResponse {
    pub fn new(res_method: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            res_method: res_method.into(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

impl Envelope for OkResponse {
    const KIND: &'static str = "ok";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ErrorResponse {
    #[serde(deserialize_with = "status_error")]
    status: Status,
    pub res_method: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(res_method: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            res_method: res_method.into(),
            message: message.into(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

impl Envelope for ErrorResponse {
    const KIND: &'static str = "error";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetAllResponse {
    #[serde(deserialize_with = "method_get_all")]
    method: Method,
    #[serde(deserialize_with = "status_ok")]
    status: Status,
    pub ether_balance: String,
    pub token_balance: String,
    #[serde(with = "serde_decimal")]
    pub nonce: U256,
    pub sp_to_client: ChannelSnapshot,
    pub client_to_sp: ChannelLeg,
}

impl GetAllResponse {
    pub fn new(
        sp_to_client: &PaymentChannel,
        client_to_sp: Option<&PaymentChannel>,
        ether_balance: impl Into<String>,
        token_balance: impl Into<String>,
        nonce: U256,
    ) -> Self {
        Self {
            method: Method::GetAll,
            status: Status::Ok,
            ether_balance: ether_balance.into(),
            token_balance: token_balance.into(),
            nonce,
            sp_to_client: sp_to_client.into(),
            client_to_sp: client_to_sp.into(),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

impl Envelope for GetAllResponse {
    const KIND: &'static str = "get_all";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OpenClientToSpResponse {
    #[serde(deserialize_with = "method_open_client_to_sp")]
    method: Method,
    #[serde(deserialize_with = "status_ok")]
    status: Status,
    pub ether_balance: String,
    pub token_balance: String,
    #[serde(with = "serde_decimal")]
    pub nonce: U256,
    pub client_to_sp: ChannelSnapshot,
}

impl OpenClientToSpResponse {
    pub fn new(
        client_to_sp: &PaymentChannel,
        ether_balance: impl Into<String>,
        token_balance: impl Into<String>,
        nonce: U256,
    ) -> Self {
        Self {
            method: Method::OpenClientToSp,
            status: Status::Ok,
            ether_balance: ether_balance.into(),
            token_balance: token_balance.into(),
            nonce,
            client_to_sp: client_to_sp.into(),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

impl Envelope for OpenClientToSpResponse {
    const KIND: &'static str = "open_client_to_sp";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BalanceMsgSigResponse {
    #[serde(deserialize_with = "method_balance_msg_sig")]
    method: Method,
    #[serde(deserialize_with = "status_ok")]
    status: Status,
    #[serde(with = "serde_decimal")]
    pub new_balance: U256,
    pub balance_msg_sig: String,
}

impl BalanceMsgSigResponse {
    pub fn new(new_balance: U256, balance_msg_sig: impl Into<String>) -> Self {
        Self {
            method: Method::BalanceMsgSig,
            status: Status::Ok,
            new_balance,
            balance_msg_sig: balance_msg_sig.into(),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

impl Envelope for BalanceMsgSigResponse {
    const KIND: &'static str = "balance_msg_sig";
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Ok(OkResponse),
    Error(ErrorResponse),
    GetAll(GetAllResponse),
    OpenClientToSp(OpenClientToSpResponse),
    BalanceMsgSig(BalanceMsgSigResponse),
}

impl Response {
    pub fn status(&self) -> Status {
        match self {
            Response::Ok(r) => r.status,
            Response::Error(r) => r.status,
            Response::GetAll(r) => r.status,
            Response::OpenClientToSp(r) => r.status,
            Response::BalanceMsgSig(r) => r.status,
        }
    }

    /// `None` for the generic acknowledgements, which carry `resMethod` instead.
    pub fn method(&self) -> Option<Method> {
        match self {
            Response::Ok(_) | Response::Error(_) => None,
            Response::GetAll(r) => Some(r.method),
            Response::OpenClientToSp(r) => Some(r.method),
            Response::BalanceMsgSig(r) => Some(r.method),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        match self {
            Response::Ok(r) => r.to_bytes(),
            Response::Error(r) => r.to_bytes(),
            Response::GetAll(r) => r.to_bytes(),
            Response::OpenClientToSp(r) => r.to_bytes(),
            Response::BalanceMsgSig(r) => r.to_bytes(),
        }
    }
}
