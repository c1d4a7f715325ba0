use crate::types::ProtocolError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// Shared with request dispatch, which correlates replies by these strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "GET_ALL")]
    GetAll,
    #[serde(rename = "OPEN_CLIENT_TO_SP")]
    OpenClientToSp,
    #[serde(rename = "BALANCE_MSG_SIG")]
    BalanceMsgSig,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::GetAll, Method::OpenClientToSp, Method::BalanceMsgSig];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::GetAll => "GET_ALL",
            Method::OpenClientToSp => "OPEN_CLIENT_TO_SP",
            Method::BalanceMsgSig => "BALANCE_MSG_SIG",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| ProtocolError::UnknownMethod(s.to_owned()))
    }
}
