use crate::utils::serde_decimal;
use ethers::types::U256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub const NO_CHANNEL: &str = "none";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentChannel {
    pub sender_address: String,
    pub recv_address: String,
    #[serde(with = "serde_decimal")]
    pub init_deposit: U256,
    #[serde(with = "serde_decimal")]
    pub open_block_num: U256,
    #[serde(with = "serde_decimal")]
    pub recv_balance: U256,
    pub last_recv_balance_msg_sig: String,
}

impl PaymentChannel {
    pub fn new(
        sender_address: impl Into<String>,
        recv_address: impl Into<String>,
        init_deposit: U256,
        open_block_num: U256,
    ) -> Self {
        Self {
            sender_address: sender_address.into(),
            recv_address: recv_address.into(),
            init_deposit,
            open_block_num,
            recv_balance: U256::zero(),
            last_recv_balance_msg_sig: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChannelSnapshot {
    pub sender: String,
    pub recv: String,
    #[serde(with = "serde_decimal")]
    pub init_deposit: U256,
    #[serde(with = "serde_decimal")]
    pub open_block_num: U256,
    #[serde(with = "serde_decimal")]
    pub recv_balance: U256,
    pub last_recv_balance_msg_sig: String,
}

impl From<&PaymentChannel> for ChannelSnapshot {
    fn from(channel: &PaymentChannel) -> Self {
        Self {
            sender: channel.sender_address.clone(),
            recv: channel.recv_address.clone(),
            init_deposit: channel.init_deposit,
            open_block_num: channel.open_block_num,
            recv_balance: channel.recv_balance,
            last_recv_balance_msg_sig: channel.last_recv_balance_msg_sig.clone(),
        }
    }
}

/// `"none"` on the wire when absent, never `null` or `{}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelLeg {
    Absent,
    Open(ChannelSnapshot),
}

impl ChannelLeg {
    pub fn as_open(&self) -> Option<&ChannelSnapshot> {
        match self {
            ChannelLeg::Absent => None,
            ChannelLeg::Open(snapshot) => Some(snapshot),
        }
    }
}

impl From<Option<&PaymentChannel>> for ChannelLeg {
    fn from(channel: Option<&PaymentChannel>) -> Self {
        match channel {
            Some(channel) => ChannelLeg::Open(channel.into()),
            None => ChannelLeg::Absent,
        }
    }
}

impl Serialize for ChannelLeg {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ChannelLeg::Absent => serializer.serialize_str(NO_CHANNEL),
            ChannelLeg::Open(snapshot) => snapshot.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ChannelLeg {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Variant order matters: the sentinel string is tried before the mapping.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Sentinel(String),
            Open(ChannelSnapshot),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Sentinel(s) if s == NO_CHANNEL => Ok(ChannelLeg::Absent),
            Repr::Sentinel(s) => Err(de::Error::invalid_value(
                de::Unexpected::Str(&s),
                &"\"none\" or a channel mapping",
            )),
            Repr::Open(snapshot) => Ok(ChannelLeg::Open(snapshot)),
        }
    }
}
