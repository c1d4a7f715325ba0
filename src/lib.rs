//! Wire responses a SuperPeer sends to Clients of its payment channels.
//!
//! Each response is one JSON object. Big integers (deposits, balances, block
//! numbers, nonces) travel as base-10 strings so no receiver has to squeeze
//! wei amounts into a machine word.

pub mod decoder;
pub mod encoder;
pub mod handlers;
pub mod types;
pub mod utils;

pub use decoder::decode;
pub use encoder::{
    encode_balance_msg_sig, encode_error, encode_get_all, encode_ok, encode_open_client_to_sp,
};
pub use handlers::EncodedResponse;
pub use types::{ChannelLeg, ChannelSnapshot, Method, PaymentChannel, ProtocolError, Response};
