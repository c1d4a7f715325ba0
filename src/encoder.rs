//! SuperPeer -> Client response payloads.
//!
//! Every function is pure: it builds a fresh envelope from its arguments and
//! returns the UTF-8 JSON bytes. Big integers always go out as decimal strings.

use crate::types::{
    BalanceMsgSigResponse, Envelope, ErrorResponse, GetAllResponse, OkResponse,
    OpenClientToSpResponse, PaymentChannel, ProtocolError,
};
use ethers::types::U256;

pub fn encode_ok(res_method: &str) -> Result<Vec<u8>, ProtocolError> {
    OkResponse::new(res_method).to_bytes()
}

pub fn encode_error(res_method: &str, message: &str) -> Result<Vec<u8>, ProtocolError> {
    tracing::debug!(res_method, reason = message, "sending error response");
    ErrorResponse::new(res_method, message).to_bytes()
}

/// Full channel-state snapshot. `client_to_sp` is `None` until the Client
/// opens its channel, in which case `clientToSp` is sent as `"none"`.
pub fn encode_get_all(
    sp_to_client: &PaymentChannel,
    client_to_sp: Option<&PaymentChannel>,
    ether_balance: &str,
    token_balance: &str,
    nonce: U256,
) -> Result<Vec<u8>, ProtocolError> {
    GetAllResponse::new(sp_to_client, client_to_sp, ether_balance, token_balance, nonce).to_bytes()
}

pub fn encode_open_client_to_sp(
    client_to_sp: &PaymentChannel,
    ether_balance: &str,
    token_balance: &str,
    nonce: U256,
) -> Result<Vec<u8>, ProtocolError> {
    OpenClientToSpResponse::new(client_to_sp, ether_balance, token_balance, nonce).to_bytes()
}

pub fn encode_balance_msg_sig(
    new_balance: U256,
    balance_msg_sig: &str,
) -> Result<Vec<u8>, ProtocolError> {
    BalanceMsgSigResponse::new(new_balance, balance_msg_sig).to_bytes()
}
