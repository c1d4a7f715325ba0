pub mod channel;
pub mod error;
pub mod message;
pub mod method;

pub use channel::{ChannelLeg, ChannelSnapshot, PaymentChannel, NO_CHANNEL};
pub use error::ProtocolError;
pub use message::{
    BalanceMsgSigResponse, Envelope, ErrorResponse, GetAllResponse, OkResponse,
    OpenClientToSpResponse, Response, Status,
};
pub use method::Method;
