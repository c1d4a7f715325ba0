pub mod response;

pub use response::EncodedResponse;
