pub mod decimal;

pub use decimal::{parse_decimal, serde_decimal, U256Ext};
