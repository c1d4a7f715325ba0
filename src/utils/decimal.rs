use crate::types::ProtocolError;
use ethers::types::U256;

// U256's own serde impl emits 0x hex.
pub trait U256Ext {
    fn to_decimal_string(&self) -> String;
}

impl U256Ext for U256 {
    fn to_decimal_string(&self) -> String {
        // Display on U256 is plain base-10: no sign, separators or padding.
        self.to_string()
    }
}

/// ASCII digits only, no leading zeros unless the value is exactly `"0"`.
pub fn parse_decimal(value: &str) -> Result<U256, ProtocolError> {
    let invalid = || ProtocolError::InvalidDecimal(value.to_owned());

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if value.len() > 1 && value.starts_with('0') {
        return Err(invalid());
    }

    U256::from_dec_str(value).map_err(|_| invalid())
}

pub mod serde_decimal {
    use super::{parse_decimal, U256Ext};
    use ethers::types::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_decimal_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_decimal(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_plain_decimal() {
        assert_eq!(U256::zero().to_decimal_string(), "0");
        assert_eq!(U256::from(1000u64).to_decimal_string(), "1000");
        assert_eq!(
            U256::from(2_000_000_000_000_000_000u64).to_decimal_string(),
            "2000000000000000000"
        );
    }

    #[test]
    fn test_values_beyond_i64_round_trip() {
        // 2^63 and 2^200 both exceed a signed machine word.
        let values = [
            U256::from(1u64) << 63,
            U256::from(u64::MAX) + U256::one(),
            U256::from(1u64) << 200,
            U256::MAX,
        ];

        for value in values {
            let rendered = value.to_decimal_string();
            assert!(rendered.bytes().all(|b| b.is_ascii_digit()));
            assert!(!rendered.starts_with('0'));
            assert_eq!(parse_decimal(&rendered).unwrap(), value);
        }

        assert_eq!(
            (U256::from(1u64) << 63).to_decimal_string(),
            "9223372036854775808"
        );
    }

    #[test]
    fn test_rejects_non_canonical_input() {
        for input in ["", "-1", "+1", "007", "1,000", " 1", "1 ", "0x10", "1e3", "١٢"] {
            assert!(
                matches!(parse_decimal(input), Err(ProtocolError::InvalidDecimal(_))),
                "{:?} should be rejected",
                input
            );
        }
        assert_eq!(parse_decimal("0").unwrap(), U256::zero());
    }

    #[test]
    fn test_rejects_overflow() {
        let too_big = format!("{}0", U256::MAX);
        assert!(parse_decimal(&too_big).is_err());
    }
}
