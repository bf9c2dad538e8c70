use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const ADDRESS_LEN: usize = 20;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; ADDRESS_LEN]);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must be {expected} hex bytes, got {actual} characters")]
    Length { expected: usize, actual: usize },
    #[error("invalid hex digit in address: {0}")]
    Hex(String),
}

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    // sha256(address || key), first 20 bytes
    pub fn derive(&self, key: &str) -> Address {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(key.as_bytes());
        let hash = hasher.finalize();
        let mut out = [0u8; ADDRESS_LEN];
        out.copy_from_slice(&hash[..ADDRESS_LEN]);
        Address(out)
    }

    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(2 + ADDRESS_LEN * 2);
        out.push_str("0x");
        for byte in self.0 {
            out.push_str(&format!("{byte:02x}"));
        }
        out
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let raw = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
            .unwrap_or(value);
        if raw.len() != ADDRESS_LEN * 2 {
            return Err(AddressError::Length {
                expected: ADDRESS_LEN,
                actual: raw.len(),
            });
        }
        let mut out = [0u8; ADDRESS_LEN];
        for (byte, pair) in out.iter_mut().zip(raw.as_bytes().chunks(2)) {
            let high = nibble(pair[0]).ok_or_else(|| hex_error(pair))?;
            let low = nibble(pair[1]).ok_or_else(|| hex_error(pair))?;
            *byte = (high << 4) | low;
        }
        Ok(Address(out))
    }
}

fn nibble(digit: u8) -> Option<u8> {
    char::from(digit).to_digit(16).map(|value| value as u8)
}

fn hex_error(pair: &[u8]) -> AddressError {
    AddressError::Hex(String::from_utf8_lossy(pair).into_owned())
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_accepts_missing_prefix() {
        let addr = Address::new([0xab; ADDRESS_LEN]);
        let hex = addr.to_hex();
        assert!(hex.starts_with("0x"));
        assert_eq!(hex.parse::<Address>(), Ok(addr));
        assert_eq!(hex.trim_start_matches("0x").parse::<Address>(), Ok(addr));
    }

    #[test]
    fn rejects_short_and_non_hex_input() {
        assert!(matches!(
            "0x1234".parse::<Address>(),
            Err(AddressError::Length { .. })
        ));
        let bad = format!("0x{}", "zz".repeat(ADDRESS_LEN));
        assert!(matches!(bad.parse::<Address>(), Err(AddressError::Hex(_))));
    }

    #[test]
    fn multibyte_and_signed_input_is_an_error_not_a_panic() {
        let wide = format!("0\u{e9}{}", "0".repeat(37));
        assert_eq!(wide.len(), ADDRESS_LEN * 2);
        assert!(matches!(wide.parse::<Address>(), Err(AddressError::Hex(_))));

        let signed = format!("+f{}", "00".repeat(ADDRESS_LEN - 1));
        assert!(matches!(signed.parse::<Address>(), Err(AddressError::Hex(_))));

        let json = format!("\"{wide}\"");
        assert!(serde_json::from_str::<Address>(&json).is_err());
    }

    #[test]
    fn derive_is_stable_and_key_sensitive() {
        let base = Address::new([7; ADDRESS_LEN]);
        assert_eq!(base.derive("rune_1"), base.derive("rune_1"));
        assert_ne!(base.derive("rune_1"), base.derive("rune_2"));
        assert_ne!(base.derive("rune_1"), base);
    }
}
