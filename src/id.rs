//! The identifier value
//!
//! A [`SnowID`] is an opaque `u64`. Its fields can only be read back through
//! the [`Layout`] of the allocator that minted it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::encoding::{
    base32_decode, base32_encode, base32_encode_lower, decimal_decode, hex_decode, hex_encode,
    DecodeError,
};
use crate::layout::Layout;

/// A 64-bit identifier minted by a [`SnowNode`](crate::SnowNode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SnowID(u64);

impl SnowID {
    #[inline(always)]
    pub const fn from_u64(raw: u64) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Big-endian bytes
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }

    /// Milliseconds since the layout epoch
    #[inline]
    pub const fn timestamp(self, layout: &Layout) -> u64 {
        layout.decode_timestamp(self)
    }

    /// Instant the ID was minted at
    pub fn time(self, layout: &Layout) -> DateTime<Utc> {
        layout.decode_time(self)
    }

    #[inline]
    pub const fn is_global(self, layout: &Layout) -> bool {
        layout.decode_global_flag(self)
    }

    #[inline]
    pub const fn node(self, layout: &Layout) -> u64 {
        layout.decode_node(self)
    }

    #[inline]
    pub const fn step(self, layout: &Layout) -> u64 {
        layout.decode_step(self)
    }

    pub fn to_hex(self) -> String {
        hex_encode(self.0)
    }

    pub fn from_hex(encoded: &str) -> Result<Self, DecodeError> {
        hex_decode(encoded).map(Self)
    }

    /// Upper-case, unpadded base32 using the extended-hex alphabet
    pub fn to_base32(self) -> String {
        base32_encode(self.0)
    }

    pub fn to_base32_lower(self) -> String {
        base32_encode_lower(self.0)
    }

    /// Accepts either case. The last character must leave the padding bit
    /// clear, so text not produced by [`SnowID::to_base32`] is rejected.
    pub fn from_base32(encoded: &str) -> Result<Self, DecodeError> {
        base32_decode(encoded).map(Self)
    }
}

impl fmt::Display for SnowID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SnowID {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decimal_decode(s).map(Self)
    }
}

impl From<u64> for SnowID {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<SnowID> for u64 {
    fn from(id: SnowID) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_forms() {
        let id = SnowID::from_u64(0x0123456789abcdef);
        assert_eq!(id.to_string(), "81985529216486895");
        assert_eq!(id.to_hex(), "0123456789abcdef");
        assert_eq!(id.to_base32(), "04HKAPS9LF6UU");
        assert_eq!(id.to_base32_lower(), "04hkaps9lf6uu");
    }

    #[test]
    fn test_parse_forms() {
        let id = SnowID::from_u64(0x0123456789abcdef);
        assert_eq!("81985529216486895".parse::<SnowID>(), Ok(id));
        assert_eq!(SnowID::from_hex("0123456789abcdef"), Ok(id));
        assert_eq!(SnowID::from_base32("04hkaps9lf6uu"), Ok(id));
        assert!("".parse::<SnowID>().is_err());
    }

    #[test]
    fn test_be_bytes() {
        let id = SnowID::from_u64(0x0102030405060708);
        assert_eq!(id.to_be_bytes(), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(SnowID::from_be_bytes(id.to_be_bytes()), id);
    }

    #[test]
    fn test_decode_minted_elsewhere() {
        // node 1, global flag, 2019-01-01 epoch, 6 node bits
        let id = SnowID::from_base32("110pe9oak2004").unwrap();
        let layout = Layout::default();

        assert_eq!(id.as_u64(), 594922819727425538);
        assert_eq!(id.timestamp(&layout), 141840653354);
        assert!(id.is_global(&layout));
        assert_eq!(id.node(&layout), 1);
        assert_eq!(id.step(&layout), 2);
        assert_eq!(
            id.time(&layout).to_rfc3339(),
            "2023-06-30T16:10:53.354+00:00"
        );
    }

    #[test]
    fn test_ordering_follows_raw_value() {
        let a = SnowID::from(1u64);
        let b = SnowID::from(2u64);
        assert!(a < b);
        assert_eq!(u64::from(b), 2);
    }
}
