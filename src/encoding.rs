/// Text encodings for SnowID values
///
/// Every encoding works on the big-endian bytes of the `u64`:
/// - hex: 16 lowercase digits
/// - base32: RFC 4648 extended-hex alphabet (`0-9A-V`), unpadded, 13 characters
use once_cell::sync::Lazy;

/// Character set for base32 extended-hex encoding
const BASE32_CHARS: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";

/// Lookup table for decoding base32 characters to their values, case-insensitive
static DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut map = [-1i8; 256];
    for (i, &c) in BASE32_CHARS.iter().enumerate() {
        map[c as usize] = i as i8;
        map[c.to_ascii_lowercase() as usize] = i as i8;
    }
    map
});

/// Length of a base32 encoded u64 (64 bits padded to 65)
pub const BASE32_LEN: usize = 13;

/// Length of a hex encoded u64
pub const HEX_LEN: usize = 16;

/// Encode into a caller-provided buffer, returning the upper-case text
#[inline]
pub fn base32_encode_into(id: u64, buf: &mut [u8; BASE32_LEN]) -> &str {
    // one zero bit pads 64 bits to 13 groups of 5
    let bits = (id as u128) << 1;
    for (i, slot) in buf.iter_mut().enumerate() {
        let shift = 5 * (BASE32_LEN - 1 - i);
        *slot = BASE32_CHARS[((bits >> shift) & 0x1f) as usize];
    }
    // every byte comes from BASE32_CHARS
    std::str::from_utf8(buf).unwrap_or_default()
}

/// Encode a u64 to upper-case base32 extended-hex
pub fn base32_encode(id: u64) -> String {
    let mut buf = [0u8; BASE32_LEN];
    base32_encode_into(id, &mut buf).to_string()
}

/// Encode a u64 to lower-case base32 extended-hex
pub fn base32_encode_lower(id: u64) -> String {
    let mut buf = [0u8; BASE32_LEN];
    base32_encode_into(id, &mut buf).to_ascii_lowercase()
}

/// Decode base32 extended-hex text, in either case, to a u64
pub fn base32_decode(encoded: &str) -> Result<u64, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::EmptyString);
    }
    if encoded.len() != BASE32_LEN {
        return Err(DecodeError::InvalidLength {
            expected: BASE32_LEN,
            actual: encoded.len(),
        });
    }

    let mut bits: u128 = 0;
    for &c in encoded.as_bytes() {
        let value = DECODE_MAP[c as usize];
        if value == -1 {
            return Err(DecodeError::InvalidCharacter(c as char));
        }
        bits = (bits << 5) | value as u128;
    }

    // the padding bit must be zero, so each value has exactly one spelling
    if bits & 1 != 0 {
        let last = encoded.as_bytes()[BASE32_LEN - 1];
        return Err(DecodeError::InvalidCharacter(last as char));
    }
    Ok((bits >> 1) as u64)
}

/// Encode a u64 as 16 lowercase hex digits
pub fn hex_encode(id: u64) -> String {
    format!("{id:016x}")
}

/// Decode 16 hex digits, in either case, to a u64
pub fn hex_decode(encoded: &str) -> Result<u64, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::EmptyString);
    }
    if encoded.len() != HEX_LEN {
        return Err(DecodeError::InvalidLength {
            expected: HEX_LEN,
            actual: encoded.len(),
        });
    }
    if let Some(c) = encoded.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(DecodeError::InvalidCharacter(c));
    }
    u64::from_str_radix(encoded, 16).map_err(|_| DecodeError::Overflow)
}

/// Decode decimal text to a u64
pub fn decimal_decode(encoded: &str) -> Result<u64, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::EmptyString);
    }
    if let Some(c) = encoded.chars().find(|c| !c.is_ascii_digit()) {
        return Err(DecodeError::InvalidCharacter(c));
    }
    encoded.parse::<u64>().map_err(|_| DecodeError::Overflow)
}

/// Errors that can occur while decoding SnowID text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input string is empty
    #[error("Cannot decode an empty string")]
    EmptyString,

    /// The input string has the wrong number of characters
    #[error("Expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The input string contains an invalid character
    #[error("Invalid character: {0}")]
    InvalidCharacter(char),

    /// The decoded value would overflow a u64
    #[error("Decoded value would overflow u64")]
    Overflow,
}
