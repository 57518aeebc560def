//! Text and array encodings of raw bytes.
//!
//! | Encoding     | Decoding rules |
//! |--------------|----------------|
//! | base16 (hex) | case-insensitive, optional `0x`, odd length left-padded with `0` |
//! | base64       | standard alphabet with padding, strict |
//! | bit-strings  | each element 1–8 binary digits, one byte per element |
//! | byte array   | each element within `0..=255` |

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};

/// Strip an optional `0x` prefix and even out an odd number of hexits.
pub(crate) fn normalize_hex(hex: &str) -> Result<String> {
    if hex.is_empty() {
        return Ok(String::new());
    }

    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::encoding("base16", "expected hexadecimal string"));
    }

    let mut normalized = String::with_capacity(digits.len() + 1);
    if digits.len() % 2 != 0 {
        normalized.push('0');
    }
    normalized.push_str(digits);
    Ok(normalized)
}

pub fn decode_hex(hex: &str) -> Result<Vec<u8>> {
    let normalized = normalize_hex(hex)?;
    hex::decode(normalized).map_err(|e| Error::encoding("base16", e.to_string()))
}

/// Lowercase hexits, two per byte, optionally `0x`-prefixed.
pub fn encode_hex(bytes: &[u8], prefix: bool) -> String {
    let hexits = hex::encode(bytes);
    if prefix { format!("0x{hexits}") } else { hexits }
}

pub fn decode_base64(b64: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(b64)
        .map_err(|e| Error::encoding("base64", e.to_string()))
}

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode one byte per bit-string element.
pub fn decode_binary<S: AsRef<str>>(elements: &[S]) -> Result<Vec<u8>> {
    if elements.is_empty() {
        return Err(Error::encoding("binary", "expected at least one element"));
    }

    elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let bits = element.as_ref();
            if bits.is_empty() || bits.len() > 8 || !bits.bytes().all(|b| b == b'0' || b == b'1')
            {
                return Err(Error::encoding(
                    "binary",
                    format!("element {i} is not 1 to 8 binary digits"),
                ));
            }
            u8::from_str_radix(bits, 2).map_err(|e| Error::encoding("binary", e.to_string()))
        })
        .collect()
}

/// Render each byte as binary digits, optionally zero-padded to 8.
pub fn encode_binary(bytes: &[u8], padded: bool) -> Vec<String> {
    bytes
        .iter()
        .map(|b| {
            if padded {
                format!("{b:08b}")
            } else {
                format!("{b:b}")
            }
        })
        .collect()
}

/// Accept integers of any width as long as each one is a byte value.
pub fn decode_byte_array<T: Copy + Into<i64>>(values: &[T]) -> Result<Vec<u8>> {
    values
        .iter()
        .enumerate()
        .map(|(index, v)| {
            let value: i64 = (*v).into();
            u8::try_from(value).map_err(|_| Error::InvalidByteValue { index, value })
        })
        .collect()
}
