//! Immutable byte buffers and the traits shared by every buffer type.
//!
//! [`ByteView`] gives read access and the text encodings to anything that
//! can lend out a byte slice; [`ByteConstruct`] gives every buffer type the
//! same family of decoding constructors. Mutation lives on
//! [`WritableBuffer`](crate::WritableBuffer) and
//! [`FixedBuffer`](crate::FixedBuffer) only.

use serde::{Deserialize, Serialize};

use crate::cursor::ByteCursor;
use crate::digest::HashProvider;
use crate::encoding;
use crate::endian;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::integer::BigInteger;

// ── Traits ────────────────────────────────────────────────────────────────

/// Read access to a contiguous run of bytes.
pub trait ByteView {
    /// Borrow the raw bytes.
    fn as_bytes(&self) -> &[u8];

    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Lowercase hex, two hexits per byte, optionally `0x`-prefixed.
    fn to_base16(&self, prefix: bool) -> String {
        encoding::encode_hex(self.as_bytes(), prefix)
    }

    fn to_base64(&self) -> String {
        encoding::encode_base64(self.as_bytes())
    }

    /// One bit-string per byte, optionally zero-padded to 8 digits.
    fn to_binary(&self, padded: bool) -> Vec<String> {
        encoding::encode_binary(self.as_bytes(), padded)
    }

    fn byte_array(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Same length and same bytes.
    fn equals<B: ByteView + ?Sized>(&self, other: &B) -> bool {
        let (a, b) = (self.as_bytes(), other.as_bytes());
        a.len() == b.len() && a == b
    }

    /// True when every buffer in `others` equals this one. An empty list
    /// is trivially equal.
    ///
    /// Buffers of different types compare through their byte slices:
    /// `a.equals_all(&[b.as_bytes(), c.as_bytes()])`.
    fn equals_all<B: ByteView + ?Sized>(&self, others: &[&B]) -> bool {
        others.iter().all(|other| self.equals(*other))
    }

    /// Start a sequential reader over these bytes.
    fn cursor(&self) -> ByteCursor<'_> {
        ByteCursor::new(self.as_bytes())
    }

    /// Interpret the bytes as a big-endian unsigned integer.
    fn to_big_integer(&self) -> BigInteger {
        BigInteger::from_buffer(self.as_bytes())
    }

    /// Hash the bytes with an external provider, wrapping the digest.
    fn digest<H: HashProvider>(
        &self,
        provider: &H,
        algorithm: &str,
    ) -> std::result::Result<ByteBuffer, H::Error> {
        self.digest_raw(provider, algorithm).map(ByteBuffer::from)
    }

    /// Hash the bytes with an external provider, returning the raw digest.
    fn digest_raw<H: HashProvider>(
        &self,
        provider: &H,
        algorithm: &str,
    ) -> std::result::Result<Vec<u8>, H::Error> {
        provider.digest(algorithm, self.as_bytes())
    }
}

impl ByteView for [u8] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

/// Decoding constructors shared by every buffer type.
///
/// Implementors only provide [`ByteConstruct::from_vec`], which is where a
/// type enforces its own invariants (a fixed length, for instance).
pub trait ByteConstruct: Sized {
    fn from_vec(bytes: Vec<u8>) -> Result<Self>;

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_vec(bytes.to_vec())
    }

    /// Case-insensitive hex with optional `0x`; odd lengths gain a leading
    /// zero hexit.
    fn from_base16(hex: &str) -> Result<Self> {
        Self::from_vec(encoding::decode_hex(hex)?)
    }

    fn from_base64(b64: &str) -> Result<Self> {
        Self::from_vec(encoding::decode_base64(b64)?)
    }

    /// One byte per element, each element 1–8 binary digits.
    fn from_binary<S: AsRef<str>>(elements: &[S]) -> Result<Self> {
        Self::from_vec(encoding::decode_binary(elements)?)
    }

    fn from_byte_array<T: Copy + Into<i64>>(values: &[T]) -> Result<Self> {
        Self::from_vec(encoding::decode_byte_array(values)?)
    }
}

/// Clamp `start`/`length` to `bytes` the way a substring would.
pub(crate) fn slice_clamped(bytes: &[u8], start: Option<usize>, length: Option<usize>) -> &[u8] {
    let start = start.unwrap_or(0).min(bytes.len());
    let end = match length {
        Some(length) => start.saturating_add(length).min(bytes.len()),
        None => bytes.len(),
    };
    &bytes[start..end]
}

// ── ByteBuffer ────────────────────────────────────────────────────────────

/// An owned, immutable run of bytes.
///
/// Serializes through an [`Envelope`] flagged read-only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Envelope", try_from = "Envelope")]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new buffer holding `length` bytes from `start`; both default to the
    /// whole buffer and are clamped to its bounds.
    pub fn copy(&self, start: Option<usize>, length: Option<usize>) -> Self {
        Self::from(slice_clamped(&self.data, start, length))
    }

    /// A new buffer with the byte order reversed.
    pub fn switch_endianness(&self) -> Self {
        Self {
            data: endian::swap_endianness(&self.data),
        }
    }

    /// A new buffer holding `f` applied to these bytes.
    pub fn transform(&self, f: fn(&[u8]) -> Vec<u8>) -> Self {
        Self { data: f(&self.data) }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl ByteView for ByteBuffer {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl ByteConstruct for ByteBuffer {
    fn from_vec(bytes: Vec<u8>) -> Result<Self> {
        Ok(Self { data: bytes })
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
        }
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
