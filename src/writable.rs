//! Growable, writable byte buffers.

use serde::{Deserialize, Serialize};

use crate::buffer::{ByteBuffer, ByteConstruct, ByteView, slice_clamped};
use crate::endian::{self, ByteOrder, Endianness};
use crate::envelope::Envelope;
use crate::error::Result;
use crate::uint::{self, Uint64Value};

/// A byte buffer that can be appended to, prepended to and flushed.
///
/// Writers chain:
///
/// ```rust
/// use octet_buffer::{ByteOrder, ByteView, WritableBuffer};
///
/// let mut buf = WritableBuffer::new();
/// buf.append_u8(1)?
///     .append_u16(0x0203, ByteOrder::BigEndian)?
///     .append(b"\x04");
/// assert_eq!(buf.as_bytes(), [1, 2, 3, 4]);
/// # Ok::<(), octet_buffer::Error>(())
/// ```
///
/// [`WritableBuffer::freeze`] turns it into an immutable [`ByteBuffer`];
/// there is no way back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Envelope", try_from = "Envelope")]
pub struct WritableBuffer {
    data: Vec<u8>,
}

impl WritableBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Append raw bytes or any buffer. Empty input is a no-op.
    pub fn append(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
        self.data.extend_from_slice(bytes.as_ref());
        self
    }

    /// Prepend raw bytes or any buffer. Empty input is a no-op.
    pub fn prepend(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
        let bytes = bytes.as_ref();
        if !bytes.is_empty() {
            self.data.splice(0..0, bytes.iter().copied());
        }
        self
    }

    pub fn append_u8(&mut self, value: i64) -> Result<&mut Self> {
        let packed = uint::pack_u8(value)?;
        Ok(self.append(packed))
    }

    pub fn append_u16(&mut self, value: i64, order: ByteOrder) -> Result<&mut Self> {
        let packed = uint::pack_u16(value, order, Endianness::process())?;
        Ok(self.append(packed))
    }

    pub fn append_u32(&mut self, value: i64, order: ByteOrder) -> Result<&mut Self> {
        let packed = uint::pack_u32(value, order, Endianness::process())?;
        Ok(self.append(packed))
    }

    /// Append an 8-byte unsigned value given natively or as decimal text.
    pub fn append_u64(
        &mut self,
        value: impl Into<Uint64Value>,
        order: ByteOrder,
    ) -> Result<&mut Self> {
        let packed = uint::pack_u64(&value.into(), order, Endianness::process())?;
        Ok(self.append(packed))
    }

    /// Drop every byte.
    pub fn flush(&mut self) -> &mut Self {
        self.data.clear();
        self
    }

    pub fn freeze(self) -> ByteBuffer {
        ByteBuffer::from(self.data)
    }

    /// A new writable buffer holding `length` bytes from `start`; both
    /// default to the whole buffer and are clamped to its bounds.
    pub fn copy(&self, start: Option<usize>, length: Option<usize>) -> Self {
        Self {
            data: slice_clamped(&self.data, start, length).to_vec(),
        }
    }

    pub fn switch_endianness(&self) -> Self {
        Self {
            data: endian::swap_endianness(&self.data),
        }
    }

    pub fn transform(&self, f: fn(&[u8]) -> Vec<u8>) -> Self {
        Self { data: f(&self.data) }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl ByteView for WritableBuffer {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl ByteConstruct for WritableBuffer {
    fn from_vec(bytes: Vec<u8>) -> Result<Self> {
        Ok(Self { data: bytes })
    }
}

impl From<Vec<u8>> for WritableBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for WritableBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
        }
    }
}

impl AsRef<[u8]> for WritableBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
