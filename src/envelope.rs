//! Persistence envelope for buffers.
//!
//! An [`Envelope`] records whether the buffer was writable, how many bytes it
//! held, and those bytes as base64. Reinstating a buffer checks the payload
//! against the declared length, so a truncated or padded payload fails
//! instead of producing a silently different buffer.
//!
//! The envelope derives serde's traits and can go through any serde format.
//! It also has a compact binary form:
//!
//! ```text
//! +------+------------------+----------------+-----------------+
//! | flag | len (u64, BE)    | n (u32, BE)    | payload (n)     |
//! +------+------------------+----------------+-----------------+
//!   1 B         8 B               4 B          base64 ASCII
//! ```

use serde::{Deserialize, Serialize};

use crate::buffer::{ByteBuffer, ByteView};
use crate::cursor::ByteCursor;
use crate::encoding;
use crate::endian::ByteOrder;
use crate::error::{Error, Result};
use crate::writable::WritableBuffer;

/// Serialized form of a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Envelope {
    pub writable: bool,
    pub len: u64,
    /// Base64 of the raw bytes
    pub payload: String,
}

impl Envelope {
    pub fn seal(bytes: &[u8], writable: bool) -> Self {
        Envelope {
            writable,
            len: bytes.len() as u64,
            payload: encoding::encode_base64(bytes),
        }
    }

    /// Decode the payload and check it against the declared length.
    pub fn open(&self) -> Result<Vec<u8>> {
        let bytes = encoding::decode_base64(&self.payload)?;
        if bytes.len() as u64 != self.len {
            return Err(Error::EnvelopeLengthMismatch {
                declared: self.len,
                actual: bytes.len(),
            });
        }
        Ok(bytes)
    }

    /// Reinstate as an immutable buffer, whatever the flag says.
    pub fn into_buffer(self) -> Result<ByteBuffer> {
        Ok(ByteBuffer::from(self.open()?))
    }

    /// Reinstate as a writable buffer. Fails for read-only envelopes.
    pub fn into_writable(self) -> Result<WritableBuffer> {
        if !self.writable {
            return Err(Error::ReadOnlyViolation);
        }
        Ok(WritableBuffer::from(self.open()?))
    }

    pub fn to_bytes(&self) -> Result<ByteBuffer> {
        let payload_len = i64::try_from(self.payload.len())
            .map_err(|_| Error::argument("envelope payload too large"))?;

        let mut out = WritableBuffer::with_capacity(13 + self.payload.len());
        out.append_u8(i64::from(self.writable))?
            .append_u64(self.len, ByteOrder::BigEndian)?
            .append_u32(payload_len, ByteOrder::BigEndian)?
            .append(self.payload.as_bytes());
        Ok(out.freeze())
    }

    /// Parse the binary form. Every input byte must be consumed.
    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        let mut cursor = ByteCursor::new(input);

        let writable = match cursor.read_u8()? {
            0 => false,
            1 => true,
            v => {
                return Err(Error::encoding(
                    "envelope",
                    format!("invalid writable flag: {v} (must be 0 or 1)"),
                ));
            }
        };
        let len = cursor.read_u64(ByteOrder::BigEndian)?.to_u64()?;
        let payload_len = cursor.read_u32(ByteOrder::BigEndian)? as usize;
        let payload = cursor.next(payload_len)?;
        if !cursor.is_end() {
            return Err(Error::encoding(
                "envelope",
                format!("{} trailing bytes", cursor.remaining().len()),
            ));
        }

        let payload = std::str::from_utf8(payload)
            .map_err(|_| Error::encoding("envelope", "payload is not ASCII"))?;
        Ok(Envelope {
            writable,
            len,
            payload: payload.to_string(),
        })
    }
}

impl From<ByteBuffer> for Envelope {
    fn from(buffer: ByteBuffer) -> Self {
        Envelope::seal(buffer.as_bytes(), false)
    }
}

impl From<WritableBuffer> for Envelope {
    fn from(buffer: WritableBuffer) -> Self {
        Envelope::seal(buffer.as_bytes(), true)
    }
}

impl TryFrom<Envelope> for ByteBuffer {
    type Error = Error;

    fn try_from(envelope: Envelope) -> Result<Self> {
        envelope.into_buffer()
    }
}

impl TryFrom<Envelope> for WritableBuffer {
    type Error = Error;

    fn try_from(envelope: Envelope) -> Result<Self> {
        envelope.into_writable()
    }
}

impl ByteBuffer {
    pub fn to_envelope(&self) -> Envelope {
        Envelope::seal(self.as_bytes(), false)
    }
}

impl WritableBuffer {
    pub fn to_envelope(&self) -> Envelope {
        Envelope::seal(self.as_bytes(), true)
    }
}
