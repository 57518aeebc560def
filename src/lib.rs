//! # octet-buffer
//!
//! Byte buffers with byte-exact, endianness-correct codecs, a sequential
//! byte cursor and an arbitrary-precision integer.
//!
//! ## Overview
//!
//! Mutability lives in the type. A [`ByteBuffer`] never changes after it is
//! built; a [`WritableBuffer`] grows through appends and prepends and can be
//! frozen into a `ByteBuffer`; a [`FixedBuffer`] carries its length as a
//! const parameter and refuses any input that would change it. All three
//! share the decoding constructors of [`ByteConstruct`] and the read-side
//! operations of [`ByteView`].
//!
//! Multi-byte unsigned integers are written and read in an explicit
//! [`ByteOrder`]; the host's native order is detected once per process and
//! never leaks into the output.
//!
//! ## Encodings
//!
//! | Encoding         | Decode                          | Encode                    |
//! |------------------|---------------------------------|---------------------------|
//! | hex              | case-insensitive, optional `0x`, odd length left-padded | lowercase, optional `0x` |
//! | base64           | standard alphabet, padded       | standard alphabet, padded |
//! | bit strings      | one element per byte, 1-8 digits | one element per byte, optionally padded to 8 |
//! | byte arrays      | integers in `0..=255`           | `Vec<u8>`                 |
//! | `u8`/`u16`/`u32` | [`ByteCursor::read_u16`] etc.   | [`WritableBuffer::append_u16`] etc. |
//! | `u64`            | [`Uint64Value`], native or decimal text | native or decimal text |
//! | custom base      | [`BigInteger::from_custom_base`] | [`BigInteger::to_custom_base`] |
//!
//! ## Example
//!
//! ```rust
//! use octet_buffer::{ByteConstruct, ByteOrder, ByteView, BigInteger, WritableBuffer};
//!
//! let mut out = WritableBuffer::new();
//! out.append_u16(0x1234, ByteOrder::BigEndian)?
//!     .append_u64("18446744073709551615", ByteOrder::LittleEndian)?;
//! let frozen = out.freeze();
//! assert_eq!(frozen.to_base16(true), "0x1234ffffffffffffffff");
//!
//! let mut cursor = frozen.cursor();
//! assert_eq!(cursor.read_u16(ByteOrder::BigEndian)?, 0x1234);
//! assert_eq!(
//!     cursor.read_u64(ByteOrder::LittleEndian)?.to_string(),
//!     "18446744073709551615"
//! );
//!
//! let n: BigInteger = "255".parse()?;
//! assert_eq!(n.to_base16(), "ff");
//! # Ok::<(), octet_buffer::Error>(())
//! ```

pub mod buffer;
pub mod cursor;
pub mod digest;
pub mod encoding;
pub mod endian;
pub mod envelope;
pub mod error;
pub mod fixed;
pub mod integer;
pub mod uint;
pub mod writable;

pub use buffer::{ByteBuffer, ByteConstruct, ByteView};
pub use cursor::{ByteCursor, UnderflowPolicy};
pub use digest::HashProvider;
pub use endian::{ByteOrder, Endianness, swap_endianness};
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use fixed::{FixedBuffer, NoPad, PadLeft, PadPolicy};
pub use integer::{BaseCharset, BigInteger};
pub use uint::Uint64Value;
pub use writable::WritableBuffer;
