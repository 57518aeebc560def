//! Sequential reader over a buffer's bytes.

use crate::endian::{ByteOrder, Endianness};
use crate::error::{Error, Result};
use crate::uint::{self, Uint64Value};

/// What [`ByteCursor::next`] does when fewer bytes remain than requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnderflowPolicy {
    /// Fail with [`Error::BufferUnderflow`]
    #[default]
    Strict,
    /// Return the bytes that are left
    Permissive,
}

/// Read pointer over borrowed bytes.
///
/// The borrow freezes the source for as long as the cursor lives, so reads
/// always see the bytes as they were when the cursor was created. Moving the
/// pointer never touches the source.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    input: &'a [u8],
    pos: usize,
    policy: UnderflowPolicy,
}

impl<'a> ByteCursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        ByteCursor {
            input,
            pos: 0,
            policy: UnderflowPolicy::Strict,
        }
    }

    pub fn with_policy(mut self, policy: UnderflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Switch to [`UnderflowPolicy::Permissive`].
    pub fn ignore_underflow(self) -> Self {
        self.with_policy(UnderflowPolicy::Permissive)
    }

    pub fn policy(&self) -> UnderflowPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_end(&self) -> bool {
        self.pos == self.input.len()
    }

    /// Returns the unread portion without moving the pointer.
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    pub fn reset(&mut self) -> &mut Self {
        self.pos = 0;
        self
    }

    pub fn set_pointer(&mut self, pos: usize) -> Result<&mut Self> {
        if pos > self.input.len() {
            return Err(Error::OutOfRange {
                position: pos,
                len: self.input.len(),
            });
        }
        self.pos = pos;
        Ok(self)
    }

    /// Read `n` bytes and advance past them.
    ///
    /// With fewer than `n` bytes left, a strict cursor fails and leaves the
    /// pointer alone; a permissive one returns what is left and moves to the
    /// end.
    pub fn next(&mut self, n: usize) -> Result<&'a [u8]> {
        let available = self.input.len() - self.pos;
        if n > available {
            match self.policy {
                UnderflowPolicy::Strict => {
                    return Err(Error::BufferUnderflow {
                        requested: n,
                        available,
                    });
                }
                UnderflowPolicy::Permissive => {
                    log::trace!(
                        "cursor short read at pos {}: requested {}, returning {}",
                        self.pos,
                        n,
                        available
                    );
                    let read = self.remaining();
                    self.pos = self.input.len();
                    return Ok(read);
                }
            }
        }
        self.take(n)
    }

    /// `reset()` followed by `next(n)`.
    pub fn first(&mut self, n: usize) -> Result<&'a [u8]> {
        self.reset().next(n)
    }

    /// Up to `n` bytes from the pointer, without moving it.
    pub fn look_ahead(&self, n: usize) -> Result<&'a [u8]> {
        if n == 0 {
            return Err(Error::argument("expected positive number of bytes to read"));
        }
        let end = self.pos.saturating_add(n).min(self.input.len());
        Ok(&self.input[self.pos..end])
    }

    /// The `n` bytes before the pointer, without moving it.
    pub fn look_behind(&self, n: usize) -> Result<&'a [u8]> {
        if n == 0 || n > self.pos {
            return Err(Error::argument(format!(
                "cannot look {n} bytes behind position {}",
                self.pos
            )));
        }
        Ok(&self.input[self.pos - n..self.pos])
    }

    /// Consume exactly `n` bytes regardless of policy.
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let available = self.input.len() - self.pos;
        if n > available {
            return Err(Error::BufferUnderflow {
                requested: n,
                available,
            });
        }
        let slice = &self.input[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        uint::unpack_u8(self.take(1)?)
    }

    pub fn read_u16(&mut self, order: ByteOrder) -> Result<u16> {
        let bytes = self.take(2)?;
        uint::unpack_u16(bytes, order, Endianness::process())
    }

    pub fn read_u32(&mut self, order: ByteOrder) -> Result<u32> {
        let bytes = self.take(4)?;
        uint::unpack_u32(bytes, order, Endianness::process())
    }

    /// Read a u64; values above `i64::MAX` come back as decimal text.
    pub fn read_u64(&mut self, order: ByteOrder) -> Result<Uint64Value> {
        let bytes = self.take(8)?;
        uint::unpack_u64(bytes, order, Endianness::process())
    }
}

impl<'a> From<&'a [u8]> for ByteCursor<'a> {
    fn from(input: &'a [u8]) -> Self {
        ByteCursor::new(input)
    }
}
