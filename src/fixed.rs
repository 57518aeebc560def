//! Buffers whose byte count is part of their type.
//!
//! A [`FixedBuffer<SIZE, P>`] always holds exactly `SIZE` bytes. Input of any
//! other length is either fitted by the pad policy `P` or rejected with
//! [`Error::FixedLengthMismatch`]; longer input is never truncated.
//!
//! ```rust
//! use octet_buffer::{ByteConstruct, ByteView, FixedBuffer, PadLeft};
//!
//! type Hash32 = FixedBuffer<32, PadLeft>;
//!
//! let h = Hash32::from_bytes(&[0xAB; 31])?;
//! assert_eq!(h.len(), 32);
//! assert_eq!(h.as_bytes()[0], 0);
//! # Ok::<(), octet_buffer::Error>(())
//! ```
//!
//! # Mutation
//!
//! Nothing on a fixed buffer can change its length: there is no append or
//! prepend. Bytes are edited in place through [`FixedBuffer::as_mut_bytes`]
//! or replaced wholesale through [`FixedBuffer::set`], which runs the same
//! pad-and-check as construction.

use std::marker::PhantomData;

use crate::buffer::{ByteBuffer, ByteConstruct, ByteView, slice_clamped};
use crate::error::{Error, Result};

// ── Sealed pad policies ───────────────────────────────────────────────────

mod private {
    pub trait Sealed {}
}

/// How a fixed buffer treats input shorter than its size.
///
/// This trait is sealed; [`NoPad`] and [`PadLeft`] are the only policies.
pub trait PadPolicy: private::Sealed {
    /// Bring `bytes` towards `size`. Input that is already long enough is
    /// returned unchanged.
    fn fit(bytes: Vec<u8>, size: usize) -> Vec<u8>;
}

/// Reject anything but an exact length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoPad;

/// Left-pad short input with zero bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PadLeft;

impl private::Sealed for NoPad {}
impl private::Sealed for PadLeft {}

impl PadPolicy for NoPad {
    fn fit(bytes: Vec<u8>, _size: usize) -> Vec<u8> {
        bytes
    }
}

impl PadPolicy for PadLeft {
    fn fit(bytes: Vec<u8>, size: usize) -> Vec<u8> {
        if bytes.len() >= size {
            return bytes;
        }
        log::debug!("left-padding {} bytes to {}", bytes.len(), size);
        let mut padded = vec![0u8; size - bytes.len()];
        padded.extend(bytes);
        padded
    }
}

// ── FixedBuffer ───────────────────────────────────────────────────────────

/// Exactly `SIZE` bytes, with pad policy `P`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedBuffer<const SIZE: usize, P: PadPolicy = NoPad> {
    data: [u8; SIZE],
    _policy: PhantomData<P>,
}

impl<const SIZE: usize, P: PadPolicy> FixedBuffer<SIZE, P> {
    pub const LEN: usize = SIZE;

    /// `SIZE` zero bytes.
    pub fn zeroed() -> Self {
        Self::from([0u8; SIZE])
    }

    fn fit(bytes: Vec<u8>) -> Result<[u8; SIZE]> {
        let actual = bytes.len();
        P::fit(bytes, SIZE)
            .try_into()
            .map_err(|_| Error::FixedLengthMismatch {
                expected: SIZE,
                actual,
            })
    }

    /// Replace the contents, padding and checking like construction. On
    /// error the buffer is left untouched.
    pub fn set(&mut self, bytes: impl AsRef<[u8]>) -> Result<&mut Self> {
        self.data = Self::fit(bytes.as_ref().to_vec())?;
        Ok(self)
    }

    pub fn as_array(&self) -> &[u8; SIZE] {
        &self.data
    }

    /// In-place access; the array type keeps the length fixed.
    pub fn as_mut_bytes(&mut self) -> &mut [u8; SIZE] {
        &mut self.data
    }

    /// Overwrite every byte with zero.
    pub fn zeroize(&mut self) -> &mut Self {
        self.data = [0u8; SIZE];
        self
    }

    pub fn switch_endianness(&self) -> Self {
        let mut data = self.data;
        data.reverse();
        Self::from(data)
    }

    /// Apply `f` and re-check the result against `SIZE` and the pad policy.
    pub fn transform(&self, f: fn(&[u8]) -> Vec<u8>) -> Result<Self> {
        Self::from_vec(f(&self.data))
    }

    /// A variable-length copy of `length` bytes from `start`.
    pub fn copy(&self, start: Option<usize>, length: Option<usize>) -> ByteBuffer {
        ByteBuffer::from(slice_clamped(&self.data, start, length))
    }

    pub fn freeze(self) -> ByteBuffer {
        ByteBuffer::from(self.data.to_vec())
    }

    pub fn into_array(self) -> [u8; SIZE] {
        self.data
    }
}

impl<const SIZE: usize, P: PadPolicy> Default for FixedBuffer<SIZE, P> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<const SIZE: usize, P: PadPolicy> From<[u8; SIZE]> for FixedBuffer<SIZE, P> {
    fn from(data: [u8; SIZE]) -> Self {
        Self {
            data,
            _policy: PhantomData,
        }
    }
}

impl<const SIZE: usize, P: PadPolicy> ByteView for FixedBuffer<SIZE, P> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<const SIZE: usize, P: PadPolicy> ByteConstruct for FixedBuffer<SIZE, P> {
    fn from_vec(bytes: Vec<u8>) -> Result<Self> {
        Ok(Self::from(Self::fit(bytes)?))
    }
}

impl<const SIZE: usize, P: PadPolicy> AsRef<[u8]> for FixedBuffer<SIZE, P> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_left_fit() {
        assert_eq!(PadLeft::fit(vec![1, 2], 4), [0, 0, 1, 2]);
        assert_eq!(PadLeft::fit(vec![1, 2, 3, 4, 5], 4), [1, 2, 3, 4, 5]);
        assert_eq!(NoPad::fit(vec![1], 4), [1]);
    }

    #[test]
    fn test_set_failure_keeps_contents() {
        let mut buf = FixedBuffer::<2>::from([7, 8]);
        assert_eq!(
            buf.set([1u8, 2, 3]).unwrap_err(),
            Error::FixedLengthMismatch {
                expected: 2,
                actual: 3
            }
        );
        assert_eq!(buf.as_array(), &[7, 8]);
    }
}
