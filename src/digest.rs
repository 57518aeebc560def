//! Seam for external hash functions.
//!
//! No hash algorithms are bundled. A caller plugs one in by implementing
//! [`HashProvider`] and passing it to [`ByteView::digest`](crate::ByteView::digest).

/// Computes a digest of raw bytes under a named algorithm.
pub trait HashProvider {
    type Error;

    /// Hash `input` with `algorithm` (e.g. `"sha256"`). Unknown names are
    /// the provider's own error.
    fn digest(&self, algorithm: &str, input: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

impl<H: HashProvider + ?Sized> HashProvider for &H {
    type Error = H::Error;

    fn digest(&self, algorithm: &str, input: &[u8]) -> Result<Vec<u8>, Self::Error> {
        (**self).digest(algorithm, input)
    }
}
