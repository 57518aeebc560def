use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by buffer construction, mutation, cursor reads and integer
/// conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text did not match the grammar of the named encoding
    #[error("invalid {encoding} input: {reason}")]
    InvalidEncoding {
        encoding: &'static str,
        reason: String,
    },

    /// A byte array element fell outside `0..=255`
    #[error("invalid byte value {value} at index {index}")]
    InvalidByteValue { index: usize, value: i64 },

    /// Value does not fit the unsigned width being packed
    #[error("cannot pack uint{bits}; value must not exceed {max}")]
    IntegerOverflow { bits: u32, max: u64 },

    /// Negative value handed to an unsigned packer
    #[error("cannot pack uint{bits}; value is a signed integer")]
    IntegerUnderflow { bits: u32 },

    /// A fixed-length buffer was given the wrong number of bytes
    #[error("buffer expects fixed length of {expected} bytes; given {actual} bytes")]
    FixedLengthMismatch { expected: usize, actual: usize },

    /// A read-only buffer was reinstated as writable
    #[error("buffer is in read-only state")]
    ReadOnlyViolation,

    /// A strict cursor read ran past the end of its bytes
    #[error("attempt to read next {requested} bytes, while only {available} available")]
    BufferUnderflow { requested: usize, available: usize },

    /// Cursor pointer set outside `0..=len`
    #[error("pointer position {position} is out of range 0..={len}")]
    OutOfRange { position: usize, len: usize },

    /// An argument outside an operation's domain (zero divisor, signed value
    /// where a magnitude is needed, unusable modulus or charset)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Envelope payload does not carry the declared number of bytes
    #[error("buffer serialized with length {declared} cannot be reinstated with {actual} bytes")]
    EnvelopeLengthMismatch { declared: u64, actual: usize },
}

impl Error {
    pub(crate) fn encoding(encoding: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidEncoding {
            encoding,
            reason: reason.into(),
        }
    }

    pub(crate) fn argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
