//! Byte-order facts and byte-order reversal.
//!
//! Two independent facts decide how integers are laid out:
//!
//! - the **host** order, used when 16/32-bit values are packed natively;
//! - the **backend** order, i.e. the order in which the big-integer backend
//!   renders its magnitude through hex. 64-bit values are packed through that
//!   rendering, so they must be corrected against it rather than the host.
//!
//! Both are computed once per process by [`Endianness::process`] and passed
//! explicitly into the packers in [`crate::uint`].

use std::sync::OnceLock;

use malachite::Integer;

use crate::encoding;
use crate::error::Result;

/// Requested byte order of a packed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    pub const fn is_little(self) -> bool {
        matches!(self, ByteOrder::LittleEndian)
    }
}

/// Process-wide byte-order facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endianness {
    pub host_little_endian: bool,
    pub backend_little_endian: bool,
}

static PROCESS: OnceLock<Endianness> = OnceLock::new();

impl Endianness {
    /// The facts of the running process, detected on first use.
    pub fn process() -> Endianness {
        *PROCESS.get_or_init(|| {
            let facts = Endianness::detect();
            log::debug!(
                "endianness detected: host_little_endian={}, backend_little_endian={}",
                facts.host_little_endian,
                facts.backend_little_endian
            );
            facts
        })
    }

    /// Probe both facts without consulting the cache.
    pub fn detect() -> Endianness {
        Endianness {
            host_little_endian: 1u16.to_ne_bytes() == 1u16.to_le_bytes(),
            // 65534 renders as "fffe" when the backend emits the most
            // significant byte first.
            backend_little_endian: format!("{:x}", Integer::from(65534u32)) == "feff",
        }
    }
}

/// Reverse the byte order of `bytes`.
pub fn swap_endianness(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Reverse the byte order of hex text, two hexits at a time.
///
/// Odd-length input is left-padded with a zero hexit first; a `0x` prefix is
/// dropped and not restored.
pub fn swap_hex_endianness(hex: &str) -> Result<String> {
    let bytes = encoding::decode_hex(hex)?;
    Ok(hex::encode(swap_endianness(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_facts_are_stable() {
        assert_eq!(Endianness::process(), Endianness::process());
        assert_eq!(Endianness::process(), Endianness::detect());
    }

    #[test]
    fn test_host_fact_matches_target() {
        assert_eq!(
            Endianness::detect().host_little_endian,
            cfg!(target_endian = "little")
        );
    }

    #[test]
    fn test_backend_renders_most_significant_first() {
        assert!(!Endianness::detect().backend_little_endian);
    }

    #[test]
    fn test_swap_hex() {
        assert_eq!(swap_hex_endianness("0x0102ff").unwrap(), "ff0201");
        assert_eq!(swap_hex_endianness("abc").unwrap(), "bc0a");
    }
}
