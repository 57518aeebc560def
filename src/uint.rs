//! Fixed-width unsigned integer packing.
//!
//! ## Wire format summary
//! - 8/16/32-bit values are packed natively, then reversed when the host
//!   order differs from the requested [`ByteOrder`]
//! - 64-bit values are rendered through the big-integer backend as 16
//!   hexits (left-padded), then reversed when the backend order differs from
//!   the requested [`ByteOrder`]
//! - Negative input is an underflow, input above the width's maximum an
//!   overflow
//!
//! Every function takes the [`Endianness`] facts explicitly; callers normally
//! pass [`Endianness::process`].

use std::fmt;

use crate::endian::{ByteOrder, Endianness};
use crate::error::{Error, Result};
use crate::integer::BigInteger;

/// A 64-bit unsigned value as exchanged with callers.
///
/// Values up to `i64::MAX` travel as [`Uint64Value::Native`]; anything larger
/// is only representable as decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Uint64Value {
    Native(i64),
    Decimal(String),
}

impl Uint64Value {
    /// Parse into the backend integer. Only decimal text is accepted.
    pub fn to_big_integer(&self) -> Result<BigInteger> {
        match self {
            Uint64Value::Native(n) => Ok(BigInteger::from(*n)),
            Uint64Value::Decimal(s) => BigInteger::from_decimal(s)
                .map_err(|_| Error::argument(format!("invalid/malformed value for uint64: {s:?}"))),
        }
    }

    pub fn to_u64(&self) -> Result<u64> {
        self.to_big_integer()?.to_u64()
    }
}

impl From<i64> for Uint64Value {
    fn from(n: i64) -> Self {
        Uint64Value::Native(n)
    }
}

impl From<i32> for Uint64Value {
    fn from(n: i32) -> Self {
        Uint64Value::Native(n.into())
    }
}

impl From<u32> for Uint64Value {
    fn from(n: u32) -> Self {
        Uint64Value::Native(n.into())
    }
}

impl From<u64> for Uint64Value {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(native) => Uint64Value::Native(native),
            Err(_) => Uint64Value::Decimal(n.to_string()),
        }
    }
}

impl From<&str> for Uint64Value {
    fn from(s: &str) -> Self {
        Uint64Value::Decimal(s.to_string())
    }
}

impl From<String> for Uint64Value {
    fn from(s: String) -> Self {
        Uint64Value::Decimal(s)
    }
}

impl fmt::Display for Uint64Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uint64Value::Native(n) => write!(f, "{}", n),
            Uint64Value::Decimal(s) => f.write_str(s),
        }
    }
}

fn check_uint(value: i64, bits: u32, max: u64) -> Result<u64> {
    let unsigned = u64::try_from(value).map_err(|_| Error::IntegerUnderflow { bits })?;
    if unsigned > max {
        return Err(Error::IntegerOverflow { bits, max });
    }
    Ok(unsigned)
}

fn check_uint64(n: &BigInteger) -> Result<()> {
    if n.is_signed() {
        return Err(Error::IntegerUnderflow { bits: 64 });
    }
    if *n > BigInteger::from(u64::MAX) {
        return Err(Error::IntegerOverflow {
            bits: 64,
            max: u64::MAX,
        });
    }
    Ok(())
}

/// Reorder natively packed bytes into `order`, or back.
fn correct_for_host(bytes: &mut [u8], order: ByteOrder, facts: Endianness) {
    if order.is_little() != facts.host_little_endian {
        bytes.reverse();
    }
}

/// Reorder backend-rendered bytes into `order`, or back.
fn correct_for_backend(bytes: &mut [u8], order: ByteOrder, facts: Endianness) {
    if order.is_little() != facts.backend_little_endian {
        bytes.reverse();
    }
}

fn exact<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    bytes
        .try_into()
        .map_err(|_| Error::argument(format!("expected exactly {N} bytes, got {}", bytes.len())))
}

// ── Pack ──────────────────────────────────────────────────────────────────

pub fn pack_u8(value: i64) -> Result<[u8; 1]> {
    let v = check_uint(value, 8, u8::MAX.into())?;
    Ok([v as u8])
}

pub fn pack_u16(value: i64, order: ByteOrder, facts: Endianness) -> Result<[u8; 2]> {
    let v = check_uint(value, 16, u16::MAX.into())? as u16;
    let mut packed = v.to_ne_bytes();
    correct_for_host(&mut packed, order, facts);
    Ok(packed)
}

pub fn pack_u32(value: i64, order: ByteOrder, facts: Endianness) -> Result<[u8; 4]> {
    let v = check_uint(value, 32, u32::MAX.into())? as u32;
    let mut packed = v.to_ne_bytes();
    correct_for_host(&mut packed, order, facts);
    Ok(packed)
}

pub fn pack_u64(value: &Uint64Value, order: ByteOrder, facts: Endianness) -> Result<[u8; 8]> {
    let n = value.to_big_integer()?;
    check_uint64(&n)?;

    let hexits = format!("{:0>16}", n.to_base16());
    let mut packed = [0u8; 8];
    hex::decode_to_slice(&hexits, &mut packed)
        .map_err(|e| Error::encoding("base16", e.to_string()))?;
    correct_for_backend(&mut packed, order, facts);
    Ok(packed)
}

// ── Unpack ────────────────────────────────────────────────────────────────

pub fn unpack_u8(bytes: &[u8]) -> Result<u8> {
    let [b] = exact::<1>(bytes)?;
    Ok(b)
}

pub fn unpack_u16(bytes: &[u8], order: ByteOrder, facts: Endianness) -> Result<u16> {
    let mut packed = exact::<2>(bytes)?;
    correct_for_host(&mut packed, order, facts);
    Ok(u16::from_ne_bytes(packed))
}

pub fn unpack_u32(bytes: &[u8], order: ByteOrder, facts: Endianness) -> Result<u32> {
    let mut packed = exact::<4>(bytes)?;
    correct_for_host(&mut packed, order, facts);
    Ok(u32::from_ne_bytes(packed))
}

pub fn unpack_u64(bytes: &[u8], order: ByteOrder, facts: Endianness) -> Result<Uint64Value> {
    let mut packed = exact::<8>(bytes)?;
    correct_for_backend(&mut packed, order, facts);

    let n = BigInteger::from_base16(&hex::encode(packed))?;
    Ok(match n.to_i64() {
        Ok(native) => Uint64Value::Native(native),
        Err(_) => Uint64Value::Decimal(n.to_string()),
    })
}
