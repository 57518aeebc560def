//! Arbitrary-precision signed integers.
//!
//! [`BigInteger`] wraps malachite's `Integer` and adds the conversions the
//! buffers need: hex, big-endian bytes and positional encodings against an
//! arbitrary alphabet ([`BaseCharset`]). Values are immutable; every
//! operation returns a new instance.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use malachite::{Integer, Natural};
use malachite::base::num::arithmetic::traits::{ModPow, UnsignedAbs};
use malachite::base::num::basic::traits::{One, Zero};
use malachite::base::num::conversion::traits::{FromStringBase, PowerOf2Digits};

use crate::buffer::{ByteBuffer, ByteConstruct, ByteView};
use crate::encoding;
use crate::error::{Error, Result};

/// Signed integer of unbounded magnitude.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigInteger {
    value: Integer,
}

fn is_decimal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_hex(s: &str) -> bool {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

impl BigInteger {
    pub fn zero() -> Self {
        Self {
            value: Integer::ZERO,
        }
    }

    /// Parse signed decimal text (`-?[0-9]+`).
    pub fn from_decimal(s: &str) -> Result<Self> {
        if !is_decimal(s) {
            return Err(Error::encoding("decimal", format!("{s:?} is not a decimal integer")));
        }
        let value = Integer::from_str(s)
            .map_err(|_| Error::encoding("decimal", format!("{s:?} is not a decimal integer")))?;
        Ok(Self { value })
    }

    /// Parse unsigned hex text, with or without `0x`.
    pub fn from_base16(hex: &str) -> Result<Self> {
        if hex.is_empty() {
            return Err(Error::encoding("base16", "expected hexadecimal string"));
        }
        let normalized = encoding::normalize_hex(hex)?.to_ascii_lowercase();
        let value = Integer::from_string_base(16, &normalized)
            .ok_or_else(|| Error::encoding("base16", "expected hexadecimal string"))?;
        Ok(Self { value })
    }

    /// Read a buffer's bytes as a big-endian unsigned magnitude.
    ///
    /// An empty buffer is zero.
    pub fn from_buffer<B: ByteView + ?Sized>(buffer: &B) -> Self {
        // every u8 is a valid base-256 digit, so this is always `Some`
        let digits = buffer.as_bytes().iter().copied();
        let value = <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_desc(8, digits)
            .map(Integer::from)
            .unwrap_or(Integer::ZERO);
        Self { value }
    }

    /// Decode positional text against `charset`.
    pub fn from_custom_base(encoded: &str, charset: &BaseCharset) -> Result<Self> {
        if encoded.is_empty() {
            return Err(Error::encoding("custom base", "empty input"));
        }

        let base = Integer::from(charset.len() as u64);
        let mut value = Integer::ZERO;
        for (i, symbol) in encoded.chars().enumerate() {
            let digit = charset.position(symbol).ok_or_else(|| {
                Error::encoding(
                    "custom base",
                    format!("symbol {symbol:?} at index {i} is not in the charset"),
                )
            })?;
            value = value * &base + Integer::from(digit as u64);
        }
        Ok(Self { value })
    }

    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// True when strictly negative.
    pub fn is_signed(&self) -> bool {
        self.value < Integer::ZERO
    }

    pub fn is_unsigned(&self) -> bool {
        !self.is_signed()
    }

    pub fn is_zero(&self) -> bool {
        self.value == Integer::ZERO
    }

    /// Division truncating toward zero.
    pub fn div(&self, divisor: &Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::argument("division by zero"));
        }
        Ok(Self {
            value: &self.value / &divisor.value,
        })
    }

    /// Remainder in `0..|modulus|`; the sign of `modulus` is ignored.
    pub fn modulo(&self, modulus: &Self) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::argument("modulo by zero"));
        }
        let m = if modulus.is_signed() {
            -modulus.value.clone()
        } else {
            modulus.value.clone()
        };
        let r = &self.value % &m;
        let value = if r < Integer::ZERO { r + m } else { r };
        Ok(Self { value })
    }

    /// Multiply by `2^n`.
    pub fn shift_left(&self, n: u64) -> Self {
        Self {
            value: &self.value << n,
        }
    }

    /// Divide by `2^n`, truncating toward zero.
    pub fn shift_right(&self, n: u64) -> Self {
        let magnitude = Integer::from(self.value.clone().unsigned_abs() >> n);
        let value = if self.is_signed() { -magnitude } else { magnitude };
        Self { value }
    }

    /// Both square roots of `self` modulo `modulus`, or `None` when `self` is
    /// not a quadratic residue.
    ///
    /// `modulus` must be a prime congruent to 3 mod 4. The congruence is
    /// checked; primality is not, and a composite modulus gives meaningless
    /// roots.
    pub fn square_root(&self, modulus: &Self) -> Result<Option<(Self, Self)>> {
        let p = &modulus.value;
        if *p < Integer::from(3u32) || p % Integer::from(4u32) != Integer::from(3u32) {
            return Err(Error::argument(
                "square root modulus must be a prime congruent to 3 mod 4",
            ));
        }

        let a = self.modulo(modulus)?.value;
        if a == Integer::ZERO {
            return Ok(None);
        }

        // Euler's criterion: a^((p-1)/2) is 1 for residues and p-1 otherwise.
        let euler_exp = (p - Integer::ONE) / Integer::from(2u32);
        if mod_pow(&a, &euler_exp, p) != Integer::ONE {
            return Ok(None);
        }

        let root_exp = (p + Integer::ONE) / Integer::from(4u32);
        let r1 = mod_pow(&a, &root_exp, p);
        let r2 = (p - &r1) % p;
        Ok(Some((Self { value: r1 }, Self { value: r2 })))
    }

    /// Lowercase hex without prefix; negatives carry a leading `-`.
    pub fn to_base16(&self) -> String {
        format!("{:x}", self.value)
    }

    /// Big-endian bytes of the magnitude, at least one byte.
    pub fn to_buffer(&self) -> Result<ByteBuffer> {
        if self.is_signed() {
            return Err(Error::argument("cannot convert a signed BigInteger to a buffer"));
        }
        ByteBuffer::from_base16(&self.to_base16())
    }

    /// Encode against `charset`; zero is the charset's first symbol.
    pub fn to_custom_base(&self, charset: &BaseCharset) -> Result<String> {
        if self.is_signed() {
            return Err(Error::argument(
                "cannot convert a signed BigInteger to custom base",
            ));
        }

        let base = Integer::from(charset.len() as u64);
        let mut num = self.value.clone();
        let mut symbols = Vec::new();
        while num >= base {
            let digit = &num % &base;
            symbols.push(charset.symbol(&digit)?);
            num /= &base;
        }
        symbols.push(charset.symbol(&num)?);

        Ok(symbols.into_iter().rev().collect())
    }

    pub fn to_i64(&self) -> Result<i64> {
        i64::try_from(&self.value).map_err(|_| {
            if self.is_signed() {
                Error::IntegerUnderflow { bits: 64 }
            } else {
                Error::IntegerOverflow {
                    bits: 64,
                    max: i64::MAX as u64,
                }
            }
        })
    }

    pub fn to_u64(&self) -> Result<u64> {
        if self.is_signed() {
            return Err(Error::IntegerUnderflow { bits: 64 });
        }
        u64::try_from(&self.value).map_err(|_| Error::IntegerOverflow {
            bits: 64,
            max: u64::MAX,
        })
    }
}

/// `base^exp mod m` for non-negative `base < m` and `exp`.
fn mod_pow(base: &Integer, exp: &Integer, m: &Integer) -> Integer {
    let base = base.clone().unsigned_abs();
    let exp = exp.clone().unsigned_abs();
    let m = m.clone().unsigned_abs();
    Integer::from(base.mod_pow(exp, m))
}

// ── Conversions ───────────────────────────────────────────────────────────

macro_rules! from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(n: $t) -> Self {
                    Self {
                        value: Integer::from(n),
                    }
                }
            }
        )*
    };
}

from_primitive!(i32, i64, u32, u64);

impl From<Integer> for BigInteger {
    fn from(value: Integer) -> Self {
        Self { value }
    }
}

/// Auto-detects decimal (`-?[0-9]+`) first, then hex (`(0x)?[0-9a-fA-F]+`).
impl FromStr for BigInteger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if is_decimal(s) {
            Self::from_decimal(s)
        } else if is_hex(s) {
            Self::from_base16(s)
        } else {
            Err(Error::argument(format!("invalid/malformed value for BigInteger: {s:?}")))
        }
    }
}

impl TryFrom<&str> for BigInteger {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl PartialEq<i64> for BigInteger {
    fn eq(&self, other: &i64) -> bool {
        self.value == Integer::from(*other)
    }
}

impl PartialOrd<i64> for BigInteger {
    fn partial_cmp(&self, other: &i64) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&Integer::from(*other))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<&BigInteger> for &BigInteger {
            type Output = BigInteger;
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                BigInteger {
                    value: &self.value $op &rhs.value,
                }
            }
        }

        impl $trait for BigInteger {
            type Output = BigInteger;
            fn $method(self, rhs: BigInteger) -> BigInteger {
                BigInteger {
                    value: self.value $op rhs.value,
                }
            }
        }
    };
}

forward_binop!(Add, add, +);
forward_binop!(Sub, sub, -);
forward_binop!(Mul, mul, *);

impl Neg for BigInteger {
    type Output = BigInteger;
    fn neg(self) -> BigInteger {
        BigInteger { value: -self.value }
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;
    fn neg(self) -> BigInteger {
        BigInteger {
            value: -self.value.clone(),
        }
    }
}

// ── Custom base alphabets ─────────────────────────────────────────────────

/// Ordered alphabet for positional encodings such as base58.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseCharset {
    symbols: Vec<char>,
    case_sensitive: bool,
}

const BASE58: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BASE62: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

impl BaseCharset {
    /// Build an alphabet of at least two distinct symbols.
    ///
    /// A case-insensitive alphabet must stay distinct after ASCII case
    /// folding.
    pub fn new(charset: &str, case_sensitive: bool) -> Result<Self> {
        let symbols: Vec<char> = charset.chars().collect();
        if symbols.len() < 2 {
            return Err(Error::argument("charset needs at least two symbols"));
        }

        let fold = |c: char| if case_sensitive { c } else { c.to_ascii_lowercase() };
        for (i, c) in symbols.iter().enumerate() {
            if symbols[..i].iter().any(|prev| fold(*prev) == fold(*c)) {
                return Err(Error::argument(format!("charset repeats symbol {c:?}")));
            }
        }

        Ok(Self {
            symbols,
            case_sensitive,
        })
    }

    /// Bitcoin's base58 alphabet.
    pub fn base58() -> Self {
        Self {
            symbols: BASE58.chars().collect(),
            case_sensitive: true,
        }
    }

    pub fn base62() -> Self {
        Self {
            symbols: BASE62.chars().collect(),
            case_sensitive: true,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn charset(&self) -> String {
        self.symbols.iter().collect()
    }

    fn position(&self, symbol: char) -> Option<usize> {
        if self.case_sensitive {
            self.symbols.iter().position(|c| *c == symbol)
        } else {
            self.symbols
                .iter()
                .position(|c| c.eq_ignore_ascii_case(&symbol))
        }
    }

    fn symbol(&self, digit: &Integer) -> Result<char> {
        u64::try_from(digit)
            .ok()
            .and_then(|d| usize::try_from(d).ok())
            .and_then(|d| self.symbols.get(d).copied())
            .ok_or_else(|| Error::argument("digit outside of charset"))
    }
}
