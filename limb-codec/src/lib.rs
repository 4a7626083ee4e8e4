//! Textual codec for multi-precision unsigned integers.
//!
//! An integer is a little-endian slice of fixed-width words (`u32` or
//! `u64`): `value = sum x[i] * 2^(BITS * i)`. The slice does not carry its
//! own length and may have leading (high) zero words. The routines here
//! convert such slices to and from binary, hexadecimal and decimal strings
//! using only caller-owned buffers; formatters write into the buffer tail
//! (right-aligned) and allocate nothing on the success path.

#[cfg(not(target_endian = "little"))]
compile_error!("limb-codec is only supported on little endian architectures");

mod decimal;
mod radix;
pub mod scalar;

pub use decimal::{array_to_dec, dec_to_array, DEC_SCRATCH_WORDS};
pub use radix::{array_to_bin, array_to_hex, from_hex_strict, hex_to_array};

use thiserror::Error;

/// Failure of the strict hex parser ([`from_hex_strict`]).
///
/// The tolerant entry points report every failure as a `0` return instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input string is empty")]
    InvalidLength,
    #[error("output needs {required} words but only {capacity} were supplied")]
    BufferTooSmall { required: usize, capacity: usize },
    #[error("invalid digit in {0:?}")]
    InvalidDigit(String),
}

impl ParseError {
    pub(crate) fn invalid_digit(input: &[u8]) -> ParseError {
        ParseError::InvalidDigit(String::from_utf8_lossy(input).into_owned())
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// A fixed-width unsigned word of a little-endian multi-precision integer.
///
/// Implemented for `u32` and `u64` only. The decimal codec normalizes any
/// word array to its `u32`-halves view at the function boundary and runs a
/// single generic 32-bit algorithm, so `halves` must expose the words as
/// twice as many (or the same) little-endian `u32` limbs.
pub trait Limb: private::Sealed + Copy + Eq + 'static {
    const BITS: usize;
    const ZERO: Self;

    fn is_zero(self) -> bool;
    fn to_u64(self) -> u64;

    /// Parses `digits` (1 to `BITS / 4` hex characters) as one word.
    fn from_hex_digits(digits: &[u8]) -> Option<Self>;

    /// Little-endian `u32` view of a word slice.
    fn halves(words: &[Self]) -> &[u32];
    fn halves_mut(words: &mut [Self]) -> &mut [u32];
}

impl Limb for u32 {
    const BITS: usize = 32;
    const ZERO: Self = 0;

    fn is_zero(self) -> bool {
        self == 0
    }

    fn to_u64(self) -> u64 {
        u64::from(self)
    }

    fn from_hex_digits(digits: &[u8]) -> Option<Self> {
        radix::parse_hex_u64(digits).map(|v| v as u32)
    }

    fn halves(words: &[Self]) -> &[u32] {
        words
    }

    fn halves_mut(words: &mut [Self]) -> &mut [u32] {
        words
    }
}

impl Limb for u64 {
    const BITS: usize = 64;
    const ZERO: Self = 0;

    fn is_zero(self) -> bool {
        self == 0
    }

    fn to_u64(self) -> u64 {
        self
    }

    fn from_hex_digits(digits: &[u8]) -> Option<Self> {
        radix::parse_hex_u64(digits)
    }

    // The casts below are the width-normalization boundary: on a little
    // endian target the u32 halves of a u64 array are themselves the
    // little-endian u32 limbs of the same integer.
    fn halves(words: &[Self]) -> &[u32] {
        bytemuck::cast_slice(words)
    }

    fn halves_mut(words: &mut [Self]) -> &mut [u32] {
        bytemuck::cast_slice_mut(words)
    }
}
