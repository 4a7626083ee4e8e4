//! Safe layer between the element wrapper and the C binding surface.
//!
//! Everything here takes and returns plain slices and values so the
//! `extern "C"` crate only has to marshal pointers and map [`Error`] onto
//! integer return codes.

pub mod serialization;

use bnpair::text::{self, IoFormat, Radix, TextError};
use bnpair::{Fr, Gt, G1, G2};
use thiserror::Error;

pub use bnpair::SerializationError;
pub use serialization::{deserialize, fr_from_le_bytes, fr_to_le_bytes, serialize};

/// Io-mode constants of the wire protocol. A mode is one radix value,
/// optionally or-ed with the prefix flag.
pub const IO_BIN: i32 = 2;
pub const IO_DEC: i32 = 10;
pub const IO_HEX: i32 = 16;
pub const IO_PREFIX: i32 = 128;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown io mode {0}")]
    UnknownIoMode(i32),
    #[error("output buffer too small: need {needed} bytes, have {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },
    #[error("input is not valid utf-8")]
    NotUtf8,
    #[error(transparent)]
    Text(#[from] TextError),
    #[error("serialization either failed or data is invalid")]
    Serialization(#[from] SerializationError),
}

/// Decodes an io mode. Mode 0 is accepted as decimal, the historical
/// default of the wire protocol.
pub fn io_format_from_mode(mode: i32) -> Result<IoFormat, Error> {
    let prefix = mode & IO_PREFIX != 0;
    let radix = match mode & !IO_PREFIX {
        0 | IO_DEC => Radix::Dec,
        IO_BIN => Radix::Bin,
        IO_HEX => Radix::Hex,
        _ => return Err(Error::UnknownIoMode(mode)),
    };
    Ok(IoFormat { radix, prefix })
}

// Plain dec/hex modes NUL-terminate so the buffer is directly usable as a
// C string; prefixed and binary modes do not, mirroring the original
// surface.
fn wants_nul(mode: i32) -> bool {
    mode == IO_DEC || mode == IO_HEX
}

fn copy_text_out(buf: &mut [u8], out: &str, nul: bool) -> Result<usize, Error> {
    let needed = out.len() + usize::from(nul);
    if needed > buf.len() {
        return Err(Error::BufferTooSmall {
            needed,
            capacity: buf.len(),
        });
    }
    buf[..out.len()].copy_from_slice(out.as_bytes());
    if nul {
        buf[out.len()] = 0;
    }
    Ok(out.len())
}

fn input_str(bytes: &[u8]) -> Result<&str, Error> {
    std::str::from_utf8(bytes).map_err(|_| Error::NotUtf8)
}

pub fn fr_get_str(buf: &mut [u8], x: &Fr, mode: i32) -> Result<usize, Error> {
    let format = io_format_from_mode(mode)?;
    copy_text_out(buf, &text::fr_to_string(x, format), wants_nul(mode))
}

pub fn fr_set_str(input: &[u8], mode: i32) -> Result<Fr, Error> {
    Ok(text::fr_from_str(input_str(input)?, io_format_from_mode(mode)?)?)
}

pub fn g1_get_str(buf: &mut [u8], p: &G1, mode: i32) -> Result<usize, Error> {
    let format = io_format_from_mode(mode)?;
    copy_text_out(buf, &text::g1_to_string(p, format), wants_nul(mode))
}

pub fn g1_set_str(input: &[u8], mode: i32) -> Result<G1, Error> {
    Ok(text::g1_from_str(input_str(input)?, io_format_from_mode(mode)?)?)
}

pub fn g2_get_str(buf: &mut [u8], p: &G2, mode: i32) -> Result<usize, Error> {
    let format = io_format_from_mode(mode)?;
    copy_text_out(buf, &text::g2_to_string(p, format), wants_nul(mode))
}

pub fn g2_set_str(input: &[u8], mode: i32) -> Result<G2, Error> {
    Ok(text::g2_from_str(input_str(input)?, io_format_from_mode(mode)?)?)
}

pub fn gt_get_str(buf: &mut [u8], f: &Gt, mode: i32) -> Result<usize, Error> {
    let format = io_format_from_mode(mode)?;
    copy_text_out(buf, &text::gt_to_string(f, format), wants_nul(mode))
}

pub fn gt_set_str(input: &[u8], mode: i32) -> Result<Gt, Error> {
    Ok(text::gt_from_str(input_str(input)?, io_format_from_mode(mode)?)?)
}

/// Order of the curve groups (= the Fr modulus) as a NUL-terminated
/// decimal string.
pub fn curve_order(buf: &mut [u8]) -> Result<usize, Error> {
    modulus_string(buf, bnpair::fr_modulus_limbs())
}

/// Base-field modulus as a NUL-terminated decimal string.
pub fn field_order(buf: &mut [u8]) -> Result<usize, Error> {
    modulus_string(buf, bnpair::fq_modulus_limbs())
}

fn modulus_string(buf: &mut [u8], limbs: [u64; bnpair::LIMBS]) -> Result<usize, Error> {
    let mut digits = [0u8; 96];
    let written = limb_codec::array_to_dec(&mut digits, &limbs);
    debug_assert!(written > 0);
    let out = std::str::from_utf8(&digits[digits.len() - written..]).expect("decimal is ascii");
    copy_text_out(buf, out, true)
}

/// Number of 64-bit units in a base-field element.
pub fn op_unit_size() -> usize {
    bnpair::LIMBS
}

pub fn fr_byte_size() -> usize {
    32
}

pub fn g1_byte_size() -> usize {
    32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_mode_decoding() {
        assert_eq!(io_format_from_mode(IO_DEC).unwrap(), IoFormat::DEC);
        assert_eq!(io_format_from_mode(IO_HEX).unwrap(), IoFormat::HEX);
        assert_eq!(io_format_from_mode(IO_BIN).unwrap(), IoFormat::BIN);
        assert_eq!(io_format_from_mode(0).unwrap(), IoFormat::DEC);

        let hex_prefixed = io_format_from_mode(IO_HEX | IO_PREFIX).unwrap();
        assert_eq!(hex_prefixed.radix, Radix::Hex);
        assert!(hex_prefixed.prefix);

        assert!(matches!(
            io_format_from_mode(7),
            Err(Error::UnknownIoMode(7))
        ));
    }

    #[test]
    fn get_str_nul_terminates_plain_modes() {
        let x = Fr::from(255u64);

        let mut buf = [0xaau8; 8];
        let n = fr_get_str(&mut buf, &x, IO_DEC).unwrap();
        assert_eq!(&buf[..n], b"255");
        assert_eq!(buf[n], 0);

        let mut buf = [0xaau8; 8];
        let n = fr_get_str(&mut buf, &x, IO_HEX | IO_PREFIX).unwrap();
        assert_eq!(&buf[..n], b"0xff");
        assert_ne!(buf[n], 0, "prefixed modes are not NUL-terminated");
    }

    #[test]
    fn get_str_capacity_is_exact() {
        let x = Fr::from(255u64);

        // "255" + NUL needs 4 bytes
        let mut buf = [0u8; 4];
        assert!(fr_get_str(&mut buf, &x, IO_DEC).is_ok());

        let mut buf = [0u8; 3];
        assert!(matches!(
            fr_get_str(&mut buf, &x, IO_DEC),
            Err(Error::BufferTooSmall {
                needed: 4,
                capacity: 3
            })
        ));
    }

    #[test]
    fn set_str_round_trips() {
        let x = bnpair::rand_fr();
        let mut buf = [0u8; 128];
        let n = fr_get_str(&mut buf, &x, IO_DEC).unwrap();
        assert_eq!(fr_set_str(&buf[..n], IO_DEC).unwrap(), x);

        let p = bnpair::hash::hash_to_g1(b"seed");
        let mut buf = [0u8; 512];
        let n = g1_get_str(&mut buf, &p, IO_HEX).unwrap();
        assert_eq!(g1_set_str(&buf[..n], IO_HEX).unwrap(), p);

        let f = bnpair::pairing::pairing(&p, &bnpair::hash::hash_to_g2(b"seed"));
        let mut buf = [0u8; 1024];
        let n = gt_get_str(&mut buf, &f, IO_DEC).unwrap();
        assert_eq!(gt_set_str(&buf[..n], IO_DEC).unwrap(), f);
    }

    #[test]
    fn set_str_rejects_bad_input() {
        assert!(fr_set_str(b"12a", IO_DEC).is_err());
        assert!(fr_set_str(b"", IO_DEC).is_err());
        assert!(fr_set_str(&[0xff, 0xfe], IO_DEC).is_err());
        assert!(g1_set_str(b"1 1 1", IO_DEC).is_err());
    }

    #[test]
    fn known_moduli() {
        let mut buf = [0u8; 96];
        let n = curve_order(&mut buf).unwrap();
        assert_eq!(
            &buf[..n],
            &b"21888242871839275222246405745257275088548364400416034343698204186575808495617"[..]
        );
        assert_eq!(buf[n], 0);

        let n = field_order(&mut buf).unwrap();
        assert_eq!(
            &buf[..n],
            &b"21888242871839275222246405745257275088696311157297823662689037894645226208583"[..]
        );
    }

    #[test]
    fn sizes() {
        assert_eq!(op_unit_size(), 4);
        assert_eq!(fr_byte_size(), 32);
        assert_eq!(g1_byte_size(), 32);
    }
}
