//! Textual element I/O.
//!
//! Field elements render as the decimal, hexadecimal or binary expansion
//! of their canonical residue; group elements as `"0"` for the identity or
//! `"1 <coordinates...>"` with space-separated affine coordinates; the
//! target field as its twelve Fq coordinates. All digit work is done by
//! `limb-codec` on the element's u64 limbs.

use ark_bn254::{g1, g2};
use ark_ec::short_weierstrass::Affine;
use ark_ec::CurveGroup;
use ark_ff::{BigInt, Field, PrimeField, Zero};
use limb_codec::{array_to_bin, array_to_dec, array_to_hex, dec_to_array, from_hex_strict};
use thiserror::Error;

use crate::{Fq, Fq2, Fr, Gt, G1, G2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Bin,
    Dec,
    Hex,
}

/// Output/input format for element strings: a radix plus an optional
/// "0x"/"0b" prefix (the prefix only applies to the power-of-two radixes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoFormat {
    pub radix: Radix,
    pub prefix: bool,
}

impl IoFormat {
    pub const DEC: IoFormat = IoFormat {
        radix: Radix::Dec,
        prefix: false,
    };
    pub const HEX: IoFormat = IoFormat {
        radix: Radix::Hex,
        prefix: false,
    };
    pub const BIN: IoFormat = IoFormat {
        radix: Radix::Bin,
        prefix: false,
    };
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    #[error("binary input is not part of the parsing surface")]
    UnsupportedMode,
    #[error("invalid digits in {0:?}")]
    InvalidDigits(String),
    #[error(transparent)]
    Parse(#[from] limb_codec::ParseError),
    #[error("value is not below the field modulus")]
    NotCanonical,
    #[error("malformed point encoding {0:?}")]
    MalformedPoint(String),
    #[error("point is not on the curve or outside the prime-order subgroup")]
    InvalidPoint,
}

fn limbs_to_string(limbs: &[u64], format: IoFormat) -> String {
    // 4 limbs peak at 256 binary digits plus a prefix; GT coordinates are
    // single Fq values so the same bound holds everywhere.
    let mut buf = [0u8; 288];
    let written = match format.radix {
        Radix::Dec => array_to_dec(&mut buf, limbs),
        Radix::Hex => array_to_hex(&mut buf, limbs, format.prefix),
        Radix::Bin => array_to_bin(&mut buf, limbs, format.prefix),
    };
    debug_assert!(written > 0);
    String::from_utf8_lossy(&buf[buf.len() - written..]).into_owned()
}

/// Renders the canonical residue of a prime-field element.
pub fn field_to_string<F>(x: &F, format: IoFormat) -> String
where
    F: PrimeField<BigInt = BigInt<4>>,
{
    limbs_to_string(&x.into_bigint().0, format)
}

/// Parses a prime-field element, rejecting values at or above the modulus.
///
/// Hex input may carry an optional "0x" prefix; binary parsing is not part
/// of the surface and reports [`TextError::UnsupportedMode`].
pub fn field_from_str<F>(s: &str, format: IoFormat) -> Result<F, TextError>
where
    F: PrimeField<BigInt = BigInt<4>>,
{
    let digits = s.as_bytes();
    let mut limbs = [0u64; 4];
    match format.radix {
        Radix::Dec => {
            if digits.is_empty() || dec_to_array(&mut limbs, digits) == 0 {
                return Err(TextError::InvalidDigits(s.to_string()));
            }
        }
        Radix::Hex => {
            let digits = digits.strip_prefix(b"0x").unwrap_or(digits);
            from_hex_strict(&mut limbs, digits)?;
        }
        Radix::Bin => return Err(TextError::UnsupportedMode),
    }
    F::from_bigint(BigInt::new(limbs)).ok_or(TextError::NotCanonical)
}

pub fn fr_to_string(x: &Fr, format: IoFormat) -> String {
    field_to_string(x, format)
}

pub fn fr_from_str(s: &str, format: IoFormat) -> Result<Fr, TextError> {
    field_from_str(s, format)
}

pub fn g1_to_string(p: &G1, format: IoFormat) -> String {
    if p.is_zero() {
        return "0".to_string();
    }
    let affine = p.into_affine();
    format!(
        "1 {} {}",
        field_to_string(&affine.x, format),
        field_to_string(&affine.y, format)
    )
}

pub fn g1_from_str(s: &str, format: IoFormat) -> Result<G1, TextError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    match tokens.as_slice() {
        ["0"] => Ok(G1::zero()),
        ["1", x, y] => {
            let affine = Affine::<g1::Config>::new_unchecked(
                field_from_str(x, format)?,
                field_from_str(y, format)?,
            );
            validated(affine).map(G1::from)
        }
        _ => Err(TextError::MalformedPoint(s.to_string())),
    }
}

pub fn g2_to_string(p: &G2, format: IoFormat) -> String {
    if p.is_zero() {
        return "0".to_string();
    }
    let affine = p.into_affine();
    format!(
        "1 {} {} {} {}",
        field_to_string(&affine.x.c0, format),
        field_to_string(&affine.x.c1, format),
        field_to_string(&affine.y.c0, format),
        field_to_string(&affine.y.c1, format)
    )
}

pub fn g2_from_str(s: &str, format: IoFormat) -> Result<G2, TextError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    match tokens.as_slice() {
        ["0"] => Ok(G2::zero()),
        ["1", x0, x1, y0, y1] => {
            let x = Fq2::new(field_from_str(x0, format)?, field_from_str(x1, format)?);
            let y = Fq2::new(field_from_str(y0, format)?, field_from_str(y1, format)?);
            validated(Affine::<g2::Config>::new_unchecked(x, y)).map(G2::from)
        }
        _ => Err(TextError::MalformedPoint(s.to_string())),
    }
}

pub fn gt_to_string(f: &Gt, format: IoFormat) -> String {
    let coords: Vec<String> = f
        .to_base_prime_field_elements()
        .map(|c| field_to_string(&c, format))
        .collect();
    coords.join(" ")
}

pub fn gt_from_str(s: &str, format: IoFormat) -> Result<Gt, TextError> {
    let coords = s
        .split_whitespace()
        .map(|token| field_from_str::<Fq>(token, format))
        .collect::<Result<Vec<_>, _>>()?;
    if coords.len() != 12 {
        return Err(TextError::MalformedPoint(s.to_string()));
    }
    Gt::from_base_prime_field_elems(&coords).ok_or_else(|| TextError::MalformedPoint(s.to_string()))
}

fn validated<P: ark_ec::short_weierstrass::SWCurveConfig>(
    point: Affine<P>,
) -> Result<Affine<P>, TextError> {
    if point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve() {
        Ok(point)
    } else {
        Err(TextError::InvalidPoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing;
    use ark_ec::Group;
    use ark_ff::One;

    const HEX_PREFIXED: IoFormat = IoFormat {
        radix: Radix::Hex,
        prefix: true,
    };

    #[test]
    fn scalar_strings() {
        assert_eq!(fr_to_string(&Fr::zero(), IoFormat::DEC), "0");
        assert_eq!(fr_to_string(&Fr::one(), IoFormat::DEC), "1");
        assert_eq!(fr_to_string(&Fr::from(255u64), IoFormat::HEX), "ff");
        assert_eq!(fr_to_string(&Fr::from(255u64), HEX_PREFIXED), "0xff");
        assert_eq!(fr_to_string(&Fr::from(5u64), IoFormat::BIN), "101");
        assert_eq!(
            fr_to_string(&Fr::from(1_000_000_007u64), IoFormat::DEC),
            "1000000007"
        );
    }

    #[test]
    fn scalar_round_trip_all_radixes() {
        let x = Fr::from(0xdead_beef_cafe_u64) * Fr::from(0x1234_5678_u64);
        let dec = fr_to_string(&x, IoFormat::DEC);
        let hex = fr_to_string(&x, IoFormat::HEX);
        assert_eq!(fr_from_str(&dec, IoFormat::DEC).unwrap(), x);
        assert_eq!(fr_from_str(&hex, IoFormat::HEX).unwrap(), x);
        assert_eq!(fr_from_str(&format!("0x{hex}"), IoFormat::HEX).unwrap(), x);
    }

    #[test]
    fn scalar_parse_rejections() {
        assert_eq!(
            fr_from_str("12a", IoFormat::DEC),
            Err(TextError::InvalidDigits("12a".to_string()))
        );
        assert_eq!(
            fr_from_str("", IoFormat::DEC),
            Err(TextError::InvalidDigits(String::new()))
        );
        assert!(matches!(
            fr_from_str("zz", IoFormat::HEX),
            Err(TextError::Parse(_))
        ));
        assert_eq!(fr_from_str("101", IoFormat::BIN), Err(TextError::UnsupportedMode));

        // Fr modulus, decimal: smallest non-canonical value
        let modulus = "21888242871839275222246405745257275088548364400416034343698204186575808495617";
        assert_eq!(
            fr_from_str(modulus, IoFormat::DEC),
            Err(TextError::NotCanonical)
        );
    }

    #[test]
    fn g1_strings() {
        assert_eq!(g1_to_string(&G1::zero(), IoFormat::DEC), "0");
        assert_eq!(g1_from_str("0", IoFormat::DEC).unwrap(), G1::zero());

        let g = G1::generator();
        let s = g1_to_string(&g, IoFormat::DEC);
        assert_eq!(s, "1 1 2");
        assert_eq!(g1_from_str(&s, IoFormat::DEC).unwrap(), g);

        let twice = g.double();
        let s = g1_to_string(&twice, IoFormat::HEX);
        assert_eq!(g1_from_str(&s, IoFormat::HEX).unwrap(), twice);
    }

    #[test]
    fn g1_parse_rejections() {
        assert!(matches!(
            g1_from_str("1 1", IoFormat::DEC),
            Err(TextError::MalformedPoint(_))
        ));
        // (1, 1) is not on the curve y^2 = x^3 + 3
        assert_eq!(
            g1_from_str("1 1 1", IoFormat::DEC),
            Err(TextError::InvalidPoint)
        );
    }

    #[test]
    fn g2_round_trip() {
        let q = G2::generator() * Fr::from(7u64);
        let s = g2_to_string(&q, IoFormat::HEX);
        assert_eq!(g2_from_str(&s, IoFormat::HEX).unwrap(), q);
        assert_eq!(g2_from_str("0", IoFormat::HEX).unwrap(), G2::zero());
    }

    #[test]
    fn gt_round_trip() {
        let f = pairing::pairing(&G1::generator(), &G2::generator());
        let s = gt_to_string(&f, IoFormat::DEC);
        assert_eq!(s.split_whitespace().count(), 12);
        assert_eq!(gt_from_str(&s, IoFormat::DEC).unwrap(), f);
    }
}
