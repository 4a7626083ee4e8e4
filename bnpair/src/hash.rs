//! Hashing into the scalar field and onto the curve.
//!
//! The curve mapping is try-and-increment: hash a counter alongside the
//! message, reduce to a base-field candidate x, and solve the curve
//! equation until a square root exists. The cofactor is cleared so the
//! result always lands in the prime-order subgroup.

use ark_bn254::{g1, g2};
use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ec::AffineRepr;
use ark_ff::{Field, PrimeField};
use sha2::{Digest, Sha256};

use crate::{Fq, Fq2, Fr, G1, G2};

/// Hashes a byte buffer to a scalar.
pub fn hash_to_fr(data: &[u8]) -> Fr {
    Fr::from_le_bytes_mod_order(&Sha256::digest(data))
}

pub fn hash_to_g1(data: &[u8]) -> G1 {
    for counter in 0u64.. {
        let x = Fq::from_be_bytes_mod_order(&hash_with_counter(b"g1", counter, data));
        if let Some(point) = point_from_x::<g1::Config>(x) {
            return point.into();
        }
    }
    unreachable!("a curve point is found after a few counter increments")
}

pub fn hash_to_g2(data: &[u8]) -> G2 {
    for counter in 0u64.. {
        let c0 = Fq::from_be_bytes_mod_order(&hash_with_counter(b"g2c0", counter, data));
        let c1 = Fq::from_be_bytes_mod_order(&hash_with_counter(b"g2c1", counter, data));
        if let Some(point) = point_from_x::<g2::Config>(Fq2::new(c0, c1)) {
            return point.into();
        }
    }
    unreachable!("a curve point is found after a few counter increments")
}

fn hash_with_counter(tag: &[u8], counter: u64, data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(tag);
    hasher.update(counter.to_be_bytes());
    hasher.update(data);
    hasher.finalize().into()
}

// Solves y^2 = x^3 + a*x + b for the candidate x; the subgroup is reached
// by clearing the cofactor, which also keeps G1 (cofactor one) unchanged.
fn point_from_x<P: SWCurveConfig>(x: P::BaseField) -> Option<Affine<P>> {
    let y_squared = x.square() * x + P::COEFF_A * x + P::COEFF_B;
    let y = y_squared.sqrt()?;
    Some(Affine::new_unchecked(x, y).clear_cofactor())
}
