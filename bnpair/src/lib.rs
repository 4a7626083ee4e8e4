//! Thin wrapper over the arkworks BN254 engine exposing the element
//! vocabulary the binding surface needs: scalar field (Fr), base field
//! (Fq), the two source groups, the target field (Gt = Fq12), textual
//! element I/O, hash-to-curve and Lagrange interpolation.
//!
//! The curve arithmetic itself is consumed opaquely; nothing here
//! reimplements field or group operations.

pub mod hash;
pub mod lagrange;
pub mod pairing;
pub mod text;

/// Re-exports of the engine traits that callers of this crate need,
/// avoiding a direct arkworks dependency in the binding crates.
pub mod trait_defs {
    pub use ark_ec::{CurveGroup, Group};
    pub use ark_ff::{Field, One, PrimeField, UniformRand, Zero};
    pub use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
}

use ark_ff::{PrimeField, UniformRand};

pub use ark_bn254::{Fq, Fq12, Fq2, Fr, G1Affine, G2Affine};
pub use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError};

/// Source group elements are carried in projective form; the target group
/// element is the raw Fq12 value, so Gt arithmetic is field arithmetic.
pub type G1 = ark_bn254::G1Projective;
pub type G2 = ark_bn254::G2Projective;
pub type Gt = Fq12;

pub use pairing::G2Prepared;

/// Number of 64-bit limbs in an Fr/Fq representation.
pub const LIMBS: usize = 4;

/// Whether the raw limb representation of a scalar is below the modulus.
///
/// Elements built through this crate always are; the check exists for
/// memory that crossed an ABI boundary unvalidated.
pub fn fr_in_range(x: &Fr) -> bool {
    x.0 < Fr::MODULUS
}

pub fn fq_in_range(x: &Fq) -> bool {
    x.0 < Fq::MODULUS
}

/// Samples a uniformly random scalar from the thread CSPRNG.
pub fn rand_fr() -> Fr {
    Fr::rand(&mut rand::thread_rng())
}

/// Little-endian u64 limbs of the group order (the Fr modulus).
pub fn fr_modulus_limbs() -> [u64; LIMBS] {
    Fr::MODULUS.0
}

/// Little-endian u64 limbs of the base-field modulus.
pub fn fq_modulus_limbs() -> [u64; LIMBS] {
    Fq::MODULUS.0
}
