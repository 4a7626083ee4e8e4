//! Pairing entry points, including the precomputed-G2 Miller loops.

use ark_bn254::Bn254;
use ark_ec::pairing::{MillerLoopOutput, Pairing};
use ark_ec::CurveGroup;

use crate::{Gt, G1, G2};

/// Precomputed line coefficients for a fixed G2 argument; reusable across
/// many Miller loops.
pub type G2Prepared = <Bn254 as Pairing>::G2Prepared;

/// Full pairing: Miller loop followed by the final exponentiation.
pub fn pairing(p: &G1, q: &G2) -> Gt {
    Bn254::pairing(*p, *q).0
}

/// Miller loop only; the result is not reduced to the pairing subgroup.
pub fn miller_loop(p: &G1, q: &G2) -> Gt {
    Bn254::miller_loop(*p, *q).0
}

/// Final exponentiation of a Miller loop output. `None` when the input is
/// zero (which no Miller loop produces).
pub fn final_exp(f: &Gt) -> Option<Gt> {
    Bn254::final_exponentiation(MillerLoopOutput(*f)).map(|out| out.0)
}

pub fn prepare_g2(q: &G2) -> G2Prepared {
    G2Prepared::from(q.into_affine())
}

pub fn precomputed_miller_loop(p: &G1, q: &G2Prepared) -> Gt {
    Bn254::multi_miller_loop([*p], [q.clone()]).0
}

/// Fused Miller loop over two pairs: the product of both pair's loops.
pub fn precomputed_miller_loop_2(p1: &G1, q1: &G2Prepared, p2: &G1, q2: &G2Prepared) -> Gt {
    Bn254::multi_miller_loop([*p1, *p2], [q1.clone(), q2.clone()]).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fr;
    use ark_ec::Group;
    use ark_ff::Field;

    #[test]
    fn bilinearity() {
        let a = Fr::from(29u64);
        let b = Fr::from(73u64);
        let p = G1::generator();
        let q = G2::generator();

        let lhs = pairing(&(p * a), &(q * b));
        let rhs = pairing(&p, &q).pow([29 * 73u64]);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn miller_then_final_exp_is_pairing() {
        let p = G1::generator() * Fr::from(5u64);
        let q = G2::generator() * Fr::from(11u64);

        let full = pairing(&p, &q);
        let staged = final_exp(&miller_loop(&p, &q)).unwrap();
        assert_eq!(full, staged);
    }

    #[test]
    fn precomputed_loop_matches_plain_loop() {
        let p = G1::generator() * Fr::from(3u64);
        let q = G2::generator() * Fr::from(4u64);

        let prepared = prepare_g2(&q);
        assert_eq!(precomputed_miller_loop(&p, &prepared), miller_loop(&p, &q));
    }

    #[test]
    fn fused_two_pair_loop() {
        let p1 = G1::generator() * Fr::from(2u64);
        let q1 = G2::generator() * Fr::from(3u64);
        let p2 = G1::generator() * Fr::from(5u64);
        let q2 = G2::generator() * Fr::from(7u64);

        let fused = precomputed_miller_loop_2(&p1, &prepare_g2(&q1), &p2, &prepare_g2(&q2));
        assert_eq!(fused, miller_loop(&p1, &q1) * miller_loop(&p2, &q2));
    }
}
