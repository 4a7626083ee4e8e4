//! Lagrange interpolation at zero and Horner polynomial evaluation,
//! generic over the value side so the same code serves scalars and group
//! elements (the coefficients of a polynomial over G1/G2 are points).

use ark_ff::{batch_inversion, One, Zero};
use std::ops::{Add, Mul};
use thiserror::Error;

use crate::Fr;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LagrangeError {
    #[error("no sample points supplied")]
    Empty,
    #[error("{xs} abscissae do not match {ys} values")]
    LengthMismatch { xs: usize, ys: usize },
    #[error("abscissae must be distinct")]
    DuplicateAbscissa,
    #[error("abscissae must be non-zero (interpolation evaluates at zero)")]
    ZeroAbscissa,
}

/// Recovers f(0) from samples (x_i, f(x_i)).
///
/// Computes sum y_i * l_i(0) with l_i(0) = prod_{j != i} x_j / (x_j - x_i),
/// batch-inverting the denominators. The x_i must be distinct and
/// non-zero.
pub fn interpolate<Y>(xs: &[Fr], ys: &[Y]) -> Result<Y, LagrangeError>
where
    Y: Copy + Zero + Add<Output = Y> + Mul<Fr, Output = Y>,
{
    let k = xs.len();
    if k == 0 {
        return Err(LagrangeError::Empty);
    }
    if ys.len() != k {
        return Err(LagrangeError::LengthMismatch {
            xs: k,
            ys: ys.len(),
        });
    }
    if xs.iter().any(Fr::is_zero) {
        return Err(LagrangeError::ZeroAbscissa);
    }
    if k == 1 {
        return Ok(ys[0]);
    }

    let mut numerators = Vec::with_capacity(k);
    let mut denominators = Vec::with_capacity(k);
    for i in 0..k {
        let mut numerator = Fr::one();
        let mut denominator = Fr::one();
        for j in 0..k {
            if j != i {
                numerator *= xs[j];
                denominator *= xs[j] - xs[i];
            }
        }
        if denominator.is_zero() {
            return Err(LagrangeError::DuplicateAbscissa);
        }
        numerators.push(numerator);
        denominators.push(denominator);
    }
    batch_inversion(&mut denominators);

    let mut acc = Y::zero();
    for i in 0..k {
        acc = acc + ys[i] * (numerators[i] * denominators[i]);
    }
    Ok(acc)
}

/// Evaluates c_0 + c_1 x + ... + c_{n-1} x^{n-1} by Horner's rule.
pub fn evaluate_polynomial<Y>(coefficients: &[Y], x: Fr) -> Result<Y, LagrangeError>
where
    Y: Copy + Zero + Add<Output = Y> + Mul<Fr, Output = Y>,
{
    let mut iter = coefficients.iter().rev();
    let mut acc = match iter.next() {
        Some(top) => *top,
        None => return Err(LagrangeError::Empty),
    };
    for c in iter {
        acc = acc * x + *c;
    }
    Ok(acc)
}
