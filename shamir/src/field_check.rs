//! independent check of a recovered secret over the BN254 scalar field
//!
//! Reducing every point modulo the field order and interpolating there must
//! give the secret modulo the same order, as long as the rational constant
//! term was an integer to begin with.

use crate::error::{RecoveryError, Result};
use crate::share::Point;
use ark_bn254::Fr;
use ark_ff::PrimeField;
use num_bigint::{BigInt, Sign};
use polynomials::UnivariatePolynomial;

pub fn to_field(value: &BigInt) -> Fr {
    let (sign, magnitude) = value.to_bytes_le();
    let element = Fr::from_le_bytes_mod_order(&magnitude);

    match sign {
        Sign::Minus => -element,
        _ => element,
    }
}

pub fn verify(points: &[Point], secret: &BigInt) -> Result<()> {
    let (x_points, y_points): (Vec<Fr>, Vec<Fr>) = points
        .iter()
        .map(|point| (to_field(&point.x), to_field(&point.y)))
        .unzip();

    let polynomial = UnivariatePolynomial::interpolate(&x_points, &y_points).ok_or_else(|| {
        RecoveryError::FieldCheckFailed("x coordinates collide modulo the field order".to_string())
    })?;

    let interpolated = polynomial.evaluate(Fr::from(0u64));
    let expected = to_field(secret);

    if interpolated == expected {
        Ok(())
    } else {
        Err(RecoveryError::FieldCheckFailed(format!(
            "secret reduces to {expected} but the field interpolation gives {interpolated}"
        )))
    }
}
