//! constant term by Lagrange interpolation at x = 0

use crate::error::{RecoveryError, Result};
use crate::observer::ReconstructionObserver;
use crate::share::Point;
use crate::solver::{round_to_integer, ConstantSolver};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

#[derive(Debug, Default, Clone, Copy)]
pub struct LagrangeSolver;

impl LagrangeSolver {
    /// Exact value of the interpolating polynomial at zero:
    /// `f(0) = Σ y_i · Π_{j≠i} (-x_j) / (x_i - x_j)`.
    pub fn constant_term(points: &[Point]) -> Result<BigRational> {
        if points.is_empty() {
            return Err(RecoveryError::InsufficientShares {
                required: 1,
                available: 0,
                rejected: Vec::new(),
            });
        }

        let mut sum = BigRational::zero();

        for (i, point_i) in points.iter().enumerate() {
            let mut numerator = point_i.y.clone();
            let mut denominator = BigInt::one();

            for (j, point_j) in points.iter().enumerate() {
                if i == j {
                    continue;
                }

                let difference = &point_i.x - &point_j.x;

                if difference.is_zero() {
                    return Err(RecoveryError::DuplicateAbscissa {
                        x: point_i.x.clone(),
                    });
                }

                numerator *= -&point_j.x;
                denominator *= difference;
            }

            sum += BigRational::new(numerator, denominator);
        }

        Ok(sum)
    }
}

impl ConstantSolver for LagrangeSolver {
    fn name(&self) -> &'static str {
        "lagrange"
    }

    fn solve_constant(
        &self,
        points: &[Point],
        observer: &mut dyn ReconstructionObserver,
    ) -> Result<BigInt> {
        let constant = Self::constant_term(points)?;
        observer.constant_interpolated(&constant);

        Ok(round_to_integer(&constant))
    }
}
