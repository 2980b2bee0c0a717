//! interchangeable ways of turning selected points into the secret

use crate::error::{RecoveryError, Result};
use crate::lagrange::LagrangeSolver;
use crate::linear_system::LinearSystemSolver;
use crate::observer::ReconstructionObserver;
use crate::share::Point;
use log::warn;
use num_bigint::BigInt;
use num_rational::BigRational;
use std::fmt;
use std::str::FromStr;

/// Computes the constant term of the polynomial through `points`.
pub trait ConstantSolver {
    fn name(&self) -> &'static str;

    fn solve_constant(
        &self,
        points: &[Point],
        observer: &mut dyn ReconstructionObserver,
    ) -> Result<BigInt>;
}

/// Nearest integer, halves rounded away from zero.
pub(crate) fn round_to_integer(value: &BigRational) -> BigInt {
    if !value.is_integer() {
        warn!(
            "Constant term {} is not an integer, rounding to the nearest one",
            value
        );
    }

    value.round().to_integer()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Lagrange,
    LinearSystem,
    /// Runs both solvers and fails unless they agree.
    CrossChecked,
}

impl Strategy {
    pub const VARIANTS: [&'static str; 3] = ["lagrange", "linear-system", "cross-checked"];
}

impl ConstantSolver for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Lagrange => LagrangeSolver.name(),
            Strategy::LinearSystem => LinearSystemSolver.name(),
            Strategy::CrossChecked => "cross-checked",
        }
    }

    fn solve_constant(
        &self,
        points: &[Point],
        observer: &mut dyn ReconstructionObserver,
    ) -> Result<BigInt> {
        match self {
            Strategy::Lagrange => LagrangeSolver.solve_constant(points, observer),
            Strategy::LinearSystem => LinearSystemSolver.solve_constant(points, observer),
            Strategy::CrossChecked => {
                let lagrange = LagrangeSolver.solve_constant(points, observer)?;
                let linear_system = LinearSystemSolver.solve_constant(points, observer)?;

                if lagrange == linear_system {
                    Ok(lagrange)
                } else {
                    Err(RecoveryError::SolverDisagreement {
                        lagrange,
                        linear_system,
                    })
                }
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lagrange" => Ok(Strategy::Lagrange),
            "linear-system" | "gauss" => Ok(Strategy::LinearSystem),
            "cross-checked" | "both" => Ok(Strategy::CrossChecked),
            other => Err(format!(
                "unknown strategy {other:?}, expected one of {}",
                Strategy::VARIANTS.join(", ")
            )),
        }
    }
}
