//! the full decode, select and solve pipeline for one share set

use crate::error::Result;
use crate::field_check;
use crate::observer::ReconstructionObserver;
use crate::selector::select_points;
use crate::share::{Point, ShareSet};
use crate::solver::{ConstantSolver, Strategy};
use log::info;
use num_bigint::BigInt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub secret: BigInt,
    pub points: Vec<Point>,
    pub strategy: Strategy,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Reconstructor {
    strategy: Strategy,
    field_check: bool,
}

impl Reconstructor {
    pub fn new(strategy: Strategy) -> Self {
        Reconstructor {
            strategy,
            field_check: false,
        }
    }

    pub fn with_field_check(mut self, enabled: bool) -> Self {
        self.field_check = enabled;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn reconstruct(
        &self,
        shares: &ShareSet,
        observer: &mut dyn ReconstructionObserver,
    ) -> Result<Reconstruction> {
        let points = select_points(shares, shares.threshold(), observer)?;
        info!(
            "Using {} points for degree {} polynomial ({})",
            points.len(),
            shares.degree(),
            self.strategy
        );

        let secret = self.strategy.solve_constant(&points, observer)?;

        if self.field_check {
            field_check::verify(&points, &secret)?;
        }

        observer.secret_recovered(&secret);

        Ok(Reconstruction {
            secret,
            points,
            strategy: self.strategy,
        })
    }
}
