//! polynomial coefficients from a Vandermonde system
//!
//! Each selected point contributes one row `[x^d, x^(d-1), .., 1 | y]`. The
//! system is brought to reduced row echelon form with Gauss-Jordan elimination
//! and partial pivoting. All arithmetic is exact, so the constant term matches
//! the Lagrange path bit for bit.

use crate::error::{RecoveryError, Result};
use crate::observer::ReconstructionObserver;
use crate::share::Point;
use crate::solver::{round_to_integer, ConstantSolver};
use log::debug;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// `degree + 1` rows by `degree + 2` columns, the last column holding the y values.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    rows: Vec<Vec<BigRational>>,
}

impl AugmentedMatrix {
    pub fn vandermonde(points: &[Point], degree: usize) -> Self {
        let rows = points
            .iter()
            .take(degree + 1)
            .map(|point| {
                let mut row = Vec::with_capacity(degree + 2);
                let mut power = BigInt::one();

                for _ in 0..=degree {
                    row.push(BigRational::from_integer(power.clone()));
                    power *= &point.x;
                }

                row.reverse();
                row.push(BigRational::from_integer(point.y.clone()));
                row
            })
            .collect();

        AugmentedMatrix { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<BigRational>] {
        &self.rows
    }

    // row at or below `column` whose entry in that column is largest in magnitude;
    // ties keep the upper row
    fn pivot_row(&self, column: usize) -> usize {
        let mut best = column;

        for row in column + 1..self.rows.len() {
            if self.rows[row][column].abs() > self.rows[best][column].abs() {
                best = row;
            }
        }

        best
    }

    /// Gauss-Jordan elimination. Consumes the matrix and returns the solution column.
    pub fn solve(mut self) -> Result<Vec<BigRational>> {
        let size = self.rows.len();

        for column in 0..size {
            let pivot = self.pivot_row(column);
            self.rows.swap(column, pivot);

            let pivot_value = self.rows[column][column].clone();

            if pivot_value.is_zero() {
                return Err(RecoveryError::SingularSystem { column });
            }

            // columns left of the pivot are already zero in every row but their own pivot row
            for entry in self.rows[column][column..].iter_mut() {
                *entry = &*entry / &pivot_value;
            }

            let pivot_row = self.rows[column].clone();

            for (row_idx, row) in self.rows.iter_mut().enumerate() {
                if row_idx == column || row[column].is_zero() {
                    continue;
                }

                let factor = row[column].clone();

                for (entry, pivot_entry) in row[column..].iter_mut().zip(&pivot_row[column..]) {
                    *entry = &*entry - &factor * pivot_entry;
                }
            }
        }

        Ok(self.rows.into_iter().map(|row| row[size].clone()).collect())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LinearSystemSolver;

impl LinearSystemSolver {
    /// Coefficients of the degree-`degree` polynomial through the first
    /// `degree + 1` points, highest degree first.
    pub fn solve_polynomial(points: &[Point], degree: usize) -> Result<Vec<BigRational>> {
        if points.len() <= degree {
            return Err(RecoveryError::InsufficientShares {
                required: degree + 1,
                available: points.len(),
                rejected: Vec::new(),
            });
        }

        let matrix = AugmentedMatrix::vandermonde(points, degree);
        debug!(
            "Solving {}x{} augmented Vandermonde system",
            matrix.row_count(),
            matrix.column_count()
        );

        matrix.solve()
    }
}

impl ConstantSolver for LinearSystemSolver {
    fn name(&self) -> &'static str {
        "linear-system"
    }

    fn solve_constant(
        &self,
        points: &[Point],
        observer: &mut dyn ReconstructionObserver,
    ) -> Result<BigInt> {
        let degree = points
            .len()
            .checked_sub(1)
            .ok_or(RecoveryError::InsufficientShares {
                required: 1,
                available: 0,
                rejected: Vec::new(),
            })?;

        let coefficients = Self::solve_polynomial(points, degree)?;
        observer.coefficients_solved(&coefficients);

        let constant = coefficients
            .last()
            .ok_or(RecoveryError::SingularSystem { column: 0 })?;

        Ok(round_to_integer(constant))
    }
}
