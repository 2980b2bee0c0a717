//! Recovery of a Shamir secret from a threshold of base-encoded shares.
//!
//! Share values are decoded into arbitrary precision integers, the first `k`
//! decodable shares are turned into points and the constant term of the
//! interpolating polynomial is computed exactly, either by Lagrange
//! interpolation or by solving the Vandermonde system.

pub mod decoder;
pub mod error;
pub mod field_check;
pub mod lagrange;
pub mod linear_system;
pub mod observer;
pub mod reconstruct;
pub mod selector;
pub mod share;
pub mod solver;

pub use error::{RecoveryError, Result};
pub use lagrange::LagrangeSolver;
pub use linear_system::{AugmentedMatrix, LinearSystemSolver};
pub use observer::{AuditTranscript, LogObserver, NoopObserver, ReconstructionObserver};
pub use reconstruct::{Reconstruction, Reconstructor};
pub use share::{Point, Share, ShareSet};
pub use solver::{ConstantSolver, Strategy};

pub use num_bigint::BigInt;
pub use num_rational::BigRational;

/// Recovers the secret with the default Lagrange strategy and no observer.
pub fn recover_secret(shares: &ShareSet) -> Result<BigInt> {
    Reconstructor::default()
        .reconstruct(shares, &mut NoopObserver)
        .map(|reconstruction| reconstruction.secret)
}
