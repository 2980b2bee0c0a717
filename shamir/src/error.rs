//! errors raised while reconstructing a secret

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecoveryError {
    #[error("base {base} is outside the supported range 2..=36")]
    InvalidBase { base: u32 },

    #[error("digit {digit:?} is not valid in base {base}")]
    InvalidDigit { digit: char, base: u32 },

    /// `rejected` holds the index and decode error of every share that was skipped
    #[error(
        "not enough decodable shares to reconstruct secret (need {required}, found {available}, {} rejected)",
        .rejected.len()
    )]
    InsufficientShares {
        required: usize,
        available: usize,
        rejected: Vec<(u64, RecoveryError)>,
    },

    /// Two points with the same x make a Lagrange basis denominator vanish
    #[error("two points share the abscissa x = {x}")]
    DuplicateAbscissa { x: BigInt },

    #[error("linear system has no unique solution (zero pivot in column {column})")]
    SingularSystem { column: usize },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("solvers disagree: lagrange gave {lagrange}, linear system gave {linear_system}")]
    SolverDisagreement {
        lagrange: BigInt,
        linear_system: BigInt,
    },

    #[error("field cross-check failed: {0}")]
    FieldCheckFailed(String),
}

impl From<serde_json::Error> for RecoveryError {
    fn from(err: serde_json::Error) -> Self {
        RecoveryError::MalformedInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RecoveryError>;
