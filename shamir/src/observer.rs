//! progress and audit hooks for a reconstruction run
//!
//! Observers only watch: none of their methods can change which points are
//! selected or what secret is returned.

use crate::error::RecoveryError;
use crate::share::{Point, Share};
use log::{info, warn};
use num_bigint::BigInt;
use num_rational::BigRational;
use sha3::{Digest, Keccak256};

pub trait ReconstructionObserver {
    fn point_decoded(&mut self, _share: &Share, _point: &Point) {}

    fn share_rejected(&mut self, _share: &Share, _error: &RecoveryError) {}

    /// Exact value at x = 0 before rounding, as found by interpolation.
    fn constant_interpolated(&mut self, _constant: &BigRational) {}

    /// Coefficients of the recovered polynomial, highest degree first.
    fn coefficients_solved(&mut self, _coefficients: &[BigRational]) {}

    fn secret_recovered(&mut self, _secret: &BigInt) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ReconstructionObserver for NoopObserver {}

/// Writes the decoding trace through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ReconstructionObserver for LogObserver {
    fn point_decoded(&mut self, share: &Share, point: &Point) {
        info!(
            "Point {}: {} [Base {}: {:?}]",
            share.index(),
            point,
            share.base(),
            share.encoded_value()
        );
    }

    fn share_rejected(&mut self, share: &Share, error: &RecoveryError) {
        warn!("Skipping share {}: {}", share.index(), error);
    }

    fn constant_interpolated(&mut self, constant: &BigRational) {
        info!("Lagrange interpolation at x = 0 gives {}", constant);
    }

    fn coefficients_solved(&mut self, coefficients: &[BigRational]) {
        let rendered: Vec<String> = coefficients.iter().map(ToString::to_string).collect();

        info!("Coefficients (highest degree first): [{}]", rendered.join(", "));
    }

    fn secret_recovered(&mut self, secret: &BigInt) {
        info!("RESULT: the constant term (c) = {}", secret);
    }
}

/// Keccak-256 sponge over everything a run observed.
///
/// Two runs over the same shares with the same strategy produce the same digest.
pub struct AuditTranscript {
    hasher: Keccak256,
}

impl AuditTranscript {
    pub fn new() -> Self {
        AuditTranscript {
            hasher: Keccak256::new(),
        }
    }

    // every record is length prefixed so adjacent records cannot run together
    fn append(&mut self, label: &[u8], data: &[u8]) {
        self.hasher.update(label);
        self.hasher.update((data.len() as u64).to_le_bytes());
        self.hasher.update(data);
    }

    fn append_integer(&mut self, label: &[u8], value: &BigInt) {
        self.append(label, &value.to_signed_bytes_be());
    }

    pub fn digest(&self) -> Vec<u8> {
        self.hasher.clone().finalize().to_vec()
    }

    pub fn hex_digest(&self) -> String {
        self.digest()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect()
    }
}

impl Default for AuditTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconstructionObserver for AuditTranscript {
    fn point_decoded(&mut self, _share: &Share, point: &Point) {
        self.append_integer(b"point.x", &point.x);
        self.append_integer(b"point.y", &point.y);
    }

    fn share_rejected(&mut self, share: &Share, _error: &RecoveryError) {
        self.append(b"rejected", &share.index().to_le_bytes());
    }

    fn constant_interpolated(&mut self, constant: &BigRational) {
        self.append_integer(b"constant.numer", constant.numer());
        self.append_integer(b"constant.denom", constant.denom());
    }

    fn coefficients_solved(&mut self, coefficients: &[BigRational]) {
        for coefficient in coefficients {
            self.append_integer(b"coefficient.numer", coefficient.numer());
            self.append_integer(b"coefficient.denom", coefficient.denom());
        }
    }

    fn secret_recovered(&mut self, secret: &BigInt) {
        self.append_integer(b"secret", secret);
    }
}

impl<A: ReconstructionObserver, B: ReconstructionObserver> ReconstructionObserver for (A, B) {
    fn point_decoded(&mut self, share: &Share, point: &Point) {
        self.0.point_decoded(share, point);
        self.1.point_decoded(share, point);
    }

    fn share_rejected(&mut self, share: &Share, error: &RecoveryError) {
        self.0.share_rejected(share, error);
        self.1.share_rejected(share, error);
    }

    fn constant_interpolated(&mut self, constant: &BigRational) {
        self.0.constant_interpolated(constant);
        self.1.constant_interpolated(constant);
    }

    fn coefficients_solved(&mut self, coefficients: &[BigRational]) {
        self.0.coefficients_solved(coefficients);
        self.1.coefficients_solved(coefficients);
    }

    fn secret_recovered(&mut self, secret: &BigInt) {
        self.0.secret_recovered(secret);
        self.1.secret_recovered(secret);
    }
}
