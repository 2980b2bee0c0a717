//! deterministic choice of the points used for reconstruction

use crate::error::{RecoveryError, Result};
use crate::observer::ReconstructionObserver;
use crate::share::{Point, ShareSet};

/// Decodes shares in ascending index order until `k` points are collected.
///
/// Shares that fail to decode are skipped and reported to the observer; shares
/// past the k-th decodable one are never looked at. When too few points remain,
/// the skipped shares travel with the error.
pub fn select_points(
    shares: &ShareSet,
    k: usize,
    observer: &mut dyn ReconstructionObserver,
) -> Result<Vec<Point>> {
    if k == 0 {
        return Err(RecoveryError::MalformedInput(
            "at least one point is needed to reconstruct a secret".to_string(),
        ));
    }

    let mut points = Vec::with_capacity(k);
    let mut rejected = Vec::new();

    for share in shares.shares() {
        match share.decode() {
            Ok(point) => {
                observer.point_decoded(share, &point);
                points.push(point);
            }
            Err(err) => {
                observer.share_rejected(share, &err);
                rejected.push((share.index(), err));
            }
        }

        if points.len() == k {
            return Ok(points);
        }
    }

    Err(RecoveryError::InsufficientShares {
        required: k,
        available: points.len(),
        rejected,
    })
}
