//! shares, points and the input structure they arrive in

use crate::decoder;
use crate::error::{RecoveryError, Result};
use num_bigint::BigInt;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// One encoded evaluation of the secret polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    index: u64,
    base: u32,
    encoded_value: String,
}

impl Share {
    pub fn new(index: u64, base: u32, encoded_value: impl Into<String>) -> Self {
        Share {
            index,
            base,
            encoded_value: encoded_value.into(),
        }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn encoded_value(&self) -> &str {
        &self.encoded_value
    }

    pub fn decode(&self) -> Result<Point> {
        Ok(Point {
            x: BigInt::from(self.index),
            y: decoder::decode(&self.encoded_value, self.base)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The shares available for one reconstruction together with `n` and `k`.
///
/// Built through [`ShareSet::new`] or [`ShareSet::from_json`], both of which
/// enforce `1 <= k <= n` and positive, unique share indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSet {
    total: usize,
    threshold: usize,
    shares: BTreeMap<u64, Share>,
}

impl ShareSet {
    pub fn new(
        total: usize,
        threshold: usize,
        shares: impl IntoIterator<Item = Share>,
    ) -> Result<Self> {
        if threshold == 0 || threshold > total {
            return Err(RecoveryError::MalformedInput(format!(
                "threshold k = {threshold} must satisfy 1 <= k <= n = {total}"
            )));
        }

        let mut indexed = BTreeMap::new();

        for share in shares {
            if share.index == 0 {
                return Err(RecoveryError::MalformedInput(
                    "share index 0 would expose the secret point".to_string(),
                ));
            }

            if let Some(previous) = indexed.insert(share.index, share) {
                return Err(RecoveryError::MalformedInput(format!(
                    "share index {} appears more than once",
                    previous.index
                )));
            }
        }

        Ok(ShareSet {
            total,
            threshold,
            shares: indexed,
        })
    }

    /// Parses the `{"keys": {"n": .., "k": ..}, "1": {"base": .., "value": ..}, ..}` layout.
    pub fn from_json(text: &str) -> Result<Self> {
        let document: RawDocument = serde_json::from_str(text)?;

        document.into_share_set()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn degree(&self) -> usize {
        self.threshold - 1
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn get(&self, index: u64) -> Option<&Share> {
        self.shares.get(&index)
    }

    /// Shares in ascending index order.
    pub fn shares(&self) -> impl Iterator<Item = &Share> {
        self.shares.values()
    }
}

#[derive(Deserialize)]
struct RawDocument {
    keys: RawKeys,
    #[serde(flatten)]
    shares: BTreeMap<String, RawShare>,
}

#[derive(Deserialize)]
struct RawKeys {
    n: usize,
    k: usize,
}

#[derive(Deserialize)]
struct RawShare {
    base: RawBase,
    value: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBase {
    Number(u32),
    Text(String),
}

impl RawBase {
    fn parse(&self, index: &str) -> Result<u32> {
        match self {
            RawBase::Number(base) => Ok(*base),
            RawBase::Text(text) => text.trim().parse().map_err(|_| {
                RecoveryError::MalformedInput(format!("share {index} has non-numeric base {text:?}"))
            }),
        }
    }
}

impl RawDocument {
    fn into_share_set(self) -> Result<ShareSet> {
        let shares = self
            .shares
            .iter()
            .map(|(key, raw)| {
                let index = key.parse::<u64>().map_err(|_| {
                    RecoveryError::MalformedInput(format!("share key {key:?} is not an index"))
                })?;

                Ok(Share::new(index, raw.base.parse(key)?, raw.value.trim()))
            })
            .collect::<Result<Vec<_>>>()?;

        ShareSet::new(self.keys.n, self.keys.k, shares)
    }
}
