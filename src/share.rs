use std::{collections::BTreeMap, str::FromStr};

use log::{debug, warn};
use rug::Integer;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    numeral::{decode, DecodeError},
    rec::{
        majority::{Consensus, FailedRec, MajorityRec},
        point::Point,
    },
};

/// A single share: the value of the secret polynomial at `x`,
/// written in base `base`
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Share {
    pub x: Integer,
    pub base: Integer,
    pub digits: String,
}

impl Share {
    pub fn decode(&self) -> Result<Point, DecodeError> {
        let y = decode(&self.base, &self.digits)?;
        Ok(Point {
            x: self.x.clone(),
            y,
        })
    }
}

/// A share set as distributed to the participants
///
/// In JSON format, a share set looks like
/// ```json
/// {
///     "keys": { "n": 4, "k": 3 },
///     "1": { "base": "10", "value": "4" },
///     "2": { "base": 2, "value": "111" }
/// }
/// ```
/// Each share is keyed by its decimal index `x`. Shares may be
/// missing, `n` only bounds the indices.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShareSet {
    /// Total number of distributed shares
    pub n: usize,
    /// Reconstruction threshold, i.e. polynomial degree + 1
    pub k: usize,
    /// Present shares, ordered by index
    pub shares: Vec<Share>,
}

#[derive(Debug, Error)]
pub enum ShareSetError {
    #[error("Failed to parse share set: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid share index '{0}'")]
    InvalidIndex(String),
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
}

impl ShareSet {
    pub fn from_json(json: &str) -> Result<Self, ShareSetError> {
        let raw: RawShareSet = serde_json::from_str(json)?;
        raw.try_into()
    }

    /// Decode all shares into points
    ///
    /// Shares with undecodable values are skipped.
    pub fn points(&self) -> Vec<Point> {
        let mut pts = Vec::with_capacity(self.shares.len());
        for share in &self.shares {
            match share.decode() {
                Ok(pt) => {
                    debug!("Share {} decodes to {}", share.x, pt.y);
                    pts.push(pt)
                }
                Err(err) => warn!("Dropping share {}: {err}", share.x),
            }
        }
        pts
    }

    /// Reconstruct the secret by majority vote
    pub fn reconstruct(&self) -> Result<Consensus, FailedRec> {
        MajorityRec::new(self.k).rec(&self.points())
    }
}

impl FromStr for ShareSet {
    type Err = ShareSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

#[derive(Clone, Debug, Deserialize)]
struct RawShareSet {
    keys: RawKeys,
    #[serde(flatten)]
    shares: BTreeMap<String, RawShare>,
}

#[derive(Clone, Debug, Deserialize)]
struct RawKeys {
    n: NumOrStr,
    k: NumOrStr,
}

#[derive(Clone, Debug, Deserialize)]
struct RawShare {
    base: NumOrStr,
    value: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Num(u64),
    Str(String),
}

impl NumOrStr {
    fn to_integer(&self) -> Result<Integer, ShareSetError> {
        match self {
            Self::Num(n) => Ok(Integer::from(*n)),
            Self::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| ShareSetError::InvalidNumber(s.clone())),
        }
    }

    fn to_usize(&self) -> Result<usize, ShareSetError> {
        self.to_integer()?.to_usize().ok_or_else(|| {
            ShareSetError::InvalidNumber(match self {
                Self::Num(n) => n.to_string(),
                Self::Str(s) => s.clone(),
            })
        })
    }
}

impl TryFrom<RawShareSet> for ShareSet {
    type Error = ShareSetError;

    fn try_from(raw: RawShareSet) -> Result<Self, Self::Error> {
        let n = raw.keys.n.to_usize()?;
        let k = raw.keys.k.to_usize()?;
        let mut shares = Vec::with_capacity(raw.shares.len());
        for (idx, share) in raw.shares {
            let x: Integer = idx
                .parse()
                .map_err(|_| ShareSetError::InvalidIndex(idx.clone()))?;
            if x < 1 || x > n {
                warn!("Share index {x} outside of expected range 1..={n}");
            }
            shares.push(Share {
                x,
                base: share.base.to_integer()?,
                digits: share.value,
            });
        }
        shares.sort();
        Ok(Self { n, k, shares })
    }
}
