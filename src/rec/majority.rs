use std::{cmp::Reverse, collections::HashMap};

use itertools::Itertools;
use log::{debug, trace, warn};
use rug::Integer;
use thiserror::Error;

use crate::rec::{
    lagrange::{interpolate_at_zero, LagrangeError},
    point::Point,
    subsets::Subsets,
};

/// Secret reconstruction by majority vote over all threshold-sized subsets
///
/// Every subset of `threshold` points is interpolated at zero.
/// Subsets with duplicate abscissae or a non-integer result are
/// skipped. The integer obtained from the largest number of subsets
/// is the reconstructed secret.
///
/// If several values share the largest number of votes, the value
/// that received its first vote earliest wins, where subsets are
/// visited in the lexicographic order of the point indices.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MajorityRec {
    threshold: usize,
}

/// Result of a successful majority reconstruction
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Consensus {
    /// The reconstructed secret, i.e. the polynomial value at zero
    pub secret: Integer,
    /// Number of subsets yielding `secret`
    pub votes: usize,
    /// Number of subsets considered
    pub subsets: usize,
    /// Number of subsets yielding any integer
    pub valid_subsets: usize,
    /// Number of distinct integers obtained
    pub candidates: usize,
    /// Abscissae of points that are not part of any subset voting for `secret`
    pub suspects: Vec<Integer>,
}

#[derive(Copy, Clone, Debug, Error, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum FailedRec {
    #[error("Reconstruction threshold has to be at least one")]
    ZeroThreshold,
    #[error("Need at least {needed} points, found {found}")]
    InsufficientPoints { needed: usize, found: usize },
    #[error("Too many subsets of {npts} points with threshold {threshold}")]
    TooManySubsets { npts: usize, threshold: usize },
    #[error("No consensus among {subsets} subsets with {candidates} candidate secrets")]
    NoConsensus { subsets: usize, candidates: usize },
}

impl MajorityRec {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// Number of points needed to interpolate, i.e. polynomial degree + 1
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Reconstruct the secret from the given points
    pub fn rec(&self, pts: &[Point]) -> Result<Consensus, FailedRec> {
        let k = self.threshold;
        if k == 0 {
            return Err(FailedRec::ZeroThreshold);
        }
        if pts.len() < k {
            return Err(FailedRec::InsufficientPoints {
                needed: k,
                found: pts.len(),
            });
        }
        let subsets = Subsets::new(pts.len(), k).ok_or(
            FailedRec::TooManySubsets {
                npts: pts.len(),
                threshold: k,
            },
        )?;
        let nsubsets = subsets.len();
        debug!(
            "Reconstructing from {} points with threshold {k}: {nsubsets} subsets",
            pts.len()
        );
        let mut tally = VoteTally::new(pts.len());
        let mut subset = Vec::with_capacity(k);
        for idx in subsets {
            subset.clear();
            subset.extend(idx.iter().map(|&i| &pts[i]));
            match interpolate_at_zero(&subset) {
                Ok(val) => {
                    trace!("Subset {idx:?} yields {val}");
                    tally.add_vote(val, &idx);
                }
                Err(LagrangeError::NonIntegerResult(val)) => {
                    trace!("Skipping subset {idx:?}: non-integer value {val}");
                }
                Err(err) => {
                    trace!("Skipping subset {idx:?}: {err}");
                }
            }
        }
        tally.into_consensus(pts, nsubsets)
    }
}

/// Reconstruct the secret by majority vote over all `k`-point subsets
///
/// See [MajorityRec] for details.
pub fn reconstruct(pts: &[Point], k: usize) -> Result<Integer, FailedRec> {
    MajorityRec::new(k).rec(pts).map(|c| c.secret)
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct VoteTally {
    npts: usize,
    // in order of first vote
    candidates: Vec<Candidate>,
    pos: HashMap<Integer, usize>,
    valid_subsets: usize,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
struct Candidate {
    val: Integer,
    votes: usize,
    // which points contributed to at least one vote
    support: Vec<bool>,
}

impl VoteTally {
    fn new(npts: usize) -> Self {
        Self {
            npts,
            ..Default::default()
        }
    }

    fn add_vote(&mut self, val: Integer, idx: &[usize]) {
        self.valid_subsets += 1;
        let pos = match self.pos.get(&val) {
            Some(&pos) => pos,
            None => {
                let pos = self.candidates.len();
                self.pos.insert(val.clone(), pos);
                self.candidates.push(Candidate {
                    val,
                    votes: 0,
                    support: vec![false; self.npts],
                });
                pos
            }
        };
        let candidate = &mut self.candidates[pos];
        candidate.votes += 1;
        for &i in idx {
            candidate.support[i] = true;
        }
    }

    fn into_consensus(
        self,
        pts: &[Point],
        subsets: usize,
    ) -> Result<Consensus, FailedRec> {
        let ncandidates = self.candidates.len();
        let no_consensus = FailedRec::NoConsensus {
            subsets,
            candidates: ncandidates,
        };
        let max_votes =
            self.candidates.iter().map(|c| c.votes).max().unwrap_or(0);
        let ntied = self
            .candidates
            .iter()
            .filter(|c| c.votes == max_votes)
            .count();
        // `min_by_key` returns the first of several equal elements
        let Some(winner) = self
            .candidates
            .into_iter()
            .min_by_key(|c| Reverse(c.votes))
        else {
            debug!("None of the {subsets} subsets yields an integer");
            return Err(no_consensus);
        };
        if winner.votes == 1 && ncandidates > 1 {
            debug!("No two subsets agree on a secret");
            return Err(no_consensus);
        }
        if ntied > 1 {
            warn!(
                "{ntied} candidate secrets tied with {max_votes} votes each, choosing {}",
                winner.val
            );
        }
        let suspects = pts
            .iter()
            .zip(&winner.support)
            .filter(|(_, supports)| !**supports)
            .map(|(pt, _)| pt.x.clone())
            .collect_vec();
        debug!(
            "Secret {} with {} of {subsets} votes ({} valid subsets, {ncandidates} candidates)",
            winner.val, winner.votes, self.valid_subsets
        );
        if !suspects.is_empty() {
            warn!(
                "Points not supporting the secret: x = {}",
                suspects.iter().format(", ")
            );
        }
        Ok(Consensus {
            secret: winner.val,
            votes: winner.votes,
            subsets,
            valid_subsets: self.valid_subsets,
            candidates: ncandidates,
            suspects,
        })
    }
}
