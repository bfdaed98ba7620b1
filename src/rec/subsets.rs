use std::iter::FusedIterator;

use rug::Integer;

/// Iterator over all `k`-element subsets of the indices `0..n`
///
/// Each subset is produced exactly once as a sorted index vector.
/// Subsets are enumerated in lexicographic order, e.g. for `n = 4`,
/// `k = 2`: `[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Subsets {
    n: usize,
    next: Option<Vec<usize>>,
    remaining: usize,
}

impl Subsets {
    /// Subsets of size `k` of `0..n`
    ///
    /// Returns `None` if the number of subsets, `C(n, k)`, does not
    /// fit into a `usize`.
    pub fn new(n: usize, k: usize) -> Option<Self> {
        if k > n {
            return Some(Self {
                n,
                next: None,
                remaining: 0,
            });
        }
        let remaining = count(n, k)?;
        Some(Self {
            n,
            next: Some(Vec::from_iter(0..k)),
            remaining,
        })
    }

    // lexicographic successor, `None` if `idx` is the last subset
    fn successor(&self, idx: &[usize]) -> Option<Vec<usize>> {
        let k = idx.len();
        let pos = (0..k).rev().find(|&i| idx[i] < self.n - k + i)?;
        let mut next = idx.to_vec();
        next[pos] += 1;
        for i in pos + 1..k {
            next[i] = next[i - 1] + 1;
        }
        Some(next)
    }
}

// binomial coefficient `C(n, k)` for `k <= n`
fn count(n: usize, k: usize) -> Option<usize> {
    let k = u32::try_from(k).ok()?;
    Integer::from(n).binomial(k).to_usize()
}

impl Iterator for Subsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.next.take()?;
        self.next = self.successor(&cur);
        self.remaining -= 1;
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Subsets {}

impl FusedIterator for Subsets {}
