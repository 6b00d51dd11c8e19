//! Information gain of a three-way split on one issue.
use fixedbitset::FixedBitSet;

use crate::{PartyCounts, Sample, Vote};


/// Returns the binary entropy (in bits) of the distribution `(p1, p2)`.
/// A zero probability contributes nothing.
#[inline]
pub fn entropy(p1: f64, p2: f64) -> f64 {
    if p1 == 0f64 || p2 == 0f64 { return 0f64; }

    -p1 * p1.log2() - p2 * p2.log2()
}


/// Returns the entropy of the party distribution given by `counts`.
/// An empty count has entropy `0`.
#[inline]
pub fn class_entropy(counts: PartyCounts) -> f64 {
    let total = counts.total();
    if total == 0 { return 0f64; }

    let total = total as f64;
    entropy(counts.democrat as f64 / total, counts.republican as f64 / total)
}


/// The outcome of splitting some records on one issue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    /// The issue the records are split on.
    pub issue: usize,
    /// Information gain of the split.
    pub gain: f64,
    /// Entropies of the yea, nay, and present buckets,
    /// indexed by [`Vote::index`].
    pub entropies: [f64; 3],
}


impl Split {
    /// Returns the entropy of the bucket for `vote`.
    #[inline]
    pub fn entropy_of(&self, vote: Vote) -> f64 {
        self.entropies[vote.index()]
    }
}


/// Splits the records at `indices` on `issue` and returns
/// `parent_entropy` minus the size-weighted entropies
/// of the three buckets. Empty buckets contribute nothing.
pub fn gain(
    sample: &Sample,
    indices: &[usize],
    issue: usize,
    parent_entropy: f64,
) -> Split
{
    let mut buckets = [PartyCounts::default(); 3];
    for &i in indices {
        let record = &sample[i];
        buckets[record.votes[issue].index()].add(record.party);
    }

    let n_records = indices.len() as f64;
    let mut gain = parent_entropy;
    let mut entropies = [0f64; 3];
    for (counts, ent) in buckets.iter().zip(entropies.iter_mut()) {
        if counts.total() == 0 { continue; }

        *ent = class_entropy(*counts);
        gain -= counts.total() as f64 / n_records * *ent;
    }

    Split { issue, gain, entropies, }
}


/// Returns the split with the strictly greatest gain over `issues`.
/// Ties go to the smallest issue index.
/// Returns `None` if `issues` is empty.
pub fn best_split(
    sample: &Sample,
    indices: &[usize],
    issues: &FixedBitSet,
    parent_entropy: f64,
) -> Option<Split>
{
    issues.ones()
        .map(|issue| gain(sample, indices, issue, parent_entropy))
        .fold(None, |best: Option<Split>, split| {
            match best {
                Some(best) if best.gain >= split.gain => Some(best),
                _ => Some(split),
            }
        })
}
