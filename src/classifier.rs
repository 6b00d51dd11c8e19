//! Defines the [`Classifier`] trait:
//! anything that maps a vote vector to a party.
use crate::error::{Result, TreeError};
use crate::common::checker;
use crate::{Party, Sample, Vote};


/// A trait that defines the behavor of classifier.
/// You only need to implement `classify` method.
pub trait Classifier {
    /// Returns the party predicted for `votes`.
    /// `Ok(None)` means that `votes` reached a leaf
    /// whose party is undefined.
    fn classify(&self, votes: &[Vote]) -> Result<Option<Party>>;


    /// Predicts the party of the `row`-th record of `sample`.
    fn predict(&self, sample: &Sample, row: usize)
        -> Result<Option<Party>>
    {
        self.classify(sample[row].votes())
    }


    /// Predicts the parties of all records in `sample`.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<Option<Party>>> {
        sample.records()
            .iter()
            .map(|record| self.classify(record.votes()))
            .collect()
    }


    /// Returns the fraction of records in `sample`
    /// whose party is predicted correctly.
    ///
    /// Fails on an empty sample, and when a record
    /// reaches a leaf with an undefined party.
    fn accuracy(&self, sample: &Sample) -> Result<f64> {
        checker::check_sample(sample, "accuracy")?;

        let mut n_correct = 0_usize;
        for record in sample.records() {
            let party = self.classify(record.votes())?
                .ok_or_else(|| TreeError::UnclassifiableLeaf {
                    id: record.id().to_string(),
                })?;
            if party == record.party() { n_correct += 1; }
        }

        let n_records = sample.shape().0;
        Ok(n_correct as f64 / n_records as f64)
    }
}
