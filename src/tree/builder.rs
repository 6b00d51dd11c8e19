use fixedbitset::FixedBitSet;

use crate::Sample;
use super::DecisionTree;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use tritree::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/voting-data.tsv")
///     .read()
///     .unwrap();
/// let (train, tune) = sample.split(None, DEFAULT_TUNE_EVERY);
/// let tree = DecisionTreeBuilder::new(&train)
///     .tune(&tune)
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    train: &'a Sample,
    tune: Option<&'a Sample>,
    issues: FixedBitSet,
    verbose: bool,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// tune: None (no pruning),
    /// issues: every issue of `train`,
    /// verbose: false,
    /// ```
    pub fn new(train: &'a Sample) -> Self {
        let n_issues = train.shape().1;
        let mut issues = FixedBitSet::with_capacity(n_issues);
        issues.insert_range(..);

        Self { train, tune: None, issues, verbose: false, }
    }


    /// Set the tuning sample.
    /// The grown tree is simplified by reduced-error pruning
    /// against this sample.
    #[inline]
    pub fn tune(mut self, tune: &'a Sample) -> Self {
        self.tune = Some(tune);
        self
    }


    /// Restrict the issues the tree may split on.
    /// This method panics if an issue is out of range.
    pub fn issues<I>(mut self, issues: I) -> Self
        where I: IntoIterator<Item = usize>
    {
        let n_issues = self.train.shape().1;
        self.issues.clear();
        for issue in issues {
            assert!(
                issue < n_issues,
                "The issue {issue} does not exist. \
                The sample has {n_issues} issues."
            );
            self.issues.insert(issue);
        }
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `DecisionTree::fit` prints
    /// the outcome of the pruning.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree<'a> {
        DecisionTree::new(self.train, self.tune, self.issues, self.verbose)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    fn sample() -> Sample {
        let bytes: &[u8] = b"a\tD\t+-.\nb\tR\t-+.\n";
        Sample::from_reader(BufReader::new(bytes)).unwrap()
    }

    #[test]
    fn all_issues_by_default() {
        let sample = sample();
        let builder = DecisionTreeBuilder::new(&sample);
        assert_eq!(builder.issues.ones().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn restricted_issues() {
        let sample = sample();
        let builder = DecisionTreeBuilder::new(&sample).issues([2, 0]);
        assert_eq!(builder.issues.ones().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    #[should_panic]
    fn unknown_issue() {
        let sample = sample();
        let _ = DecisionTreeBuilder::new(&sample).issues([3]);
    }
}
