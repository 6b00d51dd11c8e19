use rand::prelude::*;
use colored::Colorize;
use serde::{Serialize, Deserialize};

use crate::common::checker;
use crate::error::{Result, TreeError};
use crate::tree::DecisionTreeBuilder;
use crate::{Classifier, Record, Sample, DEFAULT_TUNE_EVERY};

use std::borrow::Cow;
use std::fmt;
use std::iter::Iterator;

const WIDTH: usize = 5;

/// The seed used by [`CrossValidation::shuffle`] by default.
pub const DEFAULT_SEED: u64 = 1234;


/// One leave-one-out fold:
/// the held-out record and the remaining records
/// split into a training sample and a tuning sample.
#[derive(Debug, Clone)]
pub struct Fold {
    /// Position of the held-out record.
    pub index: usize,
    /// The held-out record.
    pub held_out: Record,
    /// Records the tree is grown on.
    pub train: Sample,
    /// Records the tree is pruned against.
    pub tune: Sample,
}


/// The outcome of [`CrossValidation::run`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossValidationReport {
    /// Number of folds, i.e., the number of records.
    pub n_folds: usize,
    /// Number of held-out records classified correctly.
    pub n_correct: usize,
    /// `100 * n_correct / n_folds`.
    pub accuracy_percent: f64,
}


impl fmt::Display for CrossValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Accuracy: {:.3} %", self.accuracy_percent)
    }
}


/// A struct that generates the leave-one-out folds of a sample.
/// Each record is held out once; the rest is split
/// by [`Sample::split`].
/// # Example
/// ```no_run
/// use tritree::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/voting-data.tsv")
///     .read()
///     .unwrap();
/// let report = CrossValidation::new(&sample)
///     .verbose(true)
///     .run()
///     .unwrap();
/// println!("{report}");
/// ```
pub struct CrossValidation<'a> {
    sample: Cow<'a, Sample>,
    current_fold: usize,
    tune_every: usize,
    seed: u64,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        Self {
            sample: Cow::Borrowed(sample),
            current_fold: 0,
            tune_every: DEFAULT_TUNE_EVERY,
            seed: DEFAULT_SEED,
            verbose: false,
        }
    }


    /// Set the stride of the tuning split.
    /// Default value is `4`.
    #[inline]
    pub fn tune_every(mut self, tune_every: usize) -> Self {
        checker::check_tune_every(tune_every);
        self.tune_every = tune_every;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// for each fold.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the records before generating the folds.
    /// By default, `CrossValidation` keeps the order of the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let n_records = self.sample.shape().0;
        let mut ix = (0..n_records).collect::<Vec<_>>();
        let mut rng = StdRng::seed_from_u64(self.seed);
        ix.shuffle(&mut rng);

        self.sample = Cow::Owned(self.sample.reorder(&ix));
        self
    }


    /// Returns the fold that holds out the `i`-th record.
    #[inline]
    fn fold_at(&self, i: usize) -> Fold {
        let (train, tune) = self.sample.split(Some(i), self.tune_every);
        let held_out = self.sample[i].clone();
        Fold { index: i, held_out, train, tune, }
    }


    /// Grows and prunes one tree per fold and classifies
    /// the held-out record with it.
    ///
    /// A held-out record that reaches a leaf
    /// with an undefined party counts as misclassified.
    pub fn run(self) -> Result<CrossValidationReport> {
        checker::check_sample(&self.sample, "cross validation")?;

        let verbose = self.verbose;
        let mut n_folds = 0_usize;
        let mut n_correct = 0_usize;
        for fold in self {
            let tree = DecisionTreeBuilder::new(&fold.train)
                .tune(&fold.tune)
                .verbose(verbose)
                .build()
                .fit()?;

            let predicted = tree.classify(fold.held_out.votes())?;
            let correct = predicted == Some(fold.held_out.party());

            n_folds += 1;
            if correct { n_correct += 1; }

            if verbose {
                let predicted = predicted.map(|p| p.symbol()).unwrap_or("?");
                let outcome = format!(
                    "[{} -> {predicted}]",
                    fold.held_out.party(),
                );
                let outcome = if correct {
                    outcome.bold().green()
                } else {
                    outcome.bold().red()
                };
                println!(
                    "{}    {}",
                    format!("  [{:>5}'th fold]", fold.index + 1).bold(),
                    outcome,
                );
            }
        }

        if n_folds == 0 {
            return Err(TreeError::EmptySample("cross validation"));
        }

        let accuracy_percent = n_correct as f64 * 100f64 / n_folds as f64;
        Ok(CrossValidationReport { n_folds, n_correct, accuracy_percent, })
    }
}


impl Iterator for CrossValidation<'_> {
    type Item = Fold;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.sample.shape().0 { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.train.shape().0;
            let tune_size = output.tune.shape().0;
            println!(
                "{}    {}    {}",
                format!("  [{: >5}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TUNE {:>WIDTH$}]", tune_size).bold().yellow(),
            );
        }

        Some(output)
    }
}


/// Returns the leave-one-out accuracy (in percent) of `sample`
/// with the default tuning split.
pub fn cross_validate(sample: &Sample) -> Result<f64> {
    let report = CrossValidation::new(sample).run()?;
    Ok(report.accuracy_percent)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    fn training_examples(bytes: &[u8]) -> Sample {
        Sample::from_reader(BufReader::new(bytes)).unwrap()
    }

    // Issue A decides the party, issue B is noise.
    fn separable() -> Sample {
        training_examples(b"\
            r01\tD\t++\n\
            r02\tR\t-+\n\
            r03\tD\t+-\n\
            r04\tR\t--\n\
            r05\tD\t+.\n\
            r06\tR\t-+\n\
            r07\tD\t++\n\
            r08\tR\t--\n\
            r09\tD\t+-\n\
            r10\tR\t-.\n\
            r11\tD\t++\n\
            r12\tR\t-+\n")
    }

    #[test]
    fn folds_hold_out_each_record_once() {
        let sample = separable();
        let folds = CrossValidation::new(&sample).collect::<Vec<_>>();
        assert_eq!(folds.len(), 12);

        for (i, fold) in folds.iter().enumerate() {
            assert_eq!(fold.index, i);
            assert_eq!(fold.held_out, sample[i]);
            assert_eq!(fold.train.shape().0, 8);
            assert_eq!(fold.tune.shape().0, 3);
            assert!(
                fold.train.records().iter()
                    .chain(fold.tune.records())
                    .all(|r| r.id() != sample[i].id())
            );
        }
    }

    #[test]
    fn perfect_predictor_is_always_right() {
        let sample = separable();
        let report = CrossValidation::new(&sample).run().unwrap();
        assert_eq!(report.n_folds, 12);
        assert_eq!(report.n_correct, 12);
        assert_eq!(report.accuracy_percent, 100.0);
        assert_eq!(report.to_string(), "Accuracy: 100.000 %");

        assert_eq!(cross_validate(&sample).unwrap(), 100.0);
    }

    #[test]
    fn shuffle_is_reproducible() {
        let sample = separable();
        let order = |seed| {
            CrossValidation::new(&sample)
                .seed(seed)
                .shuffle()
                .map(|fold| fold.held_out.id().to_string())
                .collect::<Vec<_>>()
        };
        let first = order(7);
        assert_eq!(first, order(7));

        let mut sorted = first.clone();
        sorted.sort();
        let ids = sample.records().iter()
            .map(|r| r.id().to_string())
            .collect::<Vec<_>>();
        assert_eq!(sorted, ids);

        let report = CrossValidation::new(&sample)
            .shuffle()
            .run()
            .unwrap();
        assert_eq!(report.n_correct, 12);
    }

    #[test]
    fn empty_sample() {
        let sample = Sample::default();
        assert!(CrossValidation::new(&sample).run().is_err());
    }

    #[test]
    #[should_panic]
    fn zero_tune_stride() {
        let sample = separable();
        let _ = CrossValidation::new(&sample).tune_every(0);
    }
}
