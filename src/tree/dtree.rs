use colored::Colorize;
use fixedbitset::FixedBitSet;

use crate::common::checker;
use crate::error::Result;
use crate::{Party, Sample, Vote};

use super::{
    node::*,
    pruner::Pruner,
    split_by::{best_split, class_entropy},
    classifier::DecisionTreeClassifier,
};


/// The ternary decision tree algorithm.
/// Given a training sample of vote records,
/// [`DecisionTree`] grows a tree that splits on the issue
/// with the greatest information gain at every node,
/// and, if a tuning sample is given, simplifies it
/// by reduced-error pruning.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::tree::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use tritree::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/voting-data.tsv")
///     .read()
///     .unwrap();
/// let (train, tune) = sample.split(None, DEFAULT_TUNE_EVERY);
///
/// let f = DecisionTreeBuilder::new(&train)
///     .tune(&tune)
///     .build()
///     .fit()
///     .unwrap();
///
/// println!("{f}");
/// println!("tune accuracy: {}", f.accuracy(&tune).unwrap());
/// ```
pub struct DecisionTree<'a> {
    train: &'a Sample,
    tune: Option<&'a Sample>,
    issues: FixedBitSet,
    verbose: bool,
}


impl<'a> DecisionTree<'a> {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(
        train: &'a Sample,
        tune: Option<&'a Sample>,
        issues: FixedBitSet,
        verbose: bool,
    ) -> Self
    {
        Self { train, tune, issues, verbose, }
    }


    /// Grows the tree on the training sample, counts the subtree sizes,
    /// and prunes the tree against the tuning sample if one is set.
    pub fn fit(&self) -> Result<DecisionTreeClassifier> {
        checker::check_sample(self.train, "growing a tree")?;

        let n_records = self.train.shape().0;
        let indices = (0..n_records).collect::<Vec<_>>();
        let entropy = class_entropy(self.train.party_counts(&indices));

        let mut root = self.grow(indices, &self.issues, entropy, None);
        root.assign_sizes();
        let mut tree = DecisionTreeClassifier::from(root);

        if let Some(tune) = self.tune {
            let summary = Pruner::new(tune).prune(&mut tree)?;
            if self.verbose {
                println!(
                    "{}    {}    {}",
                    format!("[GROWN {:>5} nodes]", tree.size()).bold().green(),
                    format!("[SNIPPED {:>3}]", summary.n_snips).bold().red(),
                    format!(
                        "[TUNE {:.3} -> {:.3}]",
                        summary.accuracy_before,
                        summary.accuracy_after,
                    ).bold().yellow(),
                );
            }
        }

        Ok(tree)
    }


    /// Grows a subtree over the training records at `indices`.
    ///
    /// `entropy` is the party entropy of those records
    /// and `majority` is the majority inherited from the parent call.
    fn grow(
        &self,
        indices: Vec<usize>,
        issues: &FixedBitSet,
        entropy: f64,
        majority: Option<Party>,
    ) -> Node
    {
        // Keep the most specific majority known so far.
        let majority = self.train.party_counts(&indices)
            .majority()
            .or(majority);

        if indices.is_empty() || issues.count_ones(..) == 0 {
            return Node::leaf(majority);
        }

        if self.is_pure_or_indistinguishable(&indices) {
            return Node::leaf(majority);
        }

        let Some(split) = best_split(self.train, &indices, issues, entropy)
        else {
            return Node::leaf(majority);
        };

        // Split the records for yea/nay/present childrens
        let mut buckets: [Vec<usize>; 3] = Default::default();
        for i in indices {
            let vote = self.train[i].votes[split.issue];
            buckets[vote.index()].push(i);
        }

        let mut child_issues = issues.clone();
        child_issues.set(split.issue, false);

        let [yea, nay, present] = buckets;
        let yea = self.grow(
            yea, &child_issues, split.entropy_of(Vote::Yea), majority
        );
        let nay = self.grow(
            nay, &child_issues, split.entropy_of(Vote::Nay), majority
        );
        let present = self.grow(
            present, &child_issues, split.entropy_of(Vote::Present), majority
        );

        // A branch whose childrens all predict the same is just a leaf.
        if let (Node::Leaf(y), Node::Leaf(n), Node::Leaf(p))
            = (&yea, &nay, &present)
        {
            if y == n && n == p {
                return Node::leaf(*y);
            }
        }

        Node::branch(split.issue, yea, nay, present, majority)
    }


    /// Returns `true` if all the records at `indices` share the same party
    /// or all of them share the same votes.
    fn is_pure_or_indistinguishable(&self, indices: &[usize]) -> bool {
        let first = &self.train[indices[0]];

        let mut same_party = true;
        let mut same_votes = true;
        for &i in indices {
            let record = &self.train[i];
            same_party &= record.party == first.party;
            same_votes &= record.votes == first.votes;
            if !same_party && !same_votes { break; }
        }

        same_party || same_votes
    }
}


/// Grows a tree on `train` and prunes it against `tune`.
pub fn build(train: &Sample, tune: &Sample)
    -> Result<DecisionTreeClassifier>
{
    super::DecisionTreeBuilder::new(train)
        .tune(tune)
        .build()
        .fit()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Classifier;
    use crate::tree::DecisionTreeBuilder;
    use Party::{Democrat, Republican};
    use std::io::BufReader;

    fn training_examples(bytes: &[u8]) -> Sample {
        Sample::from_reader(BufReader::new(bytes)).unwrap()
    }

    fn fit(sample: &Sample) -> DecisionTreeClassifier {
        DecisionTreeBuilder::new(sample).build().fit().unwrap()
    }

    #[test]
    fn perfect_predictor_at_the_root() {
        let sample = training_examples(b"\
            a\tD\t++\n\
            b\tD\t+-\n\
            c\tD\t++\n\
            d\tD\t+-\n\
            e\tR\t-+\n\
            f\tR\t--\n\
            g\tR\t-+\n\
            h\tR\t--\n");
        let f = fit(&sample);

        let expected = Node::branch(
            0,
            Node::leaf(Some(Democrat)),
            Node::leaf(Some(Republican)),
            Node::leaf(None),
            None,
        );
        let mut expected = expected;
        expected.assign_sizes();
        assert_eq!(f.root(), &expected);
    }

    #[test]
    fn single_record_without_issues() {
        let sample = training_examples(b"only\tR\t+-.\n");
        let f = DecisionTreeBuilder::new(&sample)
            .issues([])
            .build()
            .fit()
            .unwrap();
        assert_eq!(f.root(), &Node::leaf(Some(Republican)));
    }

    #[test]
    fn third_record_split_off() {
        let sample = training_examples(b"\
            a\tD\t++\n\
            b\tD\t+-\n\
            c\tR\t-+\n");
        let f = DecisionTreeBuilder::new(&sample)
            .issues([0])
            .build()
            .fit()
            .unwrap();

        let Node::Branch(root) = f.root() else { panic!("not a branch") };
        assert_eq!(root.issue(), 0);
        assert_eq!(root.majority(), Some(Democrat));
        assert_eq!(root.child(Vote::Yea), &Node::leaf(Some(Democrat)));
        assert_eq!(root.child(Vote::Nay), &Node::leaf(Some(Republican)));
        assert_eq!(root.child(Vote::Present), &Node::leaf(Some(Democrat)));

        for record in sample.records() {
            let party = f.classify(record.votes()).unwrap();
            assert_eq!(party, Some(record.party()));
        }
    }

    #[test]
    fn identical_votes_make_a_leaf() {
        let sample = training_examples(b"\
            a\tD\t+-\n\
            b\tR\t+-\n\
            c\tD\t+-\n");
        let f = fit(&sample);
        assert_eq!(f.root(), &Node::leaf(Some(Democrat)));
    }

    #[test]
    fn tied_identical_votes_make_an_undefined_leaf() {
        let sample = training_examples(b"a\tD\t+-\nb\tR\t+-\n");
        let f = fit(&sample);
        assert_eq!(f.root(), &Node::leaf(None));
        assert!(f.accuracy(&sample).is_err());
    }

    #[test]
    fn childs_inherit_the_majority() {
        // The nay bucket {c, d} ties and is split on issue 1;
        // its empty present bucket falls back to the root majority.
        let sample = training_examples(b"\
            a\tD\t++\n\
            b\tD\t++\n\
            c\tD\t--\n\
            d\tR\t-+\n\
            e\tD\t+-\n");
        let f = fit(&sample);

        let Node::Branch(root) = f.root() else { panic!("not a branch") };
        assert_eq!(root.issue(), 0);
        let Node::Branch(nay) = root.child(Vote::Nay) else {
            panic!("not a branch")
        };
        assert_eq!(nay.issue(), 1);
        assert_eq!(nay.majority(), Some(Democrat));
        assert_eq!(nay.child(Vote::Yea), &Node::leaf(Some(Republican)));
        assert_eq!(nay.child(Vote::Nay), &Node::leaf(Some(Democrat)));
        assert_eq!(nay.child(Vote::Present), &Node::leaf(Some(Democrat)));
    }

    #[test]
    fn empty_training_sample() {
        let sample = Sample::default();
        assert!(DecisionTreeBuilder::new(&sample).build().fit().is_err());
    }
}
