//! Reduced-error pruning.
//!
//! Every pass tries, for each branch node below the root,
//! to replace it by a leaf predicting its majority party,
//! and keeps the single replacement with the best accuracy
//! on the tuning sample (larger subtrees first on ties).
//! Passes repeat until no replacement keeps the accuracy
//! of the current tree.
use crate::error::Result;
use crate::{Classifier, Party, Sample, Vote};

use super::node::*;
use super::classifier::DecisionTreeClassifier;


/// A candidate replacement:
/// the subtree at `path` becomes a leaf predicting `majority`.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Snip {
    path: Vec<Vote>,
    majority: Option<Party>,
    size: usize,
}


/// A read-only view of a tree with one [`Snip`] applied.
struct SnippedTree<'a> {
    root: &'a Node,
    snip: &'a Snip,
}


impl Classifier for SnippedTree<'_> {
    fn classify(&self, votes: &[Vote]) -> Result<Option<Party>> {
        let path = &self.snip.path[..];

        let mut node = self.root;
        let mut depth = 0_usize;
        let mut on_path = true;
        loop {
            if on_path && depth == path.len() {
                return Ok(self.snip.majority);
            }
            match node {
                Node::Branch(branch) => {
                    let vote = branch.vote_of(votes)?;
                    on_path = on_path && path[depth] == vote;
                    depth += 1;
                    node = branch.child(vote);
                },
                Node::Leaf(party) => return Ok(*party),
            }
        }
    }
}


/// Statistics of one call of [`Pruner::prune`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PruneSummary {
    /// Number of passes over the tree, including the last one
    /// that found nothing to replace.
    pub n_passes: usize,
    /// Number of subtrees replaced by a leaf.
    pub n_snips: usize,
    /// Tuning accuracy before pruning.
    pub accuracy_before: f64,
    /// Tuning accuracy after pruning.
    pub accuracy_after: f64,
}


/// Simplifies a grown tree against a tuning sample.
pub struct Pruner<'a> {
    tune: &'a Sample,
}


impl<'a> Pruner<'a> {
    /// Construct a new [`Pruner`] that measures accuracy on `tune`.
    #[inline]
    pub fn new(tune: &'a Sample) -> Self {
        Self { tune }
    }


    /// Prunes `tree` in place.
    ///
    /// The subtree sizes used to break ties are the ones assigned
    /// right after growing; they are not refreshed between passes.
    pub fn prune(&self, tree: &mut DecisionTreeClassifier)
        -> Result<PruneSummary>
    {
        let accuracy_before = tree.accuracy(self.tune)?;

        let mut baseline = accuracy_before;
        let mut n_passes = 0_usize;
        let mut n_snips = 0_usize;
        loop {
            n_passes += 1;

            let Some(snip) = self.best_snip(tree.root(), baseline)? else {
                break;
            };

            if let Some(node) = tree.root_mut().descendant_mut(&snip.path) {
                *node = Node::leaf(snip.majority);
            }
            n_snips += 1;

            baseline = tree.accuracy(self.tune)?;
        }

        Ok(PruneSummary {
            n_passes,
            n_snips,
            accuracy_before,
            accuracy_after: baseline,
        })
    }


    /// Returns the replacement with the highest tuning accuracy,
    /// the largest subtree among equally accurate ones,
    /// and the first in pre-order among equally sized ones,
    /// provided its accuracy is at least `baseline`.
    fn best_snip(&self, root: &Node, baseline: f64) -> Result<Option<Snip>> {
        let mut best: Option<(Snip, f64)> = None;
        for snip in candidates(root) {
            let accuracy = SnippedTree { root, snip: &snip, }
                .accuracy(self.tune)?;

            let is_better = match best {
                None => true,
                Some((ref current, current_accuracy)) => {
                    accuracy > current_accuracy
                        || (accuracy == current_accuracy
                            && snip.size > current.size)
                },
            };
            if is_better { best = Some((snip, accuracy)); }
        }

        let best = best.filter(|&(_, accuracy)| accuracy >= baseline)
            .map(|(snip, _)| snip);
        Ok(best)
    }
}


/// Lists every branch node below `root` as a [`Snip`].
/// Nodes are visited in pre-order; the childrens of a node
/// are listed (yea, nay, present) before any deeper node.
fn candidates(root: &Node) -> Vec<Snip> {
    fn visit(node: &Node, path: &mut Vec<Vote>, snips: &mut Vec<Snip>) {
        let Node::Branch(branch) = node else { return; };

        for vote in Vote::ALL {
            if let Node::Branch(child) = branch.child(vote) {
                let mut child_path = path.clone();
                child_path.push(vote);
                snips.push(Snip {
                    path: child_path,
                    majority: child.majority,
                    size: child.size,
                });
            }
        }

        for vote in Vote::ALL {
            path.push(vote);
            visit(branch.child(vote), path, snips);
            path.pop();
        }
    }

    let mut snips = Vec::new();
    visit(root, &mut Vec::new(), &mut snips);
    snips
}
