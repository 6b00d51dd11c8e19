//! Defines the ternary decision tree,
//! its growing algorithm, and reduced-error pruning.

/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the tree growing algorithm.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod classifier;
/// Defines entropy and information gain.
pub mod split_by;
/// Defines reduced-error pruning.
pub mod pruner;

/// Defines the inner representations of `DecisionTreeClassifier`.
pub mod node;


pub use builder::DecisionTreeBuilder;
pub use classifier::DecisionTreeClassifier;
pub use dtree::{DecisionTree, build};
pub use node::{Node, BranchNode};
pub use pruner::{Pruner, PruneSummary};
pub use split_by::{entropy, gain, Split};
