//! Exports the tree algorithm, the data types, and traits.
//! 
pub use crate::sample::{
    Sample,
    SampleReader,
    Record,
    Vote,
    Party,
    PartyCounts,
    DEFAULT_TUNE_EVERY,
};


pub use crate::tree::{
    // Growing & pruning
    DecisionTree,
    DecisionTreeBuilder,
    Pruner,
    PruneSummary,


    // Output
    DecisionTreeClassifier,
};


pub use crate::classifier::Classifier;


pub use crate::research::{
    CrossValidation,
    CrossValidationReport,
};


pub use crate::error::TreeError;
