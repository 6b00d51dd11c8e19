#![warn(missing_docs)]

//!
//! A crate that provides ternary decision trees
//! for records of yea/nay/present votes.
//!
//! A tree is grown greedily by information gain
//! and then simplified by reduced-error pruning
//! against a held-apart tuning sample.
//!
//! - Growing
//!     Every internal node splits on the issue with the greatest
//!     information gain and has three childrens,
//!     one per vote (yea, nay, present).
//!     Each node remembers the majority party of the records
//!     that reached it.
//!
//!
//! - Pruning
//!     A subtree is replaced by a leaf of its majority
//!     as long as the accuracy on the tuning sample does not drop.
//!     In this crate,
//!     `DecisionTreeBuilder::tune` turns the pruning on.
//!
//!
//! - Evaluation
//!     `CrossValidation` measures the leave-one-out accuracy
//!     of the whole procedure.
//!
//! # Example
//! ```no_run
//! use tritree::prelude::*;
//!
//! let sample = SampleReader::default()
//!     .file("/path/to/voting-data.tsv")
//!     .read()
//!     .unwrap();
//! let (train, tune) = sample.split(None, DEFAULT_TUNE_EVERY);
//!
//! let f = DecisionTreeBuilder::new(&train)
//!     .tune(&tune)
//!     .build()
//!     .fit()
//!     .unwrap();
//! println!("{f}");
//!
//! let report = CrossValidation::new(&sample).run().unwrap();
//! println!("{report}");
//! ```

pub mod error;
pub mod sample;
pub mod classifier;
pub mod tree;
pub mod research;
pub mod prelude;

pub(crate) mod common;


pub use error::{TreeError, Result};

pub use sample::{
    Sample,
    SampleReader,
    Record,
    Vote,
    Party,
    PartyCounts,
    DEFAULT_TUNE_EVERY,
};

pub use classifier::Classifier;

pub use tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Pruner,
    PruneSummary,
    build,
};

pub use research::{
    CrossValidation,
    CrossValidationReport,
    cross_validate,
};
