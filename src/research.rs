//! This directory provides some features for research.
//! Measure the generalization of the pruned tree
//! by leave-one-out cross validation.

/// Defines the leave-one-out cross validation.
pub mod cross_validation;

pub use cross_validation::{
    CrossValidation,
    CrossValidationReport,
    Fold,
    cross_validate,
    DEFAULT_SEED,
};
