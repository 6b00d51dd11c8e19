//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Sample;
use crate::error::{Result, TreeError};


/// Check whether the sample has at least one record.
/// `what` names the operation that needs the records.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample, what: &'static str)
    -> Result<()>
{
    if sample.is_empty() {
        return Err(TreeError::EmptySample(what));
    }
    Ok(())
}


/// Check whether the stride of the tuning split is valid or not.
#[inline(always)]
pub(crate) fn check_tune_every(tune_every: usize) {
    assert!(
        tune_every > 0,
        "`tune_every` must be positive. got {tune_every}."
    );
}
