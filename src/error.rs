//! Defines the error type shared by every module of this crate.
use thiserror::Error;

use std::io;


/// Errors raised while loading records, growing, pruning,
/// or evaluating a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A vote symbol other than `+`, `-`, or `.`.
    #[error("unrecognized vote symbol `{0}`")]
    UnknownVote(char),


    /// A party symbol other than `D` or `R`.
    #[error("unknown party `{0}`")]
    UnknownParty(String),


    /// A line of the record file does not have the
    /// `id<TAB>party<TAB>votes` shape.
    #[error("line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// What is wrong with the line.
        reason: String,
    },


    /// A record has a vote vector of a different length
    /// than the first record.
    #[error(
        "record `{id}` has {actual} votes, expected {expected}"
    )]
    VoteLengthMismatch {
        /// Identifier of the offending record.
        id: String,
        /// Length of the first record's vote vector.
        expected: usize,
        /// Length of the offending vote vector.
        actual: usize,
    },


    /// A record without any vote.
    #[error("record `{0}` has no votes")]
    EmptyVotes(String),


    /// Growing a tree or measuring accuracy over zero records.
    #[error("{0} requires a non-empty sample")]
    EmptySample(&'static str),


    /// A record reached a leaf whose party is undefined.
    /// This happens only when the party counts tie
    /// along the whole path from the root.
    #[error(
        "record `{id}` reached a leaf with an undefined party \
        (tied data with no ancestor majority)"
    )]
    UnclassifiableLeaf {
        /// Identifier of the record that was classified.
        id: String,
    },


    /// A branch asked for an issue past the end of the vote vector.
    #[error("issue {issue} is out of range for {n_votes} votes")]
    IssueOutOfRange {
        /// The issue tested by the branch.
        issue: usize,
        /// Length of the vote vector.
        n_votes: usize,
    },


    /// A column required to build a sample from a data frame is absent.
    #[error("missing column `{0}`")]
    MissingColumn(&'static str),


    /// I/O failure while reading records or writing a dot file.
    #[error(transparent)]
    Io(#[from] io::Error),


    /// Failure reported by `polars`.
    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
}


/// Result type of this crate.
pub type Result<T> = std::result::Result<T, TreeError>;
