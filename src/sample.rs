//! Struct `Sample` represents a batch of labeled vote records.

// Provides the vote and party symbols.
pub(crate) mod vote;
// Provides the record struct.
pub(crate) mod record;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use sample_reader::SampleReader;
pub use sample_struct::{Sample, DEFAULT_TUNE_EVERY};
pub use record::Record;
pub use vote::{Vote, Party, PartyCounts};
