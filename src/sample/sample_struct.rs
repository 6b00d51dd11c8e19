use polars::prelude::*;

use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Index;

use crate::common::checker;
use crate::error::{Result, TreeError};
use super::record::Record;
use super::vote::{Party, PartyCounts, Vote};


/// The default stride of [`Sample::split`]:
/// every 4th remaining record goes to the tuning sample.
pub const DEFAULT_TUNE_EVERY: usize = 4;


/// Struct `Sample` holds an ordered batch of [`Record`]s
/// whose vote vectors share the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    pub(super) records: Vec<Record>,
    pub(super) n_issues: usize,
}


impl Sample {
    /// Construct a new [`Sample`] from the given records.
    /// This method returns `Err` if a record has no vote or
    /// the vote vectors have different lengths.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let n_issues = records.first()
            .map(|record| record.votes.len())
            .unwrap_or(0);

        for record in records.iter() {
            if record.votes.is_empty() {
                return Err(TreeError::EmptyVotes(record.id.clone()));
            }
            if record.votes.len() != n_issues {
                return Err(TreeError::VoteLengthMismatch {
                    id: record.id.clone(),
                    expected: n_issues,
                    actual: record.votes.len(),
                });
            }
        }

        Ok(Self { records, n_issues, })
    }


    /// Read a tab-separated record file to [`Sample`] type.
    /// This method returns `Err` if the file does not exist.
    pub fn from_tsv<P>(file: P) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }


    /// Read records from a [`BufRead`].
    ///
    /// Each line has the form
    /// ```txt
    /// id<TAB>party<TAB>votes
    /// ```
    /// where `party` is `D` or `R` and `votes` is a string over
    /// `+` (yea), `-` (nay), and `.` (present).
    /// Blank lines are skipped.
    pub fn from_reader<R>(reader: R) -> Result<Self>
        where R: BufRead,
    {
        let mut records = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() { continue; }

            let malformed = |reason: String| {
                TreeError::MalformedLine { line: i + 1, reason, }
            };

            let mut fields = line.split('\t');
            let (id, party, votes) = match (
                fields.next(), fields.next(), fields.next(), fields.next()
            ) {
                (Some(id), Some(party), Some(votes), None) => {
                    (id, party, votes)
                },
                _ => {
                    let reason = "expected 3 tab-separated fields"
                        .to_string();
                    return Err(malformed(reason));
                },
            };

            let party = party.parse::<Party>()
                .map_err(|e| malformed(e.to_string()))?;
            let votes = Vote::parse_all(votes)
                .map_err(|e| malformed(e.to_string()))?;

            records.push(Record::new(id, party, votes));
        }

        Self::new(records)
    }


    /// Convert a `polars::DataFrame` into [`Sample`].
    /// The frame must have the utf8 columns `id`, `party`, and `votes`,
    /// holding the same text as the fields of a record file.
    pub fn from_dataframe(data: &DataFrame) -> Result<Self> {
        let ids     = utf8_column(data, "id")?;
        let parties = utf8_column(data, "party")?;
        let votes   = utf8_column(data, "votes")?;

        let records = ids.into_iter()
            .zip(parties.into_iter())
            .zip(votes.into_iter())
            .enumerate()
            .map(|(row, ((id, party), votes))| {
                let malformed = |reason: String| {
                    TreeError::MalformedLine { line: row + 1, reason, }
                };
                let (id, party, votes) = match (id, party, votes) {
                    (Some(id), Some(party), Some(votes)) => {
                        (id, party, votes)
                    },
                    _ => {
                        return Err(malformed("null value".to_string()));
                    },
                };
                let party = party.parse::<Party>()
                    .map_err(|e| malformed(e.to_string()))?;
                let votes = Vote::parse_all(votes)
                    .map_err(|e| malformed(e.to_string()))?;
                Ok(Record::new(id, party, votes))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(records)
    }


    /// Returns the pair of the number of records and
    /// the number of issues.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.n_issues)
    }


    /// Returns `true` if the sample holds no record.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }


    /// Returns the slice of records.
    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records[..]
    }


    /// Counts the parties of the records at `indices`.
    pub fn party_counts(&self, indices: &[usize]) -> PartyCounts {
        indices.iter()
            .map(|&i| self.records[i].party)
            .collect()
    }


    /// Returns a copy of `self` whose `i`-th record
    /// is the `ix[i]`-th record of `self`.
    pub fn reorder(&self, ix: &[usize]) -> Sample {
        let records = ix.iter()
            .map(|&i| self.records[i].clone())
            .collect();
        Sample { records, n_issues: self.n_issues, }
    }


    /// Split `self` into a training sample and a tuning sample.
    ///
    /// The record at `leave_out` (if any) goes to neither.
    /// Among the remaining records, the ones whose position
    /// (counted after the removal) is a multiple of `tune_every`
    /// go to the tuning sample, and the rest go to the training sample.
    pub fn split(&self, leave_out: Option<usize>, tune_every: usize)
        -> (Sample, Sample)
    {
        checker::check_tune_every(tune_every);

        let mut train = Vec::with_capacity(self.records.len());
        let mut tune = Vec::with_capacity(self.records.len() / tune_every + 1);

        let remaining = self.records.iter()
            .enumerate()
            .filter(|&(i, _)| Some(i) != leave_out)
            .map(|(_, record)| record);
        for (position, record) in remaining.enumerate() {
            if position % tune_every == 0 {
                tune.push(record.clone());
            } else {
                train.push(record.clone());
            }
        }

        let n_issues = self.n_issues;
        let train = Sample { records: train, n_issues, };
        let tune = Sample { records: tune, n_issues, };
        (train, tune)
    }
}


impl Index<usize> for Sample {
    type Output = Record;
    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.records[idx]
    }
}


fn utf8_column<'a>(data: &'a DataFrame, name: &'static str)
    -> Result<&'a Utf8Chunked>
{
    let column = data.column(name)
        .map_err(|_| TreeError::MissingColumn(name))?;
    Ok(column.utf8()?)
}
