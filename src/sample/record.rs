use serde::{Serialize, Deserialize};

use super::vote::{Party, Vote};


/// A labeled record: an opaque identifier,
/// the party, and the votes on every issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub(crate) id: String,
    pub(crate) party: Party,
    pub(crate) votes: Vec<Vote>,
}


impl Record {
    /// Construct a new record.
    pub fn new<S: Into<String>>(id: S, party: Party, votes: Vec<Vote>)
        -> Self
    {
        Self { id: id.into(), party, votes, }
    }


    /// Returns the identifier of this record.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }


    /// Returns the party of this record.
    #[inline]
    pub fn party(&self) -> Party {
        self.party
    }


    /// Returns the votes of this record.
    #[inline]
    pub fn votes(&self) -> &[Vote] {
        &self.votes[..]
    }
}
