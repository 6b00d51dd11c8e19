//! Defines the symbols a record is made of:
//! the three-valued [`Vote`] and the binary class label [`Party`].
use serde::{Serialize, Deserialize};

use std::fmt;
use std::str::FromStr;

use crate::error::TreeError;


/// A vote on one issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vote {
    /// `+`
    Yea,
    /// `-`
    Nay,
    /// `.`
    Present,
}


impl Vote {
    /// All the votes, in the order the tree lays out its children.
    pub const ALL: [Vote; 3] = [Vote::Yea, Vote::Nay, Vote::Present];


    /// Returns the position of `self` in [`Vote::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Vote::Yea     => 0,
            Vote::Nay     => 1,
            Vote::Present => 2,
        }
    }


    /// Returns the one-character symbol of this vote.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Vote::Yea     => '+',
            Vote::Nay     => '-',
            Vote::Present => '.',
        }
    }


    /// Parses a whole vote string such as `"++-.+"`.
    pub fn parse_all(votes: &str) -> Result<Vec<Vote>, TreeError> {
        votes.chars()
            .map(Vote::try_from)
            .collect()
    }
}


impl TryFrom<char> for Vote {
    type Error = TreeError;
    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Vote::Yea),
            '-' => Ok(Vote::Nay),
            '.' => Ok(Vote::Present),
            _   => Err(TreeError::UnknownVote(symbol)),
        }
    }
}


impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}


/// The class label of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    /// `D`
    Democrat,
    /// `R`
    Republican,
}


impl Party {
    /// Returns the one-letter symbol of this party.
    #[inline]
    pub fn symbol(self) -> &'static str {
        match self {
            Party::Democrat   => "D",
            Party::Republican => "R",
        }
    }
}


impl FromStr for Party {
    type Err = TreeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "D" => Ok(Party::Democrat),
            "R" => Ok(Party::Republican),
            _   => Err(TreeError::UnknownParty(s.to_string())),
        }
    }
}


impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}


/// Number of records per party in some subset of a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartyCounts {
    /// Number of democrats.
    pub democrat: usize,
    /// Number of republicans.
    pub republican: usize,
}


impl PartyCounts {
    /// Adds one record of the given party.
    #[inline]
    pub fn add(&mut self, party: Party) {
        match party {
            Party::Democrat   => self.democrat += 1,
            Party::Republican => self.republican += 1,
        }
    }


    /// Total number of counted records.
    #[inline]
    pub fn total(&self) -> usize {
        self.democrat + self.republican
    }


    /// Returns the strictly more frequent party,
    /// or `None` on a tie.
    #[inline]
    pub fn majority(&self) -> Option<Party> {
        use std::cmp::Ordering;
        match self.democrat.cmp(&self.republican) {
            Ordering::Greater => Some(Party::Democrat),
            Ordering::Less    => Some(Party::Republican),
            Ordering::Equal   => None,
        }
    }
}


impl FromIterator<Party> for PartyCounts {
    fn from_iter<I: IntoIterator<Item = Party>>(iter: I) -> Self {
        let mut counts = PartyCounts::default();
        iter.into_iter().for_each(|party| counts.add(party));
        counts
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_votes() {
        let votes = Vote::parse_all("+-.").unwrap();
        assert_eq!(votes, vec![Vote::Yea, Vote::Nay, Vote::Present]);
    }

    #[test]
    fn reject_unknown_vote() {
        let err = Vote::parse_all("+?-").unwrap_err();
        assert!(matches!(err, TreeError::UnknownVote('?')));
    }

    #[test]
    fn reject_unknown_party() {
        assert!("I".parse::<Party>().is_err());
        assert_eq!("R".parse::<Party>().unwrap(), Party::Republican);
    }

    #[test]
    fn majority_is_undefined_on_ties() {
        let counts = [Party::Democrat, Party::Republican]
            .into_iter()
            .collect::<PartyCounts>();
        assert_eq!(counts.majority(), None);

        let counts = [Party::Democrat, Party::Republican, Party::Democrat]
            .into_iter()
            .collect::<PartyCounts>();
        assert_eq!(counts.majority(), Some(Party::Democrat));
    }
}
