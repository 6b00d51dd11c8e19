//! Defines the inner representation
//! of the ternary decision tree.
use crate::error::{Result, TreeError};
use crate::{Classifier, Party, Vote};

use std::fmt;


/// Enumeration of `BranchNode` and leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A node that tests one issue and has three childrens.
    Branch(BranchNode),


    /// A node that predicts a party.
    /// `None` stands for the party of tied data
    /// that no ancestor could resolve.
    Leaf(Option<Party>),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` has one child per [`Vote`].
#[derive(Debug, Clone, PartialEq)]
pub struct BranchNode {
    // The issue this node tests.
    pub(super) issue: usize,


    pub(super) yea: Box<Node>,
    pub(super) nay: Box<Node>,
    pub(super) present: Box<Node>,


    // The majority party over the records that reached this node,
    // falling back to the nearest ancestor's majority on ties.
    pub(super) majority: Option<Party>,


    // Number of nodes of the subtree rooted at this node.
    // Assigned once by `Node::assign_sizes`.
    pub(super) size: usize,
}


impl BranchNode {
    /// Returns the issue tested by this node.
    #[inline]
    pub fn issue(&self) -> usize {
        self.issue
    }


    /// Returns the majority party of this node.
    #[inline]
    pub fn majority(&self) -> Option<Party> {
        self.majority
    }


    /// Returns the child that `vote` leads to.
    #[inline]
    pub fn child(&self, vote: Vote) -> &Node {
        match vote {
            Vote::Yea     => &self.yea,
            Vote::Nay     => &self.nay,
            Vote::Present => &self.present,
        }
    }


    /// Returns the mutable child that `vote` leads to.
    #[inline]
    pub(super) fn child_mut(&mut self, vote: Vote) -> &mut Node {
        match vote {
            Vote::Yea     => &mut self.yea,
            Vote::Nay     => &mut self.nay,
            Vote::Present => &mut self.present,
        }
    }


    /// Returns the vote that `votes` casts on the issue of this node.
    #[inline]
    pub(super) fn vote_of(&self, votes: &[Vote]) -> Result<Vote> {
        votes.get(self.issue)
            .copied()
            .ok_or(TreeError::IssueOutOfRange {
                issue: self.issue,
                n_votes: votes.len(),
            })
    }
}


impl Node {
    /// Construct a leaf node.
    #[inline]
    pub fn leaf(party: Option<Party>) -> Self {
        Self::Leaf(party)
    }


    /// Construct a branch node.
    /// The subtree size is left unassigned.
    #[inline]
    pub fn branch(
        issue: usize,
        yea: Node,
        nay: Node,
        present: Node,
        majority: Option<Party>,
    ) -> Self
    {
        Self::Branch(BranchNode {
            issue,
            yea: Box::new(yea),
            nay: Box::new(nay),
            present: Box::new(present),
            majority,
            size: 0,
        })
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }


    /// Returns the number of nodes of this subtree
    /// as recorded by the last call of [`Node::assign_sizes`].
    #[inline]
    pub fn size(&self) -> usize {
        match self {
            Node::Branch(ref branch) => branch.size,
            Node::Leaf(_) => 1,
        }
    }


    /// Counts the nodes of every subtree in one post-order pass
    /// and stores the counts in the branch nodes.
    pub fn assign_sizes(&mut self) -> usize {
        match self {
            Node::Branch(ref mut branch) => {
                branch.size = 1
                    + branch.yea.assign_sizes()
                    + branch.nay.assign_sizes()
                    + branch.present.assign_sizes();
                branch.size
            },
            Node::Leaf(_) => 1,
        }
    }


    /// Returns the number of leaves of this subtree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Branch(ref branch) => {
                Vote::ALL.iter()
                    .map(|&vote| branch.child(vote).n_leaves())
                    .sum()
            },
            Node::Leaf(_) => 1,
        }
    }


    /// Returns the depth of this subtree. A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Node::Branch(ref branch) => {
                1 + Vote::ALL.iter()
                    .map(|&vote| branch.child(vote).depth())
                    .max()
                    .unwrap_or(0)
            },
            Node::Leaf(_) => 0,
        }
    }


    /// Returns the node reached by following `path` from `self`,
    /// or `None` if the path runs into a leaf.
    pub(super) fn descendant_mut(&mut self, path: &[Vote])
        -> Option<&mut Node>
    {
        let mut node = self;
        for &vote in path {
            node = match node {
                Node::Branch(branch) => branch.child_mut(vote),
                Node::Leaf(_) => return None,
            };
        }
        Some(node)
    }


    /// Writes the indented outline of this subtree.
    pub(super) fn write_outline(
        &self,
        f: &mut fmt::Formatter<'_>,
        depth: usize,
        prefix: &str,
    ) -> fmt::Result
    {
        let indent = "  ".repeat(depth);
        match self {
            Node::Branch(branch) => {
                let letter = issue_letter(branch.issue);
                writeln!(f, "{indent}{prefix}Issue {letter}:")?;
                for vote in Vote::ALL {
                    let prefix = format!("{vote} ");
                    branch.child(vote).write_outline(f, depth + 1, &prefix)?;
                }
                Ok(())
            },
            Node::Leaf(party) => {
                let party = party.map(Party::symbol).unwrap_or("?");
                writeln!(f, "{indent}{prefix}{party}")
            },
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(branch) => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"Issue {letter}\" ];\n",
                    letter = issue_letter(branch.issue),
                )];

                let mut next_id = id + 1;
                for vote in Vote::ALL {
                    let child_id = next_id;
                    let (mut child, ret_id) = branch.child(vote)
                        .to_dot_info(child_id);
                    info.append(&mut child);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} \
                        [ label = \"{vote}\" ];\n",
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Node::Leaf(party) => {
                let party = party.map(Party::symbol).unwrap_or("?");
                let info = format!(
                    "\tnode_{id} [ label = \"{party}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            }
        }
    }
}


/// Issue `0` is printed as `A`, issue `1` as `B`, and so on.
fn issue_letter(issue: usize) -> char {
    u32::try_from(issue)
        .ok()
        .and_then(|issue| ('A' as u32).checked_add(issue))
        .and_then(char::from_u32)
        .unwrap_or('?')
}


impl Classifier for Node {
    fn classify(&self, votes: &[Vote]) -> Result<Option<Party>> {
        let mut node = self;
        loop {
            match node {
                Node::Branch(branch) => {
                    let vote = branch.vote_of(votes)?;
                    node = branch.child(vote);
                },
                Node::Leaf(party) => return Ok(*party),
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use Party::{Democrat, Republican};

    // Issue 0: yea -> D, nay -> (issue 1: yea -> R, nay -> D, present -> ?),
    // present -> R.
    fn two_level_tree() -> Node {
        let inner = Node::branch(
            1,
            Node::leaf(Some(Republican)),
            Node::leaf(Some(Democrat)),
            Node::leaf(None),
            Some(Republican),
        );
        Node::branch(
            0,
            Node::leaf(Some(Democrat)),
            inner,
            Node::leaf(Some(Republican)),
            Some(Democrat),
        )
    }

    #[test]
    fn sizes_are_assigned_post_order() {
        let mut root = two_level_tree();
        assert_eq!(root.size(), 0);
        assert_eq!(root.assign_sizes(), 7);
        assert_eq!(root.size(), 7);

        let Node::Branch(ref branch) = root else { panic!("not a branch") };
        assert_eq!(branch.child(Vote::Nay).size(), 4);
        assert_eq!(branch.child(Vote::Yea).size(), 1);
    }

    #[test]
    fn leaves_and_depth() {
        let root = two_level_tree();
        assert_eq!(root.n_leaves(), 5);
        assert_eq!(root.depth(), 2);
        assert_eq!(Node::leaf(None).depth(), 0);
    }

    #[test]
    fn classify_walks_the_votes() {
        let root = two_level_tree();
        let classify = |votes: &str| {
            root.classify(&Vote::parse_all(votes).unwrap()).unwrap()
        };
        assert_eq!(classify("++"), Some(Democrat));
        assert_eq!(classify("-+"), Some(Republican));
        assert_eq!(classify("--"), Some(Democrat));
        assert_eq!(classify("-."), None);
        assert_eq!(classify(".-"), Some(Republican));
    }

    #[test]
    fn classify_short_vote_vector() {
        let root = two_level_tree();
        let err = root.classify(&[Vote::Nay]).unwrap_err();
        assert!(matches!(
            err,
            TreeError::IssueOutOfRange { issue: 1, n_votes: 1 }
        ));
    }

    #[test]
    fn descendant_mut_follows_the_path() {
        let mut root = two_level_tree();
        let node = root.descendant_mut(&[Vote::Nay, Vote::Yea]).unwrap();
        assert_eq!(*node, Node::leaf(Some(Republican)));
        assert!(root.descendant_mut(&[Vote::Yea, Vote::Yea]).is_none());
    }

    #[test]
    fn issue_letters() {
        assert_eq!(issue_letter(0), 'A');
        assert_eq!(issue_letter(15), 'P');
    }
}
