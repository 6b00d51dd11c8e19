//! Defines the decision tree classifier.
use crate::error::Result;
use crate::{Classifier, Party, Vote};

use super::node::*;

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Decision tree classifier.
/// This struct is just a wrapper of the root [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTreeClassifier {
    root: Node
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for DecisionTreeClassifier {
    fn classify(&self, votes: &[Vote]) -> Result<Option<Party>> {
        self.root.classify(votes)
    }
}


impl DecisionTreeClassifier {
    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    #[inline]
    pub(crate) fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }


    /// Returns the number of nodes, as counted right after growing.
    /// Pruning does not refresh this count.
    #[inline]
    pub fn size(&self) -> usize {
        self.root.size()
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Returns the depth of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


/// Prints the tree as an indented outline:
/// ```txt
/// Issue A:
///   + D
///   - Issue C:
///     + R
///     - D
///     . D
///   . R
/// ```
impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_outline(f, 0, "")
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use Party::{Democrat, Republican};

    fn tree() -> DecisionTreeClassifier {
        let inner = Node::branch(
            2,
            Node::leaf(Some(Republican)),
            Node::leaf(Some(Democrat)),
            Node::leaf(Some(Democrat)),
            Some(Democrat),
        );
        let root = Node::branch(
            0,
            Node::leaf(Some(Democrat)),
            inner,
            Node::leaf(Some(Republican)),
            Some(Democrat),
        );
        DecisionTreeClassifier::from(root)
    }

    #[test]
    fn outline() {
        let expected = "\
            Issue A:\n  \
              + D\n  \
              - Issue C:\n    \
                + R\n    \
                - D\n    \
                . D\n  \
              . R\n";
        assert_eq!(tree().to_string(), expected);
    }

    #[test]
    fn outline_of_undefined_leaf() {
        let tree = DecisionTreeClassifier::from(Node::leaf(None));
        assert_eq!(tree.to_string(), "?\n");
    }

    #[test]
    fn dot_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("tritree-{}.dot", std::process::id()));
        tree().to_dot_file(&path).unwrap();

        let dot = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(dot.starts_with("graph DecisionTree {"));
        assert!(dot.contains("node_0 [ label = \"Issue A\" ]"));
        assert!(dot.contains("node_0 -- node_2 [ label = \"-\" ]"));
        assert_eq!(dot.matches("shape = box").count(), 5);
    }
}
