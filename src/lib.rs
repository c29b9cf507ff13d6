//! Incremental autocomplete over a De La Briandais (DLB) trie.
//!
//! This crate provides [`Dictionary`], a DLB trie whose nodes carry one
//! [`Label`] and a single child link to a chain of siblings, and [`Cursor`],
//! a keystroke-driven navigation state that answers "is this a word", "how
//! many words start here" and "suggest one" without re-scanning the trie.
//! [`Autocomplete`] bundles one of each behind a single type.
//!
//! # Quick start
//!
//! ```
//! use dlb_autocomplete::Autocomplete;
//!
//! let mut ac = Autocomplete::<char>::new();
//! for word in ["cat", "car", "card", "dog"] {
//!     ac.add_str(word).unwrap();
//! }
//!
//! assert!(ac.advance('c'));
//! assert!(ac.advance('a'));
//! assert_eq!(ac.number_of_predictions(), 3);
//! assert!(!ac.is_word());
//!
//! assert!(ac.advance('t'));
//! assert!(ac.is_word());
//! assert_eq!(ac.prediction_text().as_deref(), Some("cat"));
//! ```

#![warn(missing_docs)]

mod cursor;
mod dump;
mod engine;
mod insert;
mod label;
mod node;
mod search;

#[cfg(test)]
mod proptests;

pub use cursor::Cursor;
pub use dump::Dump;
pub use engine::Autocomplete;
pub use label::Label;
pub use node::{Node, NodeId, Symbol};
pub use search::PredictiveIter;

/// Errors that can occur during dictionary and cursor operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutocompleteError {
    /// An empty word was passed to insertion.
    InvalidArgument,
    /// A retreat was requested while the prefix was already empty.
    InvalidState,
}

impl std::fmt::Display for AutocompleteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AutocompleteError::InvalidArgument => write!(f, "cannot add an empty word"),
            AutocompleteError::InvalidState => write!(f, "cannot retreat past an empty prefix"),
        }
    }
}

impl std::error::Error for AutocompleteError {}

/// A DLB trie holding the dictionary of words.
///
/// Nodes live in one arena and are addressed by [`NodeId`]. Every stored word
/// of length `n` occupies a path of `n` label nodes followed by one
/// [`Symbol::End`] sentinel node.
#[derive(Clone, Debug)]
pub struct Dictionary<L: Label> {
    pub(crate) nodes: Vec<Node<L>>,
    pub(crate) root: Option<NodeId>,
    pub(crate) len: usize,
}

impl<L: Label> Default for Dictionary<L> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            len: 0,
        }
    }
}

impl<L: Label> Dictionary<L> {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty dictionary whose node arena can hold `nodes` nodes
    /// without reallocating. A word of length `n` costs at most `n + 1` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the trie, sentinels included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Head of the sibling chain holding every first label.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    /// - If `id` was not handed out by this dictionary.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<L> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<L> {
        &mut self.nodes[id.index()]
    }

    /// Head of the chain that follows `parent`, or the root chain for `None`.
    #[inline]
    pub(crate) fn chain_below(&self, parent: Option<NodeId>) -> Option<NodeId> {
        match parent {
            Some(p) => self.node(p).child(),
            None => self.root,
        }
    }
}
