use crate::Label;

/// Index of a node in the dictionary's node arena.
///
/// Ids are stable: nodes are never removed or moved once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "node arena exceeds u32 range");
        Self(index as u32)
    }

    /// Returns the arena index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a node stands for at its position in a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol<L> {
    /// One element of a stored word.
    Label(L),
    /// The end-of-word sentinel terminating every stored word.
    End,
}

impl<L: Label> Symbol<L> {
    /// Returns true for the end-of-word sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self, Symbol::End)
    }

    /// Returns the label, or `None` for the sentinel.
    #[inline]
    pub fn label(&self) -> Option<L> {
        match *self {
            Symbol::Label(l) => Some(l),
            Symbol::End => None,
        }
    }
}

/// A node in the DLB trie.
///
/// Nodes form sibling chains (alternatives at one position) linked in both
/// directions; each node points at the head of the chain for the next
/// position through `child`. `parent` and `prev_sibling` are back-references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<L> {
    symbol: Symbol<L>,
    count: u32,
    child: Option<NodeId>,
    next_sibling: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    parent: Option<NodeId>,
}

impl<L: Label> Node<L> {
    /// Creates a detached node with a zero count.
    pub(crate) fn new(symbol: Symbol<L>, parent: Option<NodeId>) -> Self {
        Self {
            symbol,
            count: 0,
            child: None,
            next_sibling: None,
            prev_sibling: None,
            parent,
        }
    }

    /// Returns the symbol stored at this node.
    #[inline]
    pub fn symbol(&self) -> Symbol<L> {
        self.symbol
    }

    /// Returns true if this node is the end-of-word sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.symbol.is_end()
    }

    /// Number of stored words whose path runs through this node into its
    /// child chain. Always 0 for the sentinel.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Head of the sibling chain for the next position.
    #[inline]
    pub fn child(&self) -> Option<NodeId> {
        self.child
    }

    /// Next alternative at the same position.
    #[inline]
    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }

    /// Previous alternative at the same position.
    #[inline]
    pub fn prev_sibling(&self) -> Option<NodeId> {
        self.prev_sibling
    }

    /// The node whose child chain contains this node, `None` at the root chain.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub(crate) fn set_child(&mut self, child: NodeId) {
        debug_assert!(self.child.is_none(), "child chain head is written once");
        self.child = Some(child);
    }

    #[inline]
    pub(crate) fn set_next_sibling(&mut self, next: NodeId) {
        debug_assert!(self.next_sibling.is_none(), "siblings are appended at the tail");
        self.next_sibling = Some(next);
    }

    #[inline]
    pub(crate) fn set_prev_sibling(&mut self, prev: NodeId) {
        self.prev_sibling = Some(prev);
    }

    #[inline]
    pub(crate) fn bump_count(&mut self) {
        debug_assert!(!self.is_end(), "the sentinel never counts words");
        self.count += 1;
    }
}
