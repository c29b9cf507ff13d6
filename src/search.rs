use crate::{Dictionary, Label, NodeId, Symbol};

impl<L: Label> Dictionary<L> {
    /// Scans the chain starting at `head` for `symbol`.
    #[inline]
    pub(crate) fn find_in_chain(&self, head: Option<NodeId>, symbol: Symbol<L>) -> Option<NodeId> {
        let mut cur = head;
        while let Some(id) = cur {
            let node = self.node(id);
            if node.symbol() == symbol {
                return Some(id);
            }
            cur = node.next_sibling();
        }
        None
    }

    /// Rewinds from any node of a sibling chain to the chain's head.
    #[inline]
    pub(crate) fn chain_head(&self, mut id: NodeId) -> NodeId {
        while let Some(prev) = self.node(id).prev_sibling() {
            id = prev;
        }
        id
    }

    /// Returns true if the chain starting at `head` holds the sentinel.
    #[inline]
    pub(crate) fn chain_has_end(&self, head: Option<NodeId>) -> bool {
        self.find_in_chain(head, Symbol::End).is_some()
    }

    /// Traverses the trie from the root following the labels of `key`.
    /// Returns the node of the last label, or None if traversal fails or
    /// `key` is empty.
    pub(crate) fn traverse(&self, key: &[L]) -> Option<NodeId> {
        let mut parent = None;
        for &label in key {
            let head = self.chain_below(parent);
            parent = Some(self.find_in_chain(head, Symbol::Label(label))?);
        }
        parent
    }

    /// Returns true if `word` is stored.
    pub fn contains(&self, word: &[L]) -> bool {
        match self.traverse(word) {
            Some(last) => self.chain_has_end(self.node(last).child()),
            None => false,
        }
    }

    /// Number of stored words starting with `prefix`, the prefix itself
    /// included when it is a word. The empty prefix counts every word.
    pub fn count_with_prefix(&self, prefix: &[L]) -> usize {
        if prefix.is_empty() {
            return self.len;
        }
        self.traverse(prefix)
            .map_or(0, |last| self.node(last).count() as usize)
    }

    /// Returns one stored word starting with `prefix`, or None if there is
    /// none. See [`Dictionary::predictive_search`] for the order.
    pub fn predict(&self, prefix: &[L]) -> Option<Vec<L>> {
        let parent = if prefix.is_empty() {
            None
        } else {
            Some(self.traverse(prefix)?)
        };
        self.complete(parent, prefix.to_vec())
    }

    /// Extends `buf` with the left-most completion below `parent`.
    ///
    /// In every chain the walk takes the first node, scanning from the head,
    /// that is either the sentinel (the word is complete) or carries words
    /// below it.
    pub(crate) fn complete(&self, parent: Option<NodeId>, mut buf: Vec<L>) -> Option<Vec<L>> {
        let mut head = self.chain_below(parent);
        loop {
            let mut cur = head?;
            loop {
                let node = self.node(cur);
                match node.symbol() {
                    Symbol::End => return Some(buf),
                    Symbol::Label(l) if node.count() > 0 => {
                        buf.push(l);
                        head = node.child();
                        break;
                    }
                    Symbol::Label(_) => cur = node.next_sibling()?,
                }
            }
        }
    }

    /// Predictive search. Returns an iterator over all stored words that
    /// start with `prefix`.
    ///
    /// Words come out depth-first in sibling order, which is the order in
    /// which labels were first inserted at each position. The first item is
    /// the word [`Dictionary::predict`] returns.
    pub fn predictive_search(&self, prefix: &[L]) -> PredictiveIter<'_, L> {
        let start = if prefix.is_empty() {
            Some(self.root)
        } else {
            self.traverse(prefix).map(|last| self.node(last).child())
        };
        let mut iter = PredictiveIter {
            dict: self,
            stack: Vec::new(),
            key_buf: prefix.to_vec(),
            children_buf: Vec::new(),
        };
        if let Some(head) = start {
            iter.push_chain(head, prefix.len() as u32);
        }
        iter
    }
}

/// Iterator returned by [`Dictionary::predictive_search`].
pub struct PredictiveIter<'a, L: Label> {
    dict: &'a Dictionary<L>,
    /// DFS stack: (node, depth of the key before this node's label).
    stack: Vec<(NodeId, u32)>,
    /// Shared key buffer. Grows/truncates as DFS proceeds, avoiding per-node
    /// Vec<L> clones. Only cloned when emitting a word.
    key_buf: Vec<L>,
    /// Reusable buffer for reversing a sibling chain onto the stack.
    children_buf: Vec<NodeId>,
}

impl<L: Label> PredictiveIter<'_, L> {
    /// Pushes the chain starting at `head` so that the head pops first.
    fn push_chain(&mut self, head: Option<NodeId>, depth: u32) {
        self.children_buf.clear();
        let mut cur = head;
        while let Some(id) = cur {
            self.children_buf.push(id);
            cur = self.dict.node(id).next_sibling();
        }
        for &id in self.children_buf.iter().rev() {
            self.stack.push((id, depth));
        }
    }
}

impl<L: Label> Iterator for PredictiveIter<'_, L> {
    type Item = Vec<L>;

    fn next(&mut self) -> Option<Vec<L>> {
        while let Some((id, depth)) = self.stack.pop() {
            self.key_buf.truncate(depth as usize);
            let dict = self.dict;
            let node = dict.node(id);
            match node.symbol() {
                Symbol::End => return Some(self.key_buf.clone()),
                Symbol::Label(l) => {
                    self.key_buf.push(l);
                    self.push_chain(node.child(), depth + 1);
                }
            }
        }
        None
    }
}
