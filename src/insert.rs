use std::iter;

use tracing::debug;

use crate::{AutocompleteError, Dictionary, Label, Node, NodeId, Symbol};

impl<L: Label> Dictionary<L> {
    /// Builds a dictionary from `keys`, in order.
    ///
    /// Empty keys and duplicates are skipped. Sibling order follows the order
    /// in which labels first appear, so the first key wins ties in
    /// [`Dictionary::predict`].
    pub fn build(keys: &[impl AsRef<[L]>]) -> Self {
        let mut dict = Self::new();
        for key in keys {
            // Empty words are the only insertion error.
            let _ = dict.insert(key.as_ref());
        }
        dict
    }

    /// Inserts `word` in O(`word.len()`) time.
    ///
    /// Returns `Ok(true)` if the word was new and `Ok(false)` if it was
    /// already stored; a duplicate leaves every node untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AutocompleteError::InvalidArgument`] if `word` is empty.
    pub fn insert(&mut self, word: &[L]) -> Result<bool, AutocompleteError> {
        if word.is_empty() {
            debug!("rejected empty word");
            return Err(AutocompleteError::InvalidArgument);
        }

        let mut parent = None;
        let mut created = false;
        let symbols = word
            .iter()
            .map(|&l| Symbol::Label(l))
            .chain(iter::once(Symbol::End));
        for symbol in symbols {
            let (id, is_new) = self.find_or_append(parent, symbol);
            created = is_new;
            parent = Some(id);
        }

        // Only the sentinel decides novelty: a new label node always implies
        // a new sentinel below it.
        if created {
            let mut up = parent.and_then(|end| self.node(end).parent());
            while let Some(id) = up {
                let node = self.node_mut(id);
                node.bump_count();
                up = node.parent();
            }
            self.len += 1;
        }

        debug!(len = word.len(), inserted = created, "insert");
        Ok(created)
    }

    /// Inserts the labels of `text`. See [`Dictionary::insert`].
    pub fn insert_str(&mut self, text: &str) -> Result<bool, AutocompleteError> {
        self.insert(&L::from_text(text))
    }

    /// Finds `symbol` in the chain below `parent`, appending it at the tail
    /// when absent. Returns the node and whether it was created.
    fn find_or_append(&mut self, parent: Option<NodeId>, symbol: Symbol<L>) -> (NodeId, bool) {
        let Some(head) = self.chain_below(parent) else {
            let id = self.push_node(Node::new(symbol, parent));
            match parent {
                Some(p) => self.node_mut(p).set_child(id),
                None => self.root = Some(id),
            }
            return (id, true);
        };

        let mut tail = head;
        loop {
            let node = self.node(tail);
            if node.symbol() == symbol {
                return (tail, false);
            }
            match node.next_sibling() {
                Some(next) => tail = next,
                None => break,
            }
        }

        let id = self.push_node(Node::new(symbol, parent));
        self.node_mut(tail).set_next_sibling(id);
        self.node_mut(id).set_prev_sibling(tail);
        (id, true)
    }

    fn push_node(&mut self, node: Node<L>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

impl<L: Label, W: AsRef<[L]>> Extend<W> for Dictionary<L> {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            let _ = self.insert(word.as_ref());
        }
    }
}

impl<L: Label, W: AsRef<[L]>> FromIterator<W> for Dictionary<L> {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}
