use std::mem;

use tracing::trace;

use crate::{AutocompleteError, Dictionary, Label, NodeId, Symbol};

/// Keystroke-driven navigation state over a [`Dictionary`].
///
/// A cursor tracks the prefix typed so far and a position in the trie: a node
/// of the sibling chain that holds the alternatives for the next label. Once a
/// label has no match the cursor is *locked*: further labels are buffered
/// without touching the trie, and as many retreats as locked labels bring it
/// back.
///
/// A cursor does not borrow its dictionary, so the dictionary can grow while
/// sessions are open. Every call must pass the same dictionary; node ids from
/// another dictionary are meaningless. After insertions a locked cursor may be
/// stale, see [`Cursor::sync`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor<L: Label> {
    prefix: Vec<L>,
    /// A node in the chain for the next label. `None` stands for the root
    /// chain, resolved on use so that an empty dictionary can grow later.
    current: Option<NodeId>,
    /// Number of trailing prefix labels without a match; 0 when unlocked.
    locked: usize,
}

impl<L: Label> Default for Cursor<L> {
    fn default() -> Self {
        Self {
            prefix: Vec::new(),
            current: None,
            locked: 0,
        }
    }
}

impl<L: Label> Cursor<L> {
    /// Creates a cursor at the empty prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// The labels typed so far, locked ones included.
    pub fn current_prefix(&self) -> &[L] {
        &self.prefix
    }

    /// The prefix as text.
    pub fn prefix_text(&self) -> String {
        L::to_text(&self.prefix)
    }

    /// Returns true if the prefix has no match in the dictionary.
    pub fn is_locked(&self) -> bool {
        self.locked > 0
    }

    /// Number of retreats needed to leave the locked state.
    pub fn locked_depth(&self) -> usize {
        self.locked
    }

    /// Head of the chain for the next label.
    fn chain(&self, dict: &Dictionary<L>) -> Option<NodeId> {
        match self.current {
            Some(id) => Some(dict.chain_head(id)),
            None => dict.root(),
        }
    }

    /// The node of the last matched label, `None` at the root chain.
    fn level(&self, dict: &Dictionary<L>) -> Option<NodeId> {
        self.current.and_then(|id| dict.node(id).parent())
    }

    fn lock(&mut self) {
        self.locked += 1;
        trace!(depth = self.locked, "cursor locked");
    }

    /// Appends `label` to the prefix in O(chain width) time.
    ///
    /// Returns true if the extended prefix starts at least one stored word.
    /// A locked cursor only buffers the label and returns false.
    pub fn advance(&mut self, dict: &Dictionary<L>, label: L) -> bool {
        self.prefix.push(label);
        if self.locked > 0 {
            self.lock();
            return false;
        }

        let Some(found) = dict.find_in_chain(self.chain(dict), Symbol::Label(label)) else {
            self.lock();
            return false;
        };

        // A matched label node always has words and a chain below it; the
        // guard keeps a malformed node from moving the cursor.
        let node = dict.node(found);
        match node.child() {
            Some(child) if node.count() > 0 => {
                self.current = Some(child);
                true
            }
            _ => {
                self.lock();
                false
            }
        }
    }

    /// Removes the last label of the prefix in O(1) time.
    ///
    /// # Errors
    ///
    /// Returns [`AutocompleteError::InvalidState`] if the prefix is empty.
    pub fn retreat(&mut self, dict: &Dictionary<L>) -> Result<(), AutocompleteError> {
        if self.locked > 0 {
            self.prefix.pop();
            self.locked -= 1;
            if self.locked == 0 {
                trace!("cursor unlocked");
            }
            return Ok(());
        }
        if self.prefix.pop().is_none() {
            return Err(AutocompleteError::InvalidState);
        }
        // The parent of the current chain sits in the previous chain.
        self.current = self.level(dict);
        Ok(())
    }

    /// Clears the prefix and returns to the root, unlocked.
    pub fn reset(&mut self) {
        self.prefix.clear();
        self.current = None;
        self.locked = 0;
    }

    /// Returns true if the prefix is a stored word.
    pub fn is_word(&self, dict: &Dictionary<L>) -> bool {
        if self.locked > 0 {
            return false;
        }
        dict.chain_has_end(self.chain(dict))
    }

    /// Number of stored words starting with the prefix, in O(1) time.
    ///
    /// At the empty prefix this is the number of stored words.
    pub fn number_of_predictions(&self, dict: &Dictionary<L>) -> usize {
        if self.locked > 0 {
            return 0;
        }
        match self.level(dict) {
            Some(last) => dict.node(last).count() as usize,
            None => dict.len(),
        }
    }

    /// Returns one stored word starting with the prefix, or None if there is
    /// none. The cursor does not move.
    ///
    /// The walk is the left-most one of [`Dictionary::predict`]; it costs
    /// time proportional to the length of the suffix it finds.
    pub fn retrieve_prediction(&self, dict: &Dictionary<L>) -> Option<Vec<L>> {
        if self.locked > 0 {
            return None;
        }
        dict.complete(self.level(dict), self.prefix.clone())
    }

    /// Re-walks the prefix from the root.
    ///
    /// Insertions never invalidate an unlocked cursor, but they may give a
    /// locked prefix a match. Syncing brings the locked depth up to date in
    /// O(prefix length) time.
    pub fn sync(&mut self, dict: &Dictionary<L>) {
        let prefix = mem::take(&mut self.prefix);
        self.reset();
        for label in prefix {
            self.advance(dict, label);
        }
        trace!(len = self.prefix.len(), locked = self.locked, "cursor synced");
    }
}
