use std::fmt;

use crate::{Dictionary, Label, NodeId, Symbol};

const BANNER: &str = "====================";

/// A printable listing of part of a [`Dictionary`], for debugging.
///
/// Created by [`Dictionary::dump`]. Each node takes one line, indented by
/// its depth below the starting chain: the label (`^` for the sentinel), a
/// ` *` marker when a word ends right after the label, and the node's word
/// count in parentheses.
pub struct Dump<'a, L: Label> {
    dict: &'a Dictionary<L>,
    start: &'a [L],
}

impl<L: Label> Dictionary<L> {
    /// Lists the subtrie below the node reached by `start`, or the whole trie
    /// for an empty `start`. Lists nothing if `start` is not a stored prefix.
    pub fn dump<'a>(&'a self, start: &'a [L]) -> Dump<'a, L> {
        Dump { dict: self, start }
    }
}

impl<L: Label> Dump<'_, L> {
    fn head(&self) -> Option<NodeId> {
        if self.start.is_empty() {
            self.dict.root()
        } else {
            self.dict
                .traverse(self.start)
                .and_then(|last| self.dict.node(last).child())
        }
    }
}

impl<L: Label> fmt::Display for Dump<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = L::to_text(self.start);
        writeln!(f, "{BANNER} START: DLB Trie Starting from \"{start}\" {BANNER}")?;

        // Explicit stack: child chains print before later siblings.
        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        if let Some(head) = self.head() {
            stack.push((head, 0));
        }
        while let Some((id, depth)) = stack.pop() {
            let node = self.dict.node(id);
            write!(f, "{:depth$}", "")?;
            match node.symbol() {
                Symbol::Label(l) => l.fmt_label(f)?,
                Symbol::End => f.write_str("^")?,
            }
            if self.dict.chain_has_end(node.child()) {
                f.write_str(" *")?;
            }
            writeln!(f, " ({})", node.count())?;

            if let Some(next) = node.next_sibling() {
                stack.push((next, depth));
            }
            if let Some(child) = node.child() {
                stack.push((child, depth + 1));
            }
        }

        writeln!(f, "{BANNER} END: DLB Trie Starting from \"{start}\" {BANNER}")
    }
}
