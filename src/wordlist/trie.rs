use crate::labelset::LabelSet;
use crate::tiles::Label;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Marks the end of an edge list, or a node without outgoing edges.
const NONE: u32 = u32::MAX;

/// Prefix tree over letter labels, stored as an arena of plain vectors.
///
/// Nodes and edges are addressed by index. The outgoing edges of a node form a
/// linked list: `node_head[n]` is the first edge, `edge_next[e]` the next one.
/// Node 0 is the root and is always present. There is at most one edge per
/// (node, label).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trie {
    node_head: Vec<u32>,
    node_is_word: Vec<bool>,
    node_labels: Vec<LabelSet>,
    edge_char: Vec<Label>,
    edge_to: Vec<u32>,
    edge_next: Vec<u32>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create a trie with only the root node.
    pub fn new() -> Trie {
        let mut trie = Trie {
            node_head: Vec::new(),
            node_is_word: Vec::new(),
            node_labels: Vec::new(),
            edge_char: Vec::new(),
            edge_to: Vec::new(),
            edge_next: Vec::new(),
        };
        trie.add_node();
        trie
    }

    fn add_node(&mut self) -> usize {
        self.node_head.push(NONE);
        self.node_is_word.push(false);
        self.node_labels.push(LabelSet::new());
        self.node_head.len() - 1
    }

    fn add_edge(&mut self, from: usize, label: Label, to: usize) {
        let edge = self.edge_char.len() as u32;
        self.edge_char.push(label);
        self.edge_to.push(to as u32);
        self.edge_next.push(self.node_head[from]);
        self.node_head[from] = edge;
        self.node_labels[from].insert(label);
    }

    /// Insert `key`, creating nodes as needed, and mark its last node as a word.
    pub fn insert<K: AsRef<[Label]>>(&mut self, key: K) {
        let mut node = 0;
        for &label in key.as_ref() {
            node = match self.child(node, label) {
                Some(child) => child,
                None => {
                    let child = self.add_node();
                    self.add_edge(node, label, child);
                    child
                }
            };
        }
        self.node_is_word[node] = true;
    }

    /// Get the index of the child with `label` for `node` if present.
    #[inline]
    pub fn child(&self, node: usize, label: Label) -> Option<usize> {
        if !self.node_labels[node].contains(label) {
            return None;
        }
        let mut edge = self.node_head[node];
        while edge != NONE {
            let e = edge as usize;
            if self.edge_char[e] == label {
                return Some(self.edge_to[e] as usize);
            }
            edge = self.edge_next[e];
        }
        None
    }

    /// Follow `key` from the root, return the node reached or None.
    pub fn walk<K: AsRef<[Label]>>(&self, key: K) -> Option<usize> {
        key.as_ref()
            .iter()
            .try_fold(0, |node, &label| self.child(node, label))
    }

    /// Returns true if the first `len` labels of `buffer` are a path from the root,
    /// i.e. some inserted word could still start this way.
    #[inline]
    pub fn has_prefix(&self, buffer: &[Label], len: usize) -> bool {
        self.walk(&buffer[..len]).is_some()
    }

    /// Returns true if `key` was inserted.
    #[inline]
    pub fn is_word<K: AsRef<[Label]>>(&self, key: K) -> bool {
        self.walk(key).map_or(false, |node| self.node_is_word[node])
    }

    pub fn is_terminal(&self, node: usize) -> bool {
        self.node_is_word[node]
    }

    /// The labels on the outgoing edges of `node`.
    pub fn child_labels(&self, node: usize) -> LabelSet {
        self.node_labels[node]
    }

    pub fn node_count(&self) -> usize {
        self.node_head.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_char.len()
    }
}
