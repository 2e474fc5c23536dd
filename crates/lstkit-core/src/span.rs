//! Source positions kept beside the tree.
//!
//! Nodes do not store positions: an edited tree has no meaningful offsets.
//! A parser may record the byte range it consumed for each node in a
//! [`SpanTable`], keyed by [`NodeId`], and hand it back alongside the tree.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::identity::NodeId;

/// A half-open byte range `[start, end)` into UTF-8 source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: u64,
    /// End byte offset (exclusive).
    pub end: u64,
}

impl Span {
    /// # Panics
    /// Panics if `start > end`.
    pub fn new(start: u64, end: u64) -> Self {
        assert!(start <= end, "span start ({start}) must be <= end ({end})");
        Span { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Byte spans recorded by a parser, keyed by node id.
///
/// Not every node needs a span; lookups for unrecorded ids return `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanTable {
    spans: HashMap<NodeId, Span>,
}

impl SpanTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node_id: NodeId, span: Span) {
        self.spans.insert(node_id, span);
    }

    pub fn span_of(&self, node_id: NodeId) -> Option<Span> {
        self.spans.get(&node_id).copied()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Merge another table into this one; entries in `other` win.
    pub fn extend(&mut self, other: SpanTable) {
        self.spans.extend(other.spans);
    }
}
