// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Ancestor tracking during a walk.
//!
//! Nodes carry no parent pointers. A visitor that needs context returns its
//! [`Cursor`] from [`JavaVisitor::cursor`](super::JavaVisitor::cursor), and
//! [`visit_tree`](super::visit_tree) pushes each node before dispatch and pops
//! it afterwards. The stack holds the nodes as they were when entered.

use crate::tree::{Tree, TreeElement};

/// Stack of the nodes currently being visited, root first.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    stack: Vec<Tree>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tree: Tree) {
        self.stack.push(tree);
    }

    pub fn pop(&mut self) -> Option<Tree> {
        self.stack.pop()
    }

    /// The node being visited.
    pub fn current(&self) -> Option<&Tree> {
        self.stack.last()
    }

    /// The parent of the node being visited.
    pub fn parent(&self) -> Option<&Tree> {
        self.stack.iter().rev().nth(1)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Ancestors from the root down to the current node.
    pub fn path(&self) -> impl Iterator<Item = &Tree> {
        self.stack.iter()
    }

    /// The nearest strict ancestor of kind `T`.
    pub fn first_enclosing<T: TreeElement>(&self) -> Option<T> {
        let ancestors = self.stack.len().saturating_sub(1);
        self.stack[..ancestors]
            .iter()
            .rev()
            .find_map(|tree| tree.cast::<T>())
    }
}
