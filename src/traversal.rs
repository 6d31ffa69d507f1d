//! The classical traversals of an [`OrderedTree`]. Each one visits every node exactly once and
//! returns the values in visiting order as a `Vec`.
//!
//! The depth-first orders keep their own stack instead of recursing so a degenerate tree can be
//! walked no matter how tall it is.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let tree: OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
//!
//! assert_eq!(tree.pre_order(), vec![&2, &1, &3]);
//! assert_eq!(tree.in_order(), vec![&1, &2, &3]);
//! assert_eq!(tree.post_order(), vec![&1, &3, &2]);
//! assert_eq!(tree.breadth_first(), vec![&2, &1, &3]);
//! ```

use std::collections::VecDeque;

use crate::tree::{Node, OrderedTree};

impl<T> OrderedTree<T> {
    /// Visits a node, then its left subtree, then its right subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut visited = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            visited.push(node.value());
            // Right goes on first so that left comes off first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
        visited
    }

    /// Visits a node's left subtree, then the node, then its right subtree. This yields the
    /// values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut visited = Vec::new();
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            match stack.pop() {
                Some(node) => {
                    visited.push(node.value());
                    current = node.right();
                }
                None => return visited,
            }
        }
    }

    /// Visits a node's left subtree, then its right subtree, then the node.
    pub fn post_order(&self) -> Vec<&T> {
        // Node, right, left reversed is left, right, node.
        let mut visited = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            visited.push(node.value());
            stack.extend(node.left());
            stack.extend(node.right());
        }
        visited.reverse();
        visited
    }

    /// Visits the tree level by level, left to right within a level. An empty tree yields an
    /// empty `Vec`.
    pub fn breadth_first(&self) -> Vec<&T> {
        let mut visited = Vec::new();
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visited.push(node.value());
            queue.extend(node.left());
            queue.extend(node.right());
        }
        visited
    }
}
