//! This crate exposes an unbalanced Binary Search Tree (BST) over ordered
//! values, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value
//! that was inserted and will sometimes have child `Node`s. The most
//! important invariants of this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Duplicates always go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). This tree never
//! rebalances itself, so inserting values in sorted order degenerates it into a
//! chain with `height == N`. [`OrderedTree::is_balanced`] reports whether that
//! has happened.
//!
//! The tree also supports the classical traversals: pre-order, in-order,
//! post-order, and breadth-first. In-order traversal visits the values in sorted
//! order.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! tree.insert(10).insert(5).insert(15);
//!
//! assert_eq!(tree.in_order(), vec![&5, &10, &15]);
//! assert_eq!(tree.find_second_highest(), Some(&10));
//!
//! tree.remove(&10);
//! assert!(tree.find(&10).is_none());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod traversal;
pub mod tree;
mod util;

pub use tree::{Node, OrderedTree};
