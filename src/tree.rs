//! An unbalanced BST that owns its nodes through `Box`es. Each child is owned by exactly one
//! parent slot so dropping a subtree drops everything underneath it.
//!
//! Values that compare equal to a node are always placed in that node's right subtree. The tree
//! never rotates so its shape is entirely determined by the insertion order.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! tree.insert(1).insert(1).insert(0);
//! assert_eq!(tree.find(&1).map(|n| n.value()), Some(&1));
//!
//! // Duplicates are kept.
//! assert_eq!(tree.len(), 3);
//!
//! // Removing a value removes a single node holding it.
//! assert!(tree.remove(&1));
//! assert_eq!(tree.in_order(), vec![&0, &1]);
//! ```

use std::cmp::Ordering;
use std::iter::FromIterator;
use std::mem;

use tracing::trace;

use crate::util::Balance;

/// An owning link to a child. `None` is the empty slot at the bottom of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single value and the two subtrees hanging off of it.
// TODO stack based Clone/Debug/PartialEq. The derived impls recurse to the height of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Constructs a new leaf `Node` holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Constructs a `Node` with the given children. The caller is responsible for the ordering
    /// invariant: everything in `left` must be less than `value` and everything in `right`
    /// greater than or equal to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Node, OrderedTree};
    ///
    /// let root = Node::with_children(5, Some(Node::new(3)), Some(Node::new(8)));
    /// let tree = OrderedTree::with_root(root);
    ///
    /// assert_eq!(tree.breadth_first(), vec![&5, &3, &8]);
    /// ```
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The leftmost node of the subtree rooted here.
    fn min_node(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The rightmost node of the subtree rooted here.
    fn max_node(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }
}

/// An unbalanced Binary Search Tree over values with a total ordering.
///
/// Two trees compare equal when they have the same shape and the same values in the same places.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedTree<T> {
    pub(crate) root: Link<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    // A degenerate tree is a chain as tall as it is long, so dropping it node by node through
    // `Box`'s own drop glue would recurse that deep.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Generates a tree seeded with an existing root. The subtree under `root` is taken as is.
    pub fn with_root(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree. This walks every node.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// Number of levels in the tree. An empty tree has a height of 0 and a lone root has a
    /// height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Inserts `value` as a new leaf. Values less than a node go left, everything else goes
    /// right. Returns the tree so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2).insert(1).insert(2);
    ///
    /// assert_eq!(tree.pre_order(), vec![&2, &1, &2]);
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(value)));
        self
    }

    /// Same as [`OrderedTree::insert`] but descends by recursion. Both place a value in exactly
    /// the same spot.
    pub fn insert_recursively(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        match &mut self.root {
            Some(root) => Self::insert_below(root, value),
            None => self.root = Some(Box::new(Node::new(value))),
        }
        self
    }

    fn insert_below(node: &mut Node<T>, value: T)
    where
        T: Ord,
    {
        let child = if value < node.value {
            &mut node.left
        } else {
            &mut node.right
        };
        match child {
            Some(child) => Self::insert_below(child, value),
            None => *child = Some(Box::new(Node::new(value))),
        }
    }

    /// Finds a node holding `value`. If there are duplicates, the one closest to the root is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Same as [`OrderedTree::find`] but descends by recursion.
    pub fn find_recursively(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        Self::find_below(self.root(), value)
    }

    fn find_below<'a>(node: Option<&'a Node<T>>, value: &T) -> Option<&'a Node<T>>
    where
        T: Ord,
    {
        let node = node?;
        match value.cmp(&node.value) {
            Ordering::Less => Self::find_below(node.left(), value),
            Ordering::Equal => Some(node),
            Ordering::Greater => Self::find_below(node.right(), value),
        }
    }

    /// Removes a single node holding `value`. Returns whether a node was removed; if the value
    /// isn't in the tree nothing changes.
    ///
    /// A node with two children isn't unlinked. Instead it takes the value of its in-order
    /// successor and the successor's node, which never has a left child, is removed from the
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = vec![5, 3, 8, 7, 9].into_iter().collect();
    ///
    /// assert!(tree.remove(&8));
    /// assert_eq!(tree.pre_order(), vec![&5, &3, &9, &7]);
    ///
    /// assert!(!tree.remove(&42));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut removed = false;
        self.root = Self::remove_below(self.root.take(), value, &mut removed);
        removed
    }

    /// Removes `value` from the subtree at `link` and returns the new root of that subtree. Each
    /// level hands its possibly-new child back to its parent which relinks it.
    fn remove_below(link: Link<T>, value: &T, removed: &mut bool) -> Link<T>
    where
        T: Ord,
    {
        let mut node = match link {
            Some(node) => node,
            None => {
                trace!("value to remove not found");
                return None;
            }
        };

        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = Self::remove_below(node.left.take(), value, removed);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::remove_below(node.right.take(), value, removed);
                Some(node)
            }
            Ordering::Equal => {
                *removed = true;
                match (node.left.take(), node.right.take()) {
                    (None, None) => {
                        trace!("removing leaf");
                        None
                    }
                    (None, Some(only)) | (Some(only), None) => {
                        trace!("removing node with one child");
                        Some(only)
                    }
                    (Some(left), Some(right)) => {
                        trace!("removing node with two children, promoting successor");
                        let (successor, rest) = Self::take_min(right);
                        node.value = successor;
                        node.left = Some(left);
                        node.right = rest;
                        Some(node)
                    }
                }
            }
        }
    }

    /// Detaches the leftmost node of the subtree rooted at `node`. Returns its value and what is
    /// left of the subtree. The leftmost node has no left child so its right child, if any,
    /// takes its place.
    fn take_min(mut node: Box<Node<T>>) -> (T, Link<T>) {
        match node.left.take() {
            None => {
                let Node { value, right, .. } = *node;
                (value, right)
            }
            Some(left) => {
                let (min, rest) = Self::take_min(left);
                node.left = rest;
                (min, Some(node))
            }
        }
    }

    /// Whether, at every node, the heights of the two subtrees differ by at most 1. An empty tree
    /// is balanced. This visits each node once.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let bushy: OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let chain: OrderedTree<_> = vec![1, 2, 3].into_iter().collect();
    ///
    /// assert!(bushy.is_balanced());
    /// assert!(!chain.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        Self::balance_of(self.root()) != Balance::Unbalanced
    }

    fn balance_of(node: Option<&Node<T>>) -> Balance {
        let node = match node {
            Some(node) => node,
            None => return Balance::Height(0),
        };
        match Self::balance_of(node.left()) {
            Balance::Unbalanced => Balance::Unbalanced,
            left => Balance::join(left, Self::balance_of(node.right())),
        }
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| root.min_node().value())
    }

    /// The largest value in the tree. With duplicates this is the deepest copy.
    pub fn max(&self) -> Option<&T> {
        self.root().map(|root| root.max_node().value())
    }

    /// The value of the node that precedes the maximum in sorted order, or `None` when the tree
    /// has fewer than two nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![5, 3, 8].into_iter().collect();
    /// assert_eq!(tree.find_second_highest(), Some(&5));
    ///
    /// let tree: OrderedTree<_> = vec![5].into_iter().collect();
    /// assert_eq!(tree.find_second_highest(), None);
    /// ```
    pub fn find_second_highest(&self) -> Option<&T> {
        let mut current = self.root()?;
        loop {
            match (current.left(), current.right()) {
                // `current` is the maximum so the runner up is the largest thing below it.
                (Some(left), None) => return Some(left.max_node().value()),
                (_, Some(right)) if right.is_leaf() => return Some(current.value()),
                (_, Some(right)) => current = right,
                (None, None) => return None,
            }
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> From<Node<T>> for OrderedTree<T> {
    fn from(root: Node<T>) -> Self {
        Self::with_root(root)
    }
}

impl<T> OrderedTree<T> {
    /// Empties the tree, returning the old contents as their own tree.
    pub fn take(&mut self) -> Self {
        Self {
            root: mem::take(&mut self.root),
        }
    }
}
