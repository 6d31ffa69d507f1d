/// Result of measuring a subtree while checking whether it is height-balanced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Balance {
    /// The subtree is balanced and has this many levels. An empty subtree has 0.
    Height(usize),
    /// Some node in the subtree has children whose heights differ by more than 1.
    /// Once seen, this propagates straight up to the root.
    Unbalanced,
}

impl Balance {
    /// Combines the results of a node's two children into the result for the node.
    pub(crate) fn join(left: Self, right: Self) -> Self {
        match (left, right) {
            (Self::Height(l), Self::Height(r)) if l.abs_diff(r) <= 1 => Self::Height(l.max(r) + 1),
            _ => Self::Unbalanced,
        }
    }
}
