//! B+ tree nodes.
//!
//! Nodes are stored in a per-tree `Vec` and refer to each other by [`NodeId`].
//! Leaves hold handles into the tree's record arena, never the values themselves.

use crate::arena::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// One child of an internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Branch<C> {
    /// The smallest record reachable through `child`.
    pub(crate) separator: RecordId,
    pub(crate) child: NodeId,
    /// The largest `end` reachable through `child`.
    pub(crate) max_end: C,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct LeafNode {
    pub(crate) keys: Vec<RecordId>,
    /// Next leaf to the right in the leaf chain.
    pub(crate) next: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub(crate) struct InternalNode<C> {
    pub(crate) branches: Vec<Branch<C>>,
}

#[derive(Debug, Clone)]
pub(crate) enum Node<C> {
    Leaf(LeafNode),
    Internal(InternalNode<C>),
}

impl LeafNode {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        LeafNode {
            keys: Vec::with_capacity(cap),
            next: None,
        }
    }

    /// Move the upper half of the keys into a new leaf, which takes over this
    /// leaf's place in the chain. The caller links `self.next` to the new node.
    pub(crate) fn split(&mut self) -> LeafNode {
        let mid = self.keys.len() / 2;
        LeafNode {
            keys: self.keys.split_off(mid),
            next: self.next,
        }
    }
}

impl<C: Copy> InternalNode<C> {
    pub(crate) fn split(&mut self) -> InternalNode<C> {
        let mid = self.branches.len() / 2;
        InternalNode {
            branches: self.branches.split_off(mid),
        }
    }
}

impl<C> Node<C> {
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        match self {
            Node::Leaf(leaf) => leaf.keys.len(),
            Node::Internal(inner) => inner.branches.len(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// The smallest record in this node's subtree.
    pub(crate) fn first_record(&self) -> Option<RecordId> {
        match self {
            Node::Leaf(leaf) => leaf.keys.first().copied(),
            Node::Internal(inner) => inner.branches.first().map(|b| b.separator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ids(range: std::ops::Range<usize>) -> Vec<RecordId> {
        let mut arena = crate::arena::RecordArena::new();
        let mut out = Vec::new();
        for i in 0..range.end {
            let id = arena.alloc(i);
            if i >= range.start {
                out.push(id);
            }
        }
        out
    }

    #[rstest]
    fn test_leaf_split_keeps_lower_half() {
        let all = ids(0..5);
        let mut leaf = LeafNode {
            keys: all.clone(),
            next: Some(NodeId(9)),
        };
        let right = leaf.split();

        assert_eq!(leaf.keys, all[..2].to_vec());
        assert_eq!(right.keys, all[2..].to_vec());
        assert_eq!(right.next, Some(NodeId(9)));
    }

    #[rstest]
    fn test_internal_split_halves_branches() {
        let all = ids(0..4);
        let mut inner = InternalNode {
            branches: all
                .iter()
                .enumerate()
                .map(|(i, &separator)| Branch {
                    separator,
                    child: NodeId(i),
                    max_end: i as u64,
                })
                .collect(),
        };
        let right = inner.split();

        assert_eq!(inner.branches.len(), 2);
        assert_eq!(right.branches.len(), 2);
        assert_eq!(right.branches[0].child, NodeId(2));

        let node = Node::Internal(right);
        assert_eq!(node.is_leaf(), false);
        assert_eq!(node.first_record(), Some(all[2]));
    }

    #[rstest]
    fn test_empty_leaf_has_no_first_record() {
        let node: Node<u64> = Node::Leaf(LeafNode::with_capacity(2));
        assert_eq!(node.len(), 0);
        assert_eq!(node.first_record(), None);
    }
}
