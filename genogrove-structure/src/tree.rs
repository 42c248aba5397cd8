//! A single B+ tree of intervals, augmented with per-child subtree max-end values.
//!
//! Intervals are kept sorted by their total order across the leaf chain. Every
//! internal branch records the smallest record below it (its separator) and the
//! largest `end` below it, which lets [`Tree::intersect`] skip whole subtrees:
//!
//! - a branch whose separator starts at or after `query.end` cannot overlap,
//!   and neither can any branch to its right;
//! - a branch whose max-end is at or before `query.start` cannot overlap.

use std::iter::FusedIterator;
use std::ops::Index;

use log::trace;
use num_traits::Zero;

use genogrove_core::models::Overlappable;

use crate::arena::{RecordArena, RecordId};
use crate::config::GroveConfig;
use crate::errors::GroveResult;
use crate::node::{Branch, InternalNode, LeafNode, Node, NodeId};

#[derive(Debug, Clone)]
pub struct Tree<T: Overlappable> {
    order: usize,
    records: RecordArena<T>,
    nodes: Vec<Node<T::Coord>>,
    root: NodeId,
    /// Leftmost leaf. Splits keep the lower half in place, so this never changes.
    head: NodeId,
    /// Path from the root to the rightmost leaf.
    spine: Vec<NodeId>,
}

impl<T: Overlappable> Tree<T> {
    ///
    /// Create an empty tree with the given order and default arena settings.
    ///
    /// # Arguments
    /// - order: maximum children per internal node, at least 3
    ///
    pub fn new(order: usize) -> GroveResult<Self> {
        Self::with_config(&GroveConfig::with_order(order))
    }

    pub fn with_config(config: &GroveConfig) -> GroveResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    pub(crate) fn from_valid_config(config: &GroveConfig) -> Self {
        let root = NodeId(0);
        Tree {
            order: config.order,
            records: RecordArena::with_block_capacity(config.block_size),
            nodes: vec![Node::Leaf(LeafNode::with_capacity(config.order))],
            root,
            head: root,
            spine: vec![root],
        }
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of levels, counting the leaves. An empty tree has height 1.
    #[inline]
    pub fn height(&self) -> usize {
        self.spine.len()
    }

    #[inline]
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.get(id)
    }

    ///
    /// Insert a value in sorted position, splitting full nodes on the way back up.
    ///
    /// Equal values are placed after the ones already stored.
    ///
    pub fn insert(&mut self, value: T) -> RecordId {
        let end = value.end();
        let id = self.records.alloc(value);
        let node_count = self.nodes.len();

        if let Some(branch) = self.insert_at(self.root, id, end) {
            self.grow_root(branch);
        }

        // nodes are only ever created by splits
        if self.nodes.len() != node_count {
            self.refresh_spine();
        }
        id
    }

    ///
    /// Append a value to the rightmost leaf without descending from the root.
    ///
    /// The caller guarantees `value` compares greater than or equal to every value
    /// already in the tree. This is not checked: violating it breaks the sort order
    /// and later searches may silently miss intervals.
    ///
    pub fn insert_sorted(&mut self, value: T) -> RecordId {
        let end = value.end();
        let id = self.records.alloc(value);
        let node_count = self.nodes.len();
        let depth = self.spine.len() - 1;

        // an ancestor's last branch covers everything below it, so once one level
        // already reaches `end` the levels above do too
        for &node in self.spine[..depth].iter().rev() {
            if let Node::Internal(inner) = &mut self.nodes[node.0] {
                match inner.branches.last_mut() {
                    Some(last) if end > last.max_end => last.max_end = end,
                    _ => break,
                }
            }
        }

        if let Node::Leaf(leaf) = &mut self.nodes[self.spine[depth].0] {
            leaf.keys.push(id);
        }

        let mut level = depth;
        while let Some(branch) = self.split_if_full(self.spine[level]) {
            if level == 0 {
                self.grow_root(branch);
                break;
            }
            let left_max = self.subtree_max_end(self.spine[level]);
            if let Node::Internal(parent) = &mut self.nodes[self.spine[level - 1].0] {
                if let Some(last) = parent.branches.last_mut() {
                    last.max_end = left_max;
                }
                parent.branches.push(branch);
            }
            level -= 1;
        }

        if self.nodes.len() != node_count {
            self.refresh_spine();
        }
        id
    }

    ///
    /// Find every stored value overlapping `query`, in tree order.
    ///
    pub fn intersect(&self, query: &T) -> Vec<RecordId> {
        let mut hits = Vec::new();
        if !self.is_empty() {
            self.search(self.root, query, &mut hits);
        }
        hits
    }

    ///
    /// Linear overlap scan along the leaf chain, stopping at the first value that
    /// starts at or after `query.end`. Returns the same hits as [`Tree::intersect`]
    /// without using the max-end augmentation.
    ///
    pub fn scan(&self, query: &T) -> Vec<RecordId> {
        self.iter()
            .take_while(|(_, value)| value.start() < query.end())
            .filter(|(_, value)| value.overlaps(query))
            .map(|(id, _)| id)
            .collect()
    }

    /// In-order traversal following the leaf chain.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            leaf: Some(self.head),
            pos: 0,
        }
    }

    fn search(&self, node: NodeId, query: &T, hits: &mut Vec<RecordId>) {
        match &self.nodes[node.0] {
            Node::Leaf(leaf) => {
                for &key in &leaf.keys {
                    let value = &self.records[key];
                    if value.start() >= query.end() {
                        break;
                    }
                    if value.overlaps(query) {
                        hits.push(key);
                    }
                }
            }
            Node::Internal(inner) => {
                for branch in &inner.branches {
                    if self.records[branch.separator].start() >= query.end() {
                        break;
                    }
                    if branch.max_end <= query.start() {
                        continue;
                    }
                    self.search(branch.child, query, hits);
                }
            }
        }
    }

    fn insert_at(&mut self, node: NodeId, id: RecordId, end: T::Coord) -> Option<Branch<T::Coord>> {
        let records = &self.records;
        let value = &records[id];

        let descend = match &mut self.nodes[node.0] {
            Node::Leaf(leaf) => {
                let pos = leaf.keys.partition_point(|k| records[*k] <= *value);
                leaf.keys.insert(pos, id);
                None
            }
            Node::Internal(inner) => {
                let idx = inner
                    .branches
                    .partition_point(|b| records[b.separator] <= *value)
                    .saturating_sub(1);
                let branch = &mut inner.branches[idx];
                // only the leftmost branch can be entered with a smaller value
                if records[branch.separator] > *value {
                    branch.separator = id;
                }
                if end > branch.max_end {
                    branch.max_end = end;
                }
                Some((idx, branch.child))
            }
        };

        let Some((idx, child)) = descend else {
            return self.split_if_full(node);
        };

        let right = self.insert_at(child, id, end)?;
        let left_max = self.subtree_max_end(child);
        if let Node::Internal(inner) = &mut self.nodes[node.0] {
            inner.branches[idx].max_end = left_max;
            inner.branches.insert(idx + 1, right);
        }
        self.split_if_full(node)
    }

    /// Split `node` at the median if it overflows, returning the branch that
    /// points at the new right sibling.
    fn split_if_full(&mut self, node: NodeId) -> Option<Branch<T::Coord>> {
        let new_id = NodeId(self.nodes.len());
        let max_keys = self.order - 1;
        let max_children = self.order;

        let right = match &mut self.nodes[node.0] {
            Node::Leaf(leaf) if leaf.keys.len() > max_keys => {
                let right = leaf.split();
                leaf.next = Some(new_id);
                Node::Leaf(right)
            }
            Node::Internal(inner) if inner.branches.len() > max_children => {
                Node::Internal(inner.split())
            }
            _ => return None,
        };

        let separator = right.first_record()?;
        self.nodes.push(right);
        Some(Branch {
            separator,
            child: new_id,
            max_end: self.subtree_max_end(new_id),
        })
    }

    fn grow_root(&mut self, right: Branch<T::Coord>) {
        let old_root = self.root;
        let Some(separator) = self.nodes[old_root.0].first_record() else {
            return;
        };
        let left = Branch {
            separator,
            child: old_root,
            max_end: self.subtree_max_end(old_root),
        };

        let mut branches = Vec::with_capacity(self.order + 1);
        branches.push(left);
        branches.push(right);

        self.root = NodeId(self.nodes.len());
        self.nodes.push(Node::Internal(InternalNode { branches }));
        trace!("root split, tree now holds {} nodes", self.nodes.len());
    }

    /// Max-end of a node, computed from its direct contents.
    fn subtree_max_end(&self, node: NodeId) -> T::Coord {
        match &self.nodes[node.0] {
            Node::Leaf(leaf) => leaf
                .keys
                .iter()
                .map(|k| self.records[*k].end())
                .max()
                .unwrap_or_else(<T::Coord as Zero>::zero),
            Node::Internal(inner) => inner
                .branches
                .iter()
                .map(|b| b.max_end)
                .max()
                .unwrap_or_else(<T::Coord as Zero>::zero),
        }
    }

    fn refresh_spine(&mut self) {
        self.spine.clear();
        let mut node = self.root;
        loop {
            self.spine.push(node);
            match &self.nodes[node.0] {
                Node::Internal(inner) => match inner.branches.last() {
                    Some(last) => node = last.child,
                    None => break,
                },
                Node::Leaf(_) => break,
            }
        }
    }
}

impl<T: Overlappable> Index<RecordId> for Tree<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: RecordId) -> &T {
        &self.records[id]
    }
}

/// Iterator over a [`Tree`] in sorted order, created by [`Tree::iter`].
pub struct Iter<'a, T: Overlappable> {
    tree: &'a Tree<T>,
    leaf: Option<NodeId>,
    pos: usize,
}

impl<'a, T: Overlappable> Iterator for Iter<'a, T> {
    type Item = (RecordId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            let Node::Leaf(leaf) = &tree.nodes[self.leaf?.0] else {
                self.leaf = None;
                return None;
            };
            if let Some(&id) = leaf.keys.get(self.pos) {
                self.pos += 1;
                return Some((id, &tree.records[id]));
            }
            self.leaf = leaf.next;
            self.pos = 0;
        }
    }
}

impl<T: Overlappable> FusedIterator for Iter<'_, T> {}

impl<'a, T: Overlappable> IntoIterator for &'a Tree<T> {
    type Item = (RecordId, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
