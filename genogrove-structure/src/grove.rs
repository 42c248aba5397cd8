//! The multi-index container.
//!
//! A [`Grove`] keeps one independent [`Tree`] per named index (typically one per
//! chromosome). Trees are created lazily on the first insertion into a name.
//!
//! # Examples
//!
//! ```
//! use genogrove_core::models::Interval;
//! use genogrove_structure::Grove;
//!
//! let mut grove: Grove<Interval<u64>> = Grove::with_order(100).unwrap();
//! grove.insert("chr1", Interval::new(100, 200));
//! grove.insert("chr1", Interval::new(150, 250));
//! grove.insert("chr1", Interval::new(300, 400));
//! grove.insert("chr2", Interval::new(100, 200));
//!
//! let query = Interval::new(175, 225);
//! assert_eq!(grove.intersect_index(&query, "chr1").len(), 2);
//! assert_eq!(grove.intersect_index(&query, "chr2").len(), 1);
//! assert_eq!(grove.intersect(&query).len(), 3);
//! assert_eq!(grove.size(), 4);
//! ```

use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display};

use log::debug;

use genogrove_core::models::Overlappable;

use crate::config::GroveConfig;
use crate::errors::GroveResult;
use crate::key::Key;
use crate::query_result::QueryResult;
use crate::tree::Tree;

pub struct Grove<T: Overlappable> {
    config: GroveConfig,
    trees: Vec<Tree<T>>,
    /// Index name for each entry of `trees`.
    names: Vec<String>,
    /// Index name to position in `trees`, kept in name order.
    positions: BTreeMap<String, usize>,
}

impl<T: Overlappable> Default for Grove<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Overlappable> Grove<T> {
    /// An empty grove with the default order of 3.
    pub fn new() -> Self {
        Grove {
            config: GroveConfig::default(),
            trees: Vec::new(),
            names: Vec::new(),
            positions: BTreeMap::new(),
        }
    }

    pub fn with_order(order: usize) -> GroveResult<Self> {
        Self::from_config(GroveConfig::with_order(order))
    }

    pub fn from_config(config: GroveConfig) -> GroveResult<Self> {
        config.validate()?;
        Ok(Grove {
            config,
            ..Self::new()
        })
    }

    ///
    /// Insert a value into the named index, creating the index if needed.
    ///
    /// # Arguments
    /// - index: the index name, e.g. a chromosome like "chr1"
    /// - value: the value to store
    ///
    /// # Returns
    /// - a key that stays valid for the lifetime of the grove
    ///
    pub fn insert(&mut self, index: &str, value: T) -> Key {
        let pos = self.tree_position(index);
        Key::new(pos, self.trees[pos].insert(value))
    }

    ///
    /// Append a value to the named index without searching for its position.
    ///
    /// The caller guarantees `value` is not smaller than anything already stored in
    /// that index; see [`Tree::insert_sorted`].
    ///
    pub fn insert_sorted(&mut self, index: &str, value: T) -> Key {
        let pos = self.tree_position(index);
        Key::new(pos, self.trees[pos].insert_sorted(value))
    }

    ///
    /// Find overlaps with `query` in every index. Indices are visited in name order.
    ///
    pub fn intersect(&self, query: &T) -> QueryResult<'_, T> {
        let keys = self
            .positions
            .values()
            .flat_map(|&pos| {
                self.trees[pos]
                    .intersect(query)
                    .into_iter()
                    .map(move |record| Key::new(pos, record))
            })
            .collect();
        QueryResult::new(query.clone(), keys, self)
    }

    ///
    /// Find overlaps with `query` in a single index. An unknown index yields an
    /// empty result.
    ///
    pub fn intersect_index(&self, query: &T, index: &str) -> QueryResult<'_, T> {
        let keys = match self.positions.get(index) {
            Some(&pos) => self.trees[pos]
                .intersect(query)
                .into_iter()
                .map(|record| Key::new(pos, record))
                .collect(),
            None => Vec::new(),
        };
        QueryResult::new(query.clone(), keys, self)
    }

    /// Total number of stored values across all indices.
    pub fn size(&self) -> usize {
        self.trees.iter().map(Tree::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.iter().all(Tree::is_empty)
    }

    /// The branching factor every tree in this grove is built with.
    pub fn order(&self) -> usize {
        self.config.order
    }

    pub fn config(&self) -> &GroveConfig {
        &self.config
    }

    pub fn get(&self, key: Key) -> Option<&T> {
        self.trees.get(key.index())?.get(key.record())
    }

    /// Name of the index `key` was inserted into.
    pub fn index_of(&self, key: Key) -> Option<&str> {
        self.names.get(key.index()).map(String::as_str)
    }

    /// Index names in sorted order.
    pub fn indices(&self) -> impl Iterator<Item = &str> + '_ {
        self.positions.keys().map(String::as_str)
    }

    pub fn tree(&self, index: &str) -> Option<&Tree<T>> {
        self.positions.get(index).map(|&pos| &self.trees[pos])
    }

    fn tree_position(&mut self, index: &str) -> usize {
        if let Some(&pos) = self.positions.get(index) {
            return pos;
        }

        debug!("creating index '{}' with order {}", index, self.config.order);
        let pos = self.trees.len();
        self.trees.push(Tree::from_valid_config(&self.config));
        self.names.push(index.to_string());
        self.positions.insert(index.to_string(), pos);
        pos
    }
}

impl<T: Overlappable + Display> Grove<T> {
    /// Human-readable form of `key` as `index:value`, e.g. `chr1:100-200`.
    /// Returns `None` for a key this grove did not hand out.
    pub fn describe(&self, key: Key) -> Option<String> {
        let name = self.index_of(key)?;
        let value = self.get(key)?;
        Some(format!("{name}:{value}"))
    }
}

impl<T: Overlappable> Display for Grove<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grove(size={})", self.size())
    }
}

impl<T: Overlappable> Debug for Grove<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grove")
            .field("order", &self.order())
            .field("size", &self.size())
            .field("indices", &self.positions.keys().collect::<Vec<_>>())
            .finish()
    }
}
