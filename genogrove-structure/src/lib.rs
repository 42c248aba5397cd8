//! B+ tree storage and overlap querying for genomic intervals.
//!
//! This crate provides the grove: a set of independent, named B+ trees (one per
//! index, e.g. per chromosome) whose internal nodes carry the maximum interval
//! end of every child subtree. That augmentation lets overlap queries skip whole
//! subtrees instead of scanning every interval.
//!
//! ## Features
//!
//! - **Stable handles**: every insertion returns a [`Key`] that stays valid as the
//!   tree keeps growing; values live in a block arena and are never moved
//! - **Sorted fast path**: [`Grove::insert_sorted`] appends pre-sorted input
//!   without descending from the root
//! - **Generic values**: anything implementing
//!   [`Overlappable`](genogrove_core::models::Overlappable) can be stored
//!
//! The engine is single-threaded; it holds no locks.
//!
//! ## Quick Start
//!
//! ```rust
//! use genogrove_core::models::Interval;
//! use genogrove_structure::Grove;
//!
//! let mut grove: Grove<Interval<u64>> = Grove::new();
//!
//! // pre-sorted input can skip the descent
//! for (start, end) in [(100, 200), (300, 400), (500, 600)] {
//!     grove.insert_sorted("chr1", Interval::new(start, end));
//! }
//! let key = grove.insert("chr2", Interval::new(100, 200));
//!
//! let result = grove.intersect(&Interval::new(150, 350));
//! for (key, interval) in result.iter() {
//!     println!("{}: {}", grove.index_of(key).unwrap_or("?"), interval);
//! }
//! assert_eq!(result.len(), 3);
//! assert_eq!(grove.get(key), Some(&Interval::new(100, 200)));
//! ```

pub mod arena;
pub mod config;
pub mod errors;
pub mod grove;
pub mod key;
mod node;
pub mod query_result;
pub mod tree;

// re-exports
pub use self::arena::{RecordArena, RecordId};
pub use self::config::GroveConfig;
pub use self::errors::{GroveError, GroveResult};
pub use self::grove::Grove;
pub use self::key::Key;
pub use self::query_result::QueryResult;
pub use self::tree::Tree;

/// Constants used throughout the crate.
pub mod consts {
    /// Branching factor used when none is given.
    pub const DEFAULT_ORDER: usize = 3;
    /// Smallest order that still lets internal nodes split into two non-trivial halves.
    pub const MIN_ORDER: usize = 3;
    /// Records per arena block.
    pub const DEFAULT_BLOCK_SIZE: usize = 1024;
}
