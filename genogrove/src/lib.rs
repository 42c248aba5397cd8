//! # genogrove
//!
//! Storage and overlap queries for genomic intervals, organized as one B+ tree per
//! named index (e.g. per chromosome).
//!
//! This crate re-exports the workspace crates:
//!
//! - [`core`]: the [`Interval`](core::models::Interval) model and the
//!   [`Overlappable`](core::models::Overlappable) trait
//! - [`structure`]: the [`Grove`](structure::Grove) and its trees (feature `structure`, on by default)
//!
//! ```rust
//! use genogrove::core::models::Interval;
//! use genogrove::structure::Grove;
//!
//! let mut grove: Grove<Interval<u64>> = Grove::new();
//! grove.insert("chr1", Interval::new(100, 200));
//! assert_eq!(grove.intersect(&Interval::new(150, 160)).len(), 1);
//! ```
#[doc(inline)]
pub use genogrove_core as core;

#[cfg(feature = "structure")]
#[doc(inline)]
pub use genogrove_structure as structure;

pub mod consts {
    /// Version of the genogrove package.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
