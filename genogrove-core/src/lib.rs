//! # genogrove-core
//!
//! Shared models for the genogrove workspace: the half-open genomic [`Interval`](models::Interval),
//! the [`Overlappable`](models::Overlappable) capability that every storable value provides,
//! error types, and helpers for reading BED-like files.
//!
//! ```rust
//! use genogrove_core::models::{Interval, Overlappable};
//!
//! let a = Interval::new(100u64, 200);
//! let b = Interval::new(150u64, 250);
//!
//! assert!(Interval::overlap(&a, &b));
//! assert!(a.overlaps(&b));
//! assert!(a < b);
//! ```
pub mod errors;
pub mod models;
pub mod utils;
