pub mod interval;
pub mod traits;

// re-export for cleaner imports
pub use self::interval::Interval;
pub use self::traits::Overlappable;
