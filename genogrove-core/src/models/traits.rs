use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};

/// The capability set a value needs to be stored in a grove: a total order
/// and a half-open coordinate range used for overlap testing.
///
/// The order must sort primarily by [`start`](Overlappable::start); the tree
/// prunes its overlap search on that assumption.
pub trait Overlappable: Ord + Clone + Debug {
    type Coord: PrimInt + Unsigned + Debug;

    fn start(&self) -> Self::Coord;

    fn end(&self) -> Self::Coord;

    /// Half-open overlap: `self.start < other.end && other.start < self.end`.
    ///
    /// Implementations may narrow this predicate but must never report an overlap
    /// the default would reject; subtree pruning relies on it.
    #[inline]
    fn overlaps(&self, other: &Self) -> bool {
        self.start() < other.end() && other.start() < self.end()
    }
}
