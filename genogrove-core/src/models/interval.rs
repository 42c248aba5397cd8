use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

use num_traits::{PrimInt, Unsigned, identities::zero};

use super::traits::Overlappable;
use crate::errors::{IntervalError, IntervalResult};

/// Represent a range from [start, end)
/// Inclusive start, exclusive of end
///
/// `start <= end` is not enforced by [`Interval::new`]; use [`Interval::try_new`]
/// to reject inverted coordinates.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<I> {
    pub start: I,
    pub end: I,
}

impl<I> Interval<I>
where
    I: PrimInt + Unsigned + Debug,
{
    #[inline]
    pub fn new(start: I, end: I) -> Self {
        Interval { start, end }
    }

    ///
    /// Create an interval, rejecting `start > end`.
    ///
    pub fn try_new(start: I, end: I) -> IntervalResult<Self> {
        if start > end {
            return Err(IntervalError::Inverted {
                start: format!("{:?}", start),
                end: format!("{:?}", end),
            });
        }
        Ok(Interval { start, end })
    }

    #[inline]
    pub fn start(&self) -> I {
        self.start
    }

    #[inline]
    pub fn end(&self) -> I {
        self.end
    }

    #[inline]
    pub fn set_start(&mut self, start: I) {
        self.start = start;
    }

    #[inline]
    pub fn set_end(&mut self, end: I) {
        self.end = end;
    }

    /// Number of positions covered; zero for empty or inverted intervals.
    #[inline]
    pub fn width(&self) -> I {
        self.end.checked_sub(&self.start).unwrap_or_else(zero::<I>)
    }

    /// Check if two intervals overlap
    #[inline]
    pub fn overlap(a: &Interval<I>, b: &Interval<I>) -> bool {
        a.start < b.end && b.start < a.end
    }
}

impl<I> Default for Interval<I>
where
    I: PrimInt + Unsigned + Debug,
{
    fn default() -> Self {
        Interval {
            start: zero::<I>(),
            end: zero::<I>(),
        }
    }
}

impl<I> Ord for Interval<I>
where
    I: PrimInt + Unsigned + Debug,
{
    #[inline]
    fn cmp(&self, other: &Interval<I>) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => self.end.cmp(&other.end),
        }
    }
}

impl<I> PartialOrd for Interval<I>
where
    I: PrimInt + Unsigned + Debug,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I> Overlappable for Interval<I>
where
    I: PrimInt + Unsigned + Debug,
{
    type Coord = I;

    #[inline]
    fn start(&self) -> I {
        self.start
    }

    #[inline]
    fn end(&self) -> I {
        self.end
    }

    #[inline]
    fn overlaps(&self, other: &Self) -> bool {
        Interval::overlap(self, other)
    }
}

impl<I> Display for Interval<I>
where
    I: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
