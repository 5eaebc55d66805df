use std::ops::{Bound, Range, RangeBounds, RangeInclusive};

use num_traits::NumRef;
use thiserror::Error;

/// Raised when an interval's bounds are inverted (`start > end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("interval start bound must be <= end bound")]
pub struct InvalidIntervalError;

/// A closed interval `[start, end]`, inclusive of both endpoints.
///
/// Construction enforces `start <= end`: [`Interval::new`] reports a violation
/// as an [`InvalidIntervalError`], while the `From` conversions treat it as a
/// caller contract violation and panic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_derive", derive(serde::Deserialize, serde::Serialize))]
pub struct Interval<N>(RangeInclusive<N>);

impl<N: Ord> Interval<N> {
    pub fn new(start: N, end: N) -> Result<Self, InvalidIntervalError> {
        if end < start {
            return Err(InvalidIntervalError);
        }
        Ok(Self(start..=end))
    }
}

impl<N: Ord> From<RangeInclusive<N>> for Interval<N> {
    fn from(range: RangeInclusive<N>) -> Self {
        if range.end() < range.start() {
            panic!("interval end bound must be >= start bound")
        }
        Self(range)
    }
}

impl<N: NumRef + Ord> From<Range<N>> for Interval<N> {
    fn from(range: Range<N>) -> Self {
        if range.end <= range.start {
            panic!("interval end bound must be > start bound")
        }
        Self(range.start..=range.end.sub(N::one()))
    }
}

impl<N: Ord + Clone> From<&'_ Interval<N>> for Interval<N> {
    fn from(interval: &Interval<N>) -> Self {
        interval.clone()
    }
}

impl<N: Ord + Clone> From<N> for Interval<N> {
    fn from(point: N) -> Self {
        Self::from(point.clone()..=point)
    }
}

impl<N> RangeBounds<N> for Interval<N> {
    fn start_bound(&self) -> Bound<&N> {
        self.0.start_bound()
    }

    fn end_bound(&self) -> Bound<&N> {
        self.0.end_bound()
    }
}

impl<N> Interval<N> {
    pub fn start(&self) -> &N {
        self.0.start()
    }

    pub fn end(&self) -> &N {
        self.0.end()
    }

    pub fn into_inner(self) -> (N, N) {
        self.0.into_inner()
    }
}

impl<N: Clone + Ord> Interval<N> {
    pub fn point(value: N) -> Self {
        Self::from(value.clone()..=value)
    }
}

impl<N: Ord> Interval<N> {
    pub fn contains(&self, other: &Interval<N>) -> bool {
        self.start() <= other.start() && self.end() >= other.end()
    }

    pub fn contains_point(&self, point: &N) -> bool {
        self.start() <= point && self.end() >= point
    }

    /// Closed-interval overlap: `[a, b]` and `[c, d]` overlap iff
    /// `a <= d && b >= c`.
    pub fn overlaps(&self, other: &Interval<N>) -> bool {
        self.start() <= other.end() && self.end() >= other.start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert_eq!(Interval::new(10, 5), Err(InvalidIntervalError));
        assert!(Interval::new(5, 10).is_ok());
        assert!(Interval::new(5, 5).is_ok());
    }

    #[test]
    #[should_panic(expected = "interval end bound must be >= start bound")]
    fn test_from_inverted_range_panics() {
        let _ = Interval::from(10..=5);
    }

    #[test]
    fn test_from_half_open_range() {
        let iv = Interval::from(5..10);
        assert_eq!(iv, Interval::from(5..=9));
    }

    #[test]
    fn test_point() {
        let iv = Interval::point(7);
        assert_eq!(iv.start(), iv.end());
        assert!(iv.contains_point(&7));
        assert!(!iv.contains_point(&8));
    }

    #[test]
    fn test_overlaps_is_closed() {
        let a = Interval::from(0..=10);

        // Shared endpoints count as overlap for closed intervals.
        assert!(a.overlaps(&Interval::from(10..=20)));
        assert!(a.overlaps(&Interval::from(-5..=0)));

        assert!(a.overlaps(&Interval::from(5..=7)));
        assert!(a.overlaps(&Interval::from(-5..=25)));

        assert!(!a.overlaps(&Interval::from(11..=20)));
        assert!(!a.overlaps(&Interval::from(-5..=-1)));
    }

    #[test]
    fn test_contains() {
        let a = Interval::from(0..=10);

        assert!(a.contains(&Interval::from(0..=10)));
        assert!(a.contains(&Interval::from(3..=7)));
        assert!(!a.contains(&Interval::from(3..=11)));
        assert!(!a.contains(&Interval::from(-1..=7)));
    }
}
