//! The closed-interval value type.

use crate::Endpoint;

/// An immutable closed integer interval `[start, end]`.
///
/// The constructor orders its two arguments before storing them, so
/// `start <= end` holds for every [`Interval`] ever built; handing in
/// reversed bounds is not an error.  A degenerate single point has
/// `start == end`.
///
/// Intervals have no identity beyond value equality: two intervals are
/// equal iff both bounds match.  The derived [`Ord`] sorts by `start`,
/// then `end`, which is the order normalization wants.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Interval<T: Endpoint> {
    start: T,
    end: T,
}

impl<T: Endpoint> Interval<T> {
    /// Builds the interval covering both `a` and `b`, whichever order
    /// they come in.
    #[inline(always)]
    pub fn new(a: T, b: T) -> Self {
        if b < a {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// The inclusive lower bound.
    #[inline(always)]
    pub fn start(self) -> T {
        self.start
    }

    /// The inclusive upper bound.
    #[inline(always)]
    pub fn end(self) -> T {
        self.end
    }
}

impl<T: Endpoint + std::fmt::Display> std::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_constructor_swaps_reversed_bounds() {
        assert_eq!(Interval::new(100i32, 2), Interval::new(2, 100));
        assert_eq!(Interval::new(100i32, 2).start(), 2);
        assert_eq!(Interval::new(100i32, 2).end(), 100);
    }

    #[test]
    fn test_degenerate_point() {
        let point = Interval::new(7i64, 7);
        assert_eq!(point.start(), point.end());
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(10i32, 19).to_string(), "10-19");
        assert_eq!(Interval::new(-5i32, -10).to_string(), "-10--5");
        assert_eq!(Interval::new(3i32, 3).to_string(), "3-3");
    }

    proptest::proptest! {
        #[test]
        fn test_always_ordered(a: i32, b: i32) {
            let interval = Interval::new(a, b);

            assert!(interval.start() <= interval.end());
            assert_eq!(interval, Interval::new(b, a));
            assert_eq!(interval.start(), a.min(b));
            assert_eq!(interval.end(), a.max(b));
        }
    }
}
