//! Branded container for normalized interval lists.
//!
//! A normalized sequence of intervals is sorted ascending by start and
//! consists of strictly disjoint, non-adjacent intervals: merging any
//! two of them would change the set they represent.

use crate::Backing;
use crate::Endpoint;
use crate::Interval;

/// An [`IntervalVec<T>`] is a normalized sequence of [`Interval<T>`],
/// backed by a `SmallVec` with a small hardcoded inline capacity
/// ([`crate::INLINE_SIZE`] intervals).
///
/// Values of this type only come out of [`crate::normalize`] or one of
/// the complement strategies, so holding an [`IntervalVec`] *is* the
/// evidence that the sequence satisfies the output invariant: for each
/// adjacent pair `(A, B)`, `A.start < B.start` and `A.end < B.start - 1`.
///
/// Read access is transparent through `Deref<Target = [Interval<T>]>`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IntervalVec<T: Endpoint> {
    inner: Backing<T>,
}

impl<T: Endpoint> IntervalVec<T> {
    /// Returns an empty [`IntervalVec`] (represents the empty set).
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            inner: Backing::new(),
        }
    }

    /// Blindly tags a container as normalized.
    ///
    /// The caller must only hand in sequences that are already sorted,
    /// disjoint, and non-adjacent.  This takes constant time in release
    /// mode; with debug assertions or the `internal_checks` feature the
    /// invariant is re-checked in linear time.
    #[inline(always)]
    pub(crate) fn new_unchecked(inner: Backing<T>) -> Self {
        #[cfg(any(feature = "internal_checks", debug_assertions))]
        assert!(crate::is_normalized(&inner[..]));
        Self { inner }
    }

    /// Normalizes an arbitrary sequence of intervals into a fresh
    /// [`IntervalVec`].
    #[inline(always)]
    pub fn from_vec(intervals: Vec<Interval<T>>) -> Self {
        crate::normalize(intervals)
    }

    /// Returns a reference to the underlying intervals.
    #[inline(always)]
    pub fn inner(&self) -> &[Interval<T>] {
        &self.inner
    }

    /// Extracts the underlying vector of intervals.
    #[inline(always)]
    pub fn into_vec(self) -> Vec<Interval<T>> {
        self.inner.into_vec()
    }

    /// Returns an iterator over the normalized intervals, by value.
    #[inline(always)]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Interval<T>>> {
        self.inner.iter().copied()
    }
}

impl<T: Endpoint> Default for IntervalVec<T> {
    #[inline(always)]
    fn default() -> Self {
        IntervalVec::new()
    }
}

impl<T: Endpoint> IntoIterator for IntervalVec<T> {
    type Item = Interval<T>;
    type IntoIter = <Backing<T> as IntoIterator>::IntoIter;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T: Endpoint> IntoIterator for &'a IntervalVec<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: Endpoint> std::ops::Deref for IntervalVec<T> {
    type Target = [Interval<T>];

    #[inline(always)]
    fn deref(&self) -> &[Interval<T>] {
        <IntervalVec<T>>::inner(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_smoke() {
        assert_eq!(IntervalVec::<u8>::new(), Default::default());
        assert!(IntervalVec::<u8>::new().is_empty());
        assert_eq!(
            IntervalVec::<u8>::new(),
            IntervalVec::new_unchecked(smallvec![])
        );

        let intervals =
            IntervalVec::new_unchecked(smallvec![Interval::new(2u8, 4), Interval::new(10, 20)]);

        assert_eq!(intervals[0], Interval::new(2u8, 4));
        assert_eq!(intervals.len(), 2);

        assert_eq!(intervals.inner(), &intervals.iter().collect::<Vec<_>>()[..]);
        assert_eq!(
            intervals.iter().collect::<Vec<_>>(),
            (&intervals).into_iter().copied().collect::<Vec<_>>()
        );
        assert_eq!(
            intervals.clone().into_vec(),
            intervals.into_iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_from_vec_normalizes() {
        let intervals = IntervalVec::from_vec(vec![
            Interval::new(3u8, 1),
            Interval::new(2, 5),
            Interval::new(9, 9),
        ]);

        assert_eq!(
            intervals.inner(),
            &[Interval::new(1u8, 5), Interval::new(9, 9)]
        );
    }
}
