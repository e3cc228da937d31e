//! A normalized interval list is a sorted sequence of disjoint,
//! non-adjacent intervals.

use crate::Backing;
use crate::Endpoint;
use crate::Interval;
use crate::IntervalVec;

/// Determines whether the input sequence is in normalized form:
///  1. intervals are sorted ascending by `start`
///  2. adjacent intervals are disjoint and separated by at least one
///     endpoint value (touching intervals would have been merged)
///
/// Individual intervals are always valid (`start <= end`) by
/// construction, so there is nothing else to check.  This takes time
/// linear in the length of the input.
pub fn is_normalized<T: Endpoint>(intervals: &[Interval<T>]) -> bool {
    intervals.windows(2).all(|pair| {
        // The earliest start a successor may legally have is two past
        // the previous end.  When the previous end sits at the type
        // maximum, `next_after` yields nothing and no successor can be
        // legal; substituting the max value makes the comparison false,
        // exactly what we want.
        let limit = pair[0].end().next_after().unwrap_or(T::max_value());
        limit < pair[1].start()
    })
}

/// Normalizes a sequence of intervals: sorts ascending by `start` and
/// merges every overlapping or touching pair, yielding the minimal
/// equivalent [`IntervalVec`].
///
/// An empty input yields the empty set; a single interval comes back
/// unchanged.  This takes `O(n log n)` time in the number of input
/// intervals and merges in place after the sort.
pub fn normalize<T: Endpoint>(intervals: impl IntoIterator<Item = Interval<T>>) -> IntervalVec<T> {
    let mut intervals: Backing<T> = intervals.into_iter().collect();

    if intervals.len() > 1 {
        intervals.sort_unstable();

        // Merge into a prefix of the same buffer: `prefix_len` counts
        // the merged intervals already emitted, the last of which is
        // the current merge candidate.
        let mut prefix_len = 1;
        for idx in 1..intervals.len() {
            let current = intervals[idx];
            let candidate = intervals[prefix_len - 1];

            // `current` coalesces with the candidate when it starts at
            // or before one past the candidate's end (overlap,
            // containment, or exact adjacency).
            let merge_limit = candidate.end().next_after().unwrap_or(T::max_value());
            if current.start() <= merge_limit {
                intervals[prefix_len - 1] =
                    Interval::new(candidate.start(), candidate.end().max(current.end()));
            } else {
                intervals[prefix_len] = current;
                prefix_len += 1;
            }
        }

        intervals.truncate(prefix_len);
    }

    IntervalVec::new_unchecked(intervals)
}
