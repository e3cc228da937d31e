//! Complement by materializing covered values.
//!
//! Every integer covered by either input is collected into an ordered
//! set, excluded values are removed, and the survivors are regrouped
//! into maximal consecutive runs.  Time and memory scale with the total
//! covered *span*, not the interval count, so this strategy degrades
//! badly for wide intervals (think bounds around `10^9`) and is meant
//! for small, dense ranges.

use std::collections::BTreeSet;

use crate::Backing;
use crate::ComplementStrategy;
use crate::Endpoint;
use crate::Interval;
use crate::IntervalVec;

/// Marker for the value-materialization complement strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct DenseSet;

impl<T: Endpoint> ComplementStrategy<T> for DenseSet {
    #[inline(always)]
    fn complement(&self, includes: &[Interval<T>], excludes: &[Interval<T>]) -> IntervalVec<T> {
        complement(includes, excludes)
    }
}

/// Returns the normalized set difference `includes \ excludes`.
///
/// Duplicate coverage collapses on insertion, so the inputs need no
/// explicit normalization here: the ordered set is the normal form.
pub fn complement<T: Endpoint>(
    includes: &[Interval<T>],
    excludes: &[Interval<T>],
) -> IntervalVec<T> {
    let mut values = covered_values(includes);
    for value in covered_values(excludes) {
        values.remove(&value);
    }

    group_runs(values)
}

/// Collects every integer covered by `intervals` into an ordered,
/// deduplicated set.
fn covered_values<T: Endpoint>(intervals: &[Interval<T>]) -> BTreeSet<T> {
    let mut values = BTreeSet::new();

    for interval in intervals {
        let mut value = interval.start();
        loop {
            values.insert(value);
            match value.increase_toward(interval.end()) {
                Some(next) => value = next,
                None => break,
            }
        }
    }

    values
}

/// Regroups an ordered set of values into maximal consecutive runs, in
/// one ascending scan.  An isolated value becomes a degenerate
/// one-point interval; the set's own ordering makes the result sorted
/// and leaves a gap of at least one value between emitted intervals.
fn group_runs<T: Endpoint>(values: BTreeSet<T>) -> IntervalVec<T> {
    let mut runs = Backing::new();
    let mut iter = values.into_iter();

    let Some(first) = iter.next() else {
        return IntervalVec::new();
    };

    let mut low = first;
    let mut prev = first;
    for value in iter {
        if prev.next_after() != Some(value) {
            runs.push(Interval::new(low, prev));
            low = value;
        }
        prev = value;
    }
    runs.push(Interval::new(low, prev));

    IntervalVec::new_unchecked(runs)
}
