//! Complement by interval geometry.
//!
//! Each normalized exclude is subtracted from the whole working list of
//! includes in turn; every include is replaced by zero, one, or two
//! remainders depending on how the exclude overlaps it.  The cost is
//! `O(|includes| * |excludes|)` interval operations after the initial
//! sorts, independent of how wide the intervals are, which makes this
//! the strategy of choice for wide or sparse inputs.

use crate::normalize;
use crate::ComplementStrategy;
use crate::Endpoint;
use crate::Interval;
use crate::IntervalVec;

/// Marker for the interval-geometry complement strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectSearch;

impl<T: Endpoint> ComplementStrategy<T> for DirectSearch {
    #[inline(always)]
    fn complement(&self, includes: &[Interval<T>], excludes: &[Interval<T>]) -> IntervalVec<T> {
        complement(includes, excludes)
    }
}

/// Returns the normalized set difference `includes \ excludes`.
///
/// Both inputs are arbitrary unordered interval lists; they are
/// normalized independently before the subtraction.  When either
/// normalized list is empty there is nothing to subtract (or nothing to
/// subtract from) and the normalized includes come back unchanged.
pub fn complement<T: Endpoint>(
    includes: &[Interval<T>],
    excludes: &[Interval<T>],
) -> IntervalVec<T> {
    let includes = normalize(includes.iter().copied());
    let excludes = normalize(excludes.iter().copied());

    if includes.is_empty() || excludes.is_empty() {
        return includes;
    }

    let mut working = includes.into_vec();
    for exclude in excludes {
        let mut survivors = Vec::with_capacity(working.len() + 1);
        for include in working {
            split_around(include, exclude, &mut survivors);
        }
        working = survivors;
    }

    // Splitting cannot create overlaps, but the final pass is what
    // guarantees the output invariant regardless.
    normalize(working)
}

/// Pushes onto `out` whatever remains of `include` once `exclude` is
/// removed: the whole interval, one remainder on either side, both
/// remainders, or nothing at all.
fn split_around<T: Endpoint>(
    include: Interval<T>,
    exclude: Interval<T>,
    out: &mut Vec<Interval<T>>,
) {
    // No overlap: keep the include untouched.
    if exclude.end() < include.start() || include.end() < exclude.start() {
        out.push(include);
        return;
    }

    // The exclude covers the include end to end, bounds included:
    // nothing survives.  Spelled out rather than left to fall through
    // the remainder checks below.
    if exclude.start() <= include.start() && include.end() <= exclude.end() {
        return;
    }

    // Left remainder, `[include.start, exclude.start - 1]`.  The guard
    // means `exclude.start > include.start >= T::MIN`, so the
    // predecessor always exists.
    if include.start() < exclude.start() {
        if let Some(end) = exclude.start().prev_before() {
            out.push(Interval::new(include.start(), end));
        }
    }

    // Right remainder, `[exclude.end + 1, include.end]`.
    if exclude.end() < include.end() {
        if let Some(start) = exclude.end().next_after() {
            out.push(Interval::new(start, include.end()));
        }
    }
}
