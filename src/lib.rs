//! The `interval_complement` crate computes the set difference of two
//! collections of closed integer intervals: a list of *includes* minus
//! a list of *excludes*, returned as a minimal sorted list of disjoint,
//! non-adjacent intervals ([`IntervalVec`]).
//!
//! Inputs carry no ordering or disjointness guarantee; they may
//! overlap, repeat, or arrive with reversed bounds (the [`Interval`]
//! constructor swaps reversed bounds silently).  Every operation in the
//! crate is total: no input sequence of intervals makes normalization
//! or complementation fail.
//!
//! Two independent strategies implement the same [`ComplementStrategy`]
//! contract and produce identical results for all valid inputs:
//!
//! * [`DirectSearch`] subtracts each exclude from the working list of
//!   includes by interval geometry.  It costs
//!   `O(|includes| * |excludes|)` interval operations after the initial
//!   sorts, independent of how wide the intervals are.  Prefer it for
//!   wide or sparse intervals.
//! * [`DenseSet`] materializes every covered integer into ordered sets
//!   and regroups the surviving values into runs.  It costs time and
//!   memory proportional to the total covered span, so it degrades
//!   badly for wide intervals but is simple and fast on small, dense
//!   ranges.
//!
//! Endpoints are generic over the [`Endpoint`] trait, implemented for
//! all primitive fixed-width integer types ([`i8`] through [`i128`],
//! [`u8`] through [`u128`], [`isize`] and [`usize`]).  All `+1`/`-1`
//! stepping in the algorithms goes through [`Endpoint::next_after`] and
//! [`Endpoint::prev_before`], which saturate at the type bounds instead
//! of overflowing.
//!
//! The [`text`] module hosts the stateless string adapters: parsing
//! comma-separated `start-end` tokens (malformed tokens are dropped,
//! never reported) and formatting result lists back out.

#![deny(missing_docs)]

use smallvec::SmallVec;

pub mod dense;
pub mod direct;
mod interval;
mod interval_vec;
mod normalize;
mod primitive_endpoint;
pub mod text;

pub use dense::DenseSet;
pub use direct::DirectSearch;
pub use interval::Interval;
pub use interval_vec::IntervalVec;
pub use normalize::is_normalized;
pub use normalize::normalize;

/// Inline storage (in intervals) reserved in an [`IntervalVec`].
pub const INLINE_SIZE: usize = if cfg!(feature = "inline_storage") {
    2
} else {
    0
};

/// Our internal storage type for [`IntervalVec`].
type Backing<T> = SmallVec<[Interval<T>; INLINE_SIZE]>;

/// An [`Endpoint`] is the left or right bound of a closed interval
/// `[start, end]`.
///
/// [`Endpoint`] types are totally ordered, have minimum and maximum
/// values, and can be enumerated one value at a time in both
/// directions.  That last part is what lets the complement algorithms
/// compute `end + 1` and `start - 1` without ever overflowing: stepping
/// off either end of the type yields [`None`].
///
/// There is an implementation for all twelve primitive fixed-width
/// integer types.
pub trait Endpoint: Copy + Ord {
    /// The minimum value of the type (e.g., [`i64::MIN`]).
    fn min_value() -> Self;

    /// The maximum value of the type (e.g., [`i64::MAX`]).
    fn max_value() -> Self;

    /// Returns the successor of `self` iff `other > self`, and [`None`]
    /// otherwise.
    ///
    /// `other > self` guarantees a successor exists, so implementations
    /// never have to worry about overflow.
    fn increase_toward(self, other: Self) -> Option<Self>;

    /// Returns the predecessor of `self` iff `other < self`, and
    /// [`None`] otherwise.
    fn decrease_toward(self, other: Self) -> Option<Self>;

    /// Returns the minimum value strictly greater than `self`, or
    /// [`None`] iff `self == Self::max_value()`.
    #[inline(always)]
    fn next_after(self) -> Option<Self> {
        self.increase_toward(Self::max_value())
    }

    /// Returns the maximum value strictly less than `self`, or [`None`]
    /// iff `self == Self::min_value()`.
    #[inline(always)]
    fn prev_before(self) -> Option<Self> {
        self.decrease_toward(Self::min_value())
    }
}

/// Common contract for the two complement implementations.
///
/// `includes \ excludes`, as integer sets: both arguments are arbitrary
/// unordered interval lists and the result is a normalized interval
/// list.  The contract is object-safe so callers and test harnesses can
/// substitute either implementation behind a `&dyn` reference; both are
/// pure functions with no state of their own.
///
/// Implementations must agree: for any pair of valid inputs,
/// [`DirectSearch`] and [`DenseSet`] return list-equal results.
pub trait ComplementStrategy<T: Endpoint> {
    /// Returns the normalized set difference `includes \ excludes`.
    fn complement(&self, includes: &[Interval<T>], excludes: &[Interval<T>]) -> IntervalVec<T>;
}

#[cfg(test)]
fn marks_to_bits(intervals: &[Interval<u8>]) -> Vec<bool> {
    let mut marks = vec![false; 256];

    for interval in intervals {
        for i in interval.start()..=interval.end() {
            marks[i as usize] = true;
        }
    }

    marks
}
