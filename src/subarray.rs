//! Maximum-sum contiguous subarray algorithms.
//!
//! Four independent strategies solve the same problem at different
//! complexities, all returning the same [`MaxSubarray`] shape so their
//! outputs can be compared directly:
//!
//! * [`brute_force`] — every (start, end) pair, re-summed from scratch: O(n³)
//! * [`prefix_scan`] — every start with a running sum over ends: O(n²)
//! * [`divide_and_conquer`] — recursive split plus best crossing range: O(n log n)
//! * [`linear_scan`] — Kadane's dynamic-programming pass: O(n)
//!
//! When no subarray has a positive sum (every element negative), each
//! algorithm returns the sentinel described on [`MaxSubarray`] instead of a
//! degenerate real range.

pub mod brute_force;
pub mod divide_and_conquer;
pub mod linear_scan;
pub mod prefix_scan;


// Re-export the entry points so callers can write `subarray::linear_scan(..)`
pub use brute_force::brute_force;
pub use divide_and_conquer::divide_and_conquer;
pub use linear_scan::linear_scan;
pub use prefix_scan::prefix_scan;

use num_traits::Zero;

/// The result of a maximum-subarray computation.
///
/// `start..=end` is the inclusive index range achieving `value`. Two ranges
/// with equal sums may legitimately differ between algorithms; each algorithm
/// keeps the first range it finds (strict greater-than updates only), so any
/// single algorithm is deterministic across repeated calls.
///
/// # The "no subarray" sentinel
///
/// If every subarray sum is negative, the result is `value == 0` with
/// `start > end` (concretely `start == len`, `end == 0`), signalling that no
/// subarray qualifies. Note the overload: a genuine zero-sum subarray also
/// reports `value == 0`, but with a real range (`start <= end`). The index
/// order is the only disambiguator; this mirrors the historical contract and
/// is kept as-is rather than widened into a richer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxSubarray<T> {
    /// The maximum subarray sum found, or zero for the sentinel.
    pub value: T,
    /// Inclusive start index of the winning subarray.
    pub start: usize,
    /// Inclusive end index of the winning subarray.
    pub end: usize,
}

impl<T: Zero> MaxSubarray<T> {
    /// The "no subarray has a positive sum" result for an input of length
    /// `len`: value zero, `start == len`, `end == 0`.
    pub fn sentinel(len: usize) -> Self {
        MaxSubarray {
            value: T::zero(),
            start: len,
            end: 0,
        }
    }

    /// Whether this result is the sentinel rather than a real range.
    pub fn is_sentinel(&self) -> bool {
        self.start > self.end
    }
}
