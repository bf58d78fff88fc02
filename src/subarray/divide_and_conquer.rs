use num_traits::Zero;

use crate::error::{Error, Result};
use crate::subarray::MaxSubarray;

/// Computes the maximum-sum contiguous subarray of `seq[low..=high]` by
/// divide and conquer.
///
/// The range is split at its midpoint; the best subarray either lies wholly
/// in one half (found recursively) or crosses the midpoint, in which case it
/// is the best run ending at `center` glued to the best run starting at
/// `center + 1`, each found by a linear scan outward from the split.
///
/// Candidates are merged with strict comparisons in a fixed order (left,
/// right, middle), so ties resolve deterministically. A lone negative element
/// is returned as-is by the recursion's base case; the top-level wrapper
/// normalizes a negative final answer to the sentinel so this variant agrees
/// with the other three on all-negative input.
///
/// # Arguments
/// * `seq` - The input sequence; not mutated
/// * `low` - Inclusive lower bound of the range to search
/// * `high` - Inclusive upper bound of the range to search
///
/// # Returns
/// * `Ok(MaxSubarray)` - The best sum in `[low, high]` and its range, or the
///   sentinel `(0, high + 1, low)` when every subarray sum there is negative
/// * `Err(Error::EmptySequence)` - If `seq` is empty
/// * `Err(Error::InvalidRange)` - If `low > high` or `high >= seq.len()`
///
/// # Examples
/// ```
/// use max_subarray::subarray::divide_and_conquer;
///
/// let seq = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
/// let best = divide_and_conquer(&seq, 0, seq.len() - 1).unwrap();
/// assert_eq!((best.value, best.start, best.end), (6, 3, 6));
/// ```
///
/// # Complexity
/// * Time: O(n log n) - each recursion level does O(n) crossing-scan work
///   over ⌈log₂ n⌉ levels
/// * Space: O(log n) call stack; the recursion depth is ⌈log₂ n⌉
pub fn divide_and_conquer<T>(seq: &[T], low: usize, high: usize) -> Result<MaxSubarray<T>>
where
    T: Copy + PartialOrd + Zero,
{
    if seq.is_empty() {
        return Err(Error::EmptySequence);
    }
    if low > high || high >= seq.len() {
        return Err(Error::InvalidRange {
            low,
            high,
            len: seq.len(),
        });
    }

    let best = solve(seq, low, high);
    if best.value < T::zero() {
        // Only the single-element base case can surface a negative value
        // here; every merge result is at least the (zero-valued) middle
        // candidate.
        return Ok(MaxSubarray {
            value: T::zero(),
            start: high + 1,
            end: low,
        });
    }
    Ok(best)
}

fn solve<T>(seq: &[T], low: usize, high: usize) -> MaxSubarray<T>
where
    T: Copy + PartialOrd + Zero,
{
    if low == high {
        // Base case: a lone element, negative or not.
        return MaxSubarray {
            value: seq[low],
            start: low,
            end: low,
        };
    }

    let center = (low + high) / 2;

    // Best run seq[i..=center], scanning outward (leftward) from the split.
    let mut sum = seq[center];
    let mut left_max = sum;
    let mut left_idx = center;
    for i in (low..center).rev() {
        sum = seq[i] + sum;
        if sum > left_max {
            left_max = sum;
            left_idx = i;
        }
    }

    // Best run seq[center + 1..=i], scanning rightward.
    let mut sum = seq[center + 1];
    let mut right_max = sum;
    let mut right_idx = center + 1;
    for (i, &x) in seq.iter().enumerate().take(high + 1).skip(center + 2) {
        sum = sum + x;
        if sum > right_max {
            right_max = sum;
            right_idx = i;
        }
    }

    // Best range crossing the split, with its own range-local sentinel.
    let mut middle = MaxSubarray {
        value: left_max + right_max,
        start: left_idx,
        end: right_idx,
    };
    if middle.value < T::zero() {
        middle = MaxSubarray {
            value: T::zero(),
            start: high + 1,
            end: low,
        };
    }

    let left = solve(seq, low, center);
    let right = solve(seq, center + 1, high);

    // Strict comparisons in a fixed order keep the tie-break deterministic.
    if left.value > right.value && left.value > middle.value {
        return left;
    }
    if right.value > middle.value {
        return right;
    }
    if left.value > middle.value {
        left
    } else {
        middle
    }
}
