use num_traits::Zero;

use crate::error::{Error, Result};
use crate::subarray::MaxSubarray;

/// Kadane's algorithm: the maximum-sum contiguous subarray in a single
/// forward pass.
///
/// Tracks the best sum of a subarray ending at the current index; whenever
/// starting fresh at `seq[i]` beats extending the current run, the run
/// restarts there. The committed best only moves on a strictly greater sum,
/// so the earliest winning range is kept. This is the O(n) reference the
/// slower variants are checked against.
///
/// Returns `Err(Error::EmptySequence)` for empty input, and the sentinel
/// (value 0, `start > end`) when every element is negative.
///
/// # Examples
/// ```
/// use max_subarray::subarray::linear_scan;
///
/// let seq = [1, -2, 3, 5, -1];
/// let best = linear_scan(&seq).unwrap();
/// assert_eq!((best.value, best.start, best.end), (8, 2, 3));
/// ```
pub fn linear_scan<T>(seq: &[T]) -> Result<MaxSubarray<T>>
where
    T: Copy + PartialOrd + Zero,
{
    if seq.is_empty() {
        return Err(Error::EmptySequence);
    }

    let mut running_sum = seq[0];
    let mut best = MaxSubarray {
        value: seq[0],
        start: 0,
        end: 0,
    };
    let mut current_left = 0;

    for (i, &x) in seq.iter().enumerate().skip(1) {
        // Either extend the current run or restart it at `x`
        if x > running_sum + x {
            running_sum = x;
            current_left = i;
        } else {
            running_sum = running_sum + x;
        }

        if running_sum > best.value {
            best = MaxSubarray {
                value: running_sum,
                start: current_left,
                end: i,
            };
        }
    }

    if best.value < T::zero() {
        return Ok(MaxSubarray::sentinel(seq.len()));
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_values() {
        let seq = [1, -2, 3, 5, -1];
        let best = linear_scan(&seq).unwrap();
        assert_eq!((best.value, best.start, best.end), (8, 2, 3));
    }

    #[test]
    fn test_subarray_at_the_end() {
        let seq = [-5, -1, 2, 3, 7];
        let best = linear_scan(&seq).unwrap();
        assert_eq!((best.value, best.start, best.end), (12, 2, 4));
    }

    #[test]
    fn test_large_fluctuations() {
        let seq = [10, -5, 2, -1, 15, -20, 25, -2];
        // Partial sums peak at 26 over the run starting at index 0
        let best = linear_scan(&seq).unwrap();
        assert_eq!((best.value, best.start, best.end), (26, 0, 6));
    }

    #[test]
    fn test_single_positive() {
        let best = linear_scan(&[42]).unwrap();
        assert_eq!((best.value, best.start, best.end), (42, 0, 0));
    }

    #[test]
    fn test_single_negative_is_sentinel() {
        let best = linear_scan(&[-5]).unwrap();
        assert_eq!((best.value, best.start, best.end), (0, 1, 0));
    }

    #[test]
    fn test_all_negative_is_sentinel() {
        let best = linear_scan(&[-8, -3, -6, -2, -5, -4]).unwrap();
        assert_eq!((best.value, best.start, best.end), (0, 6, 0));
        assert!(best.is_sentinel());
    }

    #[test]
    fn test_zero_element_is_not_sentinel() {
        let best = linear_scan(&[0]).unwrap();
        assert_eq!((best.value, best.start, best.end), (0, 0, 0));
        assert!(!best.is_sentinel());
    }

    #[test]
    fn test_empty_errors() {
        let seq: [i32; 0] = [];
        assert_eq!(linear_scan(&seq), Err(Error::EmptySequence));
    }
}
