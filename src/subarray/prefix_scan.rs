use num_traits::Zero;

use crate::error::{Error, Result};
use crate::subarray::MaxSubarray;

/// Computes the maximum-sum contiguous subarray with one running sum per
/// start index.
///
/// For each start `i` the sum accumulates forward over `j`, removing the
/// inner re-summation of [`brute_force`](crate::subarray::brute_force) and
/// dropping the cost to O(n²). Tie-break and sentinel behavior match the
/// other algorithms: strict greater-than updates only, sentinel when the
/// global maximum stays negative.
///
/// # Examples
/// ```
/// use max_subarray::subarray::prefix_scan;
///
/// let seq = [31, -41, 59, 26, -53, 58, 97, -93, -23, 84];
/// let best = prefix_scan(&seq).unwrap();
/// assert_eq!((best.value, best.start, best.end), (187, 2, 6));
/// ```
pub fn prefix_scan<T>(seq: &[T]) -> Result<MaxSubarray<T>>
where
    T: Copy + PartialOrd + Zero,
{
    if seq.is_empty() {
        return Err(Error::EmptySequence);
    }

    let mut best = MaxSubarray {
        value: seq[0],
        start: 0,
        end: 0,
    };

    for i in 0..seq.len() {
        let mut sum = T::zero();
        for (j, &x) in seq.iter().enumerate().skip(i) {
            sum = sum + x;
            if sum > best.value {
                best = MaxSubarray {
                    value: sum,
                    start: i,
                    end: j,
                };
            }
        }
    }

    if best.value < T::zero() {
        return Ok(MaxSubarray::sentinel(seq.len()));
    }
    Ok(best)
}
