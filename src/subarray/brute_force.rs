use num_traits::Zero;

use crate::error::{Error, Result};
use crate::subarray::MaxSubarray;

/// Computes the maximum-sum contiguous subarray by exhaustive enumeration.
///
/// Every (start, end) pair is considered and its sum recomputed from scratch
/// by an inner loop, with no reuse of partial sums. Only a strictly greater
/// sum replaces the running best, so the first range achieving the maximum
/// wins ties.
///
/// # Arguments
/// * `seq` - The input sequence; not mutated
///
/// # Returns
/// * `Ok(MaxSubarray)` - The best sum and its inclusive index range, or the
///   sentinel when every element is negative
/// * `Err(Error::EmptySequence)` - If `seq` is empty
///
/// # Examples
/// ```
/// use max_subarray::subarray::brute_force;
///
/// let seq = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
/// let best = brute_force(&seq).unwrap();
/// assert_eq!((best.value, best.start, best.end), (6, 3, 6));
/// ```
///
/// # Complexity
/// * Time: O(n³)
/// * Space: O(1) beyond the result
pub fn brute_force<T>(seq: &[T]) -> Result<MaxSubarray<T>>
where
    T: Copy + PartialOrd + Zero,
{
    if seq.is_empty() {
        return Err(Error::EmptySequence);
    }

    // Seed the best with the first candidate (i = 0, j = 0) so the strict
    // comparison below never replaces an equal earlier range.
    let mut best = MaxSubarray {
        value: seq[0],
        start: 0,
        end: 0,
    };

    for i in 0..seq.len() {
        for j in i..seq.len() {
            let mut sum = T::zero();
            for &x in &seq[i..=j] {
                sum = sum + x;
            }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_values() {
        let seq = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
        let best = brute_force(&seq).unwrap();
        assert_eq!(best.value, 6);
        assert_eq!((best.start, best.end), (3, 6));
    }

    #[test]
    fn test_single_positive() {
        let best = brute_force(&[5]).unwrap();
        assert_eq!((best.value, best.start, best.end), (5, 0, 0));
    }

    #[test]
    fn test_single_negative_is_sentinel() {
        let best = brute_force(&[-5]).unwrap();
        assert_eq!((best.value, best.start, best.end), (0, 1, 0));
        assert!(best.is_sentinel());
    }

    #[test]
    fn test_all_negative_is_sentinel() {
        let best = brute_force(&[-1, -3, -5]).unwrap();
        assert_eq!(best.value, 0);
        assert_eq!((best.start, best.end), (3, 0));
    }

    #[test]
    fn test_empty_errors() {
        let seq: [i32; 0] = [];
        assert_eq!(brute_force(&seq), Err(Error::EmptySequence));
    }

    #[test]
    fn test_first_maximal_range_wins() {
        // [2, -2, 2] has three ranges summing to 2; the earliest is kept.
        let best = brute_force(&[2, -2, 2]).unwrap();
        assert_eq!((best.value, best.start, best.end), (2, 0, 0));
    }

    #[test]
    fn test_floats() {
        let best = brute_force(&[-1.3f64, 2.77, -2.0, 12.8]).unwrap();
        assert!((best.value - 13.57).abs() < 1e-9);
        assert_eq!((best.start, best.end), (1, 3));
    }
}
