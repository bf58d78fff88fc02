pub mod error;
pub mod subarray;

pub use error::{Error, Result};
pub use subarray::{brute_force, divide_and_conquer, linear_scan, prefix_scan, MaxSubarray};
