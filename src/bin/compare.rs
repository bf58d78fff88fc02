//! Runs the four maximum-subarray algorithms over a set of fixture arrays
//! and randomly generated arrays, timing each call and printing a small
//! text report so their outputs and growth rates can be eyeballed.

use std::time::Instant;

use rand::Rng;

use max_subarray::subarray::{brute_force, divide_and_conquer, linear_scan, prefix_scan};
use max_subarray::{MaxSubarray, Result};

fn report<T: std::fmt::Display>(name: &str, r: &MaxSubarray<T>, elapsed_secs: f64) {
    println!(
        "  {name}: value: {}; start: {}; end: {} ({elapsed_secs:.6}s)",
        r.value, r.start, r.end
    );
}

fn run_all(label: &str, seq: &[i64]) -> Result<()> {
    println!("{label} (n = {}):", seq.len());

    let t = Instant::now();
    let a = brute_force(seq)?;
    report("brute force      ", &a, t.elapsed().as_secs_f64());

    let t = Instant::now();
    let b = prefix_scan(seq)?;
    report("prefix scan      ", &b, t.elapsed().as_secs_f64());

    let t = Instant::now();
    let c = divide_and_conquer(seq, 0, seq.len() - 1)?;
    report("divide and conquer", &c, t.elapsed().as_secs_f64());

    let t = Instant::now();
    let d = linear_scan(seq)?;
    report("linear scan      ", &d, t.elapsed().as_secs_f64());

    println!();
    Ok(())
}

fn main() -> Result<()> {
    let fixtures: &[&[i64]] = &[
        &[1, 4, -9, 8, 1, 3, 3, 1, -1, -4, -6, 2, 8, 19, -10, -11],
        &[2, 9, 8, 6, 5, -11, 9, -11, 7, 5, -1, -8, -3, 7, -2],
        &[10, -11, -1, -9, 33, -45, 23, 24, -1, -15, 19],
        &[31, -41, 59, 26, -53, 58, 97, -93, -23, 84],
        &[3, 2, 1, 1, -9, 1, 1, 2, 3],
        &[12, 99, 99, -99, -27, 0, 0, 0, -3, 10],
        &[-2, 1, -3, 4, -1, 2, 1, -5, 4],
        &[-1, -3, -5],
    ];

    for (i, seq) in fixtures.iter().enumerate() {
        run_all(&format!("Test {}", i + 1), seq)?;
    }

    // Float elements go through the same generic entry points.
    let float_seq = [-1.3f64, 2.77, -2.0, 12.8];
    println!("Float test (n = {}):", float_seq.len());
    let t = Instant::now();
    let d = linear_scan(&float_seq)?;
    report("linear scan      ", &d, t.elapsed().as_secs_f64());
    println!();

    // Random arrays, elements uniform in -9999..=9999. The cubic algorithm
    // is kept to a size where it finishes promptly.
    let mut rng = rand::thread_rng();
    for round in 0..3 {
        let seq: Vec<i64> = (0..2000).map(|_| rng.gen_range(-9999..=9999)).collect();
        run_all(&format!("Random round {round}"), &seq)?;
    }

    Ok(())
}
