//! Deterministic input generators shared by the benchmarks.

/// Pseudo-random integers in `0..modulus` from a fixed-seed LCG.
pub fn lcg_values(n: usize, seed: u32, modulus: u32) -> Vec<i64> {
    let mut val = seed;
    (0..n)
        .map(|_| {
            val = val.wrapping_mul(1103515245).wrapping_add(12345);
            i64::from(val % modulus.max(1))
        })
        .collect()
}

/// `n` integers in strictly descending order, the selection sort worst case
/// for swaps.
pub fn descending(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

/// ASCII text of length `n` cycling through the lowercase alphabet.
pub fn alphabet_text(n: usize) -> String {
    (b'a'..=b'z').cycle().take(n).map(char::from).collect()
}
