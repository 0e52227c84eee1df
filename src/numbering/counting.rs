use num_bigint::BigUint;
use num_traits::Zero;

/// Number of valid strings of exactly `length` characters over a
/// `radix`-character alphabet.
///
/// Inclusion–exclusion over "first character is the boundary" and "last
/// character is the boundary" on all `N^L` strings:
///
/// ```text
/// valid(L) = N^L − 2·N^(L−1) + N^(L−2)    L ≥ 2
/// valid(1) = N − 1
/// valid(0) = 0                            the empty string is never valid
/// ```
///
/// No negative exponent is ever evaluated.
pub fn valid_count(radix: u32, length: u32) -> BigUint {
    match length {
        0 => BigUint::zero(),
        1 => BigUint::from(radix.saturating_sub(1)),
        _ => {
            let n = BigUint::from(radix);
            let all = n.pow(length);
            let either_edge = n.pow(length - 1) * 2u32;
            let both_edges = n.pow(length - 2);
            // all + both − either = N^(L−2)·(N−1)², never negative.
            (all + both_edges) - either_edge
        }
    }
}

/// Valid strings strictly shorter than `length`: `Σ valid(k)` for `k < length`.
pub fn count_shorter_than(radix: u32, length: u32) -> BigUint {
    (1..length).fold(BigUint::zero(), |total, k| total + valid_count(radix, k))
}

/// Valid strings of length `1..=max_length`: the highest rank that exists.
pub fn count_up_to(radix: u32, max_length: u32) -> BigUint {
    count_shorter_than(radix, max_length.saturating_add(1))
}
