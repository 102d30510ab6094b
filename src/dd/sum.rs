//! Ordered summation of two sorted pairs.

use crate::dd::add::carry_add;
use crate::defs::{Carry, ExtFloat};

/// Sums two sorted pairs of non-negative values, smallest to largest.
///
/// Requires `a1 <= a2` and `b1 <= b2`. The pairs are merged into fully
/// ascending order first, so every intermediate addition combines the
/// smaller magnitudes before the larger ones and accumulates the least
/// possible rounding error. Ties between the pairs yield the `b` element
/// first; the merge order is part of the contract because it decides the
/// rounding direction of the last bit.
///
/// With `fractional` set, the running sum wraps at every unit boundary and
/// the number of crossings is returned as the carry (at most 3).
pub fn merge_sum(
    a1: ExtFloat,
    a2: ExtFloat,
    b1: ExtFloat,
    b2: ExtFloat,
    fractional: bool,
) -> (ExtFloat, Carry) {
    let a = [a1, a2];
    let b = [b1, b2];

    let mut ordered = [0.0; 4];
    let mut i = 0;
    let mut j = 0;
    for slot in ordered.iter_mut() {
        *slot = if i < 2 && (j == 2 || a[i] < b[j]) {
            i += 1;
            a[i - 1]
        } else {
            j += 1;
            b[j - 1]
        };
    }

    let mut sum = ordered[0];
    let mut carry = 0;
    for &v in &ordered[1..] {
        carry += carry_add(&mut sum, v, fractional);
    }

    (sum, carry)
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[test]
    fn test_plain_sum_exact() {
        // multiples of 2^-20 below 2^20 sum without rounding, so the
        // result must equal integer arithmetic for any valid pair order
        let unit = (2.0 as ExtFloat).powi(-20);
        for _ in 0..1000 {
            let mut v: [u64; 4] = [
                random::<u64>() >> 24,
                random::<u64>() >> 24,
                random::<u64>() >> 24,
                random::<u64>() >> 24,
            ];
            v[0..2].sort_unstable();
            v[2..4].sort_unstable();

            let exact = (v[0] + v[1] + v[2] + v[3]) as ExtFloat * unit;
            let (sum, carry) = merge_sum(
                v[0] as ExtFloat * unit,
                v[1] as ExtFloat * unit,
                v[2] as ExtFloat * unit,
                v[3] as ExtFloat * unit,
                false,
            );
            assert_eq!(sum, exact);
            assert_eq!(carry, 0);
        }
    }

    #[test]
    fn test_pair_order_independence() {
        // swapping the two pairs keeps the merged order, and with it the
        // exact result
        let (s1, c1) = merge_sum(0.125, 0.5, 0.25, 0.375, false);
        let (s2, c2) = merge_sum(0.25, 0.375, 0.125, 0.5, false);
        assert_eq!(s1, 1.25);
        assert_eq!(s1, s2);
        assert_eq!(c1, c2);
    }

    #[test]
    fn test_fractional_carries() {
        let (sum, carry) = merge_sum(0.25, 0.375, 0.5, 0.625, true);
        assert_eq!(sum, 0.75);
        assert_eq!(carry, 1);

        let (sum, carry) = merge_sum(0.75, 0.875, 0.75, 0.875, true);
        assert_eq!(sum, 0.25);
        assert_eq!(carry, 3);

        let (sum, carry) = merge_sum(0.0, 0.125, 0.0, 0.25, true);
        assert_eq!(sum, 0.375);
        assert_eq!(carry, 0);
    }

    #[test]
    fn test_equal_values() {
        // ties must fall through to the second pair without disturbing
        // the sum
        let (sum, carry) = merge_sum(0.25, 0.25, 0.25, 0.25, true);
        assert_eq!(sum, 0.0);
        assert_eq!(carry, 1);

        let (sum, carry) = merge_sum(1.0, 1.0, 1.0, 1.0, false);
        assert_eq!(sum, 4.0);
        assert_eq!(carry, 0);
    }
}
