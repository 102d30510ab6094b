//! Accumulation with unit-boundary carry detection.

use crate::defs::{Carry, ExtFloat};

/// Adds `delta` into `acc` and reports whether a unit boundary was crossed.
///
/// With `fractional` set the accumulator is treated as a pure fraction:
/// when the addition would reach or pass 1.0, the accumulator wraps around
/// and the returned carry is 1. The boundary test is formulated as
/// `(delta - 1) + acc >= 0` instead of comparing the plain sum against 1.0,
/// which avoids cancellation when the accumulator sits close to the
/// boundary.
///
/// Without `fractional` this is a plain `+=` and the carry is always 0.
pub fn carry_add(acc: &mut ExtFloat, delta: ExtFloat, fractional: bool) -> Carry {
    if fractional {
        let c = (delta - 1.0) + *acc;
        if c >= 0.0 {
            *acc = c;
            return 1;
        }
    }

    *acc += delta;
    0
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_plain_mode() {
        let mut acc = 1.5;
        assert_eq!(carry_add(&mut acc, 2.25, false), 0);
        assert_eq!(acc, 3.75);

        // no carry even past 1.0
        let mut acc = 0.75;
        assert_eq!(carry_add(&mut acc, 0.75, false), 0);
        assert_eq!(acc, 1.5);
    }

    #[test]
    fn test_fractional_mode() {
        let mut acc = 0.25;
        assert_eq!(carry_add(&mut acc, 0.5, true), 0);
        assert_eq!(acc, 0.75);

        let mut acc = 0.75;
        assert_eq!(carry_add(&mut acc, 0.5, true), 1);
        assert_eq!(acc, 0.25);

        // landing exactly on the boundary counts as a crossing
        let mut acc = 0.5;
        assert_eq!(carry_add(&mut acc, 0.5, true), 1);
        assert_eq!(acc, 0.0);

        let mut acc = 0.0;
        assert_eq!(carry_add(&mut acc, 0.0, true), 0);
        assert_eq!(acc, 0.0);
    }
}
