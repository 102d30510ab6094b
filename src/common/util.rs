//! Bit-level helpers for the native extended float type.
//!
//! These are the `frexp`, `ldexp`, and `modf` primitives the arithmetic
//! layer is built on, implemented directly on the IEEE 754 bit layout of
//! [`ExtFloat`] so the crate does not depend on libm.

use crate::defs::{Exponent, ExtFloat, MANT_BIT_SIZE};

/// Position of the exponent field.
const EXP_SHIFT: u32 = MANT_BIT_SIZE - 1;

/// Mask of the exponent field after shifting.
const EXP_MASK: u64 = 0x7ff;

/// Exponent bias such that the mantissa lands in `[0.5, 1)`.
const EXP_BIAS: Exponent = 1022;

/// `2^e` for `e` in the normal range `[-1022, 1023]`.
fn pow2(e: Exponent) -> ExtFloat {
    debug_assert!((-EXP_BIAS..=EXP_BIAS + 1).contains(&e));
    ExtFloat::from_bits(((e + EXP_BIAS + 1) as u64) << EXP_SHIFT)
}

/// Decomposes `x` into a mantissa in `[0.5, 1)` and a power-of-two exponent
/// such that `x == m * 2^e`. Zero decomposes to `(0.0, 0)`.
pub fn frexp(x: ExtFloat) -> (ExtFloat, Exponent) {
    if x == 0.0 {
        return (0.0, 0);
    }

    let mut bits = x.to_bits();
    let mut e = ((bits >> EXP_SHIFT) & EXP_MASK) as Exponent;
    if e == 0 {
        // subnormal, bring it into the normal range first
        bits = (x * pow2(64)).to_bits();
        e = ((bits >> EXP_SHIFT) & EXP_MASK) as Exponent - 64;
    }

    let m = ExtFloat::from_bits((bits & !(EXP_MASK << EXP_SHIFT)) | ((EXP_BIAS as u64) << EXP_SHIFT));

    (m, e - EXP_BIAS)
}

/// Multiplies `x` by `2^e`, saturating to zero or infinity when the result
/// leaves the representable range.
pub fn ldexp(x: ExtFloat, e: Exponent) -> ExtFloat {
    let mut x = x;
    let mut e = e;

    if e > 1023 {
        x *= pow2(1023);
        e -= 1023;
        if e > 1023 {
            x *= pow2(1023);
            e -= 1023;
            if e > 1023 {
                e = 1023;
            }
        }
    } else if e < -1022 {
        // -969 keeps the scale factor normal while leaving room for
        // subnormal results (1022 + 53 = 1075 in two steps)
        x *= pow2(-969);
        e += 969;
        if e < -1022 {
            x *= pow2(-969);
            e += 969;
            if e < -1022 {
                e = -1022;
            }
        }
    }

    x * pow2(e)
}

/// Splits `x` into its integral and fractional parts, returned in that
/// order. Both parts carry the sign of `x` and the split is exact.
pub fn modf(x: ExtFloat) -> (ExtFloat, ExtFloat) {
    let i = x.trunc();
    (i, x - i)
}
