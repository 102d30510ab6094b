//! Exact multiplication of split numbers.

use crate::common::util::modf;
use crate::dd::add::carry_add;
use crate::dd::split::SplitPair;
use crate::defs::ExtFloat;

/// Multiplies two split numbers into a double-double `(hi, lo)` pair.
///
/// `hi` collects the integral part of the product of the two mantissas,
/// `lo` the fractional part in `[0, 1)`. Each of the four partial products
/// is routed through an integral/fractional separation so that no term
/// silently loses bits to rounding; the result is exact whenever both
/// arguments satisfy the half-mantissa split invariant. The exponents of
/// `a` and `b` are not consumed here, the caller rescales the result.
pub fn mul_split(a: &SplitPair, b: &SplitPair) -> (ExtFloat, ExtFloat) {
    let mut hi = a.hi * b.hi;
    let mut lo = a.lo * b.lo;

    let (ci, cd) = modf(a.hi * b.lo);
    hi += ci;
    hi += ExtFloat::from(carry_add(&mut lo, cd, true));

    let (ci, cd) = modf(a.lo * b.hi);
    hi += ci;
    hi += ExtFloat::from(carry_add(&mut lo, cd, true));

    (hi, lo)
}
