//! Extended-precision scaled product.

use crate::common::util::{ldexp, modf};
use crate::dd::mul::mul_split;
use crate::dd::split::SplitPair;
use crate::dd::sum::merge_sum;
use crate::defs::{Exponent, ExtFloat, SPLIT};

/// A real number held as separate integral and fractional components.
///
/// The represented value is `int + fract` with `0 <= fract < 1`, which
/// preserves roughly twice the precision of a single [`ExtFloat`] when the
/// integral part is large.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoubleDouble {
    /// Whole part.
    pub int: ExtFloat,

    /// Fractional part, in `[0, 1)`.
    pub fract: ExtFloat,
}

/// Computes `a * (b + c)` to roughly twice the native precision.
///
/// All three inputs are split into half-mantissa components, the two
/// products `a*b` and `a*c` are formed exactly with [`mul_split`], rescaled
/// by their net power-of-two exponents, and the resulting fragments are
/// summed in ascending order. The integral residue is accumulated first and
/// the fractional residue second, with the fractional pass's unit-boundary
/// carries added to the integral part afterwards.
pub fn scaled_product(a: ExtFloat, b: ExtFloat, c: ExtFloat) -> DoubleDouble {
    let sa = SplitPair::split(a);
    let sb = SplitPair::split(b);
    let sc = SplitPair::split(c);

    let e1 = sa.exp + sb.exp - 2 * SPLIT as Exponent;
    let e2 = sa.exp + sc.exp - 2 * SPLIT as Exponent;

    let (mut o1, mut o2) = mul_split(&sa, &sb);
    let (mut o3, mut o4) = mul_split(&sa, &sc);

    // Rescaling a double-double by a power of two pushes bits across the
    // integral boundary: scaling up can make the low part exceed 1, scaling
    // down leaves the high part with a fraction. The displaced piece of
    // each product is re-split into p1..p4.
    let mut p1 = 0.0;
    let mut p2 = 0.0;
    let mut p3 = 0.0;
    let mut p4 = 0.0;

    if e1 != 0 {
        if e1 > 0 {
            o1 = ldexp(o1, e1);
            let (i, f) = modf(ldexp(o2, e1));
            p2 = i;
            o2 = f;
        } else {
            let (i, f) = modf(ldexp(o1, e1));
            o1 = i;
            p1 = f;
            o2 = ldexp(o2, e1);
        }
    }

    if e2 != 0 {
        if e2 > 0 {
            o3 = ldexp(o3, e2);
            let (i, f) = modf(ldexp(o4, e2));
            p4 = i;
            o4 = f;
        } else {
            let (i, f) = modf(ldexp(o3, e2));
            o3 = i;
            p3 = f;
            o4 = ldexp(o4, e2);
        }
    }

    let (mut int, _) = merge_sum(p2, o1, p4, o3, false);
    let (fract, carry) = merge_sum(o2, p1, o4, p3, true);
    int += ExtFloat::from(carry);

    DoubleDouble { int, fract }
}
