//! Splitting a float into half-mantissa components.

use crate::common::util::{frexp, ldexp, modf};
use crate::defs::{Exponent, ExtFloat, SPLIT};

/// A float decomposed so that `hi` and `lo` each fit in half the mantissa.
///
/// The original value is `(hi + lo) * 2^(exp - SPLIT)`: `hi` is an integer
/// below `2^SPLIT` holding the upper half of the mantissa, `lo` lies in
/// `[0, 1)` and holds the remainder. Because the two components are this
/// narrow, `hi * hi'` of two split values is an exact native multiply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPair {
    /// Upper half of the mantissa, an integer below `2^SPLIT`.
    pub hi: ExtFloat,

    /// Remainder of the mantissa, in `[0, 1)`.
    pub lo: ExtFloat,

    /// Power-of-two exponent of the original value.
    pub exp: Exponent,
}

impl SplitPair {
    /// Splits `x` into half-mantissa components. Zero splits to all-zero
    /// parts.
    pub fn split(x: ExtFloat) -> Self {
        let (m, e) = frexp(x);
        let (hi, lo) = modf(ldexp(m, SPLIT as Exponent));

        SplitPair { hi, lo, exp: e }
    }

    /// The value the pair was built from.
    #[cfg(test)]
    pub fn reconstruct(&self) -> ExtFloat {
        ldexp(self.hi + self.lo, self.exp - SPLIT as Exponent)
    }
}
