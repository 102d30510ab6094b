//! Powmag estimates `base ^ exponent` for arbitrarily large positive bases
//! and exponents, and expresses the result in scientific notation even when
//! it would overflow every native floating point range.
//!
//! The computation reduces to `exponent * log10(base)`, whose integral part
//! is the final power of ten and whose fractional part carries the leading
//! digits of the mantissa. Both are extremely sensitive to rounding in this
//! one multiplication, so it is carried out with compensated double-double
//! arithmetic built on half-mantissa splits of the widest native float.
//!
//! | Name                               | Value |
//! |:-----------------------------------|------:|
//! | Mantissa bits per native component |    53 |
//! | Half-mantissa split width          |    26 |
//! | Decimal digits preserved (approx.) |    31 |
//!
//! ```
//! use powmag::estimate;
//!
//! // 2^10 = 1.024 E 3
//! let r = estimate(2.0, 10.0).unwrap();
//! assert_eq!(r.exponent, 3.0);
//! assert!((r.mantissa - 1.024).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]

mod common;
mod dd;
mod defs;
mod ops;

pub use crate::dd::carry_add;
pub use crate::dd::merge_sum;
pub use crate::dd::mul_split;
pub use crate::dd::scaled_product;
pub use crate::dd::DoubleDouble;
pub use crate::dd::SplitPair;
pub use crate::defs::Carry;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::ExtFloat;
pub use crate::defs::MANT_BIT_SIZE;
pub use crate::defs::SPLIT;
pub use crate::ops::pow::estimate;
pub use crate::ops::pow::Estimate;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_powmag() {
        // split and reassemble a product through the public surface
        let a = SplitPair::split(3.5);
        let b = SplitPair::split(2.0);
        let (hi, lo) = mul_split(&a, &b);
        assert_eq!(lo, 0.0);
        assert!(hi > 0.0);

        // 3.5 * (2.0 + 0.25) = 7.875
        let r = scaled_product(3.5, 2.0, 0.25);
        assert_eq!(r.int, 7.0);
        assert_eq!(r.fract, 0.875);

        // and the end-to-end estimate
        let r = estimate(2.0, 100.0).unwrap();
        assert_eq!(r.exponent, 30.0);
        assert!((r.mantissa - 1.2676506002282294).abs() < 1e-12);
    }
}
