//! Estimation of `base ^ exponent` in scientific notation.

use crate::dd::scaled_product;
use crate::defs::{Error, ExtFloat};

/// A value in scientific notation: `mantissa * 10^exponent`.
///
/// The mantissa lies in `[1, 10)` and the exponent is an integer-valued
/// float, so magnitudes far beyond the range of [`ExtFloat`] itself can be
/// expressed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Estimate {
    /// Leading digits of the result, in `[1, 10)`.
    pub mantissa: ExtFloat,

    /// Power of ten of the result.
    pub exponent: ExtFloat,
}

/// Estimates `base ^ exponent` for a positive `base` and any finite
/// `exponent`, including negative and fractional ones.
///
/// The decimal logarithm of the base is taken apart into its integer width
/// and fractional remainder, and `exponent * log10(base)` is then formed
/// with [`scaled_product`] so that the integral part (the final power of
/// ten) and the fractional part (the final leading digits) survive with far
/// more significant digits than a single native multiply would keep.
///
/// ## Errors
///
///  - InvalidBase: `base` is zero, negative, or NaN.
pub fn estimate(base: ExtFloat, exponent: ExtFloat) -> Result<Estimate, Error> {
    if !(base > 0.0) {
        return Err(Error::InvalidBase);
    }

    let invert = exponent < 0.0;
    let exponent = exponent.abs();

    // log10(base) = width + fract_log, with fract_log in [0, 1)
    let ten: ExtFloat = 10.0;
    let width = base.log10().floor();
    let fract_log = (base / ten.powf(width)).log10();

    let r = scaled_product(exponent, width, fract_log);

    let (int, fract) = if invert {
        if r.fract == 0.0 {
            // the reciprocal of an exact power of ten stays normalized
            (-r.int, 0.0)
        } else {
            // reciprocal: shift down one power of ten and mirror the fraction
            (-r.int - 1.0, 1.0 - r.fract)
        }
    } else {
        (r.int, r.fract)
    };

    Ok(Estimate {
        mantissa: ten.powf(fract),
        exponent: int,
    })
}
