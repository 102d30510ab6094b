//! Definitions.

use core::fmt::Display;

/// The widest native binary floating point type available.
///
/// Every other precision constant in the crate is derived from this alias,
/// so retargeting to a wider type only requires changing it here. With `f64`
/// the mantissa is 53 bits wide, which gives about 15.9 significant decimal
/// digits per component and roughly twice that for a double-double pair.
pub type ExtFloat = f64;

/// A power-of-two exponent.
pub type Exponent = i32;

/// Count of unit boundaries crossed while accumulating fractional values.
pub type Carry = u32;

/// Mantissa width of [`ExtFloat`] in bits, including the implicit bit.
pub const MANT_BIT_SIZE: u32 = ExtFloat::MANTISSA_DIGITS;

/// Half the mantissa width of [`ExtFloat`].
///
/// Two values with at most `SPLIT` significant bits each multiply natively
/// with zero rounding error.
pub const SPLIT: u32 = MANT_BIT_SIZE / 2;

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The base is zero, negative, or not a number.
    InvalidBase,

    /// Input could not be parsed as a number.
    InvalidInput,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::InvalidBase => "invalid base",
            Error::InvalidInput => "invalid input",
        };
        f.write_str(repr)
    }
}
