//! Double-double arithmetic built on half-mantissa splits.
//!
//! One real number is held as the exact sum of two [`ExtFloat`] components,
//! which roughly doubles the usable precision while only using native
//! floating point operations.
//!
//! [`ExtFloat`]: crate::defs::ExtFloat

mod add;
mod mul;
mod prod;
mod split;
mod sum;

pub use crate::dd::add::carry_add;
pub use crate::dd::mul::mul_split;
pub use crate::dd::prod::scaled_product;
pub use crate::dd::prod::DoubleDouble;
pub use crate::dd::split::SplitPair;
pub use crate::dd::sum::merge_sum;
