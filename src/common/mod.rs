//! Auxiliary functionality.

pub mod util;
