//! High-level operations.

pub mod pow;
