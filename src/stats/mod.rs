//! Numeric normalization and per-format aggregation.

pub mod aggregate;
pub mod normalize;
