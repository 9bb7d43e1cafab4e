//! Validators, one module per area of the seminorm crate.
//!
//! Each validator draws its own reproducible samples from the configured
//! seed and returns a [`ConformanceReport`](crate::report::ConformanceReport).

pub mod algebra;
pub mod continuity;
pub mod geometry;
pub mod lattice;

use crate::config::ConformanceConfig;
use crate::catalog::Sampler;

/// Sampler for one validator, so that validators do not share a stream.
pub(crate) fn sampler(config: &ConformanceConfig, salt: u64) -> Sampler {
    Sampler::new(config.seed ^ salt.wrapping_mul(0x9e37_79b9_7f4a_7c15))
}
