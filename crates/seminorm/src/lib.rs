//! Seminorms over normed scalars.
//!
//! A seminorm on a module `E` over normed scalars `S` is a map
//! `p : E → ℝ` with
//!
//! ```text
//! p(0)       = 0
//! p(x + y)  ≤ p(x) + p(y)
//! p(a • x)   = ‖a‖ · p(x)
//! ```
//!
//! This crate builds seminorms from evaluation maps and combines them
//! without ever breaking those laws.
//!
//! # Layers
//!
//! | Layer | Module | Contents |
//! |-------|--------|----------|
//! | Capabilities | [`core`] | scalar norms, modules, weights, scalar changes |
//! | Functional | [`Seminorm`] | construction, evaluation, algebra |
//! | Order | [`order`] | pointwise order, join, meet, bounded suprema |
//! | Geometry | [`geometry`] | open and closed balls and their laws |
//! | Continuity | [`continuity`] | modulus `ε ↦ δ` from one bounded neighbourhood |
//! | Ambient norm | [`norm_adapter`] | the ambient norm as a seminorm |
//! | Verification | [`laws`] | sampled checks of the defining laws |
//!
//! # Partial lattice
//!
//! The join `p ⊔ q` is pointwise. The meet is *not*: `max(p, q)` is a
//! seminorm but `min(p, q)` generally is not subadditive, so
//!
//! ```text
//! (p ⊓ q)(x) = inf_u p(u) + q(x − u)
//! ```
//!
//! which needs division by scalars and is only offered over fields.
//! Suprema of infinite families exist only when the family is bounded
//! above; [`Seminorm::sup_set`] returns `0` for unbounded families.
//!
//! # Example
//!
//! ```
//! use seminorm::Seminorm;
//! use seminorm::geometry::{ball_sup, Ball, Region};
//!
//! let p: Seminorm<f64, f64> = Seminorm::of("|x|", |x: &f64| x.abs());
//! let q = p.smul(2u32);
//!
//! let (joined, parts) = ball_sup(&p, &q, &0.0, 1.0);
//! assert!(joined.contains(&0.4) && parts.contains(&0.4));
//! assert!(!joined.contains(&0.6) && !parts.contains(&0.6));
//!
//! let half = Ball::of_smul(p, 2u32, 0.0, 1.0).unwrap();
//! assert_eq!(half.radius(), 0.5);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic, missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

// Capability traits (scalars, modules, weights, scalar changes)
pub mod core;

// Error types
pub mod error;

// Seminorm values and their algebra
mod seminorm;

// Pointwise order and lattice traits
pub mod order;

// Open and closed balls
pub mod geometry;

// Continuity moduli
pub mod continuity;

// Ambient norm bridge
pub mod norm_adapter;

// Sampled law checks
pub mod laws;

pub use self::core::{
    AmbientNorm, Basis, IntCast, IsometricRingHom, Module, NonNegReal, NontriviallyNormedField,
    NormedField, NormedScalar, RingId, ScalarAction,
};
pub use error::{ContinuityError, GeometryError, LawViolation, SeminormError};
pub use seminorm::{
    CompassSearch, CountableFamily, EndpointSearch, EvalFn, Family, InfimumDomain, InfimumSearch,
    NestedLineSearch, Seminorm, Supremum,
};
