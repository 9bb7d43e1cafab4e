//! Capability traits consumed by the seminorm engine.
//!
//! The engine never inspects concrete number types. It only needs:
//!
//! | Capability | Trait | Provided for |
//! |------------|-------|--------------|
//! | Scalar norm | [`NormedScalar`] | `f64`, `i64` |
//! | Division | [`NormedField`] | `f64` |
//! | Small / large norms | [`NontriviallyNormedField`] | `f64` |
//! | Vector operations | [`Module`] | `f64`, `i64`, `[f64; N]` |
//! | Ambient topology | [`AmbientNorm`] | `f64`, `[f64; N]` |
//! | Weights acting on ℝ | [`ScalarAction`] | [`NonNegReal`], `u32`, `u64` |
//! | Scalar change | [`IsometricRingHom`] | [`RingId`], [`IntCast`] |

pub mod action;
pub mod hom;
pub mod module;
pub mod nnreal;
pub mod scalar;

pub use action::ScalarAction;
pub use hom::{IntCast, IsometricRingHom, RingId};
pub use module::{AmbientNorm, Basis, Module};
pub use nnreal::NonNegReal;
pub use scalar::{NontriviallyNormedField, NormedField, NormedScalar};
