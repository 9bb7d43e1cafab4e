//! Norm-preserving scalar changes.
//!
//! Composing a seminorm with a semilinear map `f : F → E` over a ring
//! homomorphism `σ : S₂ → S` stays absolutely homogeneous only when `σ`
//! preserves norms: `p(f(a • x)) = p(σ(a) • f(x)) = ‖σ(a)‖ · p(f(x))`, and
//! `‖σ(a)‖ = ‖a‖` is needed to close the chain.

use super::scalar::NormedScalar;

/// A ring homomorphism `A → B` with `‖map(a)‖ = ‖a‖`.
pub trait IsometricRingHom<A: NormedScalar, B: NormedScalar>: Copy + Send + Sync + 'static {
    /// Image of `a`.
    fn map(&self, a: A) -> B;
}

/// The identity homomorphism on any scalar type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RingId;

impl<S: NormedScalar> IsometricRingHom<S, S> for RingId {
    #[inline]
    fn map(&self, a: S) -> S {
        a
    }
}

/// The embedding `ℤ → ℝ`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntCast;

impl IsometricRingHom<i64, f64> for IntCast {
    #[inline]
    fn map(&self, a: i64) -> f64 {
        a as f64
    }
}
