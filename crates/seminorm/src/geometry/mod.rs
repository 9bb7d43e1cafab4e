//! Ball geometry of a seminorm.
//!
//! ```text
//! ball p x r        = { y | p(y − x) < r }
//! closedBall p x r  = { y | p(y − x) ≤ r }
//! ```
//!
//! Balls are derived values: they store `(p, x, r)` and answer membership
//! by evaluating the defining inequality. Set relations (inclusion,
//! equality) are decided on probe sets, like the seminorm order.
//!
//! # Laws
//!
//! | Law | Constructor |
//! |-----|-------------|
//! | `r₁ ≤ r₂ ⟹ ball p x r₁ ⊆ ball p x r₂` | [`Ball::widen`] |
//! | `q ≤ p ⟹ ball p x r ⊆ ball q x r` | [`Ball::under`] |
//! | `ball (c • p) x r = ball p x (r / c)` | [`Ball::of_smul`] |
//! | `ball (p ⊔ q) x r = ball p x r ∩ ball q x r` | [`ball_sup`] |
//! | `ball (⨆ pᵢ) x r = ⋂ ball pᵢ x r` (r > 0) | [`ball_finset_sup`] |
//! | `ball p x₁ r₁ + ball p x₂ r₂ ⊆ ball p (x₁ + x₂) (r₁ + r₂)` | [`Ball::add_ball`] |
//! | `k • ball p x r = ball p (k • x) (‖k‖ · r)` (k ≠ 0) | [`Ball::scale`] |
//!
//! # Example
//!
//! ```
//! use seminorm::Seminorm;
//! use seminorm::geometry::{Ball, ClosedBall, Region};
//!
//! let p: Seminorm<f64, f64> = Seminorm::of("|x|", |x: &f64| x.abs());
//! let b = Ball::new(p.clone(), 0.0, 1.0);
//! let cb = ClosedBall::new(p, 0.0, 1.0);
//!
//! assert!(b.contains(&0.99));
//! assert!(!b.contains(&1.0));
//! assert!(cb.contains(&1.0));
//! assert!(!cb.contains(&-1.01));
//! ```

mod ball;
mod image;

pub use ball::{Ball, ClosedBall};
pub use image::{ball_finset_sup, ball_sup, closed_ball_finset_sup, closed_ball_sup, BallIntersection};

/// A subset of `E` given by a membership predicate.
pub trait Region<E> {
    /// Whether `y` belongs to the set.
    fn contains(&self, y: &E) -> bool;
}

/// The whole space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Universe;

impl<E> Region<E> for Universe {
    #[inline]
    fn contains(&self, _y: &E) -> bool {
        true
    }
}

/// `a ⊆ b` on the probes.
pub fn subset_on<E, A, B>(a: &A, b: &B, probes: &[E]) -> bool
where
    A: Region<E> + ?Sized,
    B: Region<E> + ?Sized,
{
    probes.iter().all(|y| !a.contains(y) || b.contains(y))
}

/// `a = b` on the probes.
pub fn set_eq_on<E, A, B>(a: &A, b: &B, probes: &[E]) -> bool
where
    A: Region<E> + ?Sized,
    B: Region<E> + ?Sized,
{
    probes.iter().all(|y| a.contains(y) == b.contains(y))
}

/// Probes `from, from + step, …` up to `to` inclusive, for tests and
/// validators over the real line.
pub fn line_probes(from: f64, to: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || to < from {
        return Vec::new();
    }
    let count = ((to - from) / step).floor() as usize;
    (0..=count).map(|i| from + i as f64 * step).collect()
}
