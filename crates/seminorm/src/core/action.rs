//! Family-indexed scalar actions on seminorm values.
//!
//! A seminorm can be scaled by any weight type `R` that acts on ℝ through
//! the chain `R → [0, ∞) → ℝ`. Instead of one fixed weight type there is a
//! family of them, each implementing [`ScalarAction`]. The single
//! compatibility law every implementation must satisfy is
//!
//! ```text
//! r • (c · t) = c · (r • t)      for all c ≥ 0, t ∈ ℝ
//! ```
//!
//! which is what keeps `r • p` absolutely homogeneous:
//! `(r • p)(a • x) = r • (‖a‖ · p(x)) = ‖a‖ · (r • p)(x)`.
//! [`ScalarAction::commutes_with_scaling`] checks one instance of the law;
//! the test suite runs it once per implementation.

use core::fmt::Debug;

use super::nnreal::NonNegReal;

/// A weight acting on seminorm values through `[0, ∞)`.
pub trait ScalarAction: Copy + Debug + Send + Sync + 'static {
    /// Image of the weight in `[0, ∞)`.
    fn to_nnreal(&self) -> NonNegReal;

    /// Action on a real value: `r • t = to_nnreal(r) · t`.
    #[inline]
    fn act(&self, t: f64) -> f64 {
        self.to_nnreal().get() * t
    }

    /// Checks `r • (c · t) = c · (r • t)` for one `(c, t)` pair, up to a
    /// relative rounding tolerance.
    fn commutes_with_scaling(&self, c: NonNegReal, t: f64) -> bool {
        let lhs = self.act(c.get() * t);
        let rhs = c.get() * self.act(t);
        (lhs - rhs).abs() <= 1e-12 * (1.0 + lhs.abs().max(rhs.abs()))
    }
}

impl ScalarAction for NonNegReal {
    #[inline]
    fn to_nnreal(&self) -> NonNegReal {
        *self
    }
}

// ℕ acts by repeated addition.
impl ScalarAction for u32 {
    #[inline]
    fn to_nnreal(&self) -> NonNegReal {
        NonNegReal::abs(f64::from(*self))
    }
}

impl ScalarAction for u64 {
    #[inline]
    fn to_nnreal(&self) -> NonNegReal {
        NonNegReal::abs(*self as f64)
    }
}
