//! Normed scalars.
//!
//! Scalars form a ring with an absolute value `‖·‖ : S → [0, ∞)`. The
//! trait layering mirrors what each seminorm operation needs:
//!
//! ```text
//! NormedScalar ──► NormedField ──► NontriviallyNormedField
//!   (ring, ‖·‖)      (inverse)       (arbitrarily small / large norms)
//! ```
//!
//! Operations that divide (infimal convolution, the one-sided homogeneity
//! constructor, exact set scaling) are only defined for [`NormedField`]
//! scalars, so using them with `i64` is rejected at compile time.
//!
//! # Example
//!
//! ```
//! use seminorm::core::{NormedField, NormedScalar, NontriviallyNormedField};
//!
//! assert_eq!((-3i64).norm(), 3.0);
//! assert_eq!(4.0f64.inv(), Some(0.25));
//! assert_eq!(0.0f64.inv(), None);
//!
//! let k = f64::with_norm_below(0.5).unwrap();
//! assert!(k.norm() > 0.0 && k.norm() < 0.5);
//! ```

use core::fmt::Debug;

/// A ring equipped with an absolute value.
///
/// Implementors must satisfy `norm(zero()) = 0`, `norm(one()) = 1` and
/// `norm(a * b) = norm(a) * norm(b)`.
pub trait NormedScalar: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Ring addition.
    fn scalar_add(self, other: Self) -> Self;

    /// Ring multiplication.
    fn scalar_mul(self, other: Self) -> Self;

    /// Additive inverse.
    fn scalar_neg(self) -> Self;

    /// The absolute value `‖a‖ ≥ 0`.
    fn norm(&self) -> f64;

    /// Returns true for the additive identity.
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// A normed scalar ring in which every non-zero element is invertible.
pub trait NormedField: NormedScalar {
    /// Multiplicative inverse, `None` exactly for zero.
    fn inv(&self) -> Option<Self>;

    /// Integer power `a^n`, negative exponents through [`inv`](Self::inv).
    ///
    /// Square-and-multiply, so at most `2 · 32` products for any `n`.
    /// Returns `None` for a negative exponent of zero.
    fn zpow(self, n: i32) -> Option<Self> {
        let mut base = if n < 0 { self.inv()? } else { self };
        let mut exp = n.unsigned_abs();
        let mut result = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.scalar_mul(base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.scalar_mul(base);
            }
        }
        Some(result)
    }
}

/// A normed field with elements of arbitrarily small and large norm.
///
/// Equivalent to containing an element with `1 < ‖c‖`. This density
/// property drives absorbency, shell rescaling and the continuity modulus.
pub trait NontriviallyNormedField: NormedField {
    /// An element `k` with `0 < ‖k‖ < bound`.
    ///
    /// Returns `None` when `bound` is not a positive finite number.
    fn with_norm_below(bound: f64) -> Option<Self>;

    /// An element `k` with `max(bound, 0) < ‖k‖`.
    ///
    /// Returns `None` when `bound` is not finite.
    fn with_norm_above(bound: f64) -> Option<Self>;
}

impl NormedScalar for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn scalar_add(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn scalar_mul(self, other: Self) -> Self {
        self * other
    }

    #[inline]
    fn scalar_neg(self) -> Self {
        -self
    }

    #[inline]
    fn norm(&self) -> f64 {
        self.abs()
    }
}

impl NormedField for f64 {
    #[inline]
    fn inv(&self) -> Option<Self> {
        if *self == 0.0 {
            None
        } else {
            Some(1.0 / *self)
        }
    }
}

impl NontriviallyNormedField for f64 {
    fn with_norm_below(bound: f64) -> Option<Self> {
        if bound.is_finite() && bound > 0.0 {
            Some(bound / 2.0)
        } else {
            None
        }
    }

    fn with_norm_above(bound: f64) -> Option<Self> {
        if bound.is_finite() {
            Some(bound.max(0.0) + 1.0)
        } else {
            None
        }
    }
}

// ℤ with the usual absolute value: a normed ring, not a field.
impl NormedScalar for i64 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn scalar_add(self, other: Self) -> Self {
        self.wrapping_add(other)
    }

    #[inline]
    fn scalar_mul(self, other: Self) -> Self {
        self.wrapping_mul(other)
    }

    #[inline]
    fn scalar_neg(self) -> Self {
        self.wrapping_neg()
    }

    #[inline]
    fn norm(&self) -> f64 {
        self.unsigned_abs() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_is_multiplicative() {
        for (a, b) in [(2.0f64, -3.5), (0.0, 7.0), (-1.0, -1.0)] {
            assert_eq!(a.scalar_mul(b).norm(), a.norm() * b.norm());
        }
        for (a, b) in [(2i64, -3), (0, 7), (-4, 5)] {
            assert_eq!(a.scalar_mul(b).norm(), a.norm() * b.norm());
        }
    }

    #[test]
    fn zpow_handles_negative_exponents() {
        assert_eq!(2.0f64.zpow(3), Some(8.0));
        assert_eq!(2.0f64.zpow(-2), Some(0.25));
        assert_eq!(5.0f64.zpow(0), Some(1.0));
        assert_eq!(0.0f64.zpow(-1), None);
        assert_eq!(3.0f64.zpow(13), Some(1_594_323.0));
        assert_eq!(2.0f64.zpow(-10), Some(1.0 / 1024.0));
    }

    #[test]
    fn zpow_of_huge_exponents_is_fast() {
        let c = 1.0f64 + 1e-12;
        let up = c.zpow(1_000_000_000).unwrap();
        assert!((up - 1e-3f64.exp()).abs() < 1e-6, "up = {up}");
        let down = c.zpow(i32::MIN).unwrap();
        assert!((down * c.zpow(i32::MAX).unwrap() * c - 1.0).abs() < 1e-6);
        assert_eq!(1.0f64.zpow(i32::MAX), Some(1.0));
    }

    #[test]
    fn density_bounds() {
        let small = f64::with_norm_below(1e-3).unwrap();
        assert!(small.norm() > 0.0 && small.norm() < 1e-3);
        assert_eq!(f64::with_norm_below(0.0), None);
        assert_eq!(f64::with_norm_below(f64::NAN), None);

        assert_eq!(f64::with_norm_above(100.0), Some(101.0));
        assert!(f64::with_norm_above(-5.0).unwrap().norm() > 0.0);
        assert_eq!(f64::with_norm_above(f64::INFINITY), None);
    }
}
