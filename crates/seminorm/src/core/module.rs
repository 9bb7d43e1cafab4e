//! Vector-space capabilities.
//!
//! [`Module`] is the only vector interface the algebra needs: addition,
//! negation and scalar action. [`Basis`] drives the infimum searches on
//! `ℝⁿ`; [`AmbientNorm`] sets their step scale and the topology of the
//! continuity derivation.

use core::fmt::Debug;

use super::scalar::NormedScalar;

/// A module over the scalar ring `S`.
pub trait Module<S: NormedScalar>: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// The origin.
    fn zero() -> Self;

    /// Vector addition.
    fn vadd(&self, other: &Self) -> Self;

    /// Additive inverse.
    fn vneg(&self) -> Self;

    /// Scalar action `a • self`.
    fn smul(&self, a: &S) -> Self;

    /// Vector subtraction.
    #[inline]
    fn vsub(&self, other: &Self) -> Self {
        self.vadd(&other.vneg())
    }
}

/// A finite coordinate basis.
pub trait Basis: Sized {
    /// The standard unit vectors.
    fn basis() -> Vec<Self>;
}

/// The ambient norm that defines the topology of the vector space.
///
/// Implementations must be a genuine norm (zero only at the origin) and
/// homogeneous for every scalar type the space is a module over.
pub trait AmbientNorm {
    /// `‖x‖` in the ambient topology.
    fn ambient_norm(&self) -> f64;
}

impl Module<f64> for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn vadd(&self, other: &Self) -> Self {
        self + other
    }

    #[inline]
    fn vneg(&self) -> Self {
        -self
    }

    #[inline]
    fn smul(&self, a: &f64) -> Self {
        a * self
    }
}

// ℤ as a module over itself.
impl Module<i64> for i64 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn vadd(&self, other: &Self) -> Self {
        self.wrapping_add(*other)
    }

    #[inline]
    fn vneg(&self) -> Self {
        self.wrapping_neg()
    }

    #[inline]
    fn smul(&self, a: &i64) -> Self {
        a.wrapping_mul(*self)
    }
}

impl<const N: usize> Module<f64> for [f64; N] {
    #[inline]
    fn zero() -> Self {
        [0.0; N]
    }

    #[inline]
    fn vadd(&self, other: &Self) -> Self {
        core::array::from_fn(|i| self[i] + other[i])
    }

    #[inline]
    fn vneg(&self) -> Self {
        self.map(|v| -v)
    }

    #[inline]
    fn smul(&self, a: &f64) -> Self {
        self.map(|v| a * v)
    }
}

impl Basis for f64 {
    fn basis() -> Vec<Self> {
        vec![1.0]
    }
}

impl<const N: usize> Basis for [f64; N] {
    fn basis() -> Vec<Self> {
        (0..N)
            .map(|i| {
                let mut e = [0.0; N];
                e[i] = 1.0;
                e
            })
            .collect()
    }
}

impl AmbientNorm for f64 {
    #[inline]
    fn ambient_norm(&self) -> f64 {
        self.abs()
    }
}

impl<const N: usize> AmbientNorm for [f64; N] {
    fn ambient_norm(&self) -> f64 {
        self.iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_module_operations() {
        let x = [1.0, -2.0, 3.0];
        let y = [0.5, 0.5, 0.5];
        assert_eq!(x.vadd(&y), [1.5, -1.5, 3.5]);
        assert_eq!(x.vsub(&y), [0.5, -2.5, 2.5]);
        assert_eq!(x.smul(&2.0), [2.0, -4.0, 6.0]);
        assert_eq!(x.vadd(&x.vneg()), <[f64; 3] as Module<f64>>::zero());
    }

    #[test]
    fn basis_is_standard() {
        assert_eq!(<[f64; 2]>::basis(), vec![[1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(f64::basis(), vec![1.0]);
    }

    #[test]
    fn ambient_norm_is_euclidean() {
        assert_eq!([3.0, 4.0].ambient_norm(), 5.0);
        assert_eq!((-2.5f64).ambient_norm(), 2.5);
    }

    #[test]
    fn integer_module_wraps() {
        assert_eq!(3i64.smul(&-4), -12);
        assert_eq!(5i64.vsub(&7), -2);
    }
}
