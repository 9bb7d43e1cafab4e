//! Non-negative reals.
//!
//! `NonNegReal` is the middle link of the scalar-action chain
//! `R → [0, ∞) → ℝ`: every weight acting on seminorm values passes
//! through it, so the value it wraps is never negative or NaN.

use core::fmt;

use crate::error::SeminormError;

/// A real number in `[0, ∞)`.
///
/// # Example
///
/// ```
/// use seminorm::core::NonNegReal;
///
/// let w = NonNegReal::new(2.5).unwrap();
/// assert_eq!(w.get(), 2.5);
/// assert!(NonNegReal::new(-1.0).is_err());
/// assert!(NonNegReal::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct NonNegReal(f64);

impl NonNegReal {
    /// Zero.
    pub const ZERO: Self = Self(0.0);

    /// One.
    pub const ONE: Self = Self(1.0);

    /// Wraps `value`, rejecting negative numbers and NaN.
    ///
    /// # Errors
    ///
    /// Returns [`SeminormError::NegativeWeight`] if `value < 0` or `value` is NaN.
    pub fn new(value: f64) -> Result<Self, SeminormError> {
        if value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(SeminormError::NegativeWeight { value })
        }
    }

    /// `|value|`, which is always admissible (NaN maps to zero).
    #[inline]
    #[must_use]
    pub fn abs(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.abs())
        }
    }

    /// The wrapped value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Product of two non-negative reals.
    #[inline]
    #[must_use]
    pub fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }

    /// Larger of two non-negative reals.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl TryFrom<f64> for NonNegReal {
    type Error = SeminormError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonNegReal> for f64 {
    #[inline]
    fn from(value: NonNegReal) -> Self {
        value.0
    }
}

impl fmt::Display for NonNegReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
