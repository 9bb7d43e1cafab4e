//! Error types.
//!
//! The algebra itself is total: building, combining and evaluating
//! seminorms never fails. Errors only arise from numeric arguments that a
//! caller supplies at run time (weights, radii, tolerances, scalars) and
//! from sampled law checks.

use thiserror::Error;

/// Errors raised while constructing scalars or rescaling seminorm values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeminormError {
    /// A weight that must lie in `[0, ∞)` was negative or NaN.
    #[error("weight {value} is negative or not a number")]
    NegativeWeight {
        /// The rejected value.
        value: f64,
    },
    /// A tolerance that must be positive was not.
    #[error("tolerance {epsilon} must be positive and finite")]
    NonPositiveTolerance {
        /// The rejected tolerance.
        epsilon: f64,
    },
    /// Shell rescaling needs a scalar of norm strictly greater than one.
    #[error("shell scalar has norm {norm}, expected a norm greater than 1")]
    ShellScalarTooSmall {
        /// Norm of the rejected scalar.
        norm: f64,
    },
    /// The seminorm vanishes on the point, so no rescaling reaches the shell.
    #[error("seminorm `{label}` vanishes on the given point")]
    VanishingValue {
        /// Label of the seminorm.
        label: String,
    },
    /// Shell search did not converge (non-finite values).
    #[error("no shell exponent found for value {value}")]
    ShellNotFound {
        /// Seminorm value of the point.
        value: f64,
    },
}

/// Errors raised by ball constructions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Monotonicity only widens a ball.
    #[error("radius {requested} is smaller than current radius {current}")]
    RadiusShrinks {
        /// Radius of the existing ball.
        current: f64,
        /// Radius that was requested.
        requested: f64,
    },
    /// Dividing a radius by a weight needs the weight to be positive.
    #[error("scaling weight {weight} is not positive")]
    NonPositiveWeight {
        /// The rejected weight.
        weight: f64,
    },
    /// The law needs a positive radius.
    #[error("ball radius {radius} is not positive")]
    NonPositiveRadius {
        /// The rejected radius.
        radius: f64,
    },
    /// Scaling a set by zero collapses it; no inverse exists.
    #[error("scalar has no inverse")]
    ZeroScalar,
    /// Absorption needs the center to lie strictly inside the ball.
    #[error("center is not inside the ball: p(center) = {value}, radius = {radius}")]
    CenterOutside {
        /// Seminorm of the center.
        value: f64,
        /// Ball radius.
        radius: f64,
    },
    /// No scalar with the requested norm exists (non-finite bound).
    #[error("no scalar with norm above {bound}")]
    NoLargeScalar {
        /// The requested lower bound on the norm.
        bound: f64,
    },
}

/// Errors raised while deriving or querying a continuity modulus.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContinuityError {
    /// The target tolerance ε must be positive.
    #[error("tolerance {epsilon} must be positive and finite")]
    NonPositiveTolerance {
        /// The rejected tolerance.
        epsilon: f64,
    },
    /// The closed-ball radius r must be positive.
    #[error("closed-ball radius {radius} must be positive and finite")]
    NonPositiveRadius {
        /// The rejected radius.
        radius: f64,
    },
    /// The neighbourhood witness radius must be positive.
    #[error("neighbourhood witness radius {radius} must be positive and finite")]
    NonPositiveWitness {
        /// The rejected radius.
        radius: f64,
    },
    /// The scalar field did not supply a small-norm element.
    #[error("no scalar with norm below {bound}")]
    NoSmallScalar {
        /// The requested upper bound on the norm.
        bound: f64,
    },
}

/// A seminorm law observed to fail on a concrete sample.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LawViolation {
    /// `p(0) ≠ 0`.
    #[error("`{label}`: p(0) = {value}, expected 0")]
    ZeroAtOrigin {
        /// Label of the seminorm.
        label: String,
        /// Observed value at the origin.
        value: f64,
    },
    /// `p(x) < 0`.
    #[error("`{label}`: p({point}) = {value} is negative")]
    Negative {
        /// Label of the seminorm.
        label: String,
        /// Debug rendering of the point.
        point: String,
        /// Observed value.
        value: f64,
    },
    /// `p(-x) ≠ p(x)`.
    #[error("`{label}`: p(-x) = {lhs} but p(x) = {rhs} at x = {point}")]
    Symmetry {
        /// Label of the seminorm.
        label: String,
        /// Debug rendering of the point.
        point: String,
        /// `p(-x)`.
        lhs: f64,
        /// `p(x)`.
        rhs: f64,
    },
    /// `p(x + y) > p(x) + p(y)`.
    #[error("`{label}`: p(x + y) = {sum} exceeds p(x) + p(y) = {bound} at x = {x}, y = {y}")]
    Subadditivity {
        /// Label of the seminorm.
        label: String,
        /// Debug rendering of `x`.
        x: String,
        /// Debug rendering of `y`.
        y: String,
        /// `p(x + y)`.
        sum: f64,
        /// `p(x) + p(y)`.
        bound: f64,
    },
    /// `p(a • x) ≠ ‖a‖ · p(x)`.
    #[error("`{label}`: p(a • x) = {lhs} but ‖a‖ · p(x) = {rhs} at a = {scalar}, x = {point}")]
    Homogeneity {
        /// Label of the seminorm.
        label: String,
        /// Debug rendering of the scalar.
        scalar: String,
        /// Debug rendering of the point.
        point: String,
        /// `p(a • x)`.
        lhs: f64,
        /// `‖a‖ · p(x)`.
        rhs: f64,
    },
    /// `|p(x) − p(y)| > p(x − y)`.
    #[error("`{label}`: |p(x) − p(y)| = {lhs} exceeds p(x − y) = {rhs} at x = {x}, y = {y}")]
    ReverseTriangle {
        /// Label of the seminorm.
        label: String,
        /// Debug rendering of `x`.
        x: String,
        /// Debug rendering of `y`.
        y: String,
        /// `|p(x) − p(y)|`.
        lhs: f64,
        /// `p(x − y)`.
        rhs: f64,
    },
}
