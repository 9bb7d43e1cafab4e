//! Sampled verification of the seminorm laws.
//!
//! [`Seminorm::of`] trusts its caller. These checks evaluate the defining
//! laws on concrete samples and report the first violation found.
//!
//! | Check | Law |
//! |-------|-----|
//! | [`check_seminorm_laws`] | `p(0) = 0`, `p ≥ 0`, `p(-x) = p(x)`, subadditivity, homogeneity |
//! | [`check_reverse_triangle`] | `|p(x) − p(y)| ≤ p(x − y)` |
//!
//! All comparisons allow a relative slack of `tolerance · (1 + |rhs|)`.

use crate::core::{Module, NormedScalar};
use crate::error::LawViolation;
use crate::seminorm::Seminorm;

fn exceeds(lhs: f64, rhs: f64, tolerance: f64) -> bool {
    lhs > rhs + tolerance * (1.0 + rhs.abs())
}

fn differs(lhs: f64, rhs: f64, tolerance: f64) -> bool {
    exceeds(lhs, rhs, tolerance) || exceeds(rhs, lhs, tolerance)
}

/// Checks the seminorm laws of `p` on `vectors` and `scalars`.
///
/// Subadditivity is checked on every ordered pair of vectors, homogeneity
/// on every scalar-vector pair.
///
/// # Errors
///
/// Returns the first [`LawViolation`] observed.
pub fn check_seminorm_laws<S, E>(
    p: &Seminorm<S, E>,
    vectors: &[E],
    scalars: &[S],
    tolerance: f64,
) -> Result<(), LawViolation>
where
    S: NormedScalar,
    E: Module<S>,
{
    let label = || p.label().to_owned();

    let origin = p.apply(&E::zero());
    if differs(origin, 0.0, tolerance) {
        return Err(LawViolation::ZeroAtOrigin {
            label: label(),
            value: origin,
        });
    }

    for x in vectors {
        let px = p.apply(x);
        if px < -tolerance || px.is_nan() {
            return Err(LawViolation::Negative {
                label: label(),
                point: format!("{x:?}"),
                value: px,
            });
        }
        let neg = p.apply(&x.vneg());
        if differs(neg, px, tolerance) {
            return Err(LawViolation::Symmetry {
                label: label(),
                point: format!("{x:?}"),
                lhs: neg,
                rhs: px,
            });
        }
        for a in scalars {
            let lhs = p.apply(&x.smul(a));
            let rhs = a.norm() * px;
            if differs(lhs, rhs, tolerance) {
                return Err(LawViolation::Homogeneity {
                    label: label(),
                    scalar: format!("{a:?}"),
                    point: format!("{x:?}"),
                    lhs,
                    rhs,
                });
            }
        }
        for y in vectors {
            let sum = p.apply(&x.vadd(y));
            let bound = px + p.apply(y);
            if exceeds(sum, bound, tolerance) {
                return Err(LawViolation::Subadditivity {
                    label: label(),
                    x: format!("{x:?}"),
                    y: format!("{y:?}"),
                    sum,
                    bound,
                });
            }
        }
    }
    Ok(())
}

/// Checks `|p(x) − p(y)| ≤ p(x − y)` on every ordered pair of `vectors`.
///
/// # Errors
///
/// Returns [`LawViolation::ReverseTriangle`] on the first failure.
pub fn check_reverse_triangle<S, E>(
    p: &Seminorm<S, E>,
    vectors: &[E],
    tolerance: f64,
) -> Result<(), LawViolation>
where
    S: NormedScalar,
    E: Module<S>,
{
    for x in vectors {
        for y in vectors {
            let lhs = p.abs_sub(x, y);
            let rhs = p.dist(x, y);
            if exceeds(lhs, rhs, tolerance) {
                return Err(LawViolation::ReverseTriangle {
                    label: p.label().to_owned(),
                    x: format!("{x:?}"),
                    y: format!("{y:?}"),
                    lhs,
                    rhs,
                });
            }
        }
    }
    Ok(())
}
