//! Bridge between an ambient norm and the seminorm API.
//!
//! A [`NormedSpace`] carries a norm that is already homogeneous for its
//! scalars. [`norm_seminorm`] views that norm as a [`Seminorm`], and the
//! seminorm balls then coincide with the metric balls of the space:
//!
//! | Seminorm side | Metric side |
//! |---------------|-------------|
//! | `ball ‖·‖ x r` | `{ y | ‖y − x‖ < r }` |
//! | `closedBall ‖·‖ x r` | `{ y | ‖y − x‖ ≤ r }` |

use crate::core::{AmbientNorm, Module, NormedScalar};
use crate::geometry::Region;
use crate::seminorm::Seminorm;

/// A module whose ambient norm satisfies `‖a • x‖ = ‖a‖ · ‖x‖` and the
/// triangle inequality.
pub trait NormedSpace<S: NormedScalar>: Module<S> + AmbientNorm {}

impl NormedSpace<f64> for f64 {}

impl<const N: usize> NormedSpace<f64> for [f64; N] {}

/// The ambient norm as a seminorm.
pub fn norm_seminorm<S, E>() -> Seminorm<S, E>
where
    S: NormedScalar,
    E: NormedSpace<S>,
{
    Seminorm::of("‖·‖", |x: &E| x.ambient_norm())
}

/// A metric ball of the ambient norm.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricBall<E> {
    center: E,
    radius: f64,
    closed: bool,
}

impl<E> MetricBall<E> {
    /// `{ y | ‖y − x‖ < r }`.
    pub fn open(center: E, radius: f64) -> Self {
        Self {
            center,
            radius,
            closed: false,
        }
    }

    /// `{ y | ‖y − x‖ ≤ r }`.
    pub fn closed(center: E, radius: f64) -> Self {
        Self {
            center,
            radius,
            closed: true,
        }
    }
}

impl<E: NormedSpace<f64>> Region<E> for MetricBall<E> {
    fn contains(&self, y: &E) -> bool {
        let d = y.vsub(&self.center).ambient_norm();
        if self.closed {
            d <= self.radius
        } else {
            d < self.radius
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{set_eq_on, Ball, ClosedBall};

    fn grid() -> Vec<[f64; 2]> {
        let mut out = Vec::new();
        for i in -8..=8 {
            for j in -8..=8 {
                out.push([f64::from(i) * 0.25, f64::from(j) * 0.25]);
            }
        }
        out
    }

    #[test]
    fn norm_seminorm_evaluates_the_ambient_norm() {
        let p = norm_seminorm::<f64, [f64; 2]>();
        assert_eq!(p.apply(&[3.0, 4.0]), 5.0);
        assert_eq!(p.label(), "‖·‖");
    }

    #[test]
    fn seminorm_balls_are_metric_balls() {
        let p = norm_seminorm::<f64, [f64; 2]>();
        let center = [0.5, -0.25];
        let probes = grid();
        assert!(set_eq_on(
            &Ball::new(p.clone(), center, 1.0),
            &MetricBall::open(center, 1.0),
            &probes
        ));
        assert!(set_eq_on(
            &ClosedBall::new(p, center, 1.0),
            &MetricBall::closed(center, 1.0),
            &probes
        ));
    }
}
