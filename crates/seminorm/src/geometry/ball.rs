//! Open and closed seminorm balls.

use super::Region;
use crate::core::{Module, NontriviallyNormedField, NormedField, NormedScalar, ScalarAction};
use crate::error::GeometryError;
use crate::seminorm::Seminorm;

/// `ball p x r = { y | p(y − x) < r }`. Empty when `r ≤ 0`.
#[derive(Debug, Clone)]
pub struct Ball<S, E> {
    seminorm: Seminorm<S, E>,
    center: E,
    radius: f64,
}

/// `closedBall p x r = { y | p(y − x) ≤ r }`.
///
/// Empty when `r < 0`; with `r = 0` it is `{ y | p(y − x) = 0 }`, which for
/// a norm is the center alone.
#[derive(Debug, Clone)]
pub struct ClosedBall<S, E> {
    seminorm: Seminorm<S, E>,
    center: E,
    radius: f64,
}

fn check_weight<R: ScalarAction>(c: R) -> Result<f64, GeometryError> {
    let weight = c.to_nnreal().get();
    if weight > 0.0 {
        Ok(weight)
    } else {
        Err(GeometryError::NonPositiveWeight { weight })
    }
}

impl<S: NormedScalar, E: Module<S>> Ball<S, E> {
    /// The open ball of `seminorm` around `center`.
    pub fn new(seminorm: Seminorm<S, E>, center: E, radius: f64) -> Self {
        Self {
            seminorm,
            center,
            radius,
        }
    }

    /// The open ball `ball (c • p) x r`, returned in the equal form
    /// `ball p x (r / c)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveWeight`] if `c` acts as zero.
    pub fn of_smul<R: ScalarAction>(
        seminorm: Seminorm<S, E>,
        c: R,
        center: E,
        radius: f64,
    ) -> Result<Self, GeometryError> {
        let weight = check_weight(c)?;
        Ok(Self::new(seminorm, center, radius / weight))
    }

    /// The seminorm measuring the ball.
    #[inline]
    pub fn seminorm(&self) -> &Seminorm<S, E> {
        &self.seminorm
    }

    /// The center.
    #[inline]
    pub fn center(&self) -> &E {
        &self.center
    }

    /// The radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Membership: `p(y − x) < r`.
    #[inline]
    pub fn contains(&self, y: &E) -> bool {
        self.seminorm.dist(y, &self.center) < self.radius
    }

    /// True when the radius alone forces the ball to be empty (`r ≤ 0`).
    #[inline]
    pub fn is_trivially_empty(&self) -> bool {
        self.radius <= 0.0
    }

    /// The same ball with a larger radius, which contains this one.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::RadiusShrinks`] if `radius` is smaller.
    pub fn widen(&self, radius: f64) -> Result<Self, GeometryError> {
        if radius < self.radius {
            return Err(GeometryError::RadiusShrinks {
                current: self.radius,
                requested: radius,
            });
        }
        Ok(Self::new(self.seminorm.clone(), self.center.clone(), radius))
    }

    /// The ball of `smaller` with the same center and radius.
    ///
    /// When `smaller ≤ p` pointwise (caller obligation), the result
    /// contains this ball: `p(y − x) < r` implies `smaller(y − x) < r`.
    pub fn under(&self, smaller: &Seminorm<S, E>) -> Self {
        Self::new(smaller.clone(), self.center.clone(), self.radius)
    }

    /// The closed ball with the same data, which contains this one.
    pub fn closure_bound(&self) -> ClosedBall<S, E> {
        ClosedBall::new(self.seminorm.clone(), self.center.clone(), self.radius)
    }

    /// Minkowski sum bound: `ball p x₁ r₁ + ball p x₂ r₂ ⊆ ball p (x₁ + x₂) (r₁ + r₂)`.
    ///
    /// The measuring seminorm of `self` is used; `other` must be measured
    /// by the same one.
    pub fn add_ball(&self, other: &Self) -> Self {
        Self::new(
            self.seminorm.clone(),
            self.center.vadd(&other.center),
            self.radius + other.radius,
        )
    }

    /// Translation: `ball p x r + {v} = ball p (x + v) r`.
    pub fn add_point(&self, v: &E) -> Self {
        Self::new(self.seminorm.clone(), self.center.vadd(v), self.radius)
    }

    /// `-ball p x r = ball p (-x) r`.
    pub fn neg(&self) -> Self {
        Self::new(self.seminorm.clone(), self.center.vneg(), self.radius)
    }

    /// Whether the ball is balanced: `a • y` stays inside for `‖a‖ ≤ 1`.
    ///
    /// True when `p(center) = 0` and `r > 0`; such a ball equals
    /// `ball p 0 r`, and `p(a • y) = ‖a‖ · p(y) ≤ p(y) < r`.
    pub fn is_balanced(&self) -> bool {
        self.radius > 0.0 && self.seminorm.apply(&self.center) == 0.0
    }
}

impl<S: NormedField, E: Module<S>> Ball<S, E> {
    /// `k • ball p x r = ball p (k • x) (‖k‖ · r)` for `k ≠ 0`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroScalar`] for `k = 0`.
    pub fn scale(&self, k: S) -> Result<Self, GeometryError> {
        if k.is_zero() {
            return Err(GeometryError::ZeroScalar);
        }
        Ok(Self::new(
            self.seminorm.clone(),
            self.center.smul(&k),
            k.norm() * self.radius,
        ))
    }

    /// Witness `k⁻¹ • y` for `y ∈ k • ball`: it lies in this ball whenever
    /// `y` lies in [`scale(k)`](Self::scale).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroScalar`] for `k = 0`.
    pub fn preimage(&self, k: S, y: &E) -> Result<E, GeometryError> {
        let inv = k.inv().ok_or(GeometryError::ZeroScalar)?;
        Ok(y.smul(&inv))
    }

    /// Whether `y ∈ a • ball`.
    ///
    /// For `a ≠ 0` this is `a⁻¹ • y ∈ ball`; `0 • ball` is `{0}` unless the
    /// ball is empty.
    pub fn contains_scaled_set(&self, a: S, y: &E) -> bool {
        match a.inv() {
            Some(inv) => self.contains(&y.smul(&inv)),
            None => *y == E::zero() && self.contains(&self.center),
        }
    }
}

impl<E: Module<f64>> Ball<f64, E> {
    /// The point `(1 − t) • y₁ + t • y₂`, if both endpoints lie in the ball
    /// and `t ∈ [0, 1]`. The result then lies in the ball as well.
    pub fn convex_combination(&self, y1: &E, y2: &E, t: f64) -> Option<E> {
        if !(0.0..=1.0).contains(&t) || !self.contains(y1) || !self.contains(y2) {
            return None;
        }
        Some(y1.smul(&(1.0 - t)).vadd(&y2.smul(&t)))
    }

    /// `a • y` for `‖a‖ ≤ 1` and `y` in a balanced ball, which stays inside.
    pub fn balanced_image(&self, a: f64, y: &E) -> Option<E> {
        if a.abs() > 1.0 || !self.is_balanced() || !self.contains(y) {
            return None;
        }
        Some(y.smul(&a))
    }
}

impl<S: NontriviallyNormedField, E: Module<S>> Ball<S, E> {
    /// The absorption threshold `ρ = p(y) / (r − p(center))`: every scalar
    /// `a` with `‖a‖ > ρ` has `y ∈ a • ball`.
    ///
    /// From `p(a⁻¹ • y − x) ≤ p(y)/‖a‖ + p(x) < r`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CenterOutside`] unless `p(center) < r`.
    pub fn absorption_threshold(&self, y: &E) -> Result<f64, GeometryError> {
        let offset = self.seminorm.apply(&self.center);
        if offset >= self.radius {
            return Err(GeometryError::CenterOutside {
                value: offset,
                radius: self.radius,
            });
        }
        Ok(self.seminorm.apply(y) / (self.radius - offset))
    }

    /// A scalar `a` with `y ∈ a • ball`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CenterOutside`] unless `p(center) < r`, and
    /// [`GeometryError::NoLargeScalar`] if the threshold is not finite.
    pub fn absorbing_scalar(&self, y: &E) -> Result<S, GeometryError> {
        let bound = self.absorption_threshold(y)?;
        S::with_norm_above(bound).ok_or(GeometryError::NoLargeScalar { bound })
    }
}

impl<S: NormedScalar, E: Module<S>> Region<E> for Ball<S, E> {
    #[inline]
    fn contains(&self, y: &E) -> bool {
        Ball::contains(self, y)
    }
}

impl<S: NormedScalar, E: Module<S>> ClosedBall<S, E> {
    /// The closed ball of `seminorm` around `center`.
    pub fn new(seminorm: Seminorm<S, E>, center: E, radius: f64) -> Self {
        Self {
            seminorm,
            center,
            radius,
        }
    }

    /// `closedBall (c • p) x r`, returned as `closedBall p x (r / c)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveWeight`] if `c` acts as zero.
    pub fn of_smul<R: ScalarAction>(
        seminorm: Seminorm<S, E>,
        c: R,
        center: E,
        radius: f64,
    ) -> Result<Self, GeometryError> {
        let weight = check_weight(c)?;
        Ok(Self::new(seminorm, center, radius / weight))
    }

    /// The seminorm measuring the ball.
    #[inline]
    pub fn seminorm(&self) -> &Seminorm<S, E> {
        &self.seminorm
    }

    /// The center.
    #[inline]
    pub fn center(&self) -> &E {
        &self.center
    }

    /// The radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Membership: `p(y − x) ≤ r`.
    #[inline]
    pub fn contains(&self, y: &E) -> bool {
        self.seminorm.dist(y, &self.center) <= self.radius
    }

    /// True when the radius alone forces the ball to be empty (`r < 0`).
    #[inline]
    pub fn is_trivially_empty(&self) -> bool {
        self.radius < 0.0
    }

    /// The same ball with a larger radius.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::RadiusShrinks`] if `radius` is smaller.
    pub fn widen(&self, radius: f64) -> Result<Self, GeometryError> {
        if radius < self.radius {
            return Err(GeometryError::RadiusShrinks {
                current: self.radius,
                requested: radius,
            });
        }
        Ok(Self::new(self.seminorm.clone(), self.center.clone(), radius))
    }

    /// The closed ball of `smaller` with the same center and radius; a
    /// superset when `smaller ≤ p`.
    pub fn under(&self, smaller: &Seminorm<S, E>) -> Self {
        Self::new(smaller.clone(), self.center.clone(), self.radius)
    }

    /// `closedBall p x₁ r₁ + closedBall p x₂ r₂ ⊆ closedBall p (x₁ + x₂) (r₁ + r₂)`.
    pub fn add_ball(&self, other: &Self) -> Self {
        Self::new(
            self.seminorm.clone(),
            self.center.vadd(&other.center),
            self.radius + other.radius,
        )
    }

    /// Whether the ball is balanced (`p(center) = 0` and `r ≥ 0`).
    pub fn is_balanced(&self) -> bool {
        self.radius >= 0.0 && self.seminorm.apply(&self.center) == 0.0
    }
}

impl<S: NormedField, E: Module<S>> ClosedBall<S, E> {
    /// `k • closedBall p x r = closedBall p (k • x) (‖k‖ · r)` for `k ≠ 0`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroScalar`] for `k = 0`.
    pub fn scale(&self, k: S) -> Result<Self, GeometryError> {
        if k.is_zero() {
            return Err(GeometryError::ZeroScalar);
        }
        Ok(Self::new(
            self.seminorm.clone(),
            self.center.smul(&k),
            k.norm() * self.radius,
        ))
    }

    /// Whether `y ∈ a • closedBall`.
    pub fn contains_scaled_set(&self, a: S, y: &E) -> bool {
        match a.inv() {
            Some(inv) => self.contains(&y.smul(&inv)),
            None => *y == E::zero() && self.contains(&self.center),
        }
    }
}

impl<S: NormedScalar, E: Module<S>> Region<E> for ClosedBall<S, E> {
    #[inline]
    fn contains(&self, y: &E) -> bool {
        ClosedBall::contains(self, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{line_probes, set_eq_on, subset_on};

    fn abs() -> Seminorm<f64, f64> {
        Seminorm::of("|x|", |x: &f64| x.abs())
    }

    #[test]
    fn ball_membership_is_strict() {
        let b = Ball::new(abs(), 0.0, 1.0);
        assert!(b.contains(&0.0));
        assert!(b.contains(&-0.999));
        assert!(!b.contains(&1.0));
        assert!(!b.contains(&-1.0));
    }

    #[test]
    fn non_positive_radius_is_empty() {
        let probes = line_probes(-2.0, 2.0, 0.125);
        let b = Ball::new(abs(), 0.0, 0.0);
        assert!(b.is_trivially_empty());
        assert!(probes.iter().all(|y| !b.contains(y)));

        let cb = ClosedBall::new(abs(), 0.5, 0.0);
        assert!(!cb.is_trivially_empty());
        assert!(cb.contains(&0.5));
        assert_eq!(probes.iter().filter(|y| cb.contains(y)).count(), 1);
        assert!(ClosedBall::new(abs(), 0.0, -1.0).is_trivially_empty());
    }

    #[test]
    fn widen_is_monotone_and_refuses_shrinking() {
        let probes = line_probes(-3.0, 3.0, 0.1);
        let b = Ball::new(abs(), 0.5, 1.0);
        let w = b.widen(2.0).unwrap();
        assert!(subset_on(&b, &w, &probes));
        assert_eq!(
            b.widen(0.5).unwrap_err(),
            GeometryError::RadiusShrinks {
                current: 1.0,
                requested: 0.5
            }
        );
    }

    #[test]
    fn under_is_antitone() {
        let probes = line_probes(-3.0, 3.0, 0.1);
        let big = abs().smul(2u32);
        let b = Ball::new(big, 0.0, 1.0);
        let u = b.under(&abs());
        assert!(subset_on(&b, &u, &probes));
        assert!(subset_on(&b, &b.closure_bound(), &probes));
    }

    #[test]
    fn of_smul_divides_the_radius() {
        let probes = line_probes(-2.0, 2.0, 0.125);
        let scaled = Ball::new(abs().smul(2u32), 0.0, 1.0);
        let normal = Ball::of_smul(abs(), 2u32, 0.0, 1.0).unwrap();
        assert_eq!(normal.radius(), 0.5);
        assert!(set_eq_on(&scaled, &normal, &probes));
        assert!(Ball::of_smul(abs(), 0u32, 0.0, 1.0).is_err());
    }

    #[test]
    fn scale_and_preimage() {
        let b = Ball::new(abs(), 0.0, 1.0);
        let s = b.scale(-3.0).unwrap();
        assert_eq!(s.radius(), 3.0);
        assert!(s.contains(&2.9));
        let w = b.preimage(-3.0, &2.9).unwrap();
        assert!(b.contains(&w));
        assert!(b.contains_scaled_set(-3.0, &2.9));
        assert!(!b.contains_scaled_set(-3.0, &3.1));
        assert!(b.contains_scaled_set(0.0, &0.0));
        assert!(!b.contains_scaled_set(0.0, &0.1));
        assert_eq!(b.scale(0.0).unwrap_err(), GeometryError::ZeroScalar);
    }

    #[test]
    fn absorbs_every_point() {
        let b = Ball::new(abs(), 0.0, 1.0);
        let a = b.absorbing_scalar(&100.0).unwrap();
        assert_eq!(a, 101.0);
        assert!(b.contains_scaled_set(a, &100.0));

        let off = Ball::new(abs(), 2.0, 1.0);
        assert!(matches!(
            off.absorbing_scalar(&1.0),
            Err(GeometryError::CenterOutside { .. })
        ));
    }

    #[test]
    fn centered_balls_are_balanced() {
        let b = Ball::new(abs(), 0.0, 1.0);
        assert!(b.is_balanced());
        for y in line_probes(-0.9, 0.9, 0.1) {
            for a in [-1.0, -0.5, 0.0, 0.25, 1.0] {
                assert!(b.contains(&y.smul(&a)));
            }
        }
        assert!(!Ball::new(abs(), 0.5, 1.0).is_balanced());
    }

    #[test]
    fn translation_and_convexity() {
        let b = Ball::new(abs(), 0.0, 1.0);
        let moved = b.add_point(&2.0);
        assert!(moved.contains(&2.5));
        assert!(!moved.contains(&0.5));

        let mid = b.convex_combination(&-0.9, &0.8, 0.25).unwrap();
        assert!(b.contains(&mid));
        assert!(b.convex_combination(&-0.9, &1.2, 0.5).is_none());
        assert!(b.convex_combination(&-0.9, &0.8, 1.5).is_none());

        let img = b.balanced_image(-0.5, &0.9).unwrap();
        assert!(b.contains(&img));
        assert!(b.balanced_image(2.0, &0.9).is_none());
    }

    #[test]
    fn neg_reflects_the_center() {
        let b = Ball::new(abs(), 1.0, 0.5);
        assert!(b.neg().contains(&-1.2));
        assert!(!b.neg().contains(&1.2));
    }
}
