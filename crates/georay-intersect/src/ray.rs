//! Ray representation and intersection results.

use georay_math::{first_non_finite, Point3, Vec3};

use crate::error::{IntersectError, Result};

/// A ray `P(t) = origin + t * direction` for `t >= 0`.
///
/// Unlike a rendering ray the direction is kept as given: `t` is measured
/// in multiples of `direction`, not in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin offset of the ray.
    pub origin: Point3,
    /// Direction of the ray, not normalized.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        Point3::new(
            self.origin.x + t * self.direction.x,
            self.origin.y + t * self.direction.y,
            self.origin.z + t * self.direction.z,
        )
    }

    /// Reject rays with an infinite or NaN component.
    pub fn check_finite(&self) -> Result<()> {
        if let Some((axis, value)) = first_non_finite(&self.direction) {
            return Err(IntersectError::NonFiniteInput {
                vector: "direction",
                axis,
                value,
            });
        }
        if let Some((axis, value)) = first_non_finite(&self.origin.coords) {
            return Err(IntersectError::NonFiniteInput {
                vector: "origin",
                axis,
                value,
            });
        }
        Ok(())
    }
}

/// Outcome of intersecting a ray with the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The ray meets the surface at `point`, parameter `t >= 0`.
    Hit {
        /// Selected ray parameter.
        t: f64,
        /// Intersection point in the input frame.
        point: Point3,
    },
    /// No real root, or the selected root lies behind the origin.
    Miss,
}

impl Intersection {
    /// The intersection point, if any.
    pub fn point(&self) -> Option<Point3> {
        match self {
            Intersection::Hit { point, .. } => Some(*point),
            Intersection::Miss => None,
        }
    }
}
