//! Quadratic setup and root selection shared by the intersectors.

mod ellipsoid;

pub use ellipsoid::{ellipsoid_quadratic, intersect_earth, intersect_ellipsoid};

use georay_math::Vec3;

/// Coefficients of `a·t² + b·t + c = 0` in the ray parameter `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    /// Coefficient of `t²`.
    pub a: f64,
    /// Coefficient of `t`.
    pub b: f64,
    /// Constant term.
    pub c: f64,
}

impl Quadratic {
    /// Quadratic for `|origin + t * direction|² = 1` in a normalized frame.
    ///
    /// Terms are summed x, y, z in order so results are reproducible
    /// across platforms.
    pub fn unit_sphere(direction: &Vec3, origin: &Vec3) -> Self {
        let (d, o) = (direction, origin);
        Self {
            a: d.x * d.x + d.y * d.y + d.z * d.z,
            b: 2.0 * (d.x * o.x + d.y * o.y + d.z * o.z),
            c: o.x * o.x + o.y * o.y + o.z * o.z - 1.0,
        }
    }

    /// `b² − 4ac`.
    #[inline]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Both roots `(t1, t2)` with `t1 = (−b − √Δ)/2a`, or `None` if `Δ < 0`.
    ///
    /// `t1 <= t2` whenever `a > 0`.
    pub fn roots(&self) -> Option<(f64, f64)> {
        let discriminant = self.discriminant();
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        let t1 = (-self.b - sqrt_disc) / (2.0 * self.a);
        let t2 = (-self.b + sqrt_disc) / (2.0 * self.a);
        Some((t1, t2))
    }
}

/// Pick the ray parameter reported as the intersection.
///
/// `t1` wins only if strictly positive, otherwise `t2` is taken. A
/// negative result means the surface is behind the ray.
pub fn select_root(t1: f64, t2: f64) -> Option<f64> {
    let t = if t1 > 0.0 { t1 } else { t2 };
    if t < 0.0 {
        None
    } else {
        Some(t)
    }
}
