//! The Earth reference ellipsoid and its normalizing scale.

use georay_math::{Point3, Vec3};

/// Earth's equatorial radius in km.
pub const R_EQUATORIAL: f64 = 6378.137;

/// Earth's polar radius in km.
pub const R_POLAR: f64 = 6356.7523;

/// How ray vectors are scaled before forming the quadratic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Divide x, y by `R_EQUATORIAL²` and z by `R_POLAR²`.
    ///
    /// Squaring the scaled vectors then applies the radii twice, so the
    /// surface actually solved for has radii `R²`. Output matches the
    /// reference tool bit for bit.
    #[default]
    Literal,
    /// Divide x, y by `R_EQUATORIAL` and z by `R_POLAR`.
    ///
    /// The textbook ray-ellipsoid quadratic; hits lie on the ellipsoid.
    Standard,
}

/// A biaxial (oblate) ellipsoid centred at the origin, minor axis along z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Radius along x and y.
    pub equatorial_radius: f64,
    /// Radius along z.
    pub polar_radius: f64,
}

impl Ellipsoid {
    /// WGS-like Earth model, radii in km.
    pub const EARTH: Self = Self {
        equatorial_radius: R_EQUATORIAL,
        polar_radius: R_POLAR,
    };

    /// Per-axis divisors applied to ray vectors under `normalization`.
    pub fn divisors(&self, normalization: Normalization) -> Vec3 {
        let (eq, polar) = match normalization {
            Normalization::Literal => (
                self.equatorial_radius * self.equatorial_radius,
                self.polar_radius * self.polar_radius,
            ),
            Normalization::Standard => (self.equatorial_radius, self.polar_radius),
        };
        Vec3::new(eq, eq, polar)
    }

    /// Scale `v` component-wise into the normalized frame.
    ///
    /// Divides, so a component equal to its divisor maps to exactly 1.
    pub fn scale(&self, v: &Vec3, normalization: Normalization) -> Vec3 {
        v.component_div(&self.divisors(normalization))
    }

    /// Implicit surface function `(x/a)² + (y/a)² + (z/b)² - 1`.
    ///
    /// Zero on the ellipsoid, negative inside, positive outside.
    pub fn implicit(&self, p: &Point3) -> f64 {
        let x = p.x / self.equatorial_radius;
        let y = p.y / self.equatorial_radius;
        let z = p.z / self.polar_radius;
        x * x + y * y + z * z - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_earth_constants() {
        assert_eq!(Ellipsoid::EARTH.equatorial_radius, 6378.137);
        assert_eq!(Ellipsoid::EARTH.polar_radius, 6356.7523);
    }

    #[test]
    fn test_scale_literal() {
        let e = Ellipsoid::EARTH;
        let s = e.scale(&Vec3::new(R_EQUATORIAL, 0.0, R_POLAR), Normalization::Literal);
        assert_relative_eq!(s.x, 1.0 / R_EQUATORIAL, max_relative = 1e-15);
        assert_eq!(s.y, 0.0);
        assert_relative_eq!(s.z, 1.0 / R_POLAR, max_relative = 1e-15);
    }

    #[test]
    fn test_scale_standard() {
        let e = Ellipsoid::EARTH;
        let s = e.scale(&Vec3::new(R_EQUATORIAL, -R_EQUATORIAL, R_POLAR), Normalization::Standard);
        assert_eq!(s, Vec3::new(1.0, -1.0, 1.0));
    }

    #[test]
    fn test_scale_surface_point_is_exact() {
        let e = Ellipsoid::EARTH;
        let a2 = R_EQUATORIAL * R_EQUATORIAL;
        let s = e.scale(&Vec3::new(a2, 0.0, 0.0), Normalization::Literal);
        assert_eq!(s.x, 1.0);
    }

    #[test]
    fn test_implicit_sign() {
        let e = Ellipsoid::EARTH;
        assert_eq!(e.implicit(&Point3::new(0.0, 0.0, R_POLAR)), 0.0);
        assert_eq!(e.implicit(&Point3::new(R_EQUATORIAL, 0.0, 0.0)), 0.0);
        assert!(e.implicit(&Point3::origin()) < 0.0);
        assert!(e.implicit(&Point3::new(0.0, 0.0, 10_000.0)) > 0.0);
    }

    #[test]
    fn test_default_normalization_is_literal() {
        assert_eq!(Normalization::default(), Normalization::Literal);
    }
}
