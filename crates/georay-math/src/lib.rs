#![warn(missing_docs)]

//! Math types for georay.
//!
//! Thin wrappers around nalgebra providing the point and vector types
//! used for Earth-centred Cartesian coordinates (kilometres).

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Returns the first non-finite component of `v` as `(axis, value)`.
///
/// Axes are reported as `'x'`, `'y'` or `'z'`.
pub fn first_non_finite(v: &Vec3) -> Option<(char, f64)> {
    ['x', 'y', 'z']
        .into_iter()
        .zip(v.iter().copied())
        .find(|(_, value)| !value.is_finite())
}
