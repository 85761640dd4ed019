#![warn(missing_docs)]

//! Ray intersection with the Earth reference ellipsoid.
//!
//! Scales the ray into an ellipsoid-normalized frame, solves the resulting
//! quadratic in the ray parameter and reports the selected root as a point
//! in the caller's frame.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray with an unnormalized direction
//! - [`Intersection`] - Hit point or miss
//! - [`Ellipsoid`] - Earth radii and the [`Normalization`] scale
//! - [`intersect`] - Quadratic setup, root selection and the intersector
//!
//! # Example
//!
//! ```
//! use georay_intersect::{intersect_ellipsoid, Ellipsoid, Intersection, Normalization, Ray};
//! use georay_math::{Point3, Vec3};
//!
//! let ray = Ray::new(Point3::new(0.0, 0.0, 10_000.0), Vec3::new(0.0, 0.0, -1.0));
//! let hit = intersect_ellipsoid(&ray, &Ellipsoid::EARTH, Normalization::Standard).unwrap();
//!
//! match hit {
//!     Intersection::Hit { point, .. } => assert!((point.z - 6356.7523).abs() < 1e-6),
//!     Intersection::Miss => unreachable!(),
//! }
//! ```

mod ellipsoid;
mod error;
pub mod intersect;
mod ray;

pub use ellipsoid::{Ellipsoid, Normalization, R_EQUATORIAL, R_POLAR};
pub use error::{IntersectError, Result};
pub use intersect::{
    ellipsoid_quadratic, intersect_earth, intersect_ellipsoid, select_root, Quadratic,
};
pub use ray::{Intersection, Ray};
