//! Error types for ray-ellipsoid intersection.

use thiserror::Error;

/// Inputs for which the intersection is undefined.
///
/// A ray that simply misses the ellipsoid is not an error; see
/// [`Intersection::Miss`](crate::Intersection::Miss).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum IntersectError {
    /// The scaled direction has zero length, so the quadratic degenerates.
    #[error("degenerate ray direction: scaled direction has zero length")]
    DegenerateDirection,

    /// An input component is infinite or NaN.
    #[error("non-finite {vector} component {axis}: {value}")]
    NonFiniteInput {
        /// Which input vector (`"direction"` or `"origin"`).
        vector: &'static str,
        /// Axis of the offending component.
        axis: char,
        /// The offending value.
        value: f64,
    },

    /// The quadratic coefficients overflowed `f64`.
    #[error("quadratic coefficients overflow (a={a:e}, b={b:e}, c={c:e})")]
    Overflow {
        /// Quadratic coefficient.
        a: f64,
        /// Linear coefficient.
        b: f64,
        /// Constant coefficient.
        c: f64,
    },
}

/// Result type for intersection operations.
pub type Result<T> = std::result::Result<T, IntersectError>;
