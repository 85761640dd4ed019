//! Positional arguments to a ray.

use std::num::ParseFloatError;

use georay_intersect::Ray;
use georay_math::{Point3, Vec3};
use thiserror::Error;

/// Names of the positional arguments, in command-line order.
pub const COMPONENT_NAMES: [&str; 6] = ["d_l_x", "d_l_y", "d_l_z", "c_l_x", "c_l_y", "c_l_z"];

/// Errors turning positional arguments into a ray.
#[derive(Error, Debug)]
pub enum InputError {
    /// Not exactly six positional arguments.
    #[error("expected 6 positional arguments, got {0}")]
    WrongCount(usize),

    /// A positional argument is not a floating-point number.
    #[error("invalid value {value:?} for {name}")]
    InvalidNumber {
        /// Argument name.
        name: &'static str,
        /// Text as given.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
}

/// Parse the six components, checking the count before any value.
///
/// Surrounding whitespace is ignored.
pub fn parse_components(args: &[String]) -> Result<[f64; 6], InputError> {
    if args.len() != COMPONENT_NAMES.len() {
        return Err(InputError::WrongCount(args.len()));
    }

    let mut values = [0.0; 6];
    for ((slot, name), arg) in values.iter_mut().zip(COMPONENT_NAMES).zip(args) {
        *slot = arg
            .trim()
            .parse::<f64>()
            .map_err(|source| InputError::InvalidNumber {
                name,
                value: arg.clone(),
                source,
            })?;
    }
    Ok(values)
}

/// Build the ray `c + t * d` from `d_l_x d_l_y d_l_z c_l_x c_l_y c_l_z`.
pub fn parse_ray(args: &[String]) -> Result<Ray, InputError> {
    let [dx, dy, dz, cx, cy, cz] = parse_components(args)?;
    Ok(Ray::new(Point3::new(cx, cy, cz), Vec3::new(dx, dy, dz)))
}
