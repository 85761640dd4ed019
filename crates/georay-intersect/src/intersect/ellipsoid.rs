//! Ray-ellipsoid intersection (quadratic in a normalized frame).

use georay_math::{Point3, Vec3};

use super::{select_root, Quadratic};
use crate::ellipsoid::{Ellipsoid, Normalization};
use crate::error::{IntersectError, Result};
use crate::{Intersection, Ray};

/// Build the intersection quadratic for `ray` against `ellipsoid`.
///
/// Fails on non-finite input, on coefficients that overflow, and on a
/// direction whose scaled length is zero (`a == 0`).
pub fn ellipsoid_quadratic(
    ray: &Ray,
    ellipsoid: &Ellipsoid,
    normalization: Normalization,
) -> Result<Quadratic> {
    ray.check_finite()?;

    let d = ellipsoid.scale(&ray.direction, normalization);
    let c = ellipsoid.scale(&ray.origin.coords, normalization);
    let q = Quadratic::unit_sphere(&d, &c);

    if !(q.a.is_finite() && q.b.is_finite() && q.c.is_finite() && q.discriminant().is_finite()) {
        return Err(overflow(&q));
    }
    if q.a == 0.0 {
        return Err(IntersectError::DegenerateDirection);
    }
    Ok(q)
}

/// Intersect a ray with an ellipsoid.
///
/// Returns the hit selected by [`select_root`], with the point computed from
/// the unscaled ray, or [`Intersection::Miss`] when the discriminant is
/// negative or the selected root lies behind the origin.
pub fn intersect_ellipsoid(
    ray: &Ray,
    ellipsoid: &Ellipsoid,
    normalization: Normalization,
) -> Result<Intersection> {
    let q = ellipsoid_quadratic(ray, ellipsoid, normalization)?;

    let Some((t1, t2)) = q.roots() else {
        return Ok(Intersection::Miss);
    };
    let Some(t) = select_root(t1, t2) else {
        return Ok(Intersection::Miss);
    };

    let point = ray.at(t);
    if !(t.is_finite() && point.coords.iter().all(|v| v.is_finite())) {
        return Err(overflow(&q));
    }
    Ok(Intersection::Hit { t, point })
}

/// Intersect the ray `origin + t * direction` with the Earth ellipsoid,
/// using the default normalization.
pub fn intersect_earth(direction: &Vec3, origin: &Point3) -> Result<Intersection> {
    intersect_ellipsoid(
        &Ray::new(*origin, *direction),
        &Ellipsoid::EARTH,
        Normalization::default(),
    )
}

fn overflow(q: &Quadratic) -> IntersectError {
    IntersectError::Overflow {
        a: q.a,
        b: q.b,
        c: q.c,
    }
}
