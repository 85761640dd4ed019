//! Output formatting for results and diagnostics.

use std::io::{self, Write};

use georay_intersect::{
    ellipsoid_quadratic, select_root, Ellipsoid, Intersection, Normalization, Ray,
};

/// Line printed when the ray misses the ellipsoid.
pub const NO_INTERSECTION: &str = "No intersection with the ellipsoid.";

/// Write the result: x, y, z on separate lines, or the miss message.
///
/// Floats use `{:?}`, the shortest representation that round-trips.
pub fn write_intersection<W: Write>(out: &mut W, intersection: &Intersection) -> io::Result<()> {
    match intersection.point() {
        Some(point) => {
            writeln!(out, "{:?}", point.x)?;
            writeln!(out, "{:?}", point.y)?;
            writeln!(out, "{:?}", point.z)
        }
        None => writeln!(out, "{NO_INTERSECTION}"),
    }
}

/// Write the intermediate quantities of the solve.
///
/// Stops after the scaled vectors if the quadratic cannot be formed; the
/// caller reports that error separately.
pub fn write_diagnostics<W: Write>(
    out: &mut W,
    ray: &Ray,
    ellipsoid: &Ellipsoid,
    normalization: Normalization,
) -> io::Result<()> {
    let d = ellipsoid.scale(&ray.direction, normalization);
    let c = ellipsoid.scale(&ray.origin.coords, normalization);
    writeln!(out, "normalization: {}", normalization_name(normalization))?;
    writeln!(out, "scaled direction: [{:e}, {:e}, {:e}]", d.x, d.y, d.z)?;
    writeln!(out, "scaled origin: [{:e}, {:e}, {:e}]", c.x, c.y, c.z)?;

    let Ok(q) = ellipsoid_quadratic(ray, ellipsoid, normalization) else {
        return Ok(());
    };
    writeln!(out, "a = {:e}, b = {:e}, c = {:e}", q.a, q.b, q.c)?;
    writeln!(out, "discriminant = {:e}", q.discriminant())?;
    match q.roots() {
        Some((t1, t2)) => {
            writeln!(out, "t1 = {:?}, t2 = {:?}", t1, t2)?;
            match select_root(t1, t2) {
                Some(t) => writeln!(out, "selected t = {:?}", t),
                None => writeln!(out, "selected t: none (behind origin)"),
            }
        }
        None => writeln!(out, "roots: none (negative discriminant)"),
    }
}

fn normalization_name(normalization: Normalization) -> &'static str {
    match normalization {
        Normalization::Literal => "literal",
        Normalization::Standard => "standard",
    }
}
