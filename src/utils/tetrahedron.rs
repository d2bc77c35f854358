use crate::math::{Point, Real};

/// The unsigned volume of the tetrahedron `(a, b, c, d)`.
#[inline]
pub fn tetrahedron_volume(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> Real {
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    ab.cross(&ac).dot(&ad).abs() / 6.0
}
