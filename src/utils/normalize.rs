use crate::math::{Real, Vector};

/// Normalizes `v`, unless its norm is zero (or not a number) in which case `v` is returned unchanged.
///
/// Unlike `nalgebra`'s `try_normalize`, this never fails: a degenerate vector is simply kept as-is.
#[inline]
pub fn normalize_or_keep(v: Vector<Real>) -> Vector<Real> {
    let mag = v.norm();
    if mag > 0.0 {
        v / mag
    } else {
        v
    }
}
