use crate::math::*;

/// Computes the normal of a counter-clock-wise triangle.
///
/// Returns `None` if the triangle is degenerate.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 3]) -> Option<UnitVector<Real>> {
    let ab = *pts[1] - *pts[0];
    let ac = *pts[2] - *pts[0];
    let res = ab.cross(&ac);

    UnitVector::try_new(res, DEFAULT_EPSILON)
}

/// Computes the normal of a counter-clock-wise triangle, or the zero vector if it is degenerate.
///
/// A zero normal makes the face reject every point in containment tests.
#[inline]
pub fn face_normal_or_zero(pts: [&Point<Real>; 3]) -> Vector<Real> {
    ccw_face_normal(pts)
        .map(|n| n.into_inner())
        .unwrap_or_else(Vector::zeros)
}
