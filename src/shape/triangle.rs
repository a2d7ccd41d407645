//! Definition of the triangle shape.

use crate::math::{Point, Real, Transform, UnitVector};
use crate::utils;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone, Default)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Reference to an array containing the three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [&Point<Real>; 3] {
        [&self.a, &self.b, &self.c]
    }

    /// The unit normal of this triangle, following the counter-clock-wise winding `a, b, c`.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        utils::ccw_face_normal(self.vertices())
    }

    /// Applies `m` to the vertices of this triangle.
    #[inline]
    pub fn transformed(&self, m: &Transform<Real>) -> Self {
        Triangle::new(
            m.transform_point(&self.a),
            m.transform_point(&self.b),
            m.transform_point(&self.c),
        )
    }
}
