use crate::math::{Matrix, Point, Real, Transform};
use crate::shape::ConvexSegment;
use alloc::sync::Arc;

/// A convex segment placed in the local frame of its parent hull.
///
/// The segment geometry is shared: several hulls (and several bodies) may point to the same
/// segment with different placements.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexHull {
    segment: Arc<ConvexSegment>,
    transform: Transform<Real>,
}

impl ConvexHull {
    /// Places `segment` with an arbitrary affine transform.
    pub fn new(segment: Arc<ConvexSegment>, transform: Transform<Real>) -> Self {
        ConvexHull { segment, transform }
    }

    /// Places `segment` by applying `orientation` first, then translating by `position`.
    pub fn from_position_orientation(
        segment: Arc<ConvexSegment>,
        position: &Point<Real>,
        orientation: &Matrix<Real>,
    ) -> Self {
        let homogeneous = orientation
            .to_homogeneous()
            .append_translation(&position.coords);
        Self::new(segment, Transform::from_matrix_unchecked(homogeneous))
    }

    /// The segment placed by this hull.
    #[inline]
    pub fn segment(&self) -> &Arc<ConvexSegment> {
        &self.segment
    }

    /// The transform from the segment's frame to the parent frame.
    #[inline]
    pub fn transform(&self) -> &Transform<Real> {
        &self.transform
    }

    /// The segment expressed in world-space, given the parent-to-world transform.
    pub fn world_segment(&self, parent_pose: &Transform<Real>) -> ConvexSegment {
        self.segment.transformed(&(parent_pose * self.transform))
    }

    /// The largest distance between the parent frame origin and a vertex of this hull.
    pub fn bounding_radius(&self) -> Real {
        self.segment
            .vertices()
            .iter()
            .map(|v| self.transform.transform_point(v).coords.norm())
            .fold(0.0, Real::max)
    }
}
