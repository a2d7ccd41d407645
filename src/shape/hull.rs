use crate::math::{Real, Transform};
use crate::shape::{ConvexHull, ConvexSegment};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

/// The collision shape of a rigid body: an aggregation of convex hulls.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Hull {
    convex_hulls: Vec<ConvexHull>,
}

impl Hull {
    /// Creates a hull from its components.
    pub fn new(convex_hulls: Vec<ConvexHull>) -> Self {
        Hull { convex_hulls }
    }

    /// A hull made of a single segment placed at the body origin.
    pub fn from_segment(segment: Arc<ConvexSegment>) -> Self {
        Self::new(vec![ConvexHull::new(segment, Transform::identity())])
    }

    /// The components of this hull.
    #[inline]
    pub fn convex_hulls(&self) -> &[ConvexHull] {
        &self.convex_hulls
    }

    /// Adds a component to this hull.
    pub fn push(&mut self, convex_hull: ConvexHull) {
        self.convex_hulls.push(convex_hull);
    }

    /// Does this hull have no component?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.convex_hulls.is_empty()
    }

    /// The radius of the smallest origin-centered sphere containing every component.
    ///
    /// A convenient choice for the bounding radius of the body owning this hull.
    pub fn bounding_radius(&self) -> Real {
        self.convex_hulls
            .iter()
            .map(|h| h.bounding_radius())
            .fold(0.0, Real::max)
    }
}
