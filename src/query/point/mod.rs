//! Point inclusion queries.

pub use self::point_convex_segment::{point_containment, PointContainment};

mod point_convex_segment;
