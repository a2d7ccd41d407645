//! Non-persistent geometric queries.
//!
//! * [`query::point_containment()`](crate::query::point_containment) tells whether a point is
//!   strictly inside of a convex segment, and how deep.
//! * [`query::contact_hull_hull()`](crate::query::contact_hull_hull) computes the deepest vertex
//!   penetration between two hulls placed in world-space.
//!
//! The functions exported by the `details` submodule are more specific versions of the ones
//! above, working on convex hulls or on already placed convex segments.

pub use self::contact::{contact_hull_hull, CollisionResult};
pub use self::point::{point_containment, PointContainment};

pub mod contact;
pub mod point;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::contact::{
        contact_convex_hull_convex_hull, contact_convex_segment_convex_segment,
    };
}
