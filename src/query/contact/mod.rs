//! Implementation details of the `contact_hull_hull` function.

pub use self::collision_result::CollisionResult;
pub use self::contact_convex_hull_convex_hull::{
    contact_convex_hull_convex_hull, contact_convex_segment_convex_segment,
};
pub use self::contact_hull_hull::contact_hull_hull;

mod collision_result;
mod contact_convex_hull_convex_hull;
mod contact_hull_hull;
