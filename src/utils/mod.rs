//! Various unsorted geometrical and numerical operators.

pub use self::ccw_face_normal::{ccw_face_normal, face_normal_or_zero};
pub use self::float_eq::{float_eq, FLOAT_EQ_EPSILON};
pub use self::gram_schmidt::gram_schmidt;

mod ccw_face_normal;
mod float_eq;
mod gram_schmidt;
