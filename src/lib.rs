/*!
rigid3d
========

**rigid3d** is a small 3-dimensional rigid-body library written with the rust
programming language. It detects contacts between convex-hull shaped bodies,
resolves them with elastic impulses, and advances bodies with a position-Verlet
integrator. A bounding volume hierarchy keeps the broad-phase cheap.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]
#![doc(html_root_url = "http://docs.rs/rigid3d/0.1.0")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod dynamics;
pub mod partitioning;
pub mod particles;
pub mod pipeline;
pub mod query;
pub mod shape;
#[cfg(feature = "std")]
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Affine3, Isometry3, Matrix3, Point3, Rotation3, Translation3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The angular vector type (axis-angle: the direction is the axis, the norm the angle).
    pub type AngVector<N> = Vector3<N>;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The rigid transformation type.
    pub use Isometry3 as Isometry;

    /// The rotation matrix type.
    pub use Rotation3 as Rotation;

    /// The translation type.
    pub use Translation3 as Translation;

    /// The general affine transformation type used to place convex segments.
    pub use Affine3 as Transform;
}
