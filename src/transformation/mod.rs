//! Conversion of external file formats into shapes.

pub use self::hull_file::{
    load_convex_segment, load_convex_segments, HullFileError, SEGMENTS_PER_FILE,
};

pub mod hull_file;
