use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Transform, Vector};
use crate::query::point::{point_containment, PointContainment};
use crate::shape::Triangle;
use crate::utils;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

/// Error raised while building a convex segment.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvexSegmentError {
    /// A face references a vertex that does not exist.
    #[error("face {face} references the vertex {index} but the segment only has {vertex_count} vertices")]
    FaceIndexOutOfBounds {
        /// The offending face.
        face: usize,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices of the segment.
        vertex_count: usize,
    },
}

/// A closed convex triangle mesh with outward-facing normals.
///
/// Nothing checks that the input actually is convex, closed, or consistently oriented: the
/// containment test assumes it. Face normals are computed once at construction. The face list
/// is shared between a segment and its transformed copies.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexSegment {
    vertices: Vec<Point<Real>>,
    faces: Arc<[[u32; 3]]>,
    normals: Vec<Vector<Real>>,
}

impl ConvexSegment {
    /// Creates a convex segment from its vertices and its counter-clock-wise faces.
    ///
    /// Face indices start at zero.
    pub fn new(
        vertices: Vec<Point<Real>>,
        faces: Vec<[u32; 3]>,
    ) -> Result<Self, ConvexSegmentError> {
        for (face, idx) in faces.iter().enumerate() {
            if let Some(index) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(ConvexSegmentError::FaceIndexOutOfBounds {
                    face,
                    index: *index,
                    vertex_count: vertices.len(),
                });
            }
        }

        Ok(Self::with_shared_faces(vertices, faces.into()))
    }

    // Indices must already be validated against `vertices`.
    fn with_shared_faces(vertices: Vec<Point<Real>>, faces: Arc<[[u32; 3]]>) -> Self {
        let normals = faces
            .iter()
            .map(|idx| {
                utils::face_normal_or_zero([
                    &vertices[idx[0] as usize],
                    &vertices[idx[1] as usize],
                    &vertices[idx[2] as usize],
                ])
            })
            .collect();

        ConvexSegment {
            vertices,
            faces,
            normals,
        }
    }

    /// A box centered at the origin with the given half extents.
    pub fn cuboid(half_extents: Vector<Real>) -> Self {
        let (x, y, z) = (half_extents.x, half_extents.y, half_extents.z);
        let vertices = vec![
            Point::new(-x, -y, -z),
            Point::new(x, -y, -z),
            Point::new(x, y, -z),
            Point::new(-x, y, -z),
            Point::new(-x, -y, z),
            Point::new(x, -y, z),
            Point::new(x, y, z),
            Point::new(-x, y, z),
        ];
        let faces = [
            [0, 2, 1],
            [0, 3, 2],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [3, 6, 2],
            [3, 7, 6],
            [0, 4, 7],
            [0, 7, 3],
            [1, 2, 6],
            [1, 6, 5],
        ];

        Self::with_shared_faces(vertices, Arc::new(faces))
    }

    /// The vertices of this segment.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The faces of this segment, as triplets of vertex indices.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// The unit normal of each face, in the same order as [`Self::faces`].
    ///
    /// Degenerate faces have a zero normal.
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The number of faces of this segment.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// The `i`-th face of this segment.
    #[inline]
    pub fn triangle(&self, i: usize) -> Triangle {
        let idx = self.faces[i];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the faces of this segment.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.num_faces()).map(move |i| self.triangle(i))
    }

    /// Applies `m` to every vertex of this segment and recomputes the face normals.
    ///
    /// The face list is shared with `self`.
    pub fn transformed(&self, m: &Transform<Real>) -> Self {
        let vertices = self.vertices.iter().map(|v| m.transform_point(v)).collect();
        Self::with_shared_faces(vertices, self.faces.clone())
    }

    /// Tests whether `point` lies strictly behind every face of this segment.
    #[inline]
    pub fn point_containment(&self, point: &Point<Real>) -> PointContainment {
        point_containment(self, point)
    }

    /// Is `point` strictly inside of this segment?
    #[inline]
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        self.point_containment(point).is_inside
    }

    /// The largest distance between the origin and a vertex of this segment.
    pub fn local_bounding_radius(&self) -> Real {
        self.vertices
            .iter()
            .map(|v| v.coords.norm())
            .fold(0.0, Real::max)
    }

    /// The Aabb of this segment, in its local frame.
    pub fn local_aabb(&self) -> Aabb {
        let mut aabb = Aabb::new_invalid();
        for v in &self.vertices {
            aabb.mins = aabb.mins.inf(v);
            aabb.maxs = aabb.maxs.sup(v);
        }
        aabb
    }
}
