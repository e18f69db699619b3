/// Geometry primitives for wireframe rendering
use nalgebra::Vector3;

use crate::error::{Error, Result};

/// A point (or direction) in mesh space.
///
/// Every operation returns a new value; nothing mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component by axis index: 0 = x, 1 = y, 2 = z.
    pub fn component(&self, axis: usize) -> Option<f64> {
        match axis {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.to_vector().dot(&other.to_vector())
    }

    pub fn cross(self, other: Self) -> Self {
        self.to_vector().cross(&other.to_vector()).into()
    }

    pub fn magnitude(self) -> f64 {
        self.to_vector().norm()
    }

    /// Unit-length copy; the zero vector normalizes to itself.
    pub fn normalize(self) -> Self {
        let length = self.magnitude();
        if length == 0.0 {
            Self::ORIGIN
        } else {
            self.scale(1.0 / length)
        }
    }

    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<Vector3<f64>> for Point3 {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for Vector3<f64> {
    fn from(p: Point3) -> Self {
        p.to_vector()
    }
}

impl std::fmt::Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A triangle referencing three vertices by 0-based index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub indices: [usize; 3],
}

impl Face {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { indices: [a, b, c] }
    }
}

/// Axis-aligned bounding box accumulated one point at a time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3,
    pub max: Point3,
}

impl Bounds {
    pub fn from_point(point: Point3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grow the box to contain `point`.
    pub fn include(&mut self, point: Point3) {
        self.min = Point3::new(
            self.min.x.min(point.x),
            self.min.y.min(point.y),
            self.min.z.min(point.z),
        );
        self.max = Point3::new(
            self.max.x.max(point.x),
            self.max.y.max(point.y),
            self.max.z.max(point.z),
        );
    }

    /// Per-axis `max - min`.
    pub fn extent(&self) -> Point3 {
        self.max.subtract(self.min)
    }

    pub fn center(&self) -> Point3 {
        self.min.add(self.max).scale(0.5)
    }

    /// Larger of the X and Y extents; Z plays no part in the XY projection.
    pub fn max_xy_extent(&self) -> f64 {
        let extent = self.extent();
        extent.x.max(extent.y)
    }
}

/// An indexed triangle mesh with running bounds
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Point3>,
    pub faces: Vec<Face>,
    bounds: Option<Bounds>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex and fold it into the bounds.
    pub fn add_vertex(&mut self, vertex: Point3) -> usize {
        match &mut self.bounds {
            Some(bounds) => bounds.include(vertex),
            None => self.bounds = Some(Bounds::from_point(vertex)),
        }
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Bounds of every vertex loaded so far, `None` while the mesh is empty.
    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    pub fn extent(&self) -> Option<Point3> {
        self.bounds.map(|b| b.extent())
    }

    pub fn face_vertices(&self, face: &Face) -> Option<[Point3; 3]> {
        let [a, b, c] = face.indices;
        Some([
            *self.vertices.get(a)?,
            *self.vertices.get(b)?,
            *self.vertices.get(c)?,
        ])
    }

    /// Unit normal of a face, `None` if an index is out of range.
    pub fn face_normal(&self, face: &Face) -> Option<Point3> {
        let [v0, v1, v2] = self.face_vertices(face)?;
        let edge1 = v1.subtract(v0);
        let edge2 = v2.subtract(v0);
        Some(edge1.cross(edge2).normalize())
    }

    /// Check that every face index addresses a loaded vertex.
    pub fn validate(&self) -> Result<()> {
        let count = self.vertices.len();
        for (n, face) in self.faces.iter().enumerate() {
            if let Some(&bad) = face.indices.iter().find(|&&i| i >= count) {
                return Err(Error::InvalidFace {
                    face: n,
                    index: bad,
                    vertex_count: count,
                });
            }
        }
        Ok(())
    }

    /// Axis-aligned cube centred on the origin, two triangles per side.
    pub fn cube(size: f64) -> Self {
        let half = size / 2.0;
        let mut mesh = Self::new();

        for &(x, y, z) in &[
            (-half, -half, -half),
            (half, -half, -half),
            (half, half, -half),
            (-half, half, -half),
            (-half, -half, half),
            (half, -half, half),
            (half, half, half),
            (-half, half, half),
        ] {
            mesh.add_vertex(Point3::new(x, y, z));
        }

        for &(a, b, c) in &[
            // Front
            (4, 5, 6),
            (4, 6, 7),
            // Back
            (0, 3, 2),
            (0, 2, 1),
            // Top
            (3, 7, 6),
            (3, 6, 2),
            // Bottom
            (0, 1, 5),
            (0, 5, 4),
            // Right
            (1, 2, 6),
            (1, 6, 5),
            // Left
            (0, 4, 7),
            (0, 7, 3),
        ] {
            mesh.add_face(Face::new(a, b, c));
        }

        mesh
    }
}
