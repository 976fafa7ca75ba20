/// Orthographic projection of a rotated wireframe onto a 2D plane
use nalgebra::Point2;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::geometry::{Edge, Vertex3D, Wireframe};
use crate::transform::{RotationState, Transform};

/// A projected vertex in screen orientation (y grows downward)
pub type ProjectedPoint = Point2<f32>;

/// Axis-aligned bounds of a set of projected points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: ProjectedPoint,
    pub max: ProjectedPoint,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> ProjectedPoint {
        nalgebra::center(&self.min, &self.max)
    }
}

/// The 2D geometry produced for one frame. Built fresh on every call to
/// [`WireframeProjector::project`] and handed to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub points: Vec<ProjectedPoint>,
    pub edges: Vec<Edge>,
}

impl Projection {
    /// Bounding box of the points, or `None` for an empty shape
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.points.first()?;
        let bounds = self.points.iter().fold(
            Bounds {
                min: first,
                max: first,
            },
            |acc, p| Bounds {
                min: ProjectedPoint::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
                max: ProjectedPoint::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
            },
        );
        Some(bounds)
    }

    /// The two endpoints of every edge, in edge order
    pub fn segments(&self) -> impl Iterator<Item = (ProjectedPoint, ProjectedPoint)> + '_ {
        self.edges
            .iter()
            .map(|edge| (self.points[edge.source], self.points[edge.target]))
    }
}

/// Owns a static wireframe and projects it for any rotation.
///
/// Edge indices are checked once at construction, so `project` cannot fail.
#[derive(Debug, Clone)]
pub struct WireframeProjector {
    vertices: Vec<Vertex3D>,
    edges: Vec<Edge>,
}

impl WireframeProjector {
    pub fn new(vertices: Vec<Vertex3D>, edges: Vec<Edge>) -> Result<Self> {
        let vertex_count = vertices.len();
        for (i, edge) in edges.iter().enumerate() {
            for index in [edge.source, edge.target] {
                if index >= vertex_count {
                    warn!(edge = i, index, vertex_count, "rejecting wireframe");
                    return Err(Error::EdgeOutOfRange {
                        edge: i,
                        index,
                        vertex_count,
                    });
                }
            }
        }

        debug!(vertices = vertex_count, edges = edges.len(), "wireframe projector ready");
        Ok(Self { vertices, edges })
    }

    pub fn from_wireframe(wireframe: Wireframe) -> Result<Self> {
        Self::new(wireframe.vertices, wireframe.edges)
    }

    pub fn cube() -> Self {
        let cube = Wireframe::cube();
        Self {
            vertices: cube.vertices,
            edges: cube.edges,
        }
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Rotate every vertex, drop depth, scale and flip y.
    pub fn project(&self, rotation: RotationState, scale: f32) -> Projection {
        trace!(?rotation, scale, "projecting wireframe");
        let matrix = Transform::rotation_matrix(&rotation);

        let points = self
            .vertices
            .iter()
            .map(|vertex| {
                let rotated = matrix * vertex.coords;
                ProjectedPoint::new(rotated.x * scale, -rotated.y * scale)
            })
            .collect();

        Projection {
            points,
            edges: self.edges.clone(),
        }
    }
}
