/// Geometry primitives for wireframe shapes
use nalgebra::Point3;

/// A vertex in object space. Never mutated once a shape is built.
pub type Vertex3D = Point3<f32>;

/// A line between two vertices, stored as indices into the vertex list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

impl Edge {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Same edge regardless of direction
    pub fn undirected(&self) -> (usize, usize) {
        (self.source.min(self.target), self.source.max(self.target))
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(source, target)
    }
}

/// Vertex and edge lists describing a wireframe shape.
///
/// Nothing here is validated; `WireframeProjector::new` checks the edge
/// indices when the shape is handed over for projection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wireframe {
    pub vertices: Vec<Vertex3D>,
    pub edges: Vec<Edge>,
}

impl Wireframe {
    pub fn new(vertices: Vec<Vertex3D>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// The canonical cube spanning -1..1 on every axis
    pub fn cube() -> Self {
        let vertices = vec![
            Vertex3D::new(-1.0, -1.0, -1.0),
            Vertex3D::new(1.0, -1.0, -1.0),
            Vertex3D::new(1.0, 1.0, -1.0),
            Vertex3D::new(-1.0, 1.0, -1.0),
            Vertex3D::new(-1.0, -1.0, 1.0),
            Vertex3D::new(1.0, -1.0, 1.0),
            Vertex3D::new(1.0, 1.0, 1.0),
            Vertex3D::new(-1.0, 1.0, 1.0),
        ];

        let edges = [
            (0, 1), (1, 2), (2, 3), (3, 0), // Back face
            (4, 5), (5, 6), (6, 7), (7, 4), // Front face
            (0, 4), (1, 5), (2, 6), (3, 7), // Connecting edges
        ]
        .into_iter()
        .map(Edge::from)
        .collect();

        Self { vertices, edges }
    }
}
