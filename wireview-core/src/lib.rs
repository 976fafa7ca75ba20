/// Wireview Core Library - Shared wireframe projection logic
///
/// This library provides the stateless core of the rotating wireframe viewer:
/// shape definitions, rotation transforms, orthographic projection, and the
/// contracts renderers and input sources implement.

pub mod error;
pub mod geometry;
pub mod obj;
pub mod projector;
pub mod render;
pub mod transform;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::{Edge, Vertex3D, Wireframe};
pub use projector::{Bounds, ProjectedPoint, Projection, WireframeProjector};
pub use render::{render_frame, InputSource, Renderer};
pub use transform::{RotationState, Transform};
