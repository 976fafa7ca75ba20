/// Contracts for the collaborators around the projector
use crate::projector::{Projection, WireframeProjector};
use crate::transform::RotationState;

/// Draws projected geometry onto a surface owned by the caller.
///
/// Implementations keep no per-frame state. Each call replaces whatever the
/// surface showed before: clear, one line per edge, one marker per point,
/// centred on the surface.
pub trait Renderer<S: ?Sized> {
    type Error;

    fn render(&self, surface: &mut S, projection: &Projection) -> Result<(), Self::Error>;
}

/// Supplies the current rotation whenever asked
pub trait InputSource {
    type Error;

    fn rotation(&self) -> Result<RotationState, Self::Error>;
}

/// Project for `rotation` and hand the result straight to `renderer`.
///
/// Callers run this on every input change and every surface resize.
pub fn render_frame<S, R>(
    projector: &WireframeProjector,
    renderer: &R,
    surface: &mut S,
    rotation: RotationState,
    scale: f32,
) -> Result<(), R::Error>
where
    S: ?Sized,
    R: Renderer<S>,
{
    let projection = projector.project(rotation, scale);
    renderer.render(surface, &projection)
}
