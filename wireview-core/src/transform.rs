/// Rotation state and the composed rotation transform
use nalgebra::{Matrix3, Rotation3, Vector3};
use std::f32::consts::PI;

/// Rotation state around three axes (in radians)
///
/// Angles are taken as given; values outside one turn are fine since rotation
/// is periodic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Build from angles in degrees, as range sliders report them
    pub fn from_degrees(x: f32, y: f32, z: f32) -> Self {
        Self {
            x: x * PI / 180.0,
            y: y * PI / 180.0,
            z: z * PI / 180.0,
        }
    }

    /// Angles in degrees, x/y/z
    pub fn to_degrees(&self) -> [f32; 3] {
        [self.x.to_degrees(), self.y.to_degrees(), self.z.to_degrees()]
    }
}

/// Transform builder for wireframe rotation
pub struct Transform;

impl Transform {
    /// Create a rotation matrix from a rotation state.
    ///
    /// Rotations are composed X, then Y, then Z by post-multiplication,
    /// giving `Rx * Ry * Rz`. Applied to a point, Z acts first.
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix3<f32> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.x);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), rotation.y);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), rotation.z);

        (rx * ry * rz).into_inner()
    }
}
