//! Math utilities and types
//!
//! Thin aliases over nalgebra plus the TRS transform lights are placed with.

pub use nalgebra::{Matrix4, Quaternion, Unit, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Forward axis of an unrotated object (-Z, right-handed Y-up)
pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }

    /// Direction the transform faces in its parent space
    pub fn forward(&self) -> Vec3 {
        self.rotation * FORWARD
    }

    /// Combine this transform (parent) with another (child)
    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            position: self.position + self.rotation * (self.scale.component_mul(&other.position)),
            rotation: self.rotation * other.rotation,
            scale: self.scale.component_mul(&other.scale),
        }
    }
}

/// Math utility functions
pub mod utils {
    /// Clamp a value between min and max
    ///
    /// NaN passes through unchanged; callers that cannot store NaN must
    /// check for it first.
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_forward_follows_rotation() {
        let transform = Transform::from_position_rotation(
            Vec3::zeros(),
            Quat::from_axis_angle(&Vec3::y_axis(), std::f32::consts::FRAC_PI_2),
        );

        // -Z turned 90 degrees around +Y points down -X
        assert_relative_eq!(transform.forward(), Vec3::new(-1.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_combine_applies_parent_rotation_and_offset() {
        let parent = Transform::from_position_rotation(
            Vec3::new(1.0, 0.0, 0.0),
            Quat::from_axis_angle(&Vec3::y_axis(), std::f32::consts::FRAC_PI_2),
        );
        let child = Transform::from_position(Vec3::new(0.0, 0.0, 1.0));

        let combined = parent.combine(&child);

        assert_relative_eq!(combined.position, Vec3::new(2.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_transform_point_matches_combine() {
        let transform = Transform {
            position: Vec3::new(0.5, -2.0, 3.0),
            rotation: Quat::from_axis_angle(&Vec3::x_axis(), 0.3),
            scale: Vec3::new(2.0, 2.0, 2.0),
        };
        let local = Vec3::new(1.0, 1.0, 0.0);

        let via_matrix = transform.transform_point(Point3::from(local));
        let via_combine = transform.combine(&Transform::from_position(local));

        assert_relative_eq!(via_matrix.coords, via_combine.position, epsilon = EPSILON);
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(utils::clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(utils::clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(utils::clamp(0.5, 0.0, 1.0), 0.5);
        assert!(utils::clamp(f32::NAN, 0.0, 1.0).is_nan());
    }
}
