//! Transform component composed into scene objects
//!
//! Holds a local TRS transform plus the world transform of whatever the
//! object is parented to. The scene graph itself lives outside this crate;
//! it pushes parent changes in through `set_parent`.

use crate::foundation::math::{Quat, Transform as MathTransform, Vec3, FORWARD};

/// Local transform plus cached parent world transform
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformComponent {
    local: MathTransform,
    parent: Option<MathTransform>,
}

impl TransformComponent {
    /// Create identity transform with no parent
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create from position only
    pub fn from_position(position: Vec3) -> Self {
        Self {
            local: MathTransform::from_position(position),
            parent: None,
        }
    }

    /// Create from position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            local: MathTransform::from_position_rotation(position, rotation),
            parent: None,
        }
    }

    /// Create a transform whose -Z axis points along `direction`
    pub fn looking_along(position: Vec3, direction: Vec3) -> Self {
        Self::from_position_rotation(position, rotation_towards(direction))
    }

    /// Local transform
    pub fn local(&self) -> &MathTransform {
        &self.local
    }

    /// Replace the local transform
    pub fn set_local(&mut self, local: MathTransform) {
        self.local = local;
    }

    /// Local position
    pub fn position(&self) -> Vec3 {
        self.local.position
    }

    /// Set the local position
    pub fn set_position(&mut self, position: Vec3) {
        self.local.position = position;
    }

    /// Local rotation
    pub fn rotation(&self) -> Quat {
        self.local.rotation
    }

    /// Set the local rotation
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.local.rotation = rotation;
    }

    /// Local scale
    pub fn scale(&self) -> Vec3 {
        self.local.scale
    }

    /// Set the local scale
    pub fn set_scale(&mut self, scale: Vec3) {
        self.local.scale = scale;
    }

    /// Parent world transform, if parented
    pub fn parent(&self) -> Option<&MathTransform> {
        self.parent.as_ref()
    }

    /// Attach to (or detach from) a parent world transform
    pub fn set_parent(&mut self, parent: Option<MathTransform>) {
        self.parent = parent;
    }

    /// World transform: parent combined with local
    pub fn world(&self) -> MathTransform {
        match &self.parent {
            Some(parent) => parent.combine(&self.local),
            None => self.local,
        }
    }

    /// World-space position
    pub fn world_position(&self) -> Vec3 {
        self.world().position
    }

    /// World-space forward direction (normalized)
    pub fn world_forward(&self) -> Vec3 {
        self.world().forward().normalize()
    }
}

/// Rotation that turns the default forward axis (-Z) onto `direction`
///
/// Returns identity for a zero-length direction.
pub fn rotation_towards(direction: Vec3) -> Quat {
    if direction.magnitude_squared() < 1e-12 {
        return Quat::identity();
    }
    let direction = direction.normalize();

    if (direction + FORWARD).magnitude() < 1e-6 {
        // Opposite of forward: rotation_between is undefined, turn around Y
        Quat::from_axis_angle(&Vec3::y_axis(), std::f32::consts::PI)
    } else {
        Quat::rotation_between(&FORWARD, &direction).unwrap_or_else(Quat::identity)
    }
}
