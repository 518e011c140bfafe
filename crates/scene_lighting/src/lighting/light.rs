//! Light sources
//!
//! A `Light` owns its `LightValues` record and the transform it is placed
//! with. Every setter writes straight through to the record, so whatever the
//! shading stage reads through `values()` is always the latest state.

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::foundation::math::{Quat, Transform, Vec3, Vec4};
use crate::lighting::values::{clamp_attenuation, LightType, LightValues};
use crate::scene::TransformComponent;

/// A light shared between the systems that configure and draw it
pub type SharedLight = Arc<RwLock<Light>>;

/// A light source in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    transform: TransformComponent,
    values: LightValues,
}

impl Default for Light {
    fn default() -> Self {
        Self::new(LightType::Point)
    }
}

impl Light {
    /// Create a white light of the given type at the origin
    pub fn new(light_type: LightType) -> Self {
        let mut light = Self {
            transform: TransformComponent::identity(),
            values: LightValues {
                light_type,
                ..LightValues::default()
            },
        };
        light.commit_position();
        light
    }

    /// Create a point light at `position`
    pub fn point(position: Vec3) -> Self {
        Self::new(LightType::Point).with_position(position)
    }

    /// Create a spot light at `position` shining along `direction`
    pub fn spot(position: Vec3, direction: Vec3) -> Self {
        Self::new(LightType::Spot).with_transform(TransformComponent::looking_along(position, direction))
    }

    /// Create a sky light; `direction` is stored as its position
    pub fn sky(direction: Vec3) -> Self {
        Self::new(LightType::Sky).with_position(direction)
    }

    /// Builder pattern: Set color
    pub fn with_color(mut self, color: Vec4) -> Self {
        self.set_color(color);
        self
    }

    /// Builder pattern: Set attenuation (clamped)
    pub fn with_attenuation(mut self, attenuation: f32) -> Self {
        self.set_attenuation(attenuation);
        self
    }

    /// Builder pattern: Set local position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.set_position(position);
        self
    }

    /// Builder pattern: Replace the transform component
    pub fn with_transform(mut self, transform: TransformComponent) -> Self {
        self.set_transform(transform);
        self
    }

    /// Wrap the light for sharing across systems
    pub fn into_shared(self) -> SharedLight {
        Arc::new(RwLock::new(self))
    }

    /// The light type
    pub fn light_type(&self) -> LightType {
        self.values.light_type
    }

    /// Change the light type
    ///
    /// Color and attenuation are kept. The position `w` flag follows the
    /// new type.
    pub fn set_light_type(&mut self, light_type: LightType) {
        self.values.light_type = light_type;
        self.commit_position();
    }

    /// The light color (RGB + intensity)
    pub fn color(&self) -> Vec4 {
        self.values.color
    }

    /// Set the light color
    ///
    /// Stored as given. Components above 1.0 are valid HDR intensities.
    pub fn set_color(&mut self, color: Vec4) {
        self.values.color = color;
    }

    /// The attenuation factor
    pub fn attenuation(&self) -> f32 {
        self.values.attenuation
    }

    /// Set the attenuation factor
    ///
    /// The stored value is clamped into `[MIN_ATTENUATION, MAX_ATTENUATION]`;
    /// NaN resets to `DEFAULT_ATTENUATION`.
    pub fn set_attenuation(&mut self, attenuation: f32) {
        let stored = clamp_attenuation(attenuation);
        if stored != attenuation {
            debug!("Light attenuation {} out of range, stored {}", attenuation, stored);
        }
        self.values.attenuation = stored;
    }

    /// Local position
    pub fn position(&self) -> Vec3 {
        self.transform.position()
    }

    /// Move the light
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.set_position(position);
        self.commit_position();
    }

    /// Local rotation
    pub fn rotation(&self) -> Quat {
        self.transform.rotation()
    }

    /// Rotate the light
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.transform.set_rotation(rotation);
        self.commit_position();
    }

    /// The transform component the light is placed with
    pub fn transform(&self) -> &TransformComponent {
        &self.transform
    }

    /// Replace the transform component, parent included
    pub fn set_transform(&mut self, transform: TransformComponent) {
        self.transform = transform;
        self.commit_position();
    }

    /// Push the world transform of the node this light hangs under
    pub fn set_parent_transform(&mut self, parent: Option<Transform>) {
        self.transform.set_parent(parent);
        self.commit_position();
    }

    /// World-space position
    pub fn world_position(&self) -> Vec3 {
        self.transform.world_position()
    }

    /// World-space direction the light shines in
    ///
    /// Sky lights use their (normalized) position as the direction, falling
    /// back to the transform's forward axis when the position is zero. Every
    /// other type reports the transform's forward axis.
    pub fn direction(&self) -> Vec3 {
        if self.values.light_type == LightType::Sky {
            let position = self.world_position();
            if position.magnitude_squared() > 0.0 {
                return position.normalize();
            }
        }
        self.transform.world_forward()
    }

    /// The shader-facing record
    ///
    /// Reflects every setter call that returned before this borrow was taken.
    pub fn values(&self) -> &LightValues {
        &self.values
    }

    fn commit_position(&mut self) {
        let world = self.transform.world_position();
        self.values.position = Vec4::new(world.x, world.y, world.z, self.values.light_type.position_w());
    }
}
