//! Scene-owned light collection
//!
//! Lights created by a scene live here and are dropped with it. The shading
//! stage asks the registry for the frame's packed light list; a scene that
//! registered nothing is lit by the context's default light.

use log::warn;
use slotmap::{new_key_type, SlotMap};

use crate::lighting::context::LightingContext;
use crate::lighting::light::{Light, SharedLight};
use crate::lighting::values::{GpuLight, LightValues};

/// Upper bound on lights packed for one frame
pub const MAX_LIGHTS: usize = 16;

new_key_type! {
    /// Handle to a light in a `LightRegistry`
    pub struct LightKey;
}

/// Lights owned by a scene
#[derive(Debug, Default)]
pub struct LightRegistry {
    lights: SlotMap<LightKey, SharedLight>,
}

impl LightRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a light
    pub fn insert(&mut self, light: Light) -> LightKey {
        self.lights.insert(light.into_shared())
    }

    /// Register a light that other systems also hold
    pub fn insert_shared(&mut self, light: SharedLight) -> LightKey {
        self.lights.insert(light)
    }

    /// Remove a light; the light drops once no other holder remains
    pub fn remove(&mut self, key: LightKey) -> Option<SharedLight> {
        self.lights.remove(key)
    }

    /// Look up a light
    pub fn get(&self, key: LightKey) -> Option<&SharedLight> {
        self.lights.get(key)
    }

    /// Whether `key` still refers to a registered light
    pub fn contains(&self, key: LightKey) -> bool {
        self.lights.contains_key(key)
    }

    /// Number of registered lights
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Whether no lights are registered
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Drop every registered light; the default light is not affected
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    /// Iterate registered lights
    pub fn iter(&self) -> impl Iterator<Item = (LightKey, &SharedLight)> {
        self.lights.iter()
    }

    /// Snapshot of every registered light's record
    pub fn values(&self) -> Vec<LightValues> {
        self.lights.values().map(|light| *light.read().values()).collect()
    }

    /// Packed light list for this frame
    ///
    /// Falls back to the context's default light when nothing is registered.
    /// At most `context.config().max_lights` (capped at [`MAX_LIGHTS`]) are
    /// packed.
    pub fn gather(&self, context: &LightingContext) -> Vec<GpuLight> {
        if self.lights.is_empty() {
            return vec![context.default_light().read().values().to_gpu()];
        }

        let limit = context.config().max_lights.clamp(1, MAX_LIGHTS);
        if self.lights.len() > limit {
            warn!(
                "{} lights registered, packing only the first {}",
                self.lights.len(),
                limit
            );
        }

        self.lights
            .values()
            .take(limit)
            .map(|light| light.read().values().to_gpu())
            .collect()
    }
}
