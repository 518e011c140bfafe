//! Lighting system
//!
//! Light sources, their shader-facing records, and the default light.
//!
//! ```text
//! scene code ──set_*──▶ Light ──writes──▶ LightValues ──read / to_gpu──▶ shading stage
//! ```

pub mod context;
pub mod light;
pub mod registry;
pub mod values;

#[cfg(test)]
mod tests;

pub use context::{default_light, LightingContext};
pub use light::{Light, SharedLight};
pub use registry::{LightKey, LightRegistry, MAX_LIGHTS};
pub use values::{
    clamp_attenuation, GpuLight, LightType, LightValues, DEFAULT_ATTENUATION, DEFAULT_COLOR,
    MAX_ATTENUATION, MIN_ATTENUATION,
};
