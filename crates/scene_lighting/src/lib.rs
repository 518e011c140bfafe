//! # Scene Lighting
//!
//! Light sources and their shader-facing parameters for a real-time 3D
//! renderer.
//!
//! ## Features
//!
//! - **Light records**: fixed-layout `LightValues` kept current by every setter
//! - **GPU packing**: `Pod` light data ready for a uniform buffer
//! - **Default light**: one lazily created sky light per `LightingContext`
//! - **Scene registry**: generational handles for scene-owned lights
//! - **Configuration**: TOML/RON lighting settings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_lighting::prelude::*;
//!
//! let context = LightingContext::new(LightingConfig::default());
//! let mut registry = LightRegistry::new();
//!
//! registry.insert(
//!     Light::point(Vec3::new(0.0, 3.0, 0.0))
//!         .with_color(Vec4::new(1.0, 0.9, 0.7, 1.0))
//!         .with_attenuation(8.0),
//! );
//!
//! let packed = registry.gather(&context);
//! let bytes: &[u8] = bytemuck::cast_slice(&packed);
//! # let _ = bytes;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core modules
pub mod core;
pub mod config;
pub mod foundation;

pub mod lighting;
pub mod scene;

pub use lighting::default_light;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        core::config::{Config, ConfigError, LightSettings, LightingConfig},
        foundation::math::{Quat, Transform, Vec3, Vec4},
        lighting::{
            default_light, GpuLight, Light, LightKey, LightRegistry, LightType, LightValues,
            LightingContext, SharedLight,
        },
        scene::TransformComponent,
    };
}
