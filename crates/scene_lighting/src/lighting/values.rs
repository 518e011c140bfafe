//! Shader-facing light records
//!
//! `LightValues` is the fixed-layout snapshot a `Light` keeps up to date for
//! the shading stage. `GpuLight` is its `Pod` twin for uniform buffer upload.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::foundation::math::{utils, Vec4};

/// Smallest attenuation factor a light will store
pub const MIN_ATTENUATION: f32 = 0.001;

/// Largest attenuation factor a light will store
pub const MAX_ATTENUATION: f32 = 1000.0;

/// Attenuation used for new lights and in place of NaN
pub const DEFAULT_ATTENUATION: f32 = 1.0;

/// Opaque white
pub const DEFAULT_COLOR: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);

/// Emission behavior of a light
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LightType {
    /// Omnidirectional light falling off with distance from its position
    #[default]
    Point = 0,
    /// Cone of light from a position along the owning transform's forward axis
    Spot = 1,
    /// Position-independent directional light used as the global/ambient proxy
    Sky = 2,
}

impl LightType {
    /// Discriminant as uploaded to shaders
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Homogeneous `w` written into the light position
    ///
    /// 1.0 marks a point in space, 0.0 marks a direction.
    pub fn position_w(self) -> f32 {
        match self {
            LightType::Point | LightType::Spot => 1.0,
            LightType::Sky => 0.0,
        }
    }
}

/// Bring an attenuation factor into `[MIN_ATTENUATION, MAX_ATTENUATION]`
///
/// Both bounds are inclusive. NaN maps to `DEFAULT_ATTENUATION`.
pub fn clamp_attenuation(attenuation: f32) -> f32 {
    if attenuation.is_nan() {
        return DEFAULT_ATTENUATION;
    }
    utils::clamp(attenuation, MIN_ATTENUATION, MAX_ATTENUATION)
}

/// Light scalar values read by the shading stage
///
/// Only the owning `Light` writes to this record.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightValues {
    /// The light type
    pub light_type: LightType,
    /// World position; `w` is 1.0 for point/spot lights and 0.0 for sky lights
    pub position: Vec4,
    /// RGB plus intensity/alpha
    pub color: Vec4,
    /// Falloff factor, always within `[MIN_ATTENUATION, MAX_ATTENUATION]`
    pub attenuation: f32,
}

impl Default for LightValues {
    fn default() -> Self {
        Self {
            light_type: LightType::Point,
            position: Vec4::new(0.0, 0.0, 0.0, LightType::Point.position_w()),
            color: DEFAULT_COLOR,
            attenuation: DEFAULT_ATTENUATION,
        }
    }
}

impl LightValues {
    /// Pack the record for a uniform or storage buffer
    pub fn to_gpu(&self) -> GpuLight {
        GpuLight {
            position: self.position.into(),
            color: self.color.into(),
            light_type: self.light_type.as_u32(),
            attenuation: self.attenuation,
            _padding: [0; 2],
        }
    }
}

/// std140-compatible light data for GPU upload
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuLight {
    /// World position (xyz + point/direction flag)
    pub position: [f32; 4],
    /// Light color (RGB + intensity)
    pub color: [f32; 4],
    /// `LightType` discriminant
    pub light_type: u32,
    /// Attenuation factor
    pub attenuation: f32,
    /// Padding for alignment
    pub _padding: [u32; 2],
}

impl From<&LightValues> for GpuLight {
    fn from(values: &LightValues) -> Self {
        values.to_gpu()
    }
}
