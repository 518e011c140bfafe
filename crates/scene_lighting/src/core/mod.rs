//! # Core Module
//!
//! Shared configuration for the lighting subsystem.
//!
//! ## Organization
//!
//! - **Config**: Serializable lighting configuration and validation

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    LightingConfig,
    LightSettings,
    Config,
    ConfigError,
    ConfigFormat,
};
