//! Lighting context and the default light
//!
//! The rendering subsystem creates a `LightingContext` during initialization
//! and hands it to whatever needs the default light. Tests build their own
//! contexts; production code that has no context at hand goes through
//! [`LightingContext::global`] or [`default_light`].

use std::sync::{Arc, OnceLock};

use log::info;

use crate::core::config::LightingConfig;
use crate::lighting::light::SharedLight;

static GLOBAL_CONTEXT: OnceLock<LightingContext> = OnceLock::new();

/// Owner of the default light
#[derive(Debug, Default)]
pub struct LightingContext {
    config: LightingConfig,
    default_light: OnceLock<SharedLight>,
}

impl LightingContext {
    /// Create a context; the default light is built on first access
    pub fn new(config: LightingConfig) -> Self {
        Self {
            config,
            default_light: OnceLock::new(),
        }
    }

    /// Configuration this context was created with
    pub fn config(&self) -> &LightingConfig {
        &self.config
    }

    /// The default light, created on the first call
    ///
    /// Every call on the same context returns the same instance, including
    /// calls racing from several threads.
    pub fn default_light(&self) -> &SharedLight {
        self.default_light.get_or_init(|| {
            let settings = &self.config.default_light;
            info!(
                "Creating default {:?} light at {:?}",
                settings.light_type, settings.position
            );
            settings.to_light().into_shared()
        })
    }

    /// Whether the default light has been created yet
    pub fn has_default_light(&self) -> bool {
        self.default_light.get().is_some()
    }

    /// Whether `light` is this context's default light
    pub fn is_default_light(&self, light: &SharedLight) -> bool {
        self.default_light
            .get()
            .is_some_and(|default| Arc::ptr_eq(default, light))
    }

    /// Install the process-wide context
    ///
    /// Only the first installation (or first [`global`](Self::global) call)
    /// wins; a later context is handed back untouched.
    pub fn install_global(context: LightingContext) -> Result<&'static LightingContext, LightingContext> {
        GLOBAL_CONTEXT.set(context)?;
        Ok(Self::global())
    }

    /// The process-wide context
    ///
    /// Falls back to a default-configured context when none was installed.
    pub fn global() -> &'static LightingContext {
        GLOBAL_CONTEXT.get_or_init(LightingContext::default)
    }
}

/// The process-wide default light
///
/// Lives for the rest of the process; scene teardown never drops it.
pub fn default_light() -> &'static SharedLight {
    LightingContext::global().default_light()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::LightSettings;
    use crate::foundation::math::Vec4;
    use crate::lighting::LightType;
    use std::thread;

    #[test]
    fn test_default_light_created_lazily() {
        let context = LightingContext::default();
        assert!(!context.has_default_light());

        let _ = context.default_light();
        assert!(context.has_default_light());
    }

    #[test]
    fn test_default_light_is_same_instance() {
        let context = LightingContext::default();

        let first = context.default_light();
        let second = context.default_light();

        assert!(Arc::ptr_eq(first, second));
        assert!(context.is_default_light(first));
    }

    #[test]
    fn test_default_light_initial_values() {
        let context = LightingContext::default();
        let light = context.default_light().read();
        let values = light.values();

        assert_eq!(values.light_type, LightType::Sky);
        assert_eq!(values.position.xyz(), crate::foundation::math::Vec3::new(0.0, 1.0, -1.0));
        assert_eq!(values.position.w, 0.0);
        assert_eq!(values.color, Vec4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(values.attenuation, 1.0);
    }

    #[test]
    fn test_contexts_are_independent() {
        let a = LightingContext::default();
        let b = LightingContext::default();

        a.default_light().write().set_attenuation(50.0);

        assert!(!Arc::ptr_eq(a.default_light(), b.default_light()));
        assert!(!a.is_default_light(b.default_light()));
        assert_eq!(b.default_light().read().attenuation(), 1.0);
    }

    #[test]
    fn test_configured_default_light() {
        let config = LightingConfig::new().with_default_light(LightSettings {
            light_type: LightType::Point,
            position: [0.0, 10.0, 0.0],
            color: [1.0, 0.9, 0.8, 1.0],
            attenuation: 0.0,
        });
        let context = LightingContext::new(config);
        let light = context.default_light().read();

        assert_eq!(light.light_type(), LightType::Point);
        assert_eq!(light.values().position, Vec4::new(0.0, 10.0, 0.0, 1.0));
        assert_eq!(light.attenuation(), crate::lighting::MIN_ATTENUATION);
    }

    #[test]
    fn test_concurrent_first_access_builds_one_light() {
        let context = Arc::new(LightingContext::default());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let context = Arc::clone(&context);
                thread::spawn(move || Arc::clone(context.default_light()))
            })
            .collect();

        let lights: Vec<SharedLight> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for light in &lights {
            assert!(Arc::ptr_eq(light, &lights[0]));
        }
    }

    #[test]
    fn test_global_default_light_is_stable() {
        let first = default_light();
        let second = LightingContext::global().default_light();

        assert!(Arc::ptr_eq(first, second));
        assert!(LightingContext::global().is_default_light(first));
    }

    #[test]
    fn test_install_after_global_is_rejected() {
        let installed = LightingContext::global();

        let rejected = LightingContext::install_global(LightingContext::new(
            LightingConfig::new().with_log_level("trace"),
        ))
        .unwrap_err();

        assert_eq!(rejected.config().log_level, "trace");
        assert!(std::ptr::eq(installed, LightingContext::global()));
    }
}
