//! Lighting demo application
//!
//! Builds a lighting context (optionally from a `.toml`/`.ron` file given as
//! the first argument), lights a small scene, and animates it for a few
//! frames while logging what the shading stage would upload.

use scene_lighting::foundation::logging;
use scene_lighting::prelude::*;

/// Errors that stop the demo before its frame loop
#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("failed to load lighting config: {0}")]
    Config(#[from] ConfigError),
}

const FRAMES: usize = 4;

fn load_config() -> Result<LightingConfig, DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => LightingConfig::load_from_file(&path)?,
        None => LightingConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(context: &LightingContext) {
    let mut registry = LightRegistry::new();

    // First frame: nothing registered, the default light does the work
    let packed = registry.gather(context);
    log::info!(
        "Empty scene: {} light(s), {} bytes",
        packed.len(),
        bytemuck::cast_slice::<GpuLight, u8>(&packed).len()
    );

    let lamp = Light::point(Vec3::new(0.0, 2.0, 0.0))
        .with_color(Vec4::new(1.0, 0.85, 0.6, 1.0))
        .with_attenuation(6.0)
        .into_shared();
    registry.insert_shared(lamp.clone());

    let spot_key = registry.insert(
        Light::spot(Vec3::new(-3.0, 4.0, 0.0), Vec3::new(1.0, -1.0, 0.0))
            .with_color(Vec4::new(0.6, 0.7, 1.0, 2.0))
            .with_attenuation(0.0), // clamped to the minimum
    );

    for frame in 0..FRAMES {
        let orbit = frame as f32 * std::f32::consts::FRAC_PI_2;
        let carrier = Transform::from_position(Vec3::new(orbit.cos() * 3.0, 0.0, orbit.sin() * 3.0));
        lamp.write().set_parent_transform(Some(carrier));

        let packed = registry.gather(context);
        for light in &packed {
            log::debug!(
                "frame {} type={} pos={:?} attenuation={}",
                frame, light.light_type, light.position, light.attenuation
            );
        }
        log::info!(
            "Frame {}: {} light(s), {} bytes",
            frame,
            packed.len(),
            bytemuck::cast_slice::<GpuLight, u8>(&packed).len()
        );
    }

    if let Some(spot) = registry.remove(spot_key) {
        log::info!("Removed spot light shining along {:?}", spot.read().direction());
    }

    registry.clear();
    if let Some(light) = registry.gather(context).first() {
        log::info!("Scene cleared, back to default light: {:?}", light);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init_with_level(&config.log_level);

    log::info!("Starting lighting demo");

    let context = match LightingContext::install_global(LightingContext::new(config)) {
        Ok(context) => context,
        Err(_) => LightingContext::global(),
    };
    run(context);

    log::info!("Process default light: {:?}", default_light().read().values());
    Ok(())
}
