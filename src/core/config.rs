use bevy::prelude::*;
use windvane::WindvaneConfig;

/// Settings read from `windflower.toml` when the app starts
#[derive(Resource, Debug, Clone, Default, Deref)]
pub struct AppSettings(pub WindvaneConfig);

impl AppSettings {
    pub fn load() -> Self {
        let config = WindvaneConfig::load_or_default(windvane::config::CONFIG_FILE);
        info!(
            "Animator: {:?}, max tilt {}°",
            config.animator.step_mode, config.animator.max_tilt_degrees
        );
        Self(config)
    }
}
